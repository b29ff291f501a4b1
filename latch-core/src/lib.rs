//! # Latch Core Library
//!
//! Core library for the latch agent providing the credential store and
//! session capabilities, the netrc-backed store, and the login engine that
//! resolves exactly one credential for a host and performs a single
//! login/logout cycle against its management endpoint.

pub mod agent;
pub mod consts;
pub mod creds;
pub mod session;

// Re-export the engine surface
pub use agent::{AgentError, CredentialLookup, LoginAgent, LoginOutcome, resolve_usernames};
pub use consts::service_url;
pub use creds::CredentialStore;
pub use creds::netrc::NetrcStore;
pub use session::{Connector, SessionHandle};
