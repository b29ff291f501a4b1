//! # Management Session Client
//!
//! HTTP implementation of the latch session capabilities against the JSON
//! session API exposed beneath a host's management endpoint:
//!
//! - `POST {endpoint}/session` with HTTP Basic credentials logs in and
//!   returns a session token
//! - `GET {endpoint}/about` with the session header returns service
//!   identification
//! - `DELETE {endpoint}/session` with the session header logs out

mod client;
pub mod consts;
pub mod models;

// Re-export the client
pub use client::{VimConnector, VimSession};
// Re-export models
pub use models::{AboutInfo, SessionToken};
