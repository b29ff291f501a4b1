//! Constants for the latch-vim client

/// Path of the session resource beneath the management endpoint
pub const SESSION_PATH: &str = "/session";

/// Path of the service identification resource beneath the management
/// endpoint
pub const ABOUT_PATH: &str = "/about";

/// Header carrying the session token once logged in
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// User-Agent header value for the management client
pub const USER_AGENT: &str = concat!("latch/", env!("CARGO_PKG_VERSION"));
