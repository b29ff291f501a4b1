//! # Session Client
//!
//! reqwest-backed implementation of the latch session capabilities. The
//! connector logs in with HTTP Basic credentials and hands back a session
//! whose token travels in a header on every subsequent request.

use anyhow::{Context, Result};
use latch_core::session::{Connector, SessionHandle};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument};

use crate::consts::{ABOUT_PATH, SESSION_ID_HEADER, SESSION_PATH, USER_AGENT};
use crate::models::{AboutInfo, SessionToken};

/// Opens management sessions over HTTP(S)
pub struct VimConnector {
  client: Client,
}

impl VimConnector {
  /// Create a new connector with its own HTTP client
  pub fn new() -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self { client })
  }
}

impl Connector for VimConnector {
  type Session = VimSession;

  #[instrument(skip(self, password), level = "debug")]
  async fn open(&self, endpoint: &str, username: &str, password: &str) -> Result<VimSession> {
    let url = format!("{endpoint}{SESSION_PATH}");

    let response = self
      .client
      .post(&url)
      .basic_auth(username, Some(password))
      .send()
      .await
      .context("Failed to reach the management service")?;

    match response.status() {
      StatusCode::OK | StatusCode::CREATED => {
        let token = response
          .json::<SessionToken>()
          .await
          .context("Failed to parse session token")?;

        debug!("Session established at {endpoint}");
        Ok(VimSession {
          client: self.client.clone(),
          endpoint: endpoint.to_string(),
          token: token.value,
        })
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. The stored credential was rejected by the service."
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        error_detail(response).await
      )),
    }
  }
}

/// An authenticated session with one management service
#[derive(Debug)]
pub struct VimSession {
  client: Client,
  endpoint: String,
  token: String,
}

impl VimSession {
  /// The management endpoint URL this session is bound to
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

impl SessionHandle for VimSession {
  #[instrument(skip(self), level = "debug")]
  async fn identity_label(&self) -> Result<String> {
    let url = format!("{}{ABOUT_PATH}", self.endpoint);

    let response = self
      .client
      .get(&url)
      .header(SESSION_ID_HEADER, &self.token)
      .send()
      .await
      .context("Failed to fetch service identification")?;

    match response.status() {
      StatusCode::OK => {
        let about = response
          .json::<AboutInfo>()
          .await
          .context("Failed to parse service identification")?;

        debug!(
          "Service identifies as {} (version {})",
          about.full_name,
          about.version.as_deref().unwrap_or("unspecified")
        );
        Ok(about.full_name)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        Err(anyhow::anyhow!("The session is no longer accepted by the service."))
      }
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        error_detail(response).await
      )),
    }
  }

  #[instrument(skip(self), level = "debug")]
  async fn close(self) -> Result<()> {
    let url = format!("{}{SESSION_PATH}", self.endpoint);

    let response = self
      .client
      .delete(&url)
      .header(SESSION_ID_HEADER, &self.token)
      .send()
      .await
      .context("Failed to reach the management service for logout")?;

    match response.status() {
      StatusCode::OK | StatusCode::NO_CONTENT => {
        debug!("Session closed at {}", self.endpoint);
        Ok(())
      }
      status => Err(anyhow::anyhow!("Logout rejected: HTTP {status}")),
    }
  }
}

/// Pulls the `message` field out of a JSON error body, falling back to the
/// raw body text.
async fn error_detail(response: Response) -> String {
  let body = response.text().await.unwrap_or_default();

  serde_json::from_str::<serde_json::Value>(&body)
    .ok()
    .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or(body)
}
