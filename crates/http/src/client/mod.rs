//! Worksheet service HTTP client

pub mod auth;
pub mod error;
pub mod worksheet;

use error::{ClientError, FALLBACK_MESSAGE};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use worksheet_core::{ClientConfig, Session};

/// Worksheet API client
///
/// The bearer token is read from the [`Session`] when each request is
/// built, so saving or clearing the token takes effect on the next call
/// without rebuilding the client.
#[derive(Clone)]
pub struct WorksheetClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl WorksheetClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).session(session).build()
    }

    /// Create a new client builder
    pub fn builder() -> WorksheetClientBuilder {
        WorksheetClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session whose token authenticates requests
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Create a request builder with JSON content type and, when a token is
    /// stored, bearer authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.request_with_headers(method, path, HeaderMap::new())
    }

    /// Like [`request`](Self::request), merging caller-supplied headers over
    /// the JSON content type
    pub fn request_with_headers(
        &self,
        method: reqwest::Method,
        path: &str,
        headers: HeaderMap,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        let mut merged = HeaderMap::new();
        merged.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        merged.extend(headers);

        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    merged.insert(header::AUTHORIZATION, value);
                }
                Err(_) => warn!("stored token is not a valid header value, sending unauthenticated"),
            }
        }

        debug!(%method, %url, "building request");
        self.client.request(method, url).headers(merged)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!(status = status.as_u16(), "request succeeded");
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(status = status.as_u16(), %message, "request rejected");
            Err(ClientError::from_status(status, message))
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Extract the user-facing message from a failed response body
fn error_message(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail);

    match detail {
        Some(ErrorDetail::Message(message)) if !message.is_empty() => message,
        Some(ErrorDetail::Validation(issues)) if !issues.is_empty() => issues
            .into_iter()
            .map(|issue| issue.msg)
            .collect::<Vec<_>>()
            .join("; "),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

/// Builder for WorksheetClient
#[derive(Default)]
pub struct WorksheetClientBuilder {
    base_url: Option<String>,
    session: Option<Session>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl WorksheetClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session that supplies the bearer token
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the request timeout (ignored on wasm32)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<WorksheetClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let session = self
            .session
            .ok_or_else(|| ClientError::Configuration("session is required".into()))?;

        // Paths always start with '/'
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| ClientConfig::USER_AGENT.to_string());
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder.build()?;

        Ok(WorksheetClient {
            client,
            base_url,
            session,
        })
    }
}
