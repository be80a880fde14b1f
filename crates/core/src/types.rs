//! Request and response schemas for the worksheet service API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email/password pair sent to the login and registration endpoints
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Account returned by `POST /auth/register`. The flows never read it, so
/// every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Current user as returned by `GET /me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub credits: i64,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Body of `POST /worksheet/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub level: String,
    pub topic: String,
    pub age_group: String,
    pub duration: u32,
    pub activity_types: Vec<String>,
    /// Serialized as `null` when absent, never skipped
    pub theme_words: Option<Vec<String>>,
}

/// Estimated duration as reported by the service: either free text
/// ("20 Minuten") or a bare number of minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EstimatedDuration {
    Minutes(f64),
    Text(String),
}

impl fmt::Display for EstimatedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(minutes) => write!(f, "{minutes}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Generated worksheet returned by `POST /worksheet/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetResult {
    pub title: String,
    pub estimated_duration: EstimatedDuration,
    pub content: Vec<String>,
    pub solutions: Vec<String>,
    pub remaining_credits: i64,
}
