//! Client configuration

/// Build-time client settings
pub struct ClientConfig;

impl ClientConfig {
    /// API base used when `WORKSHEET_API_BASE` is not set at build time
    pub const DEFAULT_API_BASE: &'static str = "http://127.0.0.1:8000";

    /// localStorage key holding the raw access token
    pub const TOKEN_STORAGE_KEY: &'static str = "access_token";

    /// Document served for the login/registration page
    pub const AUTH_PAGE_PATH: &'static str = "index.html";

    /// Document served for the dashboard page
    pub const DASHBOARD_PAGE_PATH: &'static str = "dashboard.html";

    /// User agent sent by native builds
    pub const USER_AGENT: &'static str = concat!("worksheet-client/", env!("CARGO_PKG_VERSION"));

    /// Log filter used when `WORKSHEET_LOG` is not set at build time
    pub const DEFAULT_LOG_DIRECTIVE: &'static str = "info";

    /// Base URL of the worksheet service
    pub fn api_base() -> &'static str {
        match option_env!("WORKSHEET_API_BASE") {
            Some(base) if !base.is_empty() => base,
            _ => Self::DEFAULT_API_BASE,
        }
    }

    /// `tracing` filter directive for the browser console
    pub fn log_directive() -> &'static str {
        match option_env!("WORKSHEET_LOG") {
            Some(directive) if !directive.is_empty() => directive,
            _ => Self::DEFAULT_LOG_DIRECTIVE,
        }
    }
}
