//! Side effects requested by page controllers and the API outcomes fed
//! back into them

use worksheet_core::{
    ClientConfig, Credentials, LoginResponse, RegisteredUser, UserProfile, WorksheetRequest,
    WorksheetResult,
};
use worksheet_http::ClientError;

/// Top-level documents the client navigates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Auth,
    Dashboard,
}

impl Page {
    /// Relative document path assigned to `window.location`
    pub const fn path(self) -> &'static str {
        match self {
            Self::Auth => ClientConfig::AUTH_PAGE_PATH,
            Self::Dashboard => ClientConfig::DASHBOARD_PAGE_PATH,
        }
    }

    /// Parse the `data-page` marker carried by `<body>`
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim() {
            "auth" => Some(Self::Auth),
            "dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Redirect(Page),
    SaveToken(String),
    ClearToken,
    Register(Credentials),
    Login(Credentials),
    FetchProfile,
    GenerateWorksheet(WorksheetRequest),
}

impl Effect {
    /// Short name for logging; never includes credentials or tokens
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Redirect(_) => "redirect",
            Self::SaveToken(_) => "save_token",
            Self::ClearToken => "clear_token",
            Self::Register(_) => "register",
            Self::Login(_) => "login",
            Self::FetchProfile => "fetch_profile",
            Self::GenerateWorksheet(_) => "generate_worksheet",
        }
    }
}

/// Completed API call, delivered back to the controller that asked for it
#[derive(Debug)]
pub enum ApiOutcome {
    /// Registration result together with the credentials that were
    /// submitted, so a follow-up login needs no stored form state
    Registered {
        credentials: Credentials,
        result: Result<RegisteredUser, ClientError>,
    },
    LoggedIn(Result<LoginResponse, ClientError>),
    Profile(Result<UserProfile, ClientError>),
    Generated(Result<WorksheetResult, ClientError>),
}
