//! Worksheet Studio core types: wire schemas, the session token store and
//! client configuration shared by the HTTP client and the browser frontend.

pub mod config;
pub mod session;
pub mod types;

pub use config::ClientConfig;
pub use session::{MemoryTokenStore, Session, TokenStore};
pub use types::{
    Credentials, EstimatedDuration, LoginResponse, RegisteredUser, UserProfile, WorksheetRequest,
    WorksheetResult,
};
