//! HTTP client for the worksheet service API
//!
//! The client compiles for both native targets and `wasm32`; in the browser
//! reqwest delegates to `fetch`.

pub mod client;

pub use client::{WorksheetClient, WorksheetClientBuilder, error::ClientError};
pub use reqwest::StatusCode;
