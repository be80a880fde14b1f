//! Page logic and shared components for the worksheet web client
//!
//! Controllers, forms and the effect runtime are plain Rust and tested on
//! native targets. Browser bindings, logging and hooks exist only on
//! `wasm32`.

pub mod components;
pub mod context;
pub mod effects;
pub mod forms;
pub mod pages;
pub mod runtime;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod logging;

pub use components::{MessageBanner, Spinner};
pub use context::ClientContext;
pub use effects::{ApiOutcome, Effect, Page};
pub use forms::{FormError, GenerateForm};
pub use pages::Controller;
pub use runtime::{Navigator, Runtime};
