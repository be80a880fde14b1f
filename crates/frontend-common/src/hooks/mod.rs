//! Hooks binding page runtimes to Yew components

mod use_runtime;

pub use use_runtime::{dispatcher, use_runtime};
