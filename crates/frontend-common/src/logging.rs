//! Browser console logging

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};
use worksheet_core::ClientConfig;

/// Route `tracing` output to the browser console and panics to
/// `console.error`
///
/// The filter comes from `WORKSHEET_LOG` at build time. Calling this more
/// than once is harmless.
pub fn init() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::try_new(ClientConfig::log_directive())
        .unwrap_or_else(|_| EnvFilter::new(ClientConfig::DEFAULT_LOG_DIRECTIVE));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}
