//! Worksheet web client entry point and native stub

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod auth_page;
#[cfg(target_arch = "wasm32")]
mod dashboard_page;
#[cfg(target_arch = "wasm32")]
mod form_data;

#[cfg(target_arch = "wasm32")]
fn main() {
    use worksheet_frontend_common::{browser, logging};

    logging::init();
    let page = browser::current_page();
    tracing::info!(?page, "mounting worksheet client");
    yew::Renderer::<app::App>::with_props(app::AppProps { page }).render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"worksheet-frontend runs in the browser; build it with `trunk build` or `cargo build --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}
