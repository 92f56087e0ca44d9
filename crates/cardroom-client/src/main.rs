//! Cardroom Client
//!
//! Yew WASM frontend application.
//!
//! Runs in the browser only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.
//! Native builds compile so the workspace tests run, but rendering needs a DOM.

mod app;
mod components;
mod config;
mod hooks;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,cardroom_router=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
