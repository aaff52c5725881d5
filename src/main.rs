//! Recommendation Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod render;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] Console logger not installed: {}", e).into());
    }
    log::info!(target: "app", "Using API at {}", config::DEFAULT_API_BASE_URL);
    mount_to_body(App);
}
