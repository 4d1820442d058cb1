#![allow(warnings)]
//! Dine Frontend Entry Point

mod page;
mod config;
mod transport;
mod store;
mod surface;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use view_sync::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::read_page_config();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => ClientConfig::default(),
    };
    if let Some(level) = config.log_level().to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("[dine-ui] logger not installed: {}", e).into());
        }
    }
    if let Err(e) = &loaded {
        log::warn!("Ignoring page config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
