//! Todo MVC Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logger;
mod models;
mod render;
mod storage;
mod store;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    logger::init(config.log_level);
    log::info!(target: "app", "starting, storage key {}", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
