#![allow(warnings)]
//! Kanban Board Frontend Entry Point

mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init_logger(log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("[LOG] {}", err).into());
    }
    mount_to_body(App);
}
