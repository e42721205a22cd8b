#![allow(warnings)]
//! TaskBoard Frontend Entry Point

mod app;
mod components;
mod context;
mod fetch;
mod location;
mod logging;
mod poller;

use app::App;
use leptos::prelude::*;
use taskboard_core::BoardConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(BoardConfig::default().log_level);
    mount_to_body(App);
}
