pub mod app;
pub mod projections;
pub mod shared;

use app::App;
use contracts::shared::config::{load_config, Config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = load_config(None).unwrap_or_else(|e| {
        leptos::logging::error!("Invalid widget config, using defaults: {e}");
        Config::default()
    });

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
