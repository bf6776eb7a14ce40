// services/clinic-dash/src/lib.rs
//
// Clinic Dashboard - Library exports
//

pub mod app;
pub mod components;
pub mod state;
pub mod storage;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger, then mount the app.
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Clinic Dashboard starting...");

    leptos::mount_to_body(|| {
        leptos::view! { <app::App /> }
    });
}

/// Entry point for JS loaders that import the library build directly.
#[wasm_bindgen]
pub fn hydrate() {
    mount();
}
