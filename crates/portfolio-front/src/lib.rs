pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod routes;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Portfolio UI starting...");

    yew::Renderer::<app::App>::new().render();

    Ok(())
}
