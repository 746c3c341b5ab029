use wasm_bindgen::prelude::*;
use web_sys::console;

// Bevy needs to take over main, so the only wasm-specific work left here is
// announcing the start before the app claims the canvas.
pub(crate) fn main_wasm() -> Result<(), JsValue> {
    console::log_1(&format!("Starting {}", env!("CARGO_PKG_NAME")).into());
    drag_card::run();
    Ok(())
}
