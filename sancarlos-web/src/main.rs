//! Browser entry point for the San Carlos site scripts.
//!
//! Wires two independent units onto markup provided by the host pages: the
//! navbar controller (menu toggle, scroll styling, mobile dropdowns, language
//! switcher) and the weather widget updater.

mod config;
mod dom;
mod language;
mod navbar;
mod weather;

#[cfg(test)]
mod navbar_test;
#[cfg(test)]
mod weather_test;

use wasm_bindgen::JsValue;
use web_sys::console;

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            console::log_1(&format!("Panic: {}", s).into());
        } else {
            console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    console::log_1(&"Starting San Carlos site scripts".into());

    if let Err(err) = boot() {
        console::error_1(&err);
    }
}

/// Wire both units onto the current document. Every failure past this point
/// is logged and contained; nothing unwinds back into the host page.
fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    navbar::install(&document)?;
    weather::start(&document)?;
    Ok(())
}
