//! WiFi info banner for the Prepper Pi homepage, compiled to WebAssembly.
//!
//! Mirrors the original `custom.js` behavior: once the document is ready,
//! insert the banner above the main content area, fetch live credentials
//! from the local RaspAP endpoint, and keep refreshing them every five
//! minutes. The page never sees a failure; the banner just keeps showing
//! the last known values.

mod console;
pub mod dom;
pub mod refresh;
pub mod schedule;

use prepper_banner::BannerError;
use prepper_banner::RefreshConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use crate::console::console_debug;
use crate::console::console_log;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    match dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            let once = Closure::<dyn FnMut()>::new(initialize);
            let listener: &js_sys::Function = once.as_ref().unchecked_ref();
            if document
                .add_event_listener_with_callback("DOMContentLoaded", listener)
                .is_err()
            {
                initialize();
            }
            once.forget();
        }
        Ok(_) => initialize(),
        Err(error) => console_log!("wifi banner disabled: {error}"),
    }
}

fn initialize() {
    if let Err(error) = try_initialize() {
        console_log!("wifi banner disabled: {error}");
    }
}

fn try_initialize() -> Result<(), BannerError> {
    let config = RefreshConfig::default();
    let document = dom::document()?;
    dom::insert_banner(&document, &config.container_selector)?;

    spawn_refresh(config.clone());

    let window = web_sys::window().ok_or(BannerError::NoDocument)?;
    let period_ms = config.period_ms;
    let interval = schedule::Interval::start(window, period_ms, move || {
        spawn_refresh(config.clone());
    })
    .map_err(dom::dom_err)?;
    interval.forget();
    Ok(())
}

fn spawn_refresh(config: RefreshConfig) {
    spawn_local(async move {
        match refresh::refresh_once(&config).await {
            Ok(()) => console_debug!("wifi credentials refreshed"),
            Err(error) => console_debug!("using default WiFi credentials ({error})"),
        }
    });
}

/// Insert the banner right now, without waiting for document readiness.
///
/// Exposed for the browser console; inserting twice yields two banners.
#[wasm_bindgen]
pub fn insert_banner() -> Result<(), JsValue> {
    let config = RefreshConfig::default();
    let document = dom::document().map_err(to_js)?;
    dom::insert_banner(&document, &config.container_selector)
        .map(|_| ())
        .map_err(to_js)
}

/// Trigger a single credential refresh outside the regular schedule.
#[wasm_bindgen]
pub fn refresh_now() {
    spawn_refresh(RefreshConfig::default());
}

fn to_js(error: BannerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
