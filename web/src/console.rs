//! Browser console bindings.

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    pub(crate) fn debug(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format_args!($($t)*).to_string()))
}

/// Per-tick noise goes to `console.debug` so it stays out of the default view.
macro_rules! console_debug {
    ($($t:tt)*) => ($crate::console::debug(&format_args!($($t)*).to_string()))
}

pub(crate) use console_debug;
pub(crate) use console_log;
