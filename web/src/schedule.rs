//! Interval trigger over `window.setInterval`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// A periodic callback bound to a window.
///
/// Dropping the handle clears the interval; [`Interval::forget`] leaks it so
/// the callback keeps firing for the lifetime of the page.
pub struct Interval {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start<F>(window: Window, period_ms: u32, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            window,
            id,
            _callback: callback,
        })
    }

    /// Leak the handle; the interval then runs until the page goes away.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}
