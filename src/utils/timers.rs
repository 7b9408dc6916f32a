//! One-shot timer scheduling

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `callback` after `delay_ms` milliseconds.
///
/// The closure is handed over to the JS engine and freed after it fires.
/// There is no cancellation handle: a layout recompute racing a pending
/// reveal timer is harmless because the layout transform and the animation
/// classes are independent style properties.
pub fn set_timeout<F>(callback: F, delay_ms: i32)
where
    F: FnOnce() + 'static,
{
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            log::warn!("no window object; timer dropped");
            return;
        }
    };
    let callback = Closure::once_into_js(callback);
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
    {
        log::warn!("setTimeout failed: {:?}", err);
    }
}
