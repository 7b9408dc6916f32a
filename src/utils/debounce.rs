//! Trailing-edge debounce for bursty DOM events

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Coalesces rapid calls into a single one, fired after a quiet period.
///
/// Every call cancels the previously scheduled one, so only the trailing
/// call runs. Used for window resize, where the column count must be
/// re-derived once the burst settles rather than on every event.
pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<RefCell<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: delay_ms as i32,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `callback`, cancelling any call still pending.
    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                log::warn!("no window object; debounced call dropped");
                return;
            }
        };
        if let Some(handle) = self.pending.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }
        let pending = Rc::clone(&self.pending);
        let fire = Closure::once_into_js(move || {
            pending.borrow_mut().take();
            callback();
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), self.delay_ms)
        {
            Ok(handle) => *self.pending.borrow_mut() = Some(handle),
            Err(err) => log::warn!("setTimeout failed: {:?}", err),
        }
    }
}
