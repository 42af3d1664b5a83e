use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::loader::Timer;

/// [`Timer`] over `window.setTimeout`, wrapped in a promise.
///
/// Resolves immediately if no window is available or the timeout cannot be
/// scheduled; a settle delay is best-effort, never a failure.
pub struct WindowTimer;

impl Timer for WindowTimer {
    async fn sleep_ms(&self, ms: u32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let Some(window) = web_sys::window() else {
                let _ = resolve.call0(&JsValue::UNDEFINED);
                return;
            };

            let resolve_cb = resolve.clone();
            let cb = Closure::wrap(Box::new(move || {
                let _ = resolve_cb.call0(&JsValue::UNDEFINED);
            }) as Box<dyn FnMut()>);

            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                ms as i32,
            ) {
                Ok(_) => cb.forget(),
                Err(_) => {
                    let _ = resolve.call0(&JsValue::UNDEFINED);
                }
            }
        });

        let _ = JsFuture::from(promise).await;
    }
}
