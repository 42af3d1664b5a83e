use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Fades a fixed overlay element in and out via `requestAnimationFrame`,
/// stepping opacity by 0.1 per frame.
///
/// A fade in progress is never restarted: `fade_in`/`fade_out` are no-ops
/// while the previous fade is still running.
pub struct Fader {
    overlay_id: String,
    fading: Rc<Cell<bool>>,
}

#[derive(Clone, Copy)]
enum Direction {
    In,
    Out,
}

impl Fader {
    pub fn new(overlay_id: impl Into<String>) -> Self {
        Self {
            overlay_id: overlay_id.into(),
            fading: Rc::new(Cell::new(false)),
        }
    }

    /// Show the overlay at opacity 0 and step it up to 1.
    pub fn fade_in(&self) {
        if self.fading.get() {
            return;
        }
        let Some(el) = overlay(&self.overlay_id) else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("display", "unset");
        let _ = style.set_property("opacity", "0");

        self.fading.set(true);
        run_frames(self.overlay_id.clone(), self.fading.clone(), Direction::In);
    }

    /// Step the overlay's opacity down to 0, then hide it.
    pub fn fade_out(&self) {
        if self.fading.get() {
            return;
        }
        self.fading.set(true);
        run_frames(self.overlay_id.clone(), self.fading.clone(), Direction::Out);
    }
}

fn overlay(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn opacity(el: &web_sys::HtmlElement) -> f64 {
    el.style()
        .get_property_value("opacity")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0)
}

// Self-rescheduling animation-frame closure. The Rc cycle keeps the closure
// alive for as long as the page can still call it.
fn run_frames(overlay_id: String, fading: Rc<Cell<bool>>, direction: Direction) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduled = handle.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(el) = overlay(&overlay_id) else {
            fading.set(false);
            return;
        };
        let style = el.style();
        let current = opacity(&el);

        let done = match direction {
            Direction::In => {
                if current < 1.0 {
                    let _ = style.set_property("opacity", &format!("{:.1}", current + 0.1));
                    false
                } else {
                    true
                }
            }
            Direction::Out => {
                if current > 0.0 {
                    let _ = style.set_property("opacity", &format!("{:.1}", current - 0.1));
                    false
                } else {
                    let _ = style.set_property("display", "none");
                    let _ = style.set_property("opacity", "0");
                    true
                }
            }
        };

        if done {
            fading.set(false);
        } else {
            request_frame(&scheduled);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&handle);
}

fn request_frame(handle: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = handle.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
