//! web-sys-backed page collaborators and the login-page controller.
//!
//! Everything here assumes a browser environment; the portable loader core
//! never links against this module.

mod fade;
mod fetch;
mod login;
mod page;
mod timer;

use std::rc::Rc;

use wasm_bindgen::JsValue;

pub use fade::Fader;
pub use fetch::WindowFetch;
pub use login::wire_login_page;
pub use page::{hide_component, show_component, PageDom};
pub use timer::WindowTimer;

use crate::loader::FragmentLoader;

/// Fragment loader wired to the real page.
pub type PageLoader = FragmentLoader<PageDom, WindowFetch, WindowTimer>;

/// One loader per page session; fragments stay cached until the page goes
/// away.
pub fn page_loader() -> PageLoader {
    FragmentLoader::new(PageDom, WindowFetch, WindowTimer)
}

/// Entry point: construct the page loader and wire the login page.
pub fn start() {
    let loader = Rc::new(page_loader());
    if let Err(e) = wire_login_page(loader) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("login page wiring failed: {e}")));
    }
}
