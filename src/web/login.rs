use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use super::fade::Fader;
use super::page::{hide_component, show_component};
use super::PageLoader;
use crate::error::LoadError;

const OVERLAY_ID: &str = "fg";
const LOGIN_PAGE: &str = "login_page";
const SETTLE_MS: u32 = 700;

/// Wire the login page: each link lazily loads its target section behind a
/// fade, then swaps it in for the login form.
pub fn wire_login_page(loader: Rc<PageLoader>) -> Result<(), LoadError> {
    let fader = Rc::new(Fader::new(OVERLAY_ID));
    wire_section_link(loader.clone(), fader.clone(), "forgot-link", "forgot_page")?;
    wire_section_link(loader, fader, "signup-link", "signup_page")?;
    Ok(())
}

fn wire_section_link(
    loader: Rc<PageLoader>,
    fader: Rc<Fader>,
    link_id: &str,
    page_id: &'static str,
) -> Result<(), LoadError> {
    on_click(link_id, move || {
        fader.fade_in();
        let loader = loader.clone();
        let fader = fader.clone();
        spawn_local(async move {
            match loader.load(page_id, SETTLE_MS).await {
                Ok(()) => {
                    fader.fade_out();
                    hide_component(LOGIN_PAGE);
                    show_component(page_id);
                }
                Err(e) => {
                    fader.fade_out();
                    web_sys::console::warn_1(&JsValue::from_str(&format!(
                        "lazy load of {page_id} failed: {e}"
                    )));
                }
            }
        });
    })
}

fn on_click(id: &str, handler: impl Fn() + 'static) -> Result<(), LoadError> {
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| LoadError::MissingElement(id.to_string()))?;

    let cb = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(|_| LoadError::Dom(format!("addEventListener({id}) threw")))?;
    cb.forget();
    Ok(())
}
