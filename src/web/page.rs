use wasm_bindgen::JsCast;

use crate::error::LoadError;
use crate::loader::Dom;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// [`Dom`] over the live document.
pub struct PageDom;

impl Dom for PageDom {
    fn contains(&self, id: &str) -> bool {
        document().and_then(|d| d.get_element_by_id(id)).is_some()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        document()?.get_element_by_id(id)?.get_attribute(name)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), LoadError> {
        let el = document()
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| LoadError::MissingElement(id.to_string()))?;
        el.set_inner_html(html);
        Ok(())
    }

    fn append_stylesheet(&self, href: &str) -> Result<(), LoadError> {
        append_head_node("link", &[("rel", "stylesheet"), ("href", href)])
    }

    fn append_script(&self, src: &str) -> Result<(), LoadError> {
        append_head_node("script", &[("type", "text/javascript"), ("src", src)])
    }
}

fn append_head_node(tag: &str, attrs: &[(&str, &str)]) -> Result<(), LoadError> {
    let doc = document().ok_or_else(|| LoadError::Dom("no document".to_string()))?;
    let node = doc
        .create_element(tag)
        .map_err(|_| LoadError::Dom(format!("create_element({tag}) threw")))?;
    for (name, value) in attrs {
        node.set_attribute(name, value)
            .map_err(|_| LoadError::Dom(format!("set_attribute({name}) threw")))?;
    }
    doc.head()
        .ok_or_else(|| LoadError::Dom("no head".to_string()))?
        .append_child(&node)
        .map_err(|_| LoadError::Dom("head.appendChild threw".to_string()))?;
    Ok(())
}

/// Make the component visible again (`display: unset`).
pub fn show_component(id: &str) {
    set_display(id, "unset");
}

/// Hide the component (`display: none`).
pub fn hide_component(id: &str) {
    set_display(id, "none");
}

fn set_display(id: &str, value: &str) {
    let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let _ = el.style().set_property("display", value);
}
