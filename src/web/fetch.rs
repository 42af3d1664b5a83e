use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::LoadError;
use crate::loader::FetchText;

/// [`FetchText`] over `window.fetch`.
///
/// Unlike the raw fetch API this collaborator rejects on non-success
/// responses, surfacing them as [`LoadError::Http`] instead of handing an
/// error body to the injector.
pub struct WindowFetch;

impl FetchText for WindowFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let window = web_sys::window().ok_or_else(|| network(url, "no window"))?;

        let opts = web_sys::RequestInit::new();
        opts.set_method("GET");

        let resp = JsFuture::from(window.fetch_with_str_and_init(url, &opts))
            .await
            .map_err(|e| network(url, &js_detail(&e)))?;
        let resp: web_sys::Response = resp
            .dyn_into()
            .map_err(|_| network(url, "fetch did not return a Response"))?;

        if !resp.ok() {
            return Err(LoadError::Http {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        let text = resp.text().map_err(|_| network(url, "text() threw"))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| network(url, &js_detail(&e)))?;
        text.as_string()
            .ok_or_else(|| network(url, "body was not a string"))
    }
}

fn network(url: &str, detail: &str) -> LoadError {
    LoadError::Network {
        url: url.to_string(),
        detail: detail.to_string(),
    }
}

fn js_detail(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}
