//! Browser side of the router: `window.location`, `window.history`,
//! scrolling and the feedback `fetch`.

use regents_router::History;
use regents_router::feedback::CONTENT_TYPE;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// [`History`] over the real browser stack. Stateless: every call goes
/// through `window()`, so the handle is free to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn location(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                warn("[regents] pushState failed", &e);
            }
        }
    }

    fn replace(&mut self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
                warn("[regents] replaceState failed", &e);
            }
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// POST an urlencoded body. Resolves once the request settles; the response
/// itself is not looked at.
pub async fn post_form(endpoint: &str, body: String) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let headers = web_sys::Headers::new()?;
    headers.set("Content-Type", CONTENT_TYPE)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    JsFuture::from(window.fetch_with_str_and_init(endpoint, &init)).await?;
    Ok(())
}

pub fn warn(message: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(message), err);
}
