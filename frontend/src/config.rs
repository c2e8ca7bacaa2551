//! Startup configuration read from window-scoped globals.
//!
//! The hosting page injects two values before the WASM bundle loads:
//! `window.BACKEND_URL` (base URL of the REST backend) and `window.BASENAME`
//! (base path the router is mounted under). A missing or empty backend URL
//! makes the app render the configuration prompt instead of the router tree.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

fn window_global(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    let value = value.as_string()?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn backend_url() -> Option<String> {
    window_global("BACKEND_URL")
}

pub fn basename() -> Option<String> {
    window_global("BASENAME")
}

/// Joins the configured backend base URL with an API path.
pub fn api_url(path: &str) -> String {
    let base = backend_url().unwrap_or_default();
    format!("{}{}", base.trim_end_matches('/'), path)
}
