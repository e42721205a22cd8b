//! Snapshot Fetching
//!
//! Reads the task snapshot over the browser Fetch API.

use taskboard_core::{BoardConfig, LoadError, Snapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch and parse the snapshot, bypassing caches with a timestamp.
pub async fn fetch_snapshot(config: &BoardConfig) -> Result<Snapshot, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window available".to_string()))?;
    let url = config.snapshot_url(js_sys::Date::now() as u64);

    let response = JsFuture::from(window.fetch_with_str(&url)).await.map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;
    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            path: config.snapshot_path.clone(),
        });
    }

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".to_string()))?;
    Snapshot::from_json(&text)
}

fn network_error(value: JsValue) -> LoadError {
    LoadError::Network(js_message(&value))
}

/// Best-effort message text for a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
