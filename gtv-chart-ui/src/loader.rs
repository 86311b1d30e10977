//! Fetches the variance dataset with the browser `fetch` API.
//!
//! One GET, no retry, no timeout. Any failure is reported as a
//! [`HeatMapError`] and the caller decides what to leave on screen.

use gtv_variance::dataset::Dataset;
use gtv_variance::error::HeatMapError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, value: JsValue) -> HeatMapError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    HeatMapError::Fetch(format!("{}: {}", context, detail))
}

/// Fetch and decode the dataset at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, HeatMapError> {
    let started = js_sys::Date::now();
    let window =
        web_sys::window().ok_or_else(|| HeatMapError::Fetch("no window object".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_error("failed to build request", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| js_error("failed to set headers", e))?;

    log::info!("[GTV] loader: GET {}", url);
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("network error", e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    if !response.ok() {
        return Err(HeatMapError::Fetch(format!(
            "HTTP {} {} from {}",
            response.status(),
            response.status_text(),
            url
        )));
    }

    let text_promise = response
        .text()
        .map_err(|e| js_error("failed to read body", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| js_error("failed to read body", e))?
        .as_string()
        .ok_or_else(|| HeatMapError::Fetch("response body is not text".to_string()))?;

    let dataset = Dataset::from_json(&body)?;
    log::info!(
        "[GTV] loader: {} records in {:.0} ms",
        dataset.len(),
        js_sys::Date::now() - started
    );
    Ok(dataset)
}
