//! Binary fetch over the browser `fetch` API.
//!
//! Works from both the window and dedicated-worker scopes; the worker scope
//! matters because circuit artifacts are loaded from inside the proving
//! worker.

use anyhow::{Result, anyhow, bail};
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window, WorkerGlobalScope};

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

/// GET `url` and return the response body as bytes.
pub async fn fetch_binary(url: &str) -> Result<Vec<u8>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let global = js_sys::global();
    let promise = if let Some(scope) = global.dyn_ref::<WorkerGlobalScope>() {
        scope.fetch_with_request(&request)
    } else if let Some(window) = global.dyn_ref::<Window>() {
        window.fetch_with_request(&request)
    } else {
        bail!("no fetch-capable global scope");
    };

    let response: Response = JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        bail!("GET {url} failed with status {}", response.status());
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
