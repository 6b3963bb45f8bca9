use super::*;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn transport(url: &str, err: JsValue) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        message: js_error_to_string(err),
    }
}

async fn await_promise(url: &str, promise: Promise) -> Result<JsValue, FetchError> {
    JsFuture::from(promise)
        .await
        .map_err(|err| transport(url, err))
}

pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let Some(window) = web_sys::window() else {
        return Err(FetchError::Unsupported {
            url: url.to_string(),
        });
    };
    let response = await_promise(url, window.fetch_with_str(url))
        .await?
        .dyn_into::<web_sys::Response>()
        .map_err(|err| transport(url, err))?;
    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let text_promise = response.text().map_err(|err| transport(url, err))?;
    await_promise(url, text_promise)
        .await?
        .as_string()
        .ok_or_else(|| FetchError::Transport {
            url: url.to_string(),
            message: "response body is not text".to_string(),
        })
}

pub fn parent_has_class(element: &web_sys::Element, class: &str) -> bool {
    element
        .parent_element()
        .is_some_and(|parent| parent.class_list().contains(class))
}
