//! Contact form submission

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::config::SiteConfig;
use crate::error::ContactError;
use crate::forms::FormFields;

/// True when the page script exposes a `/api/contact` global
fn contact_api_available(window: &web_sys::Window, config: &SiteConfig) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(config.contact_api)).unwrap_or(false)
}

/// POSTs the form as `application/x-www-form-urlencoded`. Any 2xx response is success.
pub async fn submit_contact(config: &SiteConfig, form: &FormFields) -> Result<(), ContactError> {
    let window = web_sys::window().ok_or(ContactError::NoWindow)?;
    let endpoint = config.contact_endpoint(contact_api_available(&window, config));

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::SameOrigin);
    opts.set_body(&JsValue::from_str(&form.to_urlencoded()));

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|e| ContactError::Request(format!("{:?}", e)))?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| ContactError::Request(format!("{:?}", e)))?;

    log::debug!("posting contact form to {}", endpoint);
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ContactError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ContactError::Network("fetch did not resolve to a Response".to_string()))?;

    if !resp.ok() {
        return Err(ContactError::Status(resp.status()));
    }
    Ok(())
}

/// Sends an analytics event through `window.gtag` when the tag is loaded
pub fn track_event(action: &str, method: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    if let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() {
        let params = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&params, &JsValue::from_str("method"), &JsValue::from_str(method));
        let _ = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(action),
            &params,
        );
    }
}
