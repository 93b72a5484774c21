//! [`ContactTransport`] over the browser `fetch` API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use super::form::{ContactError, ContactTransport, RawResponse};

fn network(err: JsValue) -> ContactError {
	ContactError::Network(format!("{:?}", err))
}

/// Posts with `window.fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl ContactTransport for FetchTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ContactError> {
		let window =
			web_sys::window().ok_or_else(|| ContactError::Network("no window".to_string()))?;

		let headers = Headers::new().map_err(network)?;
		headers
			.set("Content-Type", "application/json")
			.map_err(network)?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_headers(&headers);
		init.set_body(&JsValue::from_str(&body));

		let response: Response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
			.await
			.map_err(network)?
			.dyn_into()
			.map_err(network)?;

		let text: js_sys::Promise = response.text().map_err(network)?;
		let body = JsFuture::from(text)
			.await
			.map_err(network)?
			.as_string()
			.unwrap_or_default();

		Ok(RawResponse {
			status: response.status(),
			body,
		})
	}
}
