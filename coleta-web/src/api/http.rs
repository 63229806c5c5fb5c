use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    FormData, Headers, Request, RequestInit, RequestMode, Response,
};

use crate::api::error::ApiError;

async fn fetch(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window()
        .ok_or_else(|| ApiError::Fetch("no window available".to_string()))?;
    let response_js =
        JsFuture::from(window.fetch_with_request(request)).await?;
    let response: Response = response_js.dyn_into().map_err(|_| {
        ApiError::Fetch("fetch did not return a response".to_string())
    })?;
    Ok(response)
}

async fn response_text(response: &Response) -> Result<String, ApiError> {
    let text_js = JsFuture::from(response.text()?).await?;
    Ok(text_js.as_string().unwrap_or_default())
}

/// GET `url` and decode a 2xx JSON body. Non-2xx responses come back as
/// `ApiError::Fetch` with the status and raw body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let mut request_init = RequestInit::new();
    request_init.method("GET");
    request_init.mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    request_init.headers(&headers);

    let request = Request::new_with_str_and_init(url, &request_init)?;
    let response = fetch(&request).await?;

    let status = response.status();
    let body = response_text(&response).await?;
    if (200..300).contains(&status) {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(ApiError::Fetch(format!("Error: {} - {}", status, body)))
    }
}

/// POST a multipart body. The status split is left to the caller, which
/// knows the error shape of its endpoint.
pub async fn post_form_data(
    url: &str,
    form_data: &FormData,
) -> Result<(u16, String), ApiError> {
    let mut request_init = RequestInit::new();
    request_init.method("POST");
    request_init.mode(RequestMode::Cors);
    let body: &JsValue = form_data.as_ref();
    request_init.body(Some(body));

    let request = Request::new_with_str_and_init(url, &request_init)?;
    let response = fetch(&request).await?;

    let status = response.status();
    let body = response_text(&response).await?;
    Ok((status, body))
}
