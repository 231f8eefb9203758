//! HTTP API Wrappers
//!
//! Frontend bindings to the task/tip JSON endpoints, organized by domain.
//! Every mutating request carries the session CSRF token.

mod task;
mod tip;

use leptos::prelude::*;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::error::ApiError;

// Re-export all public items
pub use task::*;
pub use tip::*;

const CSRF_COOKIE: &str = "csrftoken";

/// Value of the `csrftoken` cookie in a `document.cookie` string.
pub fn parse_csrf_cookie(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}

/// CSRF token from the live page, empty when absent.
pub fn csrf_token() -> String {
    document()
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .and_then(|cookie| parse_csrf_cookie(&cookie))
        .unwrap_or_default()
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn xhr(builder: RequestBuilder) -> RequestBuilder {
    builder.header("X-Requested-With", "XMLHttpRequest")
}

fn mutating(builder: RequestBuilder) -> RequestBuilder {
    xhr(builder).header("X-CSRFToken", csrf_token())
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(ApiError::from_reqwest)
}

/// Split a response into status code and body text.
async fn read(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(ApiError::from_reqwest)?;
    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a body that is only meaningful on 2xx.
pub fn decode_ok<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode an `{ok|success, ...}` envelope. The server also uses it for 4xx
/// answers, so the status only matters when the body does not parse.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(e) if is_success(status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(status)),
    }
}

async fn get_json<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
    let (status, body) = read(send(xhr(client().get(url))).await?).await?;
    decode_ok(status, &body)
}

async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(url: Url, body: &B) -> Result<T, ApiError> {
    let (status, text) = read(send(mutating(client().post(url)).json(body)).await?).await?;
    decode_envelope(status, &text)
}

async fn post_empty<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
    let (status, text) = read(send(mutating(client().post(url))).await?).await?;
    decode_envelope(status, &text)
}

async fn get_envelope<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
    let (status, text) = read(send(xhr(client().get(url))).await?).await?;
    decode_envelope(status, &text)
}

async fn delete_envelope<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
    let (status, text) = read(send(mutating(client().delete(url))).await?).await?;
    decode_envelope(status, &text)
}

/// `{ok: bool}` answer shared by delete/complete endpoints
#[derive(Debug, serde::Deserialize)]
pub struct OkResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl OkResponse {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.ok {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_cookie_found_among_others() {
        let cookie = "sessionid=abc; csrftoken=Tok3n==; theme=dark";
        assert_eq!(parse_csrf_cookie(cookie).as_deref(), Some("Tok3n=="));
    }

    #[test]
    fn test_csrf_cookie_missing() {
        assert_eq!(parse_csrf_cookie(""), None);
        assert_eq!(parse_csrf_cookie("csrftokenx=1; other=2"), None);
    }

    #[test]
    fn test_decode_ok_requires_success_status() {
        assert_eq!(decode_ok::<OkResponse>(500, r#"{"ok":true}"#).unwrap_err(), ApiError::Status(500));
        assert!(matches!(decode_ok::<OkResponse>(200, "<html>"), Err(ApiError::Decode(_))));
        assert!(decode_ok::<OkResponse>(200, r#"{"ok":true}"#).unwrap().ok);
    }

    #[test]
    fn test_envelope_accepts_error_status_with_json() {
        let resp: OkResponse = decode_envelope(400, r#"{"ok":false,"error":"nope"}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected(Some("nope".into()))));
    }

    #[test]
    fn test_envelope_unparseable_body() {
        assert_eq!(decode_envelope::<OkResponse>(403, "Forbidden").unwrap_err(), ApiError::Status(403));
        assert!(matches!(decode_envelope::<OkResponse>(200, ""), Err(ApiError::Decode(_))));
    }
}
