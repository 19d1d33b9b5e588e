//! REST client for the LMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authorized with
//! the session's `Authorization` value.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The error's `Display` is the
//! exact text screens render inline or as a toast. Retries are always a
//! manual click; nothing here retries, times out or de-duplicates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::endpoints::{LOGIN_PATH, join_url};
use records::envelope::{error_message, extract_token};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::payload::Payload;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::session::{self, keys};

/// Backend used when `LMS_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Patch,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("You are not signed in")]
    MissingToken,
    #[error("Session expired or unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not prepare request: {0}")]
    Encode(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Result of a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

#[must_use]
pub fn api_base() -> &'static str {
    option_env!("LMS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

#[must_use]
pub fn endpoint(path: &str) -> String {
    join_url(api_base(), path)
}

/// Map a non-2xx response to an [`ApiError`].
#[must_use]
pub fn failure(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let body = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    ApiError::Status { status, message: error_message(status, &body) }
}

/// Parse a 2xx body; an empty body (204) is `null`.
///
/// # Errors
///
/// [`ApiError::Decode`] when the body is not JSON.
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the token and identity out of a login response body.
///
/// # Errors
///
/// [`ApiError::Decode`] when no token field is present.
pub fn parse_login(body: &Value, email: &str) -> Result<LoginResponse, ApiError> {
    let token = extract_token(body).ok_or_else(|| ApiError::Decode("login response had no token".to_owned()))?;
    let user = body.get("user").unwrap_or(body);
    let text = |key: &str| user.get(key).and_then(Value::as_str).filter(|v| !v.is_empty()).map(ToOwned::to_owned);
    Ok(LoginResponse {
        token,
        user_name: text("name").or_else(|| text("username")).or_else(|| text("first_name")),
        user_email: text("email").or_else(|| Some(email.to_owned()).filter(|e| !e.is_empty())),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn authorization() -> Result<String, ApiError> {
    session::get(keys::AUTHORIZATION)
        .filter(|token| !token.trim().is_empty())
        .ok_or(ApiError::MissingToken)
}

#[cfg(feature = "hydrate")]
async fn read(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let err = failure(status, &text);
        leptos::logging::warn!("{} {}: {err}", resp.url(), status);
        return Err(err);
    }
    parse_body(&text)
}

/// Exchange email and password for a bearer token via `POST accounts_app/login/`.
///
/// # Errors
///
/// Rejected credentials surface as [`ApiError::Status`] with the backend's
/// message.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint(LOGIN_PATH))
            .json(&payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        // A 401 here means bad credentials, not an expired session.
        if resp.status() == 401 {
            let text = resp.text().await.unwrap_or_default();
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);
            return Err(ApiError::Status { status: 401, message: error_message(400, &body) });
        }
        let body = read(resp).await?;
        parse_login(&body, email)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, LOGIN_PATH);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a collection and decode it from any accepted list envelope.
///
/// # Errors
///
/// Missing token, HTTP failure, or an undecodable body.
pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let body = get(path).await?;
    records::envelope::decode_list(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` one record.
///
/// # Errors
///
/// Missing token, HTTP failure, or an undecodable body.
pub async fn fetch_one<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = get(path).await?;
    records::envelope::decode_one(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get(path: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = authorization()?;
        let resp = gloo_net::http::Request::get(&endpoint(path))
            .header("Authorization", &token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Send a create or update. JSON payloads go as `application/json`,
/// multipart payloads as browser `FormData`.
///
/// # Errors
///
/// Missing token, an attachment that can no longer be read, or an HTTP
/// failure.
pub async fn send(method: Method, path: &str, payload: Payload) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let token = authorization()?;
        let url = endpoint(path);
        let builder = match method {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
        }
        .header("Authorization", &token);
        let request = match payload {
            Payload::Json(body) => builder.json(&body),
            Payload::Multipart(form) => {
                let data = super::payload::to_form_data(&form).map_err(ApiError::Encode)?;
                builder.body(data)
            }
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE` a record.
///
/// # Errors
///
/// Missing token or an HTTP failure.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = authorization()?;
        let resp = gloo_net::http::Request::delete(&endpoint(path))
            .header("Authorization", &token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
