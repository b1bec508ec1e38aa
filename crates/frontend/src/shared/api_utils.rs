//! API utilities for talking to the Holidaze REST API
//!
//! Builds URLs from the configured base, attaches the bearer token and the
//! Noroff API key, and turns error bodies into [`ApiError`].

use contracts::shared::api::{ApiErrorBody, ApiResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;
use crate::system::auth::storage;

pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Could not encode request: {0}")]
    Serialize(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Your session has expired, please log in again")]
    Unauthorized,
    #[error("You need to be logged in to do that")]
    NotLoggedIn,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Whether a request carries the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    None,
    /// Attach the token when logged in
    Optional,
    /// Fail with [`ApiError::NotLoggedIn`] when there is no token
    Required,
}

/// Get the base URL for API requests, e.g. "https://v2.api.noroff.dev"
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path starting with "/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a Holidaze endpoint, e.g. `holidaze_url("/venues")`
pub fn holidaze_url(path: &str) -> String {
    api_url(&format!("/holidaze{}", path))
}

/// The API key from configuration, or the one created for this browser
pub fn api_key() -> Option<String> {
    config()
        .api
        .api_key
        .clone()
        .or_else(storage::get_api_key)
}

fn with_headers(mut builder: RequestBuilder, auth: Auth) -> Result<RequestBuilder, ApiError> {
    builder = builder.header("Accept", "application/json");

    match (auth, storage::get_access_token()) {
        (Auth::None, _) => {}
        (_, Some(token)) => {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        (Auth::Required, None) => return Err(ApiError::NotLoggedIn),
        (Auth::Optional, None) => {}
    }

    if let Some(key) = api_key() {
        builder = builder.header(API_KEY_HEADER, &key);
    }

    Ok(builder)
}

/// Map a failed response to an [`ApiError`]
///
/// A 401 only means an expired session when the request carried a token;
/// otherwise (e.g. a failed login) the API message is kept.
pub fn normalize_error(status: u16, body: &str, with_session: bool) -> ApiError {
    if status == 401 && with_session {
        return ApiError::Unauthorized;
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .filter(|b| !b.errors.is_empty() || b.status.is_some())
        .map(|b| b.summary())
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    ApiError::Status { status, message }
}

async fn read_error(response: Response, auth: Auth) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let with_session = auth != Auth::None && storage::get_access_token().is_some();
    let err = normalize_error(status, &body, with_session);
    log::warn!("{} {} failed: {}", status, response.url(), err);
    err
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    auth: Auth,
) -> Result<ApiResponse<T>, ApiError> {
    if !response.ok() {
        return Err(read_error(response, auth).await);
    }
    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_with_body<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    auth: Auth,
) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("GET {}", url);
    let builder = with_headers(Request::get(url), auth)?;
    read_json(send(builder).await?, auth).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    auth: Auth,
) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("POST {}", url);
    let builder = with_headers(Request::post(url), auth)?;
    read_json(send_with_body(builder, body).await?, auth).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    auth: Auth,
) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("PUT {}", url);
    let builder = with_headers(Request::put(url), auth)?;
    read_json(send_with_body(builder, body).await?, auth).await
}

/// DELETE; the API answers `204 No Content` on success
pub async fn delete(url: &str, auth: Auth) -> Result<(), ApiError> {
    log::debug!("DELETE {}", url);
    let builder = with_headers(Request::delete(url), auth)?;
    let response = send(builder).await?;
    if !response.ok() {
        return Err(read_error(response, auth).await);
    }
    Ok(())
}

/// Percent-encode a single path segment such as a profile name
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uses_api_messages() {
        let body = r#"{"errors":[{"message":"Venue not found"}],"status":"Not Found","statusCode":404}"#;
        let err = normalize_error(404, body, true);
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Venue not found".into()
            }
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Venue not found");
    }

    #[test]
    fn test_normalize_unauthorized() {
        assert_eq!(normalize_error(401, "{}", true), ApiError::Unauthorized);
    }

    #[test]
    fn test_failed_login_keeps_api_message() {
        let body = r#"{"errors":[{"message":"Invalid email or password"}],"status":"Unauthorized","statusCode":401}"#;
        let err = normalize_error(401, body, false);
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Invalid email or password".into()
            }
        );
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_normalize_non_json_body() {
        let err = normalize_error(502, "<html>Bad gateway</html>", false);
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = normalize_error(500, "{}", true);
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment(" kari host "), "kari%20host");
        assert_eq!(path_segment("a/b"), "a%2Fb");
    }
}
