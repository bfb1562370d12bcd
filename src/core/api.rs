//! HTTP client for the LendWise backend
//!
//! Thin wrappers over gloo-net that attach the bearer token from the
//! session store and map error bodies through the backend's `message`
//! field. Every call is fire-and-forget from a page's point of view:
//! no retries, no ordering between requests.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use gloo_net::http::{RequestBuilder, Response};

use super::session::stored_token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (401)
    #[error("not authorized")]
    Unauthorized,
    /// Backend error with its `message` field
    #[error("{0}")]
    Api(String),
    /// Transport or decode failure
    #[error("request failed: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body shape shared by every backend endpoint
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed with status {}", response.status()));
    Err(ApiError::Api(message))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = with_bearer(gloo_net::http::Request::get(url))
        .send()
        .await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_bearer(gloo_net::http::Request::post(url))
        .json(body)?
        .send()
        .await?;
    parse(response).await
}

/// PUT with no body, used by the bank approve/reject actions
pub async fn put_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = with_bearer(gloo_net::http::Request::put(url))
        .header("Content-Type", "application/json")
        .send()
        .await?;
    parse(response).await
}
