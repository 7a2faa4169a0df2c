//! API utilities for frontend-backend communication
//!
//! [`ApiClient`] is created once from [`AppConfig`] and handed to the pages
//! through Leptos context, so views never reach for a global client.

use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::AppConfig;
use crate::shared::data_table::RecordStore;

/// Errors of a single request to the REST backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Get the fallback base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Build a full URL from a path relative to the API base
    ///
    /// ```ignore
    /// let url = client.url("/jobs/");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of one record inside a REST collection
    pub fn record_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.url(collection.trim_end_matches('/')),
            urlencoding::encode(id)
        )
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response)?;
        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).map(|_| ())
    }

    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        let response = Request::delete(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).map(|_| ())
    }
}

impl RecordStore for ApiClient {
    async fn delete_record(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(collection, id);
        log::info!("DELETE {}", url);
        self.delete(&url).await
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Client injected by [`App`](crate::app::App)
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_single_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/jobs/"), "http://localhost:3000/jobs/");
        assert_eq!(client.url("analytics/all"), "http://localhost:3000/analytics/all");
    }

    #[test]
    fn test_record_url_escapes_id() {
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(client.record_url("jobs", "abc"), "https://api.example.com/jobs/abc");
        assert_eq!(
            client.record_url("/subscriptions/", "a b"),
            "https://api.example.com/subscriptions/a%20b"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "server responded with HTTP 404");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
