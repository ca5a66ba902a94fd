//! HTTP client for the Pickaxe studio API.

use std::fmt;

use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::request::BackendRequest;

/// Base URL of the Pickaxe studio API.
pub const DEFAULT_BASE_URL: &str = "https://api.pickaxe.co/v1";

/// Classified failure of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. The body is the raw
    /// response text, which is not assumed to be JSON.
    Http { status: u16, body: String },
    /// The call failed before a usable response was obtained (DNS,
    /// connection, timeout, or an undecodable success body).
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => {
                write!(f, "Pickaxe API error ({}): {}", status, body)
            }
            ApiError::Transport(cause) => {
                write!(f, "Pickaxe API request failed: {}", cause)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Stateless client performing one HTTP call per backend request.
///
/// No retries, no caching; timeouts and redirects are whatever the
/// underlying transport defaults to.
#[derive(Debug, Clone)]
pub struct PickaxeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PickaxeClient {
    /// Client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Perform one backend call and classify the outcome.
    ///
    /// Attaches the bearer credential and JSON content type, serializes the
    /// body when present, and decodes a 2xx response as JSON.
    pub async fn send(&self, request: &BackendRequest, api_key: &str) -> Result<Value, ApiError> {
        let url = if request.path.starts_with("http") {
            request.path.clone()
        } else {
            format!("{}{}", self.base_url, request.path)
        };
        debug!("Backend request: {} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Backend error response: {} ({} bytes)", status, body.len());
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

impl Default for PickaxeClient {
    fn default() -> Self {
        Self::new()
    }
}
