//! Thin HTTP adapter over reqwest
//!
//! Issues a single GET and hands back the status and body untouched. A non-2xx
//! status is a successful transport result here; only failures to talk to the
//! server at all (connect, DNS, TLS, timeout) become [`ApiError::Network`].

use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::ApiResponse;
use super::models::ErrorBody;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// GitHub's recommended media type
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Raw status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Classify the response.
    ///
    /// 200 parses the body as `T`; 4xx extracts the server's error messages;
    /// any other status is passed through as [`ApiResponse::Status`].
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidResponse`] if a 200 body is not valid `T`.
    pub fn into_api_response<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        let status = self.status;

        if status == StatusCode::OK.as_u16() {
            let data = serde_json::from_str::<T>(&self.body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(ApiResponse::Ok(data));
        }

        if (400..500).contains(&status) {
            let mut messages = serde_json::from_str::<ErrorBody>(&self.body)
                .map(|body| body.messages())
                .unwrap_or_default();

            if messages.is_empty() {
                messages.push(reason_phrase(status));
            }

            return Ok(ApiResponse::ClientError { status, messages });
        }

        Ok(ApiResponse::Status(status))
    }
}

/// Canonical reason phrase, or `HTTP <code>` for unknown codes
fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Single-shot GET adapter bound to one API base URL
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    http: HttpClient,
    base_url: Url,
}

impl HttpAdapter {
    /// Create an adapter from resolved configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let http = HttpClient::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    /// Build the URL for `segments` below the base URL.
    ///
    /// Each segment is percent-encoded, so an identifier containing `/` or `?`
    /// stays a single path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidResponse(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one GET with query parameters.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] only when no HTTP response was received
    /// or its body could not be read.
    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<RawResponse> {
        let url = self.endpoint(segments)?;
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from)?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(RawResponse::new(status, body))
    }
}
