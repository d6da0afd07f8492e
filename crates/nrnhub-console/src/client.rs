//! Single-shot API client for the console.
//!
//! Every call is one request: no retry, no cancellation. Failures
//! surface to the state machine, which keeps the admin's edits intact
//! for resubmission.

use serde::Deserialize;

use nrnhub_ads::{InquiryDraft, PlacementsPayload};

/// Error type for console API calls.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("request error: {0}")]
    Request(String),
}

/// Response from the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Absolute URL of the stored creative.
    pub url: String,
}

/// Response carrying only a message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Console HTTP client, bound to the configured base URL.
pub struct ApiClient {
    base_url: String,
    admin_token: Option<String>,
}

impl ApiClient {
    /// Create a client for a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_token: None,
        }
    }

    /// Attach the admin bearer token used on protected calls.
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the current placements document.
    pub async fn fetch_placements(&self) -> Result<PlacementsPayload, FetchError> {
        self.get_json(&self.url("/api/ads")).await
    }

    /// Submit the whole placements document. Returns the persisted state
    /// as echoed by the server.
    pub async fn submit_placements(
        &self,
        payload: &PlacementsPayload,
    ) -> Result<PlacementsPayload, FetchError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| FetchError::Request(e.to_string()))?;
        self.post_json(&self.url("/api/ads"), "application/json", body, true)
            .await
    }

    /// Submit a public advertiser inquiry.
    pub async fn submit_inquiry(&self, draft: &InquiryDraft) -> Result<MessageResponse, FetchError> {
        let body = serde_json::to_vec(draft)
            .map_err(|e| FetchError::Request(e.to_string()))?;
        self.post_json(&self.url("/api/ads/inquiry"), "application/json", body, false)
            .await
    }

    /// Upload a creative; returns its served URL.
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, FetchError> {
        let url = format!(
            "{}?filename={}",
            self.url("/api/ads/upload"),
            filename.replace(' ', "%20")
        );
        self.post_json(&url, content_type, bytes, true).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let request = spin_sdk::http::Request::get(url).build();
        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        decode_response(url, &response)
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
        authed: bool,
    ) -> Result<T, FetchError> {
        let mut builder = spin_sdk::http::Request::post(url, body);
        builder.header("content-type", content_type);
        if authed {
            if let Some(token) = &self.admin_token {
                builder.header("authorization", format!("Bearer {}", token));
            }
        }
        let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        decode_response(url, &response)
    }

    // Off-target there is no outbound HTTP host; calls fail fast.
    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        Err(FetchError::Connection(format!(
            "outbound http unavailable off-target: {}",
            url
        )))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        _content_type: &str,
        _body: Vec<u8>,
        _authed: bool,
    ) -> Result<T, FetchError> {
        Err(FetchError::Connection(format!(
            "outbound http unavailable off-target: {}",
            url
        )))
    }
}

#[cfg(target_arch = "wasm32")]
fn decode_response<T: serde::de::DeserializeOwned>(
    url: &str,
    response: &spin_sdk::http::Response,
) -> Result<T, FetchError> {
    let status = *response.status();
    if status >= 400 {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }
    serde_json::from_slice(response.body())
        .map_err(|e| FetchError::Deserialization(e.to_string()))
}
