//! # API transport
//!
//! This module defines the fetch collaborator the slices load through and
//! its production HTTP implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-level failure raised by the fetch collaborator
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered outside the 2xx range
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The response body was not the shape we expected
    #[error("Malformed response: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Create a new network error
    pub fn network<T: Into<String>>(message: T) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a new decode error
    pub fn decode<T: Into<String>>(message: T) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode {
                message: error.to_string(),
            }
        } else if let Some(status) = error.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Network {
                message: error.to_string(),
            }
        }
    }
}

/// Fetch collaborator used by the slices
///
/// The store only issues bare GETs that come back as JSON; the narrow
/// surface lets tests substitute a scripted implementation.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch a URL and decode the response body as JSON
    ///
    /// # Arguments
    /// * `url` - Absolute endpoint URL to fetch
    ///
    /// # Returns
    /// An [`ApiResult`] containing the decoded JSON body of a 2xx response
    ///
    /// # Errors
    /// Returns an error on connection failure, a non-2xx status, or a body
    /// that is not valid JSON.
    async fn get_json(&self, url: &str) -> ApiResult<serde_json::Value>;
}

/// Production [`ApiService`] backed by a pooled HTTP client.
#[derive(Clone, Debug, Default)]
pub struct HttpApiService {
    client: reqwest::Client,
}

impl HttpApiService {
    /// Create a new service with its own connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn get_json(&self, url: &str) -> ApiResult<serde_json::Value> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.json().await?;
        Ok(body)
    }
}
