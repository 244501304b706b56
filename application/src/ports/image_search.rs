//! Image search port
//!
//! Maps a search phrase to a direct image URL.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an image search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSearchError {
    #[error("Image search API key is not configured")]
    MissingCredentials,

    #[error("Image search returned HTTP {0}")]
    HttpStatus(u16),

    #[error("No image found")]
    NoResults,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Image search backend
#[async_trait]
pub trait ImageSearchPort: Send + Sync {
    /// Find the best available image URL for `query`
    async fn search(&self, query: &str) -> Result<String, ImageSearchError>;
}
