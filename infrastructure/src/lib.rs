//! Infrastructure layer for quizgen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod pexels;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, ENV_PREFIX, FileConfig, FileGenerationConfig,
    FileImagesConfig, FileRetryConfig, FileServerConfig,
};
pub use gemini::{GeminiGateway, GeminiSettings};
pub use pexels::PexelsImageSearch;
