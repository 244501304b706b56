//! Configuration file loading for quizgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizgen.toml` or `./.quizgen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FileImagesConfig, FileRetryConfig,
    FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
