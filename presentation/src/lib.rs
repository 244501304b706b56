//! Presentation layer for quizgen
//!
//! This crate contains the HTTP surface (axum router, handlers, error
//! mapping), CLI definitions and console output formatting.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GenerateArgs, OutputFormat, ServeArgs};
pub use http::{ApiError, AppState, router};
pub use output::console::ConsoleFormatter;
