//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string::truncate`] - bounded excerpts for logs and error details

pub mod error;
pub mod string;
