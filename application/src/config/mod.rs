//! Application-level configuration.
//!
//! - [`RetryPolicy`] - attempt budget and backoff for the generation model

pub mod retry_policy;

pub use retry_policy::RetryPolicy;
