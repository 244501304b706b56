//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_questions;
pub mod resolve_images;
pub mod run_pipeline;
