//! Pexels adapter for the image search port

pub mod client;
pub mod protocol;

pub use client::PexelsImageSearch;
