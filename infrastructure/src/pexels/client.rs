//! Pexels implementation of [`ImageSearchPort`]

use super::protocol::SearchResponse;
use crate::config::FileImagesConfig;
use async_trait::async_trait;
use quizgen_application::{ImageSearchError, ImageSearchPort};
use std::time::Duration;
use tracing::debug;

/// Image search backed by the Pexels photo search API
pub struct PexelsImageSearch {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl PexelsImageSearch {
    /// Create a client. A `None` key makes every search fail with
    /// [`ImageSearchError::MissingCredentials`] without a network call.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quizgen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/search", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    pub fn from_config(config: &FileImagesConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.base_url,
            config.resolve_api_key(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl ImageSearchPort for PexelsImageSearch {
    async fn search(&self, query: &str) -> Result<String, ImageSearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ImageSearchError::MissingCredentials)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .header(reqwest::header::AUTHORIZATION, api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageSearchError::Timeout
                } else {
                    ImageSearchError::Connection(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSearchError::HttpStatus(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::InvalidPayload(e.without_url().to_string()))?;

        let url = body
            .first_image_url()
            .ok_or(ImageSearchError::NoResults)?;
        debug!("Pexels match for '{}'", query);
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::{
        Json, Router,
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    /// Fake search: requires `Authorization: test-key`, echoes the query back
    /// in the image URL, finds nothing for "nothing".
    async fn fake_search(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, StatusCode> {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("test-key") {
            return Err(StatusCode::UNAUTHORIZED);
        }
        if params.get("per_page").map(String::as_str) != Some("1")
            || params.get("orientation").map(String::as_str) != Some("landscape")
        {
            return Err(StatusCode::BAD_REQUEST);
        }

        let query = params.get("query").cloned().unwrap_or_default();
        if query == "nothing" {
            return Ok(Json(json!({"photos": []})));
        }
        Ok(Json(json!({
            "photos": [{"src": {
                "large2x": format!("https://images.test/{}/large2x.jpg", query.replace(' ', "_")),
                "small": "https://images.test/small.jpg"
            }}]
        })))
    }

    async fn search_with(key: Option<&str>) -> PexelsImageSearch {
        let base_url = serve(Router::new().route("/v1/search", get(fake_search))).await;
        PexelsImageSearch::new(&base_url, key.map(str::to_string), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_best_variant() {
        let search = search_with(Some("test-key")).await;
        let url = search.search("Eiffel Tower").await.unwrap();
        assert_eq!(url, "https://images.test/Eiffel_Tower/large2x.jpg");
    }

    #[tokio::test]
    async fn test_no_results() {
        let search = search_with(Some("test-key")).await;
        assert_eq!(
            search.search("nothing").await.unwrap_err(),
            ImageSearchError::NoResults
        );
    }

    #[tokio::test]
    async fn test_rejected_key_is_http_status() {
        let search = search_with(Some("wrong-key")).await;
        assert_eq!(
            search.search("Mount Fuji").await.unwrap_err(),
            ImageSearchError::HttpStatus(401)
        );
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let search =
            PexelsImageSearch::new("http://127.0.0.1:1", None, Duration::from_secs(5)).unwrap();
        assert!(!search.has_credentials());
        assert_eq!(
            search.search("Mount Fuji").await.unwrap_err(),
            ImageSearchError::MissingCredentials
        );
    }
}
