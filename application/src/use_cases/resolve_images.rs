//! Resolve Images use case
//!
//! Attaches an image URL to every question of a batch. Each lookup is
//! independent; a failed lookup leaves its question without an image and
//! never fails the batch.

use crate::ports::image_search::ImageSearchPort;
use quizgen_domain::QuestionBatch;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Use case for resolving question images
#[derive(Clone)]
pub struct ResolveImagesUseCase {
    search: Arc<dyn ImageSearchPort>,
}

impl ResolveImagesUseCase {
    pub fn new(search: Arc<dyn ImageSearchPort>) -> Self {
        Self { search }
    }

    /// Resolve one search phrase; every failure becomes `None`
    pub async fn resolve(&self, query: &str) -> Option<String> {
        Self::lookup(self.search.as_ref(), query).await
    }

    /// Resolve all questions concurrently and attach the results by index.
    ///
    /// Returns only after every lookup has finished (with or without an image).
    pub async fn resolve_batch(&self, batch: QuestionBatch) -> QuestionBatch {
        let queries = batch.search_queries();
        let mut urls: Vec<Option<String>> = vec![None; queries.len()];

        let mut join_set = JoinSet::new();

        for (index, query) in queries.into_iter().enumerate() {
            let search = Arc::clone(&self.search);
            join_set.spawn(async move {
                let url = Self::lookup(search.as_ref(), &query).await;
                (index, url)
            });
        }

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, url)) => urls[index] = url,
                Err(e) => warn!("Image lookup task failed: {}", e),
            }
        }

        let resolved = urls.iter().filter(|u| u.is_some()).count();
        info!("Resolved {}/{} question images", resolved, urls.len());

        batch.with_image_urls(urls)
    }

    async fn lookup(search: &dyn ImageSearchPort, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        match search.search(query).await {
            Ok(url) => {
                debug!("Image for '{}': {}", query, url);
                Some(url)
            }
            Err(e) => {
                warn!("Image lookup for '{}' failed: {}", query, e);
                None
            }
        }
    }
}
