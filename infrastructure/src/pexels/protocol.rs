//! Wire types for the Pexels photo search endpoint

use serde::Deserialize;

/// `GET /v1/search` response body (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub src: PhotoSources,
}

/// Size variants of one photo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoSources {
    pub original: Option<String>,
    pub large2x: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
    pub landscape: Option<String>,
    pub tiny: Option<String>,
}

impl PhotoSources {
    /// Largest available landscape-friendly variant.
    ///
    /// Preference: original, large2x, large, landscape, medium, small, tiny.
    /// The `portrait` variant is not deserialized.
    pub fn best(&self) -> Option<&str> {
        [
            &self.original,
            &self.large2x,
            &self.large,
            &self.landscape,
            &self.medium,
            &self.small,
            &self.tiny,
        ]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .find(|url| !url.is_empty())
    }
}

impl SearchResponse {
    /// Best URL of the first photo
    pub fn first_image_url(&self) -> Option<&str> {
        self.photos.first()?.src.best()
    }
}
