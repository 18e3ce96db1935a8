//! Gallery fetch client.
//!
//! [`GalleryFetcher`] is the seam between the carousel controller and the
//! HTTP surface so tests can script responses; [`HttpGalleryFetcher`] is
//! the real reqwest-backed implementation.

use async_trait::async_trait;

use meridian_core::gallery::{BuildGallery, GalleryImage};

/// Errors surfaced by a gallery fetch. The controller collapses both
/// variants into the same error display state; the distinction exists for
/// logging only.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server returned status {0}")]
    Status(u16),
}

#[async_trait]
pub trait GalleryFetcher: Send + Sync {
    /// Fetch the ordered gallery for a travel location.
    async fn fetch_travel(&self, location: &str) -> Result<Vec<GalleryImage>, FetchError>;

    /// Fetch the ordered gallery (plus main description) for a build.
    async fn fetch_build(&self, build: &str) -> Result<BuildGallery, FetchError>;
}

/// Fetcher backed by the image endpoints.
pub struct HttpGalleryFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGalleryFetcher {
    /// `base_url` is the server origin without a trailing slash, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: (&str, &str),
    ) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[query])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[async_trait]
impl GalleryFetcher for HttpGalleryFetcher {
    async fn fetch_travel(&self, location: &str) -> Result<Vec<GalleryImage>, FetchError> {
        self.get_json("/api/travel/images", ("location", location))
            .await
    }

    async fn fetch_build(&self, build: &str) -> Result<BuildGallery, FetchError> {
        self.get_json("/api/builds/images", ("build", build)).await
    }
}
