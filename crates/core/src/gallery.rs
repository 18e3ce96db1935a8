//! Gallery payload types and the carousel display state machine.
//!
//! The wire shapes here are shared by the API (serialization) and the
//! viewer (deserialization), so the field names match the HTTP contract
//! exactly: `order_index`, `description`, `largeImage`, `thumbnailImage`,
//! and for builds a top-level `main_description` beside `imagesData`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

/// One image entry as served by the image endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub order_index: i32,
    pub description: String,
    #[serde(rename = "largeImage")]
    pub large_image: String,
    #[serde(rename = "thumbnailImage")]
    pub thumbnail_image: String,
}

/// Build payload: the image list plus the build's own description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildGallery {
    pub main_description: String,
    #[serde(rename = "imagesData")]
    pub images_data: Vec<GalleryImage>,
}

// ---------------------------------------------------------------------------
// Display state
// ---------------------------------------------------------------------------

/// Fetched gallery data split into the parallel arrays the carousel shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gallery {
    pub large: Vec<String>,
    pub thumbnails: Vec<String>,
    pub descriptions: Vec<String>,
    /// Present for build galleries only.
    pub main_description: Option<String>,
}

impl Gallery {
    /// Split server-ordered image rows into display arrays.
    pub fn from_images(images: Vec<GalleryImage>, main_description: Option<String>) -> Self {
        let mut gallery = Gallery {
            main_description,
            ..Default::default()
        };
        for image in images {
            gallery.large.push(image.large_image);
            gallery.thumbnails.push(image.thumbnail_image);
            gallery.descriptions.push(image.description);
        }
        gallery
    }

    pub fn len(&self) -> usize {
        self.large.len()
    }

    pub fn is_empty(&self) -> bool {
        self.large.is_empty()
    }
}

/// Carousel display states: `Idle` (no selection) -> `Loading` -> `Ready`
/// or `Error`. A cancelled fetch never produces a transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CarouselState {
    #[default]
    Idle,
    Loading,
    Ready {
        gallery: Gallery,
        active_index: usize,
    },
    Error,
}

impl CarouselState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CarouselState::Loading)
    }
}
