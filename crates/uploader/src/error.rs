use std::path::PathBuf;

use meridian_cloud::CloudError;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Folder does not exist: {0}")]
    MissingFolder(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Number of large images ({large}) must equal the number of thumbnail images ({thumbnails})")]
    MismatchedImageCounts { large: usize, thumbnails: usize },

    #[error("Number of descriptions ({descriptions}) must equal the number of images ({images})")]
    MismatchedCaptionCounts { descriptions: usize, images: usize },

    #[error("{kind} {name:?} not found; create it before uploading")]
    ParentNotFound { kind: &'static str, name: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Cloud(#[from] CloudError),
}
