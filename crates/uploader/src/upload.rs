//! The upload loop: push image pairs to object storage and link them in
//! the database with ascending `order_index`.

use std::path::PathBuf;

use meridian_cloud::ObjectStorage;
use meridian_db::models::gallery::NewGalleryLink;
use meridian_db::repositories::{BuildRepo, CaptionRepo, GalleryRepo, ImageRepo, TravelLocationRepo};
use meridian_db::DbPool;

use crate::error::UploadError;
use crate::files;

/// Whether the upload targets a travel location or a build.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParentKind {
    Travel,
    Build,
}

/// One upload request: a parent name, the two image folders, and one
/// caption per image (empty string for "none").
#[derive(Debug)]
pub struct UploadJob {
    pub kind: ParentKind,
    pub name: String,
    pub large_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub captions: Vec<String>,
}

/// Run the upload: validate counts and the parent, then for each image pair
/// upload `<name>/large/<file>` and `<name>/thumbnail/<file>`, insert the
/// image and caption rows, and link them with `order_index = i + 1`.
///
/// The parent row must already exist; this tool never creates builds or
/// travel locations.
pub async fn run(
    pool: &DbPool,
    storage: &dyn ObjectStorage,
    job: &UploadJob,
) -> Result<(), UploadError> {
    let large_images = files::list_images(&job.large_dir)?;
    let thumbnail_images = files::list_images(&job.thumbnail_dir)?;

    if large_images.len() != thumbnail_images.len() {
        return Err(UploadError::MismatchedImageCounts {
            large: large_images.len(),
            thumbnails: thumbnail_images.len(),
        });
    }

    if large_images.len() != job.captions.len() {
        return Err(UploadError::MismatchedCaptionCounts {
            descriptions: job.captions.len(),
            images: large_images.len(),
        });
    }

    let parent_id = find_parent_id(pool, job).await?;
    let total = large_images.len();

    for (i, (large_name, thumbnail_name)) in
        large_images.iter().zip(thumbnail_images.iter()).enumerate()
    {
        let caption = &job.captions[i];

        let large_key = format!("{}/large/{}", job.name, large_name);
        let thumbnail_key = format!("{}/thumbnail/{}", job.name, thumbnail_name);

        let large_bytes = tokio::fs::read(job.large_dir.join(large_name)).await?;
        storage
            .put_object(&large_key, large_bytes, "image/jpeg")
            .await?;

        let thumbnail_bytes = tokio::fs::read(job.thumbnail_dir.join(thumbnail_name)).await?;
        storage
            .put_object(&thumbnail_key, thumbnail_bytes, "image/jpeg")
            .await?;

        // The database stores bucket keys; presigning happens at serve time.
        let large_row = ImageRepo::create(pool, &large_key).await?;
        let thumbnail_row = ImageRepo::create(pool, &thumbnail_key).await?;
        let caption_row = CaptionRepo::create(pool, caption).await?;

        let link = NewGalleryLink {
            parent_id,
            order_index: (i + 1) as i32,
            large_image_id: large_row.id,
            thumbnail_image_id: thumbnail_row.id,
            description_id: Some(caption_row.id),
        };

        match job.kind {
            ParentKind::Travel => GalleryRepo::link_travel(pool, &link).await?,
            ParentKind::Build => GalleryRepo::link_build(pool, &link).await?,
        };

        tracing::info!(
            index = i + 1,
            total,
            large = %large_key,
            "Uploaded image pair and linked database rows"
        );
    }

    Ok(())
}

async fn find_parent_id(pool: &DbPool, job: &UploadJob) -> Result<i64, UploadError> {
    match job.kind {
        ParentKind::Travel => TravelLocationRepo::find_by_name(pool, &job.name)
            .await?
            .map(|location| location.id)
            .ok_or_else(|| UploadError::ParentNotFound {
                kind: "Travel location",
                name: job.name.clone(),
            }),
        ParentKind::Build => BuildRepo::find_by_name(pool, &job.name)
            .await?
            .map(|build| build.id)
            .ok_or_else(|| UploadError::ParentNotFound {
                kind: "Build",
                name: job.name.clone(),
            }),
    }
}
