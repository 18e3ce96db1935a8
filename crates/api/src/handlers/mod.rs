pub mod build_images;
pub mod travel_images;

use std::time::Duration;

use futures::future::try_join_all;

use meridian_cloud::ObjectStorage;
use meridian_core::gallery::GalleryImage;
use meridian_db::models::gallery::GalleryImageRow;

use crate::error::AppError;

/// Lifetime of the presigned image URLs in a response. Every request
/// regenerates fresh URLs; nothing is cached or tracked server-side.
pub(crate) const SIGNED_URL_TTL: Duration = Duration::from_secs(120);

/// Presign both object keys of every gallery row, preserving row order.
pub(crate) async fn sign_gallery_rows(
    storage: &dyn ObjectStorage,
    rows: Vec<GalleryImageRow>,
) -> Result<Vec<GalleryImage>, AppError> {
    try_join_all(rows.into_iter().map(|row| async move {
        let large_image = storage.presign_get(&row.large_key, SIGNED_URL_TTL).await?;
        let thumbnail_image = storage
            .presign_get(&row.thumbnail_key, SIGNED_URL_TTL)
            .await?;

        Ok::<_, AppError>(GalleryImage {
            order_index: row.order_index,
            description: row.description,
            large_image,
            thumbnail_image,
        })
    }))
    .await
}
