//! Repository for the `images` table.

use sqlx::PgPool;

use crate::models::image::StoredImage;

pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image pointer, returning the created row.
    pub async fn create(pool: &PgPool, s3_url: &str) -> Result<StoredImage, sqlx::Error> {
        sqlx::query_as::<_, StoredImage>(
            "INSERT INTO images (s3_url) VALUES ($1) RETURNING id, s3_url",
        )
        .bind(s3_url)
        .fetch_one(pool)
        .await
    }
}
