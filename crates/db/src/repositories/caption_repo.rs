//! Repository for the `descriptions` table.

use sqlx::PgPool;

use crate::models::image::Caption;

pub struct CaptionRepo;

impl CaptionRepo {
    /// Insert a caption, returning the created row. An empty string is a
    /// valid caption meaning "none".
    pub async fn create(pool: &PgPool, description: &str) -> Result<Caption, sqlx::Error> {
        sqlx::query_as::<_, Caption>(
            "INSERT INTO descriptions (description) VALUES ($1) RETURNING id, description",
        )
        .bind(description)
        .fetch_one(pool)
        .await
    }
}
