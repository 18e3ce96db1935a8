//! Image pointer and caption rows.

use serde::Serialize;
use sqlx::FromRow;

use meridian_core::types::DbId;

/// A row from the `images` table: a pointer to an object-storage key.
/// The column is named `s3_url` but holds the bucket key, not a full URL;
/// presigning turns it into a fetchable URL at serve time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredImage {
    pub id: DbId,
    pub s3_url: String,
}

/// A row from the `descriptions` table. An empty string means "no caption".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Caption {
    pub id: DbId,
    pub description: String,
}
