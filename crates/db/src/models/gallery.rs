//! Join-row models for the ordered image galleries.

use sqlx::FromRow;

use meridian_core::types::DbId;

/// One gallery entry as read for serving: the join row's position joined
/// with both image keys and the caption text (empty string when the join
/// row has no caption).
#[derive(Debug, Clone, FromRow)]
pub struct GalleryImageRow {
    pub order_index: i32,
    pub description: String,
    pub large_key: String,
    pub thumbnail_key: String,
}

/// DTO for inserting a join row (uploader only).
#[derive(Debug, Clone)]
pub struct NewGalleryLink {
    pub parent_id: DbId,
    pub order_index: i32,
    pub large_image_id: DbId,
    pub thumbnail_image_id: DbId,
    pub description_id: Option<DbId>,
}
