//! Repository for the `build_images` and `travel_images` join tables.

use sqlx::PgPool;

use meridian_core::types::DbId;

use crate::models::gallery::{GalleryImageRow, NewGalleryLink};

pub struct GalleryRepo;

impl GalleryRepo {
    /// All gallery entries for a build, ordered by `order_index` ascending.
    ///
    /// Joins both image keys and the caption in one pass; a missing caption
    /// row reads as the empty string.
    pub async fn list_by_build(
        pool: &PgPool,
        build_id: DbId,
    ) -> Result<Vec<GalleryImageRow>, sqlx::Error> {
        sqlx::query_as::<_, GalleryImageRow>(
            "SELECT bi.order_index,
                    COALESCE(d.description, '') AS description,
                    li.s3_url AS large_key,
                    ti.s3_url AS thumbnail_key
             FROM build_images bi
             JOIN images li ON li.id = bi.large_image_id
             JOIN images ti ON ti.id = bi.thumbnail_image_id
             LEFT JOIN descriptions d ON d.id = bi.description_id
             WHERE bi.build_id = $1
             ORDER BY bi.order_index ASC",
        )
        .bind(build_id)
        .fetch_all(pool)
        .await
    }

    /// All gallery entries for a travel location, ordered by `order_index`
    /// ascending.
    pub async fn list_by_travel_location(
        pool: &PgPool,
        travel_location_id: DbId,
    ) -> Result<Vec<GalleryImageRow>, sqlx::Error> {
        sqlx::query_as::<_, GalleryImageRow>(
            "SELECT ti_join.order_index,
                    COALESCE(d.description, '') AS description,
                    li.s3_url AS large_key,
                    ti.s3_url AS thumbnail_key
             FROM travel_images ti_join
             JOIN images li ON li.id = ti_join.large_image_id
             JOIN images ti ON ti.id = ti_join.thumbnail_image_id
             LEFT JOIN descriptions d ON d.id = ti_join.description_id
             WHERE ti_join.travel_location_id = $1
             ORDER BY ti_join.order_index ASC",
        )
        .bind(travel_location_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a build join row, returning its id.
    pub async fn link_build(pool: &PgPool, link: &NewGalleryLink) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO build_images
                (build_id, order_index, large_image_id, thumbnail_image_id, description_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(link.parent_id)
        .bind(link.order_index)
        .bind(link.large_image_id)
        .bind(link.thumbnail_image_id)
        .bind(link.description_id)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Insert a travel join row, returning its id.
    pub async fn link_travel(pool: &PgPool, link: &NewGalleryLink) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO travel_images
                (travel_location_id, order_index, large_image_id, thumbnail_image_id, description_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(link.parent_id)
        .bind(link.order_index)
        .bind(link.large_image_id)
        .bind(link.thumbnail_image_id)
        .bind(link.description_id)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }
}
