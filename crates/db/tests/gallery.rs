//! Integration tests for the gallery repositories against a real database:
//! - name lookups for builds and travel locations
//! - ordered gallery reads (join rows + image keys + captions)
//! - order_index uniqueness per parent

use sqlx::PgPool;

use meridian_core::types::DbId;
use meridian_db::models::gallery::NewGalleryLink;
use meridian_db::repositories::{
    BuildRepo, CaptionRepo, GalleryRepo, ImageRepo, TravelLocationRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_build(pool: &PgPool, name: &str, main_description: &str) -> DbId {
    let (id,): (DbId,) =
        sqlx::query_as("INSERT INTO builds (name, main_description) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(main_description)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

async fn insert_location(pool: &PgPool, location: &str, country: &str) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO travel_locations (location, country, latitude, longitude)
         VALUES ($1, $2, 45.44, 12.33) RETURNING id",
    )
    .bind(location)
    .bind(country)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

/// Insert one full gallery entry (two images + caption + join row).
async fn link_travel_entry(pool: &PgPool, location_id: DbId, order_index: i32, caption: &str) {
    let large = ImageRepo::create(pool, &format!("venice/large/{order_index}.jpg"))
        .await
        .unwrap();
    let thumb = ImageRepo::create(pool, &format!("venice/thumbnail/{order_index}.jpg"))
        .await
        .unwrap();
    let caption = CaptionRepo::create(pool, caption).await.unwrap();

    GalleryRepo::link_travel(
        pool,
        &NewGalleryLink {
            parent_id: location_id,
            order_index,
            large_image_id: large.id,
            thumbnail_image_id: thumb.id,
            description_id: Some(caption.id),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: name lookups
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn find_build_by_name(pool: PgPool) {
    insert_build(&pool, "Keyboard", "A hand-wired keyboard.").await;

    let build = BuildRepo::find_by_name(&pool, "Keyboard").await.unwrap();
    let build = build.expect("build should exist");
    assert_eq!(build.name, "Keyboard");
    assert_eq!(build.main_description, "A hand-wired keyboard.");

    let missing = BuildRepo::find_by_name(&pool, "Nonexistent").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn find_travel_location_by_name(pool: PgPool) {
    insert_location(&pool, "Venice", "Italy").await;

    let location = TravelLocationRepo::find_by_name(&pool, "Venice")
        .await
        .unwrap()
        .expect("location should exist");
    assert_eq!(location.country, "Italy");

    let missing = TravelLocationRepo::find_by_name(&pool, "Atlantis")
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: ordered gallery reads
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn travel_gallery_is_ordered_by_order_index(pool: PgPool) {
    let location_id = insert_location(&pool, "Venice", "Italy").await;

    // Insert out of order; reads must come back sorted.
    link_travel_entry(&pool, location_id, 3, "Third").await;
    link_travel_entry(&pool, location_id, 1, "First").await;
    link_travel_entry(&pool, location_id, 2, "Second").await;

    let rows = GalleryRepo::list_by_travel_location(&pool, location_id)
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(|r| r.order_index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(rows[0].description, "First");
    assert_eq!(rows[0].large_key, "venice/large/1.jpg");
    assert_eq!(rows[0].thumbnail_key, "venice/thumbnail/1.jpg");
}

#[sqlx::test]
async fn missing_caption_reads_as_empty_string(pool: PgPool) {
    let location_id = insert_location(&pool, "Venice", "Italy").await;
    let large = ImageRepo::create(&pool, "venice/large/1.jpg").await.unwrap();
    let thumb = ImageRepo::create(&pool, "venice/thumbnail/1.jpg")
        .await
        .unwrap();

    GalleryRepo::link_travel(
        &pool,
        &NewGalleryLink {
            parent_id: location_id,
            order_index: 1,
            large_image_id: large.id,
            thumbnail_image_id: thumb.id,
            description_id: None,
        },
    )
    .await
    .unwrap();

    let rows = GalleryRepo::list_by_travel_location(&pool, location_id)
        .await
        .unwrap();
    assert_eq!(rows[0].description, "");
}

#[sqlx::test]
async fn build_gallery_roundtrip(pool: PgPool) {
    let build_id = insert_build(&pool, "Keyboard", "A hand-wired keyboard.").await;
    let large = ImageRepo::create(&pool, "keyboard/large/1.jpg")
        .await
        .unwrap();
    let thumb = ImageRepo::create(&pool, "keyboard/thumbnail/1.jpg")
        .await
        .unwrap();
    let caption = CaptionRepo::create(&pool, "Soldering the matrix.")
        .await
        .unwrap();

    GalleryRepo::link_build(
        &pool,
        &NewGalleryLink {
            parent_id: build_id,
            order_index: 1,
            large_image_id: large.id,
            thumbnail_image_id: thumb.id,
            description_id: Some(caption.id),
        },
    )
    .await
    .unwrap();

    let rows = GalleryRepo::list_by_build(&pool, build_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Soldering the matrix.");
    assert_eq!(rows[0].large_key, "keyboard/large/1.jpg");
}

// ---------------------------------------------------------------------------
// Test: order_index unique per parent
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn duplicate_order_index_is_rejected(pool: PgPool) {
    let location_id = insert_location(&pool, "Venice", "Italy").await;
    link_travel_entry(&pool, location_id, 1, "First").await;

    let large = ImageRepo::create(&pool, "venice/large/dup.jpg").await.unwrap();
    let thumb = ImageRepo::create(&pool, "venice/thumbnail/dup.jpg")
        .await
        .unwrap();

    let err = GalleryRepo::link_travel(
        &pool,
        &NewGalleryLink {
            parent_id: location_id,
            order_index: 1,
            large_image_id: large.id,
            thumbnail_image_id: thumb.id,
            description_id: None,
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_travel_images_order"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn same_order_index_allowed_across_parents(pool: PgPool) {
    let venice = insert_location(&pool, "Venice", "Italy").await;
    let rome = insert_location(&pool, "Rome", "Italy").await;

    link_travel_entry(&pool, venice, 1, "Venice first").await;
    link_travel_entry(&pool, rome, 1, "Rome first").await;

    assert_eq!(
        GalleryRepo::list_by_travel_location(&pool, venice)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        GalleryRepo::list_by_travel_location(&pool, rome)
            .await
            .unwrap()
            .len(),
        1
    );
}
