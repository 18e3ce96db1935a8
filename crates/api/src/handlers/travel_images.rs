//! Handler for `GET /api/travel/images`.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use meridian_core::error::CoreError;
use meridian_core::gallery::GalleryImage;
use meridian_db::repositories::{GalleryRepo, TravelLocationRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::sign_gallery_rows;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TravelImagesParams {
    pub location: Option<String>,
}

/// GET /api/travel/images?location=<name>
///
/// Returns the location's ordered gallery with freshly presigned image
/// URLs. 400 when the parameter is missing or empty, 404 when no travel
/// location has that name.
pub async fn get_travel_images(
    State(state): State<AppState>,
    Query(params): Query<TravelImagesParams>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let name = params
        .location
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("No location provided".to_string()))?;

    let location = TravelLocationRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            name,
        }))?;

    let rows = GalleryRepo::list_by_travel_location(&state.pool, location.id).await?;
    let images = sign_gallery_rows(state.storage.as_ref(), rows).await?;

    tracing::info!(location = %location.location, count = images.len(), "Fetched travel images");

    Ok(Json(images))
}
