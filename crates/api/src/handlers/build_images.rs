//! Handler for `GET /api/builds/images`.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use meridian_core::error::CoreError;
use meridian_core::gallery::BuildGallery;
use meridian_db::repositories::{BuildRepo, GalleryRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::sign_gallery_rows;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BuildImagesParams {
    pub build: Option<String>,
}

/// GET /api/builds/images?build=<name>
///
/// Returns the build's ordered gallery with freshly presigned image URLs
/// and the build's own `main_description`. 400 when the parameter is
/// missing or empty, 404 when no build has that name.
pub async fn get_build_images(
    State(state): State<AppState>,
    Query(params): Query<BuildImagesParams>,
) -> AppResult<Json<BuildGallery>> {
    let name = params
        .build
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("No build provided".to_string()))?;

    let build = BuildRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Build",
            name,
        }))?;

    let rows = GalleryRepo::list_by_build(&state.pool, build.id).await?;
    let images_data = sign_gallery_rows(state.storage.as_ref(), rows).await?;

    tracing::info!(build = %build.name, count = images_data.len(), "Fetched build images");

    Ok(Json(BuildGallery {
        main_description: build.main_description,
        images_data,
    }))
}
