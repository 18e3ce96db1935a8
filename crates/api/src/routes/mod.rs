pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /builds/images?build=<name>       build gallery (GET)
/// /travel/images?location=<name>    travel gallery (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/builds/images", get(handlers::build_images::get_build_images))
        .route("/travel/images", get(handlers::travel_images::get_travel_images))
}
