//! Repository for the `travel_locations` table.

use sqlx::PgPool;

use crate::models::travel_location::TravelLocation;

pub struct TravelLocationRepo;

impl TravelLocationRepo {
    /// Look a travel location up by its display name.
    pub async fn find_by_name(
        pool: &PgPool,
        location: &str,
    ) -> Result<Option<TravelLocation>, sqlx::Error> {
        sqlx::query_as::<_, TravelLocation>(
            "SELECT id, location, country, latitude, longitude
             FROM travel_locations WHERE location = $1",
        )
        .bind(location)
        .fetch_optional(pool)
        .await
    }
}
