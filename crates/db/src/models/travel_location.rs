use serde::Serialize;
use sqlx::FromRow;

use meridian_core::types::DbId;

/// A row from the `travel_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TravelLocation {
    pub id: DbId,
    pub location: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}
