use serde::Serialize;
use sqlx::FromRow;

use meridian_core::types::DbId;

/// A row from the `builds` table: a named project with its own description.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Build {
    pub id: DbId,
    pub name: String,
    pub main_description: String,
}
