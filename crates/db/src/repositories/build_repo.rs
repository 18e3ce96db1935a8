//! Repository for the `builds` table.

use sqlx::PgPool;

use crate::models::build::Build;

pub struct BuildRepo;

impl BuildRepo {
    /// Look a build up by its display name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Build>, sqlx::Error> {
        sqlx::query_as::<_, Build>("SELECT id, name, main_description FROM builds WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
