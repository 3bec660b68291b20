use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::swimmer::SwimmerRequest;
use crate::error::{Result, StorageError};
use crate::models::Swimmer;

const SWIMMER_COLUMNS: &str = "swimmer_id, name, birth_date, gender, created_at, updated_at";

/// Conflict target; must match `swimmers_identity_idx`.
const IDENTITY_KEY: &str = "(LOWER(name)), birth_date";

#[derive(FromRow)]
struct UpsertedSwimmer {
    #[sqlx(flatten)]
    swimmer: Swimmer,
    created: bool,
}

// `xmax` is zero only for a row this statement inserted.
fn upsert_swimmer_sql() -> String {
    format!(
        r#"
        INSERT INTO swimmers (name, birth_date, gender)
        VALUES ($1, $2, $3)
        ON CONFLICT ({IDENTITY_KEY}) DO UPDATE
        SET name = EXCLUDED.name,
            gender = EXCLUDED.gender,
            updated_at = CURRENT_TIMESTAMP
        RETURNING {SWIMMER_COLUMNS}, (xmax = 0) AS created
        "#
    )
}

pub struct SwimmerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SwimmerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all swimmers
    pub async fn list(&self) -> Result<Vec<Swimmer>> {
        let swimmers = sqlx::query_as::<_, Swimmer>(&format!(
            "SELECT {SWIMMER_COLUMNS} FROM swimmers ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(swimmers)
    }

    /// Find swimmer by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Swimmer> {
        sqlx::query_as::<_, Swimmer>(&format!(
            "SELECT {SWIMMER_COLUMNS} FROM swimmers WHERE swimmer_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create the swimmer, or update it in place when one with the same
    /// name (case-insensitive) and birth date already exists.
    ///
    /// Returns the stored row and whether it was newly created. Concurrent
    /// calls for the same swimmer resolve on the identity index, never fail on it.
    pub async fn create_or_update(&self, req: &SwimmerRequest) -> Result<(Swimmer, bool)> {
        let UpsertedSwimmer { swimmer, created } =
            sqlx::query_as::<_, UpsertedSwimmer>(&upsert_swimmer_sql())
                .bind(&req.name)
                .bind(req.birth_date)
                .bind(req.gender.as_str())
                .fetch_one(self.pool)
                .await?;

        if created {
            tracing::debug!(swimmer_id = %swimmer.swimmer_id, "Created swimmer");
        } else {
            tracing::debug!(swimmer_id = %swimmer.swimmer_id, "Updated existing swimmer");
        }

        Ok((swimmer, created))
    }
}
