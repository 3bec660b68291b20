use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::time::NewTime;
use crate::error::{Result, StorageError};
use crate::models::SwimTime;

const TIME_COLUMNS: &str =
    "time_id, swimmer_id, meet_id, event, time_ms, event_date, notes, created_at";

pub struct TimeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TimeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a time.
    ///
    /// A swimmer can only hold one time per event and date; a second one
    /// fails with [`StorageError::DuplicateEvent`].
    pub async fn create(&self, time: &NewTime<'_>) -> Result<SwimTime> {
        let duplicate = || StorageError::DuplicateEvent {
            event: time.event.as_str().to_string(),
            event_date: time.event_date,
        };

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM times
                WHERE swimmer_id = $1 AND event = $2 AND event_date = $3
            )
            "#,
        )
        .bind(time.swimmer_id)
        .bind(time.event.as_str())
        .bind(time.event_date)
        .fetch_one(self.pool)
        .await?;

        if exists {
            return Err(duplicate());
        }

        sqlx::query_as::<_, SwimTime>(&format!(
            r#"
            INSERT INTO times (swimmer_id, meet_id, event, time_ms, event_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TIME_COLUMNS}
            "#
        ))
        .bind(time.swimmer_id)
        .bind(time.meet_id)
        .bind(time.event.as_str())
        .bind(time.time_ms)
        .bind(time.event_date)
        .bind(time.notes)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            // Lost a race with a concurrent insert of the same event
            if e.is_unique_violation() {
                duplicate()
            } else {
                e
            }
        })
    }

    /// All times for a swimmer, newest first
    pub async fn list_for_swimmer(&self, swimmer_id: Uuid) -> Result<Vec<SwimTime>> {
        let times = sqlx::query_as::<_, SwimTime>(&format!(
            r#"
            SELECT {TIME_COLUMNS}
            FROM times
            WHERE swimmer_id = $1
            ORDER BY event_date DESC, event
            "#
        ))
        .bind(swimmer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(times)
    }
}
