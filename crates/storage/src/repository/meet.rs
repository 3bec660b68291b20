use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::meet::NewMeet;
use crate::error::{Result, StorageError};
use crate::models::{Meet, SwimTime};

const MEET_COLUMNS: &str =
    "meet_id, name, city, country, start_date, end_date, course_type, created_at";

/// Repository for Meet database operations
pub struct MeetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all meets, most recent first
    pub async fn list(&self) -> Result<Vec<Meet>> {
        let meets = sqlx::query_as::<_, Meet>(&format!(
            "SELECT {MEET_COLUMNS} FROM meets ORDER BY start_date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(meets)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Meet> {
        sqlx::query_as::<_, Meet>(&format!(
            "SELECT {MEET_COLUMNS} FROM meets WHERE meet_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create a new meet
    pub async fn create(&self, meet: &NewMeet<'_>) -> Result<Meet> {
        let created = sqlx::query_as::<_, Meet>(&format!(
            r#"
            INSERT INTO meets (name, city, country, start_date, end_date, course_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MEET_COLUMNS}
            "#
        ))
        .bind(meet.name)
        .bind(meet.city)
        .bind(meet.country)
        .bind(meet.start_date)
        .bind(meet.end_date)
        .bind(meet.course_type.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Times recorded at a meet, in event-date order
    pub async fn list_times(&self, meet_id: Uuid) -> Result<Vec<SwimTime>> {
        let times = sqlx::query_as::<_, SwimTime>(
            r#"
            SELECT time_id, swimmer_id, meet_id, event, time_ms, event_date, notes, created_at
            FROM times
            WHERE meet_id = $1
            ORDER BY event_date, created_at
            "#,
        )
        .bind(meet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(times)
    }
}
