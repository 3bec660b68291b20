use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SwimTime {
    pub time_id: Uuid,
    pub swimmer_id: Uuid,
    pub meet_id: Uuid,
    pub event: String,
    pub time_ms: i32,
    pub event_date: chrono::NaiveDate,
    pub notes: String,
    pub created_at: chrono::NaiveDateTime,
}
