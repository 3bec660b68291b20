use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Meet {
    pub meet_id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub course_type: String,
    pub created_at: chrono::NaiveDateTime,
}
