use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Gender;

/// Response containing swimmer profile information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwimmerResponse {
    pub swimmer_id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Create-or-update payload for a swimmer profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SwimmerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub birth_date: NaiveDate,

    pub gender: Gender,
}

impl From<crate::models::Swimmer> for SwimmerResponse {
    fn from(swimmer: crate::models::Swimmer) -> Self {
        Self {
            swimmer_id: swimmer.swimmer_id,
            name: swimmer.name,
            birth_date: swimmer.birth_date,
            gender: swimmer.gender,
            created_at: swimmer.created_at,
            updated_at: swimmer.updated_at,
        }
    }
}
