use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Event;

/// Values needed to insert a time
#[derive(Debug, Clone)]
pub struct NewTime<'a> {
    pub swimmer_id: Uuid,
    pub meet_id: Uuid,
    pub event: Event,
    pub time_ms: i32,
    pub event_date: NaiveDate,
    pub notes: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeResponse {
    pub time_id: Uuid,
    pub swimmer_id: Uuid,
    pub meet_id: Uuid,
    pub event: String,
    pub time_ms: i32,
    pub event_date: NaiveDate,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl From<crate::models::SwimTime> for TimeResponse {
    fn from(time: crate::models::SwimTime) -> Self {
        Self {
            time_id: time.time_id,
            swimmer_id: time.swimmer_id,
            meet_id: time.meet_id,
            event: time.event,
            time_ms: time.time_ms,
            event_date: time.event_date,
            notes: time.notes,
        }
    }
}
