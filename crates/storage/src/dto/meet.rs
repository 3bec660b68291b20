use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::time::TimeResponse;
use crate::models::CourseType;

/// Values needed to insert a meet
#[derive(Debug, Clone)]
pub struct NewMeet<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_type: CourseType,
}

/// Response containing meet details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeetResponse {
    pub meet_id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_type: String,
    pub created_at: NaiveDateTime,
}

/// Meet together with every time recorded at it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeetDetailResponse {
    #[serde(flatten)]
    pub meet: MeetResponse,
    pub times: Vec<TimeResponse>,
}

impl From<crate::models::Meet> for MeetResponse {
    fn from(meet: crate::models::Meet) -> Self {
        Self {
            meet_id: meet.meet_id,
            name: meet.name,
            city: meet.city,
            country: meet.country,
            start_date: meet.start_date,
            end_date: meet.end_date,
            course_type: meet.course_type,
            created_at: meet.created_at,
        }
    }
}
