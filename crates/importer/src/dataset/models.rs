use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use storage::models::{CourseType, Event, Gender};
use utoipa::ToSchema;

/// One swimmer and their meets, as submitted for import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SwimmerImport {
    pub swimmer: SwimmerData,
    pub meets: Vec<MeetData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SwimmerData {
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `female` or `male`
    pub gender: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MeetData {
    pub name: String,
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    /// `25m` or `50m`
    pub course_type: String,
    pub times: Vec<TimeData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TimeData {
    /// Event code, e.g. `100FR`
    pub event: String,
    /// `MM:SS.HH` or `SS.HH`
    pub time: String,
    pub event_date: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSwimmer {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMeet {
    pub name: String,
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub course_type: CourseType,
    pub times: Vec<ParsedTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTime {
    pub event: Event,
    pub time_ms: i32,
    pub event_date: NaiveDate,
    pub notes: String,
}
