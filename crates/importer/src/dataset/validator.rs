use super::models::{
    MeetData, ParsedMeet, ParsedSwimmer, ParsedTime, SwimmerData, TimeData,
};
use crate::duration::parse_duration;
use crate::error::ValidationError;
use chrono::NaiveDate;
use storage::models::{CourseType, Event, Gender};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns raw import records into their parsed form. Performs no I/O.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate_swimmer(data: &SwimmerData) -> Result<ParsedSwimmer, ValidationError> {
        if data.name.is_empty() {
            return Err(ValidationError::MissingField("swimmer name"));
        }

        let gender = data
            .gender
            .parse::<Gender>()
            .map_err(|_| ValidationError::InvalidEnum {
                field: "gender",
                expected: "'female' or 'male'",
                value: data.gender.clone(),
            })?;

        let birth_date = parse_date("birth_date", &data.birth_date)?;

        Ok(ParsedSwimmer {
            name: data.name.clone(),
            birth_date,
            gender,
        })
    }

    /// Validates a meet and every time in it, stopping at the first bad time.
    pub fn validate_meet(data: &MeetData) -> Result<ParsedMeet, ValidationError> {
        if data.name.is_empty() {
            return Err(ValidationError::MissingField("meet name"));
        }

        let course_type = data
            .course_type
            .parse::<CourseType>()
            .map_err(|_| ValidationError::InvalidEnum {
                field: "course_type",
                expected: "'25m' or '50m'",
                value: data.course_type.clone(),
            })?;

        let start_date = parse_date("start_date", &data.start_date)?;
        let end_date = parse_date("end_date", &data.end_date)?;

        if end_date < start_date {
            return Err(ValidationError::InvalidRange);
        }

        let times = data
            .times
            .iter()
            .enumerate()
            .map(|(idx, time)| {
                Self::validate_time(time, start_date, end_date).map_err(|e| {
                    ValidationError::Time {
                        position: idx + 1,
                        source: Box::new(e),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedMeet {
            name: data.name.clone(),
            city: data.city.clone(),
            country: data.country.clone(),
            start_date,
            end_date,
            course_type,
            times,
        })
    }

    /// Validates one time against the already-parsed window of its meet.
    pub fn validate_time(
        data: &TimeData,
        meet_start: NaiveDate,
        meet_end: NaiveDate,
    ) -> Result<ParsedTime, ValidationError> {
        if data.event.is_empty() {
            return Err(ValidationError::MissingField("event"));
        }

        let event = data
            .event
            .parse::<Event>()
            .map_err(|_| ValidationError::InvalidEnum {
                field: "event",
                expected: "a known event code",
                value: data.event.clone(),
            })?;

        let time_ms = parse_duration(&data.time)?;

        let event_date = parse_date("event_date", &data.event_date)?;

        if event_date < meet_start || event_date > meet_end {
            return Err(ValidationError::OutOfRange {
                event_date,
                start: meet_start,
                end: meet_end,
            });
        }

        Ok(ParsedTime {
            event,
            time_ms,
            event_date,
            notes: data.notes.clone(),
        })
    }
}

/// Strict `YYYY-MM-DD`; chrono alone would also take `2024-3-2` or `2024-03- 2`.
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
