use chrono::NaiveDate;
use storage::error::StorageError;
use thiserror::Error;

use crate::dataset::report::ImportReport;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Swimmer validation failed: {0}")]
    SwimmerValidation(#[source] ValidationError),

    #[error("Failed to create/update swimmer: {0}")]
    SwimmerUpsert(#[source] GatewayError),
}

/// Race-clock token that could not be turned into milliseconds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("malformed time '{0}' (expected MM:SS.HH or SS.HH)")]
    Malformed(String),

    #[error("time must be positive: {0}")]
    NonPositive(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be {expected}, got: {value}")]
    InvalidEnum {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid {field} format (expected YYYY-MM-DD): {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("end_date cannot be before start_date")]
    InvalidRange,

    #[error("invalid time: {0}")]
    InvalidDuration(#[from] DurationError),

    #[error("event_date {event_date} is outside meet date range ({start} to {end})")]
    OutOfRange {
        event_date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("time {position} validation failed: {source}")]
    Time {
        position: usize,
        source: Box<ValidationError>,
    },
}

/// Failure reported by the persistence collaborators.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The swimmer already holds a time for this event on this date.
    #[error("DUPLICATE_EVENT: {event} already recorded on {event_date}")]
    DuplicateEvent { event: String, event_date: NaiveDate },

    #[error("{0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    pub fn persistence(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Persistence(error.into())
    }

    pub fn is_duplicate_event(&self) -> bool {
        matches!(self, Self::DuplicateEvent { .. })
    }
}

impl From<StorageError> for GatewayError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::DuplicateEvent { event, event_date } => {
                Self::DuplicateEvent { event, event_date }
            }
            other => Self::persistence(other),
        }
    }
}

/// An import stopped before any meet was processed.
///
/// Carries the report built so far so callers can still render it.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct ImportAborted {
    pub report: ImportReport,
    pub source: ImporterError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_duplicate_maps_to_duplicate_event() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = GatewayError::from(StorageError::DuplicateEvent {
            event: "50FL".to_string(),
            event_date: date,
        });
        assert!(err.is_duplicate_event());
    }

    #[test]
    fn test_other_storage_errors_are_opaque() {
        let err = GatewayError::from(StorageError::NotFound);
        assert!(!err.is_duplicate_event());
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_nested_time_error_message() {
        let err = ValidationError::Time {
            position: 3,
            source: Box::new(ValidationError::MissingField("event")),
        };
        assert_eq!(err.to_string(), "time 3 validation failed: event is required");
    }
}
