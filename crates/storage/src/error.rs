use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("DUPLICATE_EVENT: {event} already recorded on {event_date}")]
    DuplicateEvent { event: String, event_date: NaiveDate },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Returned when a code column or payload field holds a value outside its fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_duplicate_event(&self) -> bool {
        matches!(self, StorageError::DuplicateEvent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_event_is_recognizable() {
        let err = StorageError::DuplicateEvent {
            event: "100FR".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        };
        assert!(err.is_duplicate_event());
        assert!(!err.is_unique_violation());
        assert_eq!(
            err.to_string(),
            "DUPLICATE_EVENT: 100FR already recorded on 2024-03-02"
        );
    }

    #[test]
    fn test_not_found_is_not_duplicate() {
        assert!(!StorageError::NotFound.is_duplicate_event());
        assert!(!StorageError::NotFound.is_unique_violation());
    }
}
