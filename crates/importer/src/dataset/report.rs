use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ImportAborted, ImporterError};

/// Outcome of one dataset import.
///
/// Messages keep the order in which they happened; counters only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimmer_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimmer_name: Option<String>,
    pub meets_created: usize,
    pub times_created: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub skipped_times: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_reason: Vec<String>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Running counts for the meet currently being imported.
#[derive(Debug, Clone)]
pub(crate) struct MeetTally {
    pub meet_id: Uuid,
    pub meet_name: String,
    pub times_created: usize,
    pub times_skipped: usize,
}

impl MeetTally {
    pub fn new(meet_id: Uuid, meet_name: impl Into<String>) -> Self {
        Self {
            meet_id,
            meet_name: meet_name.into(),
            times_created: 0,
            times_skipped: 0,
        }
    }
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn attribute_swimmer(&mut self, swimmer_id: Uuid, name: impl Into<String>) {
        self.swimmer_id = Some(swimmer_id);
        self.swimmer_name = Some(name.into());
    }

    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// A meet whose times were all attempted.
    pub(crate) fn record_meet(&mut self, tally: MeetTally) {
        self.times_created += tally.times_created;
        self.skipped_times += tally.times_skipped;

        if tally.times_skipped > 0 {
            self.skipped_reason.push(format!(
                "Meet {} (ID: {}): {} duplicate event(s) skipped",
                tally.meet_name, tally.meet_id, tally.times_skipped
            ));
        }

        self.meets_created += 1;
    }

    /// A meet cut short by a failed time. What it already stored still counts.
    pub(crate) fn record_interrupted_meet(&mut self, tally: MeetTally, message: impl Into<String>) {
        self.times_created += tally.times_created;
        self.skipped_times += tally.times_skipped;
        self.record_error(message);
    }

    /// Settles the verdict: nothing went wrong, or at least one meet landed.
    pub(crate) fn finish(mut self) -> Self {
        self.success = self.errors.is_empty() || self.meets_created > 0;
        self
    }

    pub(crate) fn abort(mut self, error: ImporterError) -> ImportAborted {
        self.record_error(error.to_string());
        self.success = false;
        ImportAborted {
            report: self,
            source: error,
        }
    }
}
