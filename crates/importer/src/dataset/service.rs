use tracing::{debug, info, warn};
use uuid::Uuid;

use super::models::{ParsedMeet, SwimmerImport};
use super::report::{ImportReport, MeetTally};
use super::validator::RecordValidator;
use crate::duration::format_duration;
use crate::error::{GatewayError, ImportAborted, ImporterError};
use crate::traits::ImportGateway;

/// Imports one swimmer with all of their meets and times.
///
/// Meets are processed in order, one at a time. Only a bad or unstorable
/// swimmer stops the whole import; a failing meet is reported and skipped,
/// and a failing time ends its own meet only.
pub struct DatasetImporter<G> {
    gateway: G,
}

impl<G: ImportGateway> DatasetImporter<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn import(&self, data: &SwimmerImport) -> Result<ImportReport, ImportAborted> {
        let mut report = ImportReport::default();

        let swimmer = match RecordValidator::validate_swimmer(&data.swimmer) {
            Ok(swimmer) => swimmer,
            Err(e) => return Err(report.abort(ImporterError::SwimmerValidation(e))),
        };

        let upsert = match self.gateway.upsert_swimmer(&swimmer).await {
            Ok(upsert) => upsert,
            Err(e) => return Err(report.abort(ImporterError::SwimmerUpsert(e))),
        };

        info!(
            swimmer_id = %upsert.swimmer_id,
            created = upsert.was_created,
            "Importing {} meet(s) for {}",
            data.meets.len(),
            swimmer.name
        );
        report.attribute_swimmer(upsert.swimmer_id, &swimmer.name);

        for (idx, meet_data) in data.meets.iter().enumerate() {
            let meet = match RecordValidator::validate_meet(meet_data) {
                Ok(meet) => meet,
                Err(e) => {
                    warn!("Skipping meet {} ({}): {}", idx + 1, meet_data.name, e);
                    report.record_error(format!(
                        "Meet {} ({}) validation failed: {}",
                        idx + 1,
                        meet_data.name,
                        e
                    ));
                    continue;
                }
            };

            self.import_meet(upsert.swimmer_id, &meet, &mut report).await;
        }

        let report = report.finish();
        info!(
            "Import finished: {} meet(s), {} time(s), {} skipped, {} error(s)",
            report.meets_created,
            report.times_created,
            report.skipped_times,
            report.errors.len()
        );

        Ok(report)
    }

    async fn import_meet(&self, swimmer_id: Uuid, meet: &ParsedMeet, report: &mut ImportReport) {
        let meet_id = match self.gateway.create_meet(meet).await {
            Ok(id) => id,
            Err(e) => {
                warn!("Failed to create meet {}: {}", meet.name, e);
                report.record_error(format!(
                    "Failed to import meet {}: failed to create meet: {}",
                    meet.name, e
                ));
                return;
            }
        };

        let mut tally = MeetTally::new(meet_id, &meet.name);

        for time in &meet.times {
            match self.gateway.create_time(swimmer_id, meet_id, time).await {
                Ok(_) => tally.times_created += 1,
                Err(GatewayError::DuplicateEvent { event, event_date }) => {
                    debug!("Skipping duplicate {} on {}", event, event_date);
                    tally.times_skipped += 1;
                }
                Err(e) => {
                    warn!(
                        "Stopping meet {} at {} ({}): {}",
                        meet.name,
                        time.event,
                        format_duration(time.time_ms),
                        e
                    );
                    let message = format!(
                        "Failed to import meet {}: failed to create time for event {}: {}",
                        meet.name, time.event, e
                    );
                    report.record_interrupted_meet(tally, message);
                    return;
                }
            }
        }

        debug!(
            meet_id = %meet_id,
            "Meet {}: {} time(s) created, {} duplicate(s)",
            meet.name,
            tally.times_created,
            tally.times_skipped
        );
        report.record_meet(tally);
    }
}

/// Dry run of an import: validates everything and counts what would be
/// written, without touching storage. Duplicates can't be detected here.
pub fn preview(data: &SwimmerImport) -> Result<ImportReport, ImportAborted> {
    let mut report = ImportReport::default();

    let swimmer = match RecordValidator::validate_swimmer(&data.swimmer) {
        Ok(swimmer) => swimmer,
        Err(e) => return Err(report.abort(ImporterError::SwimmerValidation(e))),
    };
    report.swimmer_name = Some(swimmer.name);

    for (idx, meet_data) in data.meets.iter().enumerate() {
        match RecordValidator::validate_meet(meet_data) {
            Ok(meet) => {
                let mut tally = MeetTally::new(Uuid::nil(), &meet.name);
                tally.times_created = meet.times.len();
                report.record_meet(tally);
            }
            Err(e) => report.record_error(format!(
                "Meet {} ({}) validation failed: {}",
                idx + 1,
                meet_data.name,
                e
            )),
        }
    }

    Ok(report.finish())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use storage::models::Event;

    use super::*;
    use crate::dataset::models::{MeetData, ParsedSwimmer, ParsedTime, SwimmerData, TimeData};
    use crate::traits::{GatewayResult, SwimmerUpsert};

    #[derive(Default)]
    struct State {
        swimmers: HashMap<(String, NaiveDate), Uuid>,
        meets: Vec<(Uuid, String)>,
        times: HashSet<(Uuid, Event, NaiveDate)>,
        time_attempts: usize,
    }

    /// In-memory stand-in for the storage collaborators.
    #[derive(Default)]
    struct FakeGateway {
        state: Mutex<State>,
        fail_swimmer: bool,
        fail_meet: Option<String>,
        /// Fail with a non-duplicate error on this (1-based) time attempt.
        fail_time_attempt: Option<usize>,
    }

    impl FakeGateway {
        fn swimmer_count(&self) -> usize {
            self.state.lock().unwrap().swimmers.len()
        }

        fn meet_count(&self) -> usize {
            self.state.lock().unwrap().meets.len()
        }

        fn time_count(&self) -> usize {
            self.state.lock().unwrap().times.len()
        }

        fn time_attempts(&self) -> usize {
            self.state.lock().unwrap().time_attempts
        }
    }

    #[async_trait::async_trait]
    impl ImportGateway for FakeGateway {
        async fn upsert_swimmer(&self, swimmer: &ParsedSwimmer) -> GatewayResult<SwimmerUpsert> {
            if self.fail_swimmer {
                return Err(GatewayError::persistence("connection refused"));
            }
            let mut state = self.state.lock().unwrap();
            let key = (swimmer.name.to_lowercase(), swimmer.birth_date);
            let was_created = !state.swimmers.contains_key(&key);
            let swimmer_id = *state.swimmers.entry(key).or_insert_with(Uuid::new_v4);
            Ok(SwimmerUpsert {
                swimmer_id,
                was_created,
            })
        }

        async fn create_meet(&self, meet: &ParsedMeet) -> GatewayResult<Uuid> {
            if self.fail_meet.as_deref() == Some(meet.name.as_str()) {
                return Err(GatewayError::persistence("meets table is read-only"));
            }
            let id = Uuid::new_v4();
            self.state.lock().unwrap().meets.push((id, meet.name.clone()));
            Ok(id)
        }

        async fn create_time(
            &self,
            swimmer_id: Uuid,
            _meet_id: Uuid,
            time: &ParsedTime,
        ) -> GatewayResult<Uuid> {
            let mut state = self.state.lock().unwrap();
            state.time_attempts += 1;
            if self.fail_time_attempt == Some(state.time_attempts) {
                return Err(GatewayError::persistence("disk full"));
            }
            if !state.times.insert((swimmer_id, time.event, time.event_date)) {
                return Err(GatewayError::DuplicateEvent {
                    event: time.event.to_string(),
                    event_date: time.event_date,
                });
            }
            Ok(Uuid::new_v4())
        }
    }

    fn swimmer() -> SwimmerData {
        SwimmerData {
            name: "Ada Lovelace".to_string(),
            birth_date: "2010-05-14".to_string(),
            gender: "female".to_string(),
        }
    }

    fn time(event: &str, clock: &str, event_date: &str) -> TimeData {
        TimeData {
            event: event.to_string(),
            time: clock.to_string(),
            event_date: event_date.to_string(),
            notes: String::new(),
        }
    }

    fn meet(name: &str, times: Vec<TimeData>) -> MeetData {
        MeetData {
            name: name.to_string(),
            city: "Ottawa".to_string(),
            country: "Canada".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-03".to_string(),
            course_type: "50m".to_string(),
            times,
        }
    }

    fn dataset(meets: Vec<MeetData>) -> SwimmerImport {
        SwimmerImport {
            swimmer: swimmer(),
            meets,
        }
    }

    #[tokio::test]
    async fn test_full_import() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let data = dataset(vec![
            meet(
                "Spring Open",
                vec![
                    time("50FR", "28.45", "2024-03-01"),
                    time("100FR", "1:02.34", "2024-03-02"),
                ],
            ),
            meet("Summer Cup", vec![time("200IM", "2:31.07", "2024-03-03")]),
        ]);

        let report = importer.import(&data).await.unwrap();

        assert!(report.success);
        assert_eq!(report.swimmer_name.as_deref(), Some("Ada Lovelace"));
        assert!(report.swimmer_id.is_some());
        assert_eq!(report.meets_created, 2);
        assert_eq!(report.times_created, 3);
        assert_eq!(report.skipped_times, 0);
        assert!(report.errors.is_empty());
        assert!(report.skipped_reason.is_empty());
        assert_eq!(importer.gateway().time_count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_swimmer_aborts_without_side_effects() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let mut data = dataset(vec![meet(
            "Spring Open",
            vec![time("50FR", "28.45", "2024-03-01")],
        )]);
        data.swimmer.gender = "unknown".to_string();

        let aborted = importer.import(&data).await.unwrap_err();

        assert!(matches!(aborted.source, ImporterError::SwimmerValidation(_)));
        assert!(!aborted.report.success);
        assert_eq!(aborted.report.meets_created, 0);
        assert_eq!(aborted.report.times_created, 0);
        assert_eq!(aborted.report.errors.len(), 1);
        assert!(aborted.report.errors[0].starts_with("Swimmer validation failed: gender"));
        assert!(aborted.report.swimmer_id.is_none());

        let gateway = importer.gateway();
        assert_eq!(gateway.swimmer_count(), 0);
        assert_eq!(gateway.meet_count(), 0);
        assert_eq!(gateway.time_attempts(), 0);
    }

    #[tokio::test]
    async fn test_swimmer_upsert_failure_is_fatal() {
        let importer = DatasetImporter::new(FakeGateway {
            fail_swimmer: true,
            ..Default::default()
        });
        let data = dataset(vec![meet("Spring Open", vec![])]);

        let aborted = importer.import(&data).await.unwrap_err();

        assert!(matches!(aborted.source, ImporterError::SwimmerUpsert(_)));
        assert_eq!(
            aborted.report.errors,
            vec!["Failed to create/update swimmer: connection refused".to_string()]
        );
        assert_eq!(importer.gateway().meet_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_meet_is_skipped() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let mut bad = meet("Broken Meet", vec![]);
        bad.course_type = "33m".to_string();
        let data = dataset(vec![
            meet("First", vec![time("50FR", "28.45", "2024-03-01")]),
            bad,
            meet("Third", vec![time("50BK", "32.10", "2024-03-01")]),
        ]);

        let report = importer.import(&data).await.unwrap();

        assert!(report.success);
        assert_eq!(report.meets_created, 2);
        assert_eq!(report.times_created, 2);
        assert_eq!(
            report.errors,
            vec![
                "Meet 2 (Broken Meet) validation failed: course_type must be '25m' or '50m', got: 33m"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_bad_time_rejects_its_whole_meet() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let data = dataset(vec![meet(
            "Spring Open",
            vec![
                time("50FR", "28.45", "2024-03-01"),
                time("100FR", "1:02.34", "2024-03-09"),
            ],
        )]);

        let report = importer.import(&data).await.unwrap();

        assert!(!report.success);
        assert_eq!(report.meets_created, 0);
        assert_eq!(importer.gateway().meet_count(), 0);
        assert!(report.errors[0].starts_with("Meet 1 (Spring Open) validation failed: time 2"));
    }

    #[tokio::test]
    async fn test_meet_creation_failure_continues_with_next_meet() {
        let importer = DatasetImporter::new(FakeGateway {
            fail_meet: Some("Locked".to_string()),
            ..Default::default()
        });
        let data = dataset(vec![
            meet("Locked", vec![time("50FR", "28.45", "2024-03-01")]),
            meet("Open", vec![time("50FR", "28.10", "2024-03-02")]),
        ]);

        let report = importer.import(&data).await.unwrap();

        assert!(report.success);
        assert_eq!(report.meets_created, 1);
        assert_eq!(report.times_created, 1);
        assert_eq!(
            report.errors,
            vec!["Failed to import meet Locked: failed to create meet: meets table is read-only"
                .to_string()]
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_skipped_not_failed() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let data = dataset(vec![
            meet("Heats", vec![time("100FR", "1:02.34", "2024-03-02")]),
            meet(
                "Finals",
                vec![
                    time("100FR", "1:01.90", "2024-03-02"),
                    time("200FR", "2:15.00", "2024-03-02"),
                ],
            ),
        ]);

        let report = importer.import(&data).await.unwrap();

        assert!(report.success);
        assert!(report.errors.is_empty());
        assert_eq!(report.meets_created, 2);
        assert_eq!(report.times_created, 2);
        assert_eq!(report.skipped_times, 1);
        assert_eq!(report.skipped_reason.len(), 1);
        assert!(report.skipped_reason[0].starts_with("Meet Finals (ID: "));
        assert!(report.skipped_reason[0].ends_with("): 1 duplicate event(s) skipped"));
    }

    #[tokio::test]
    async fn test_reimport_updates_swimmer_and_skips_known_times() {
        let importer = DatasetImporter::new(FakeGateway::default());
        let data = dataset(vec![meet(
            "Spring Open",
            vec![time("50FR", "28.45", "2024-03-01")],
        )]);

        let first = importer.import(&data).await.unwrap();
        let second = importer.import(&data).await.unwrap();

        assert_eq!(first.swimmer_id, second.swimmer_id);
        assert_eq!(importer.gateway().swimmer_count(), 1);
        assert_eq!(second.times_created, 0);
        assert_eq!(second.skipped_times, 1);
        assert_eq!(second.skipped_reason.len(), 1);
        assert!(second.errors.is_empty());
        assert!(second.success);
    }

    #[tokio::test]
    async fn test_time_failure_stops_only_its_meet() {
        let importer = DatasetImporter::new(FakeGateway {
            fail_time_attempt: Some(3),
            ..Default::default()
        });
        let data = dataset(vec![
            meet(
                "Five Events",
                vec![
                    time("50FR", "28.45", "2024-03-01"),
                    time("100FR", "1:02.34", "2024-03-01"),
                    time("200FR", "2:15.00", "2024-03-01"),
                    time("400FR", "4:45.00", "2024-03-02"),
                    time("800FR", "9:50.00", "2024-03-03"),
                ],
            ),
            meet("Next", vec![time("50FL", "30.00", "2024-03-01")]),
        ]);

        let report = importer.import(&data).await.unwrap();

        // two from the first meet, one from the next; the 4th and 5th never run
        assert_eq!(report.times_created, 3);
        assert_eq!(importer.gateway().time_attempts(), 4);
        assert_eq!(report.meets_created, 1);
        assert_eq!(
            report.errors,
            vec![
                "Failed to import meet Five Events: failed to create time for event 200FR: disk full"
                    .to_string()
            ]
        );
        assert!(report.success);
    }

    #[tokio::test]
    async fn test_swimmer_only_import_succeeds() {
        let importer = DatasetImporter::new(FakeGateway::default());

        let report = importer.import(&dataset(vec![])).await.unwrap();

        assert!(report.success);
        assert_eq!(report.meets_created, 0);
        assert_eq!(importer.gateway().swimmer_count(), 1);
    }

    #[tokio::test]
    async fn test_payload_decoded_from_json() {
        let data: SwimmerImport = serde_json::from_str(
            r#"{
                "swimmer": {"name": "Ada Lovelace", "birth_date": "2010-05-14", "gender": "female"},
                "meets": [{
                    "name": "Spring Open",
                    "city": "Ottawa",
                    "country": "Canada",
                    "start_date": "2024-03-01",
                    "end_date": "2024-03-03",
                    "course_type": "25m",
                    "times": [{"event": "50FR", "time": "28.45", "event_date": "2024-03-01"}]
                }]
            }"#,
        )
        .unwrap();
        let importer = DatasetImporter::new(FakeGateway::default());

        let report = importer.import(&data).await.unwrap();

        assert_eq!(report.times_created, 1);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("errors").is_none());
        assert!(json.get("skipped_times").is_none());
        assert_eq!(json["swimmer_name"], "Ada Lovelace");
    }

    #[test]
    fn test_preview_counts_without_storage() {
        let mut bad = meet("Broken", vec![]);
        bad.end_date = "2024-02-01".to_string();
        let data = dataset(vec![
            meet(
                "Spring Open",
                vec![
                    time("50FR", "28.45", "2024-03-01"),
                    time("100FR", "1:02.34", "2024-03-02"),
                ],
            ),
            bad,
        ]);

        let report = preview(&data).unwrap();

        assert!(report.success);
        assert_eq!(report.meets_created, 1);
        assert_eq!(report.times_created, 2);
        assert_eq!(
            report.errors,
            vec!["Meet 2 (Broken) validation failed: end_date cannot be before start_date"
                .to_string()]
        );
    }

    #[test]
    fn test_preview_rejects_invalid_swimmer() {
        let mut data = dataset(vec![]);
        data.swimmer.name.clear();

        let aborted = preview(&data).unwrap_err();
        assert_eq!(
            aborted.report.errors,
            vec!["Swimmer validation failed: swimmer name is required".to_string()]
        );
    }
}
