pub mod dataset;
pub mod duration;
pub mod error;
pub mod gateway;
pub mod traits;

pub use dataset::models::{MeetData, SwimmerData, SwimmerImport, TimeData};
pub use dataset::report::ImportReport;
pub use dataset::service::{DatasetImporter, preview};
pub use dataset::validator::RecordValidator;
pub use duration::{format_duration, parse_duration};
pub use error::{DurationError, GatewayError, ImportAborted, ImporterError, Result, ValidationError};
pub use gateway::StorageGateway;
pub use traits::{ImportGateway, SwimmerUpsert};
