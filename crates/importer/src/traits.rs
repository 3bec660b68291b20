use uuid::Uuid;

use crate::dataset::models::{ParsedMeet, ParsedSwimmer, ParsedTime};
use crate::error::GatewayError;

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwimmerUpsert {
    pub swimmer_id: Uuid,
    pub was_created: bool,
}

/// The persistence operations a dataset import needs.
///
/// Each call is atomic on its own; nothing spans calls. How a swimmer is
/// matched for update and how duplicate times are detected is up to the
/// implementation, but a duplicate time must come back as
/// [`GatewayError::DuplicateEvent`].
#[async_trait::async_trait]
pub trait ImportGateway: Send + Sync {
    /// Creates the swimmer or updates the matching one in place.
    async fn upsert_swimmer(&self, swimmer: &ParsedSwimmer) -> GatewayResult<SwimmerUpsert>;

    async fn create_meet(&self, meet: &ParsedMeet) -> GatewayResult<Uuid>;

    async fn create_time(
        &self,
        swimmer_id: Uuid,
        meet_id: Uuid,
        time: &ParsedTime,
    ) -> GatewayResult<Uuid>;
}
