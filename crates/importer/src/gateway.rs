use sqlx::PgPool;
use storage::dto::meet::NewMeet;
use storage::dto::swimmer::SwimmerRequest;
use storage::dto::time::NewTime;
use storage::repository::{
    meet::MeetRepository, swimmer::SwimmerRepository, time::TimeRepository,
};
use uuid::Uuid;

use crate::dataset::models::{ParsedMeet, ParsedSwimmer, ParsedTime};
use crate::traits::{GatewayResult, ImportGateway, SwimmerUpsert};

/// [`ImportGateway`] backed by the Postgres repositories.
pub struct StorageGateway<'a> {
    pool: &'a PgPool,
}

impl<'a> StorageGateway<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ImportGateway for StorageGateway<'_> {
    async fn upsert_swimmer(&self, swimmer: &ParsedSwimmer) -> GatewayResult<SwimmerUpsert> {
        let request = SwimmerRequest {
            name: swimmer.name.clone(),
            birth_date: swimmer.birth_date,
            gender: swimmer.gender,
        };

        let (stored, was_created) = SwimmerRepository::new(self.pool)
            .create_or_update(&request)
            .await?;

        Ok(SwimmerUpsert {
            swimmer_id: stored.swimmer_id,
            was_created,
        })
    }

    async fn create_meet(&self, meet: &ParsedMeet) -> GatewayResult<Uuid> {
        let created = MeetRepository::new(self.pool)
            .create(&NewMeet {
                name: &meet.name,
                city: &meet.city,
                country: &meet.country,
                start_date: meet.start_date,
                end_date: meet.end_date,
                course_type: meet.course_type,
            })
            .await?;

        Ok(created.meet_id)
    }

    async fn create_time(
        &self,
        swimmer_id: Uuid,
        meet_id: Uuid,
        time: &ParsedTime,
    ) -> GatewayResult<Uuid> {
        let created = TimeRepository::new(self.pool)
            .create(&NewTime {
                swimmer_id,
                meet_id,
                event: time.event,
                time_ms: time.time_ms,
                event_date: time.event_date,
                notes: &time.notes,
            })
            .await?;

        Ok(created.time_id)
    }
}
