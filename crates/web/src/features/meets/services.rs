use sqlx::PgPool;
use storage::{
    dto::{
        meet::{MeetDetailResponse, MeetResponse},
        time::TimeResponse,
    },
    error::Result,
    models::Meet,
    repository::meet::MeetRepository,
};
use uuid::Uuid;

/// List all meets
pub async fn list_meets(pool: &PgPool) -> Result<Vec<Meet>> {
    MeetRepository::new(pool).list().await
}

/// Meet with the times recorded at it
pub async fn get_meet_detailed(pool: &PgPool, id: Uuid) -> Result<MeetDetailResponse> {
    let repo = MeetRepository::new(pool);
    let meet = repo.find_by_id(id).await?;
    let times = repo.list_times(meet.meet_id).await?;

    Ok(MeetDetailResponse {
        meet: MeetResponse::from(meet),
        times: times.into_iter().map(TimeResponse::from).collect(),
    })
}
