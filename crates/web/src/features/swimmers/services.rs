use sqlx::PgPool;
use storage::{
    dto::swimmer::SwimmerRequest,
    error::Result,
    models::{SwimTime, Swimmer},
    repository::{swimmer::SwimmerRepository, time::TimeRepository},
};
use uuid::Uuid;

/// List all swimmers
pub async fn list_swimmers(pool: &PgPool) -> Result<Vec<Swimmer>> {
    SwimmerRepository::new(pool).list().await
}

pub async fn get_swimmer(pool: &PgPool, id: Uuid) -> Result<Swimmer> {
    SwimmerRepository::new(pool).find_by_id(id).await
}

/// Times for an existing swimmer; unknown swimmers are `NotFound`
pub async fn list_swimmer_times(pool: &PgPool, id: Uuid) -> Result<Vec<SwimTime>> {
    let swimmer = SwimmerRepository::new(pool).find_by_id(id).await?;
    TimeRepository::new(pool)
        .list_for_swimmer(swimmer.swimmer_id)
        .await
}

/// Create or update a swimmer profile
pub async fn upsert_swimmer(pool: &PgPool, request: &SwimmerRequest) -> Result<(Swimmer, bool)> {
    SwimmerRepository::new(pool).create_or_update(request).await
}
