use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::meet::{MeetDetailResponse, MeetResponse},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/meets",
    responses(
        (status = 200, description = "List all meets, most recent first", body = Vec<MeetResponse>)
    ),
    tag = "meets"
)]
pub async fn list_meets(State(db): State<Database>) -> Result<Response, WebError> {
    let meets = services::list_meets(db.pool()).await?;

    let response: Vec<MeetResponse> = meets.into_iter().map(MeetResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{id}",
    params(
        ("id" = Uuid, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Meet with its recorded times", body = MeetDetailResponse),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn get_meet(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let meet = services::get_meet_detailed(db.pool(), id).await?;

    Ok(Json(meet).into_response())
}
