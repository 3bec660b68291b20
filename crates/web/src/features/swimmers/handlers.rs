use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        swimmer::{SwimmerRequest, SwimmerResponse},
        time::TimeResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/swimmers",
    responses(
        (status = 200, description = "List all swimmers successfully", body = Vec<SwimmerResponse>)
    ),
    tag = "swimmers"
)]
pub async fn list_swimmers(State(db): State<Database>) -> Result<Response, WebError> {
    let swimmers = services::list_swimmers(db.pool()).await?;

    let response: Vec<SwimmerResponse> =
        swimmers.into_iter().map(SwimmerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/swimmers/{id}",
    params(
        ("id" = Uuid, Path, description = "Swimmer ID")
    ),
    responses(
        (status = 200, description = "Swimmer found", body = SwimmerResponse),
        (status = 404, description = "Swimmer not found")
    ),
    tag = "swimmers"
)]
pub async fn get_swimmer(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let swimmer = services::get_swimmer(db.pool(), id).await?;

    Ok(Json(SwimmerResponse::from(swimmer)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/swimmers/{id}/times",
    params(
        ("id" = Uuid, Path, description = "Swimmer ID")
    ),
    responses(
        (status = 200, description = "Every recorded time, newest first", body = Vec<TimeResponse>),
        (status = 404, description = "Swimmer not found")
    ),
    tag = "swimmers"
)]
pub async fn list_swimmer_times(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let times = services::list_swimmer_times(db.pool(), id).await?;

    let response: Vec<TimeResponse> = times.into_iter().map(TimeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/swimmers",
    request_body = SwimmerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Swimmer created", body = SwimmerResponse),
        (status = 200, description = "Existing swimmer updated", body = SwimmerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "swimmers"
)]
pub async fn upsert_swimmer(
    State(db): State<Database>,
    Json(req): Json<SwimmerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (swimmer, created) = services::upsert_swimmer(db.pool(), &req).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(SwimmerResponse::from(swimmer))).into_response())
}
