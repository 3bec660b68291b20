use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use importer::{DatasetImporter, ImportAborted, ImportReport, StorageGateway, SwimmerImport};
use storage::Database;

use crate::error::WebError;

/// A fatal failure (bad swimmer block, swimmer not storable) answers 400;
/// anything else answers 200 and the report tells what was skipped.
#[utoipa::path(
    post,
    path = "/api/data/import",
    request_body = SwimmerImport,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Import ran; the report lists any per-meet errors", body = ImportReport),
        (status = 400, description = "Malformed JSON, or the swimmer could not be imported", body = ImportReport),
        (status = 401, description = "Unauthorized")
    ),
    tag = "import"
)]
pub async fn import_dataset(State(db): State<Database>, body: Bytes) -> Result<Response, WebError> {
    let data: SwimmerImport = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Failed to decode import data: {}", e);
        WebError::BadRequest("Invalid JSON format".to_string())
    })?;

    let importer = DatasetImporter::new(StorageGateway::new(db.pool()));

    match importer.import(&data).await {
        Ok(report) => {
            if report.has_errors() {
                tracing::warn!(
                    meets_created = report.meets_created,
                    times_created = report.times_created,
                    errors = ?report.errors,
                    "Import completed with errors"
                );
            } else {
                tracing::info!(
                    swimmer_id = ?report.swimmer_id,
                    meets_created = report.meets_created,
                    times_created = report.times_created,
                    skipped_times = report.skipped_times,
                    "Import successful"
                );
            }
            Ok(Json(report).into_response())
        }
        Err(ImportAborted { report, source }) => {
            tracing::error!(error = %source, errors = ?report.errors, "Import failed completely");
            Ok((StatusCode::BAD_REQUEST, Json(report)).into_response())
        }
    }
}
