use axum::{Router, middleware, routing::post};
use storage::Database;

use super::handlers::import_dataset;
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/import", post(import_dataset))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
