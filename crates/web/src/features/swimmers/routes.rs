use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{get_swimmer, list_swimmer_times, list_swimmers, upsert_swimmer};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", put(upsert_swimmer))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_swimmers))
        .route("/:id", get(get_swimmer))
        .route("/:id/times", get(list_swimmer_times))
        .merge(protected)
}
