use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_meet, list_meets};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_meets))
        .route("/:id", get(get_meet))
}
