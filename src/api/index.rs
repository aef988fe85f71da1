//! Index route.
//!
//! Routes:
//! - GET / - Service banner

use axum::{routing::get, Json, Router};

use crate::models::IndexResponse;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
///
/// Always 200; never touches the fact service.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::default())
}
