//! API routes.
//!
//! Route structure:
//! - GET / - Service banner and endpoint index
//! - GET /me - Profile with a fact from the fact service

mod index;
mod profile;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Largest accepted request body.
pub const MAX_BODY_SIZE: usize = 100 * 1024;

/// Build the API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(index::routes())
        .merge(profile::routes())
}

/// Build the complete application with middleware and state attached.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Cors needs a `Default` inner body, so the limit sits outside it.
                .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
