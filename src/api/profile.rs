//! Profile route.
//!
//! Routes:
//! - GET /me - Profile, timestamp and a fact

use axum::{extract::State, routing::get, Json, Router};
use tracing::{error, info, warn};

use crate::models::{timestamp, ProfileResponse};
use crate::{AppState, Result};

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(get_profile))
}

/// Return the configured profile with a fact.
///
/// GET /me
///
/// - fact service answers: 200 with the upstream fact
/// - fact service times out: 504 error payload
/// - any other failure: 200 with the fallback fact
///
/// The timeout and fallback payloads are stamped when the failure is
/// handled, not with the timestamp taken before the fetch.
#[axum::debug_handler]
async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>> {
    info!("GET /me endpoint hit");

    let requested_at = timestamp();

    match state.facts.fetch().await {
        Ok(fact) => Ok(Json(ProfileResponse::success(
            state.config.profile.clone(),
            requested_at,
            fact,
        ))),
        Err(err) if err.is_timeout() => {
            error!(error = %err, "Error in /me endpoint");
            Err(err)
        }
        Err(err) => {
            error!(error = %err, "Error in /me endpoint");
            warn!("Serving fallback fact");
            Ok(Json(ProfileResponse::fallback(state.config.profile.clone())))
        }
    }
}
