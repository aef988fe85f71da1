//! Data models for the profile API.
//!
//! Defines the profile record and the response envelope returned
//! by the HTTP handlers.

mod profile;
mod response;

pub use profile::*;
pub use response::*;

use chrono::{SecondsFormat, Utc};

/// Current UTC timestamp as ISO-8601 with millisecond precision,
/// e.g. `2025-10-18T14:30:00.000Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
