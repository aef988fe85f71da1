//! Response envelope for the profile endpoint.
//!
//! Success responses carry `user`, `timestamp` and `fact`; error responses
//! carry `message` and `timestamp` only. Absent fields are omitted from the
//! JSON rather than serialized as `null`.

use serde::{Deserialize, Serialize};

use super::{timestamp, UserProfile};

/// Fact served when the fact service fails for any reason other than a timeout.
pub const FALLBACK_FACT: &str =
    "Cats sleep 70% of their lives. (Fallback fact - external API unavailable)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body of `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProfileResponse {
    /// Success payload stamped with a caller-supplied timestamp.
    pub fn success(user: UserProfile, timestamp: String, fact: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            user: Some(user),
            timestamp,
            fact: Some(fact.into()),
            message: None,
        }
    }

    /// Success payload carrying [`FALLBACK_FACT`], stamped now.
    pub fn fallback(user: UserProfile) -> Self {
        Self::success(user, timestamp(), FALLBACK_FACT)
    }

    /// Error payload, stamped now.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            user: None,
            timestamp: timestamp(),
            fact: None,
            message: Some(message.into()),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub profile: String,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            message: "Backend Wizards Stage 0 API".to_string(),
            endpoints: Endpoints {
                profile: "/me".to_string(),
            },
            status: "running".to_string(),
        }
    }
}
