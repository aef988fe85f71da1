//! Static identity record returned on every successful `/me` response.

use serde::{Deserialize, Serialize};

/// Fixed user profile.
///
/// Built once at startup as part of [`crate::Config`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub stack: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            email: "wizard@example.com".to_string(),
            name: "Backend Wizard".to_string(),
            stack: "Rust/Axum".to_string(),
        }
    }
}
