//! Application state.
//!
//! Contains the shared, read-only state that is passed to all handlers.

use std::sync::Arc;

use crate::services::FactService;
use crate::{Config, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration, including the served profile.
    pub config: Arc<Config>,
    /// Fact service client.
    pub facts: Arc<FactService>,
}

impl AppState {
    /// Create the application state from a loaded configuration.
    pub fn new(config: Config) -> Result<Self> {
        let facts = Arc::new(FactService::new(&config.facts)?);

        Ok(Self {
            config: Arc::new(config),
            facts,
        })
    }
}
