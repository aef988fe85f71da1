//! Configuration management.
//!
//! Loads configuration from environment variables (and an optional `.env`
//! file). The resulting [`Config`] is built once at startup and shared
//! read-only through [`crate::AppState`].

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::UserProfile;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Fact service queried by `GET /me`.
pub const DEFAULT_FACTS_URL: &str = "https://catfact.ninja/fact";

/// Upper bound on a single fact request.
pub const DEFAULT_FACTS_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub profile: UserProfile,
    pub facts: FactsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct FactsConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FACTS_URL.to_string(),
            timeout: DEFAULT_FACTS_TIMEOUT,
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Only `PORT` is read; everything else is fixed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: parse_port(env::var("PORT").ok().as_deref())?,
                ..ServerConfig::default()
            },
            ..Self::default()
        })
    }
}

impl ServerConfig {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid listen address: {}", e)))
    }
}

/// Parse a `PORT` value, falling back to [`DEFAULT_PORT`] when unset or blank.
fn parse_port(value: Option<&str>) -> Result<u16> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("Invalid PORT: {}", raw))),
    }
}
