//! Service layer for the profile API.
//!
//! Contains external service integrations:
//! - Facts (single timeout-bounded call to the fact service)

mod facts;

pub use facts::FactService;
