//! REST handlers
//!
//! Handlers parse and default the raw query parameters, delegate to the
//! usecases, and shape the wire response. Validation beyond presence and
//! shape lives in the usecases.

pub mod articles;
pub mod categories;
pub mod health;
pub mod zenn;

use serde::Deserialize;

/// Query parameters for paginated listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the fixed-size top-N listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}
