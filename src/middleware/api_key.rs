//! Shared-secret API key check
//!
//! Every non-health route requires the configured secret in the
//! `X-API-Key` header. Plain equality against the value loaded at startup;
//! there is no key store and no rotation.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::Error;
use crate::state::AppState;

/// Header carrying the inbound shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests whose `X-API-Key` header is missing or wrong.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if provided.is_empty() {
        return Error::Unauthorized("missing API key".to_string()).into_response();
    }
    if provided != state.config.auth.api_key {
        return Error::Unauthorized("invalid API key".to_string()).into_response();
    }

    next.run(request).await
}
