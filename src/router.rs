//! Route table
//!
//! The health probe is public; everything under `/api/v1` sits behind the
//! shared-secret API key check.

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/articles", get(handlers::articles::list_articles))
        .route("/articles/popular", get(handlers::articles::popular_articles))
        .route("/articles/latest", get(handlers::articles::latest_articles))
        .route("/articles/{id}", get(handlers::articles::get_article))
        .route("/categories", get(handlers::categories::list_categories))
        .route(
            "/categories/{slug}/articles",
            get(handlers::articles::articles_by_category),
        )
        .route("/zenn/articles", get(handlers::zenn::zenn_articles))
        .layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1", api)
        .with_state(state)
}
