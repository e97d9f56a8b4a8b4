//! blog-api: a read-only REST API aggregating blog content
//!
//! The service fronts two upstream content sources — an authenticated
//! headless CMS with full read capabilities and an unauthenticated public
//! article API with a flat listing — and exposes them through a uniform
//! interface with pagination, category filtering, and shared-secret
//! API-key authentication.
//!
//! Layering, inside out:
//! - [`pagination`]: the pure clamping and offset arithmetic every
//!   paginated operation shares
//! - [`domain`]: entities and the capability-tier traits the sources
//!   implement
//! - [`usecase`]: one read operation per endpoint, composed from the
//!   policy and the traits
//! - [`sources`]: reqwest clients for the two upstream APIs
//! - [`handlers`], [`middleware`], [`router`], [`server`]: the axum
//!   delivery layer

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod pagination;
pub mod presenter;
pub mod router;
pub mod server;
pub mod sources;
pub mod state;
pub mod usecase;

pub use config::Config;
pub use error::{Error, ErrorResponse, Result};
pub use router::build_router;
pub use server::Server;
pub use state::AppState;
