//! Capability tiers implemented by the upstream content sources
//!
//! Sources come in two tiers. [`ArticleReader`] is the minimal contract —
//! fetch one page of articles — and is all the secondary source can do.
//! [`ArticleCatalog`] extends it with lookup, filtering, ordering, and
//! counting, and is only implemented by the primary CMS. Operations that
//! need the wide tier are typed against `ArticleCatalog`, so routing a
//! wide-tier request to a minimal-tier source is a compile error rather
//! than a runtime failure.

use async_trait::async_trait;

use crate::domain::article::{Article, Category};
use crate::error::Result;

/// Minimal listing capability, satisfied by every content source.
#[async_trait]
pub trait ArticleReader: Send + Sync {
    /// Fetch one page of articles. Every call issues exactly one outbound
    /// request; errors propagate to the caller unchanged, with no retry.
    async fn articles(&self, limit: i64, offset: i64) -> Result<Vec<Article>>;
}

/// Extended read capabilities provided only by the primary CMS.
#[async_trait]
pub trait ArticleCatalog: ArticleReader {
    /// Fetch a single article by its content id.
    async fn article_by_id(&self, id: &str) -> Result<Article>;

    /// Fetch one page of articles tagged with the given category slug.
    async fn articles_by_category(
        &self,
        category_slug: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>>;

    /// Fetch the top `limit` popular articles.
    async fn popular_articles(&self, limit: i64) -> Result<Vec<Article>>;

    /// Fetch the `limit` most recently created articles.
    async fn latest_articles(&self, limit: i64) -> Result<Vec<Article>>;

    /// Total number of articles.
    async fn count_articles(&self) -> Result<i64>;

    /// Number of articles tagged with the given category slug.
    async fn count_articles_by_category(&self, category_slug: &str) -> Result<i64>;
}

/// Category listing, provided only by the primary CMS.
#[async_trait]
pub trait CategoryReader: Send + Sync {
    /// Fetch all categories.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Fetch a single category by slug.
    async fn category_by_slug(&self, slug: &str) -> Result<Category>;
}
