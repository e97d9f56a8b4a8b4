//! List articles tagged with a category slug, paginated

use std::sync::Arc;

use crate::domain::{Article, ArticleCatalog};
use crate::error::Result;
use crate::pagination::{build_pagination, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct ArticlesByCategoryInput {
    pub category_slug: String,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug)]
pub struct ArticlesByCategoryOutput {
    pub articles: Vec<Article>,
    pub pagination: Pagination,
}

/// Category-filtered listing over the wide-tier source
///
/// Slug emptiness is validated at the delivery boundary.
#[derive(Clone)]
pub struct ArticlesByCategory {
    source: Arc<dyn ArticleCatalog>,
}

impl ArticlesByCategory {
    pub fn new(source: Arc<dyn ArticleCatalog>) -> Self {
        Self { source }
    }

    pub async fn execute(
        &self,
        input: ArticlesByCategoryInput,
    ) -> Result<ArticlesByCategoryOutput> {
        let total = self
            .source
            .count_articles_by_category(&input.category_slug)
            .await?;

        let (limit, offset, pagination) = build_pagination(
            input.page,
            input.limit,
            DEFAULT_PAGE_SIZE,
            MAX_PAGE_SIZE,
            total,
        );

        let articles = self
            .source
            .articles_by_category(&input.category_slug, limit, offset)
            .await?;

        Ok(ArticlesByCategoryOutput {
            articles,
            pagination,
        })
    }
}
