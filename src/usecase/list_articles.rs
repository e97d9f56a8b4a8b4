//! List all articles from the primary source, paginated

use std::sync::Arc;

use crate::domain::{Article, ArticleCatalog};
use crate::error::Result;
use crate::pagination::{build_pagination, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct ListArticlesInput {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug)]
pub struct ListArticlesOutput {
    pub articles: Vec<Article>,
    pub pagination: Pagination,
}

/// General article listing over the wide-tier source
#[derive(Clone)]
pub struct ListArticles {
    source: Arc<dyn ArticleCatalog>,
}

impl ListArticles {
    pub fn new(source: Arc<dyn ArticleCatalog>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: ListArticlesInput) -> Result<ListArticlesOutput> {
        // The count is needed before the page can be described
        let total = self.source.count_articles().await?;

        let (limit, offset, pagination) = build_pagination(
            input.page,
            input.limit,
            DEFAULT_PAGE_SIZE,
            MAX_PAGE_SIZE,
            total,
        );

        let articles = self.source.articles(limit, offset).await?;

        Ok(ListArticlesOutput {
            articles,
            pagination,
        })
    }
}
