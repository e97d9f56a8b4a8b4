//! List articles from the secondary source, paginated
//!
//! Runs against the minimal [`ArticleReader`] tier, so any source can back
//! it. The secondary API exposes no reliable total count, so pagination is
//! built with `total = 0` and `totalPages` is always reported as 0. Known
//! upstream limitation, preserved deliberately.

use std::sync::Arc;

use crate::domain::{Article, ArticleReader};
use crate::error::Result;
use crate::pagination::{build_pagination, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct ZennArticlesInput {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug)]
pub struct ZennArticlesOutput {
    pub articles: Vec<Article>,
    pub pagination: Pagination,
}

/// Secondary-source listing over the minimal tier
#[derive(Clone)]
pub struct ZennArticles {
    source: Arc<dyn ArticleReader>,
}

impl ZennArticles {
    pub fn new(source: Arc<dyn ArticleReader>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: ZennArticlesInput) -> Result<ZennArticlesOutput> {
        let (limit, offset, pagination) = build_pagination(
            input.page,
            input.limit,
            DEFAULT_PAGE_SIZE,
            MAX_PAGE_SIZE,
            0,
        );

        let articles = self.source.articles(limit, offset).await?;

        Ok(ZennArticlesOutput {
            articles,
            pagination,
        })
    }
}
