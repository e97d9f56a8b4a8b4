//! Fetch a single article by its content id

use std::sync::Arc;

use crate::domain::{Article, ArticleCatalog};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct GetArticleInput {
    pub id: String,
}

#[derive(Debug)]
pub struct GetArticleOutput {
    pub article: Article,
}

/// Single-article lookup over the wide-tier source
///
/// Id emptiness is validated at the delivery boundary; this operation
/// passes the id through as-is.
#[derive(Clone)]
pub struct GetArticle {
    source: Arc<dyn ArticleCatalog>,
}

impl GetArticle {
    pub fn new(source: Arc<dyn ArticleCatalog>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: GetArticleInput) -> Result<GetArticleOutput> {
        let article = self.source.article_by_id(&input.id).await?;

        Ok(GetArticleOutput { article })
    }
}
