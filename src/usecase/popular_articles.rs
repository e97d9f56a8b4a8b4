//! Fixed-size top-N listing of popular articles

use std::sync::Arc;

use crate::domain::{Article, ArticleCatalog};
use crate::error::Result;
use crate::pagination::{clamp_limit, DEFAULT_TOP_N, MAX_TOP_N};

#[derive(Debug, Clone, Copy)]
pub struct PopularArticlesInput {
    pub limit: i64,
}

#[derive(Debug)]
pub struct PopularArticlesOutput {
    pub articles: Vec<Article>,
}

/// Top-N popular listing; no pagination metadata on the output.
#[derive(Clone)]
pub struct PopularArticles {
    source: Arc<dyn ArticleCatalog>,
}

impl PopularArticles {
    pub fn new(source: Arc<dyn ArticleCatalog>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: PopularArticlesInput) -> Result<PopularArticlesOutput> {
        let limit = clamp_limit(input.limit, DEFAULT_TOP_N, MAX_TOP_N);

        let articles = self.source.popular_articles(limit).await?;

        Ok(PopularArticlesOutput { articles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::testing::{article, StubCatalog};

    #[tokio::test]
    async fn test_non_positive_limit_defaults_to_five() {
        let source = Arc::new(StubCatalog::with_articles(vec![article("p1")], 1));
        let usecase = PopularArticles::new(source.clone());

        let output = usecase
            .execute(PopularArticlesInput { limit: 0 })
            .await
            .expect("listing succeeds");

        assert_eq!(output.articles.len(), 1);
        assert_eq!(source.recorded_calls(), vec!["popular_articles limit=5"]);
    }

    #[tokio::test]
    async fn test_limit_is_capped_at_twenty() {
        let source = Arc::new(StubCatalog::default());
        let usecase = PopularArticles::new(source.clone());

        usecase
            .execute(PopularArticlesInput { limit: 50 })
            .await
            .expect("listing succeeds");

        assert_eq!(source.recorded_calls(), vec!["popular_articles limit=20"]);
    }
}
