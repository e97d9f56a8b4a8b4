//! Fixed-size top-N listing of the most recent articles

use std::sync::Arc;

use crate::domain::{Article, ArticleCatalog};
use crate::error::Result;
use crate::pagination::{clamp_limit, DEFAULT_TOP_N, MAX_TOP_N};

#[derive(Debug, Clone, Copy)]
pub struct LatestArticlesInput {
    pub limit: i64,
}

#[derive(Debug)]
pub struct LatestArticlesOutput {
    pub articles: Vec<Article>,
}

/// Top-N latest listing; no pagination metadata on the output.
#[derive(Clone)]
pub struct LatestArticles {
    source: Arc<dyn ArticleCatalog>,
}

impl LatestArticles {
    pub fn new(source: Arc<dyn ArticleCatalog>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, input: LatestArticlesInput) -> Result<LatestArticlesOutput> {
        let limit = clamp_limit(input.limit, DEFAULT_TOP_N, MAX_TOP_N);

        let articles = self.source.latest_articles(limit).await?;

        Ok(LatestArticlesOutput { articles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::testing::{article, StubCatalog};

    #[tokio::test]
    async fn test_clamps_limit_with_top_n_policy() {
        let source = Arc::new(StubCatalog::with_articles(vec![article("l1")], 1));
        let usecase = LatestArticles::new(source.clone());

        usecase
            .execute(LatestArticlesInput { limit: -1 })
            .await
            .expect("listing succeeds");
        usecase
            .execute(LatestArticlesInput { limit: 21 })
            .await
            .expect("listing succeeds");

        assert_eq!(
            source.recorded_calls(),
            vec!["latest_articles limit=5", "latest_articles limit=20"]
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_unchanged() {
        let source = Arc::new(StubCatalog::failing("failed to get latest articles: boom"));
        let usecase = LatestArticles::new(source);

        let err = usecase
            .execute(LatestArticlesInput { limit: 5 })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to get latest articles: boom");
    }
}
