//! Secondary content source: the public Zenn article API
//!
//! Unauthenticated, minimal-tier only: a flat listing of one author's
//! articles, paginated with a 1-based `page` parameter derived from
//! `offset / limit + 1`. The mapping to [`Article`] is lossy by design —
//! the API exposes no body text, so the body is empty, the description is
//! synthesized from the numeric id, the emoji is folded into the title, and
//! every article carries the fixed synthetic `zenn` category.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

use crate::config::ZennConfig;
use crate::domain::{Article, ArticleReader, Category};
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal-tier article source backed by the Zenn public API
#[derive(Debug, Clone)]
pub struct ZennArticleSource {
    http: reqwest::Client,
    base_url: String,
    username: String,
}

/// Article record as the Zenn API returns it (unused fields omitted)
#[derive(Debug, Deserialize)]
struct ZennArticle {
    id: i64,
    title: String,
    slug: String,
    emoji: String,
    published_at: DateTime<Utc>,
    #[serde(rename = "body_updated_at")]
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ZennListResponse {
    articles: Vec<ZennArticle>,
}

impl ZennArticleSource {
    pub fn new(config: &ZennConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
        })
    }
}

#[async_trait]
impl ArticleReader for ZennArticleSource {
    async fn articles(&self, limit: i64, offset: i64) -> Result<Vec<Article>> {
        if limit <= 0 {
            return Err(Error::BadRequest(
                "limit must be greater than 0".to_string(),
            ));
        }
        let page = offset / limit + 1;

        let url = format!("{}/articles", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[
                ("username", self.username.as_str()),
                ("order", "latest"),
                ("page", &page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::upstream("failed to fetch articles from Zenn", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "zenn API returned status {}",
                status.as_u16()
            )));
        }

        let body: ZennListResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream("failed to decode Zenn response", e))?;

        Ok(body.articles.into_iter().map(Article::from).collect())
    }
}

impl From<ZennArticle> for Article {
    fn from(zenn: ZennArticle) -> Self {
        Self {
            id: zenn.slug,
            title: format!("{}{}", zenn.emoji, zenn.title),
            image: None,
            category: Category::zenn(),
            description: format!("Zenn記事 - {}", zenn.id),
            body: String::new(),
            published_at: zenn.published_at,
            created_at: zenn.published_at,
            updated_at: zenn.updated_at,
        }
    }
}
