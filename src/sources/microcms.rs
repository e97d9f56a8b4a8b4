//! Primary content source: a microCMS-style headless CMS
//!
//! The CMS exposes named collections (`blog` for articles, `categories`)
//! with list and get operations. Lists accept `limit`, `offset`, `filters`
//! (`field[equals]value` syntax), and `orders` (`-field` for descending).
//! Counting is a list call with `limit=0`, reading `totalCount` from the
//! envelope. Every request authenticates with the `X-MICROCMS-API-KEY`
//! header.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::MicroCmsConfig;
use crate::domain::{Article, ArticleCatalog, ArticleReader, Category, CategoryReader};
use crate::error::{Error, Result};

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Articles collection name
const BLOG_ENDPOINT: &str = "blog";
/// Categories collection name
const CATEGORIES_ENDPOINT: &str = "categories";

/// Thin HTTP client for the CMS content API
#[derive(Debug, Clone)]
pub struct MicroCmsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Query parameters accepted by the CMS list endpoint
#[derive(Debug, Clone, Default, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<String>,
}

/// List envelope returned by the CMS
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse<T> {
    contents: Vec<T>,
    total_count: i64,
}

impl MicroCmsClient {
    /// Build a client from configuration. The base URL is derived from the
    /// service id unless explicitly overridden.
    pub fn new(config: &MicroCmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        let base_url = config.base_url.clone().unwrap_or_else(|| {
            format!("https://{}.microcms.io/api/v1", config.service_id)
        });

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &ListQuery,
    ) -> std::result::Result<ListResponse<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        self.fetch(self.http.get(url).query(query)).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        content_id: &str,
    ) -> std::result::Result<T, FetchError> {
        let url = format!("{}/{}/{}", self.base_url, endpoint, content_id);
        self.fetch(self.http.get(url)).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<T, FetchError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().await.map_err(FetchError::Decode)
    }
}

/// Failure modes of a single CMS call, before operation context is attached
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("content API returned status {0}")]
    Status(StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),
}

/// Article record as the CMS returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleContent {
    id: String,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<CategoryContent>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Category record as the CMS returns it
#[derive(Debug, Deserialize)]
struct CategoryContent {
    id: String,
    name: String,
}

impl From<ArticleContent> for Article {
    fn from(content: ArticleContent) -> Self {
        Self {
            id: content.id,
            title: content.title,
            image: content.image,
            category: content
                .category
                .map(Category::from)
                .unwrap_or_default(),
            description: content.description,
            body: content.body,
            published_at: content.published_at.unwrap_or(content.created_at),
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

impl From<CategoryContent> for Category {
    fn from(content: CategoryContent) -> Self {
        Self {
            slug: content.id,
            name: content.name,
        }
    }
}

/// Wide-tier article source backed by the CMS `blog` collection
#[derive(Debug, Clone)]
pub struct MicroCmsArticleSource {
    client: MicroCmsClient,
}

impl MicroCmsArticleSource {
    pub fn new(client: MicroCmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleReader for MicroCmsArticleSource {
    async fn articles(&self, limit: i64, offset: i64) -> Result<Vec<Article>> {
        let query = ListQuery {
            limit: Some(limit),
            offset: Some(offset),
            ..ListQuery::default()
        };

        let res: ListResponse<ArticleContent> = self
            .client
            .list(BLOG_ENDPOINT, &query)
            .await
            .map_err(|e| Error::upstream("failed to get articles", e))?;

        Ok(res.contents.into_iter().map(Article::from).collect())
    }
}

#[async_trait]
impl ArticleCatalog for MicroCmsArticleSource {
    async fn article_by_id(&self, id: &str) -> Result<Article> {
        let content: ArticleContent = self
            .client
            .get(BLOG_ENDPOINT, id)
            .await
            .map_err(|e| Error::upstream("failed to get article by ID", e))?;

        Ok(Article::from(content))
    }

    async fn articles_by_category(
        &self,
        category_slug: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>> {
        let query = ListQuery {
            limit: Some(limit),
            offset: Some(offset),
            filters: Some(format!("category[equals]{category_slug}")),
            ..ListQuery::default()
        };

        let res: ListResponse<ArticleContent> = self
            .client
            .list(BLOG_ENDPOINT, &query)
            .await
            .map_err(|e| Error::upstream("failed to get articles by category", e))?;

        Ok(res.contents.into_iter().map(Article::from).collect())
    }

    async fn popular_articles(&self, limit: i64) -> Result<Vec<Article>> {
        // The CMS carries no view counter; the default list order stands in
        // for popularity.
        self.articles(limit, 0).await
    }

    async fn latest_articles(&self, limit: i64) -> Result<Vec<Article>> {
        let query = ListQuery {
            limit: Some(limit),
            offset: Some(0),
            orders: Some("-createdAt".to_string()),
            ..ListQuery::default()
        };

        let res: ListResponse<ArticleContent> = self
            .client
            .list(BLOG_ENDPOINT, &query)
            .await
            .map_err(|e| Error::upstream("failed to get latest articles", e))?;

        Ok(res.contents.into_iter().map(Article::from).collect())
    }

    async fn count_articles(&self) -> Result<i64> {
        let query = ListQuery {
            limit: Some(0),
            ..ListQuery::default()
        };

        let res: ListResponse<ArticleContent> = self
            .client
            .list(BLOG_ENDPOINT, &query)
            .await
            .map_err(|e| Error::upstream("failed to count articles", e))?;

        Ok(res.total_count)
    }

    async fn count_articles_by_category(&self, category_slug: &str) -> Result<i64> {
        let query = ListQuery {
            limit: Some(0),
            filters: Some(format!("category[equals]{category_slug}")),
            ..ListQuery::default()
        };

        let res: ListResponse<ArticleContent> = self
            .client
            .list(BLOG_ENDPOINT, &query)
            .await
            .map_err(|e| Error::upstream("failed to count articles by category", e))?;

        Ok(res.total_count)
    }
}

/// Category source backed by the CMS `categories` collection
#[derive(Debug, Clone)]
pub struct MicroCmsCategorySource {
    client: MicroCmsClient,
}

impl MicroCmsCategorySource {
    pub fn new(client: MicroCmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryReader for MicroCmsCategorySource {
    async fn categories(&self) -> Result<Vec<Category>> {
        let res: ListResponse<CategoryContent> = self
            .client
            .list(CATEGORIES_ENDPOINT, &ListQuery::default())
            .await
            .map_err(|e| Error::upstream("failed to get categories", e))?;

        Ok(res.contents.into_iter().map(Category::from).collect())
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Category> {
        let content: CategoryContent = self
            .client
            .get(CATEGORIES_ENDPOINT, slug)
            .await
            .map_err(|e| Error::upstream("failed to get category by slug", e))?;

        Ok(Category::from(content))
    }
}
