//! Wire-format types and conversions from domain entities
//!
//! Purely structural: no business logic lives here. Pagination fields are
//! emitted as nullable values to match an API contract where pagination may
//! be entirely absent (popular/latest responses omit it).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Article, Category};
use crate::pagination::Pagination;

/// Article as serialized on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: CategoryDto,
    pub description: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category as serialized on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub slug: String,
    pub name: String,
}

/// Pagination metadata as serialized on the wire
///
/// Always fully populated when present; the fields are optional only to
/// match the published contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: Option<i64>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub total_pages: Option<i64>,
}

/// Response body for article list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

/// Response body for the single-article endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

/// Response body for the category list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryDto>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            image: article.image.clone(),
            category: CategoryDto::from(&article.category),
            description: article.description.clone(),
            body: article.body.clone(),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.clone(),
            name: category.name.clone(),
        }
    }
}

impl From<Pagination> for PaginationDto {
    fn from(pagination: Pagination) -> Self {
        Self {
            total: Some(pagination.total),
            page: Some(pagination.page),
            limit: Some(pagination.limit),
            total_pages: Some(pagination.total_pages),
        }
    }
}

/// Convert a batch of articles for a list response.
#[must_use]
pub fn articles_to_dto(articles: &[Article]) -> Vec<ArticleDto> {
    articles.iter().map(ArticleDto::from).collect()
}

/// Convert a batch of categories for a list response.
#[must_use]
pub fn categories_to_dto(categories: &[Category]) -> Vec<CategoryDto> {
    categories.iter().map(CategoryDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article() -> Article {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        Article {
            id: "abc123".to_string(),
            title: "Hello".to_string(),
            image: Some("https://images.example/a.png".to_string()),
            category: Category {
                slug: "technology".to_string(),
                name: "Technology".to_string(),
            },
            description: "intro".to_string(),
            body: "full text".to_string(),
            published_at: at,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_article_conversion_is_structural() {
        let dto = ArticleDto::from(&article());
        assert_eq!(dto.id, "abc123");
        assert_eq!(dto.category.slug, "technology");
        assert_eq!(dto.body, "full text");
    }

    #[test]
    fn test_pagination_conversion_populates_every_field() {
        let dto = PaginationDto::from(Pagination::new(25, 1, 10));
        assert_eq!(dto.total, Some(25));
        assert_eq!(dto.page, Some(1));
        assert_eq!(dto.limit, Some(10));
        assert_eq!(dto.total_pages, Some(3));
    }

    #[test]
    fn test_articles_response_omits_absent_pagination() {
        let response = ArticlesResponse {
            articles: vec![ArticleDto::from(&article())],
            pagination: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(ArticleDto::from(&article())).unwrap();
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
