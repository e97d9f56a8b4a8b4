//! Article endpoints backed by the primary source

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{Error, Result};
use crate::handlers::{LimitQuery, PageQuery};
use crate::presenter::{articles_to_dto, ArticleDto, ArticleResponse, ArticlesResponse, PaginationDto};
use crate::state::AppState;
use crate::usecase::{
    ArticlesByCategoryInput, GetArticleInput, LatestArticlesInput, ListArticlesInput,
    PopularArticlesInput,
};

/// `GET /api/v1/articles`
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ArticlesResponse>> {
    let input = ListArticlesInput {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(10),
    };

    let output = state.list_articles.execute(input).await?;

    Ok(Json(ArticlesResponse {
        articles: articles_to_dto(&output.articles),
        pagination: Some(PaginationDto::from(output.pagination)),
    }))
}

/// `GET /api/v1/articles/{id}`
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleResponse>> {
    if id.is_empty() {
        return Err(Error::BadRequest("article ID is required".to_string()));
    }

    let output = state.get_article.execute(GetArticleInput { id }).await?;

    Ok(Json(ArticleResponse {
        article: ArticleDto::from(&output.article),
    }))
}

/// `GET /api/v1/articles/popular`
pub async fn popular_articles(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ArticlesResponse>> {
    let input = PopularArticlesInput {
        limit: query.limit.unwrap_or(5),
    };

    let output = state.popular_articles.execute(input).await?;

    Ok(Json(ArticlesResponse {
        articles: articles_to_dto(&output.articles),
        pagination: None,
    }))
}

/// `GET /api/v1/articles/latest`
pub async fn latest_articles(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ArticlesResponse>> {
    let input = LatestArticlesInput {
        limit: query.limit.unwrap_or(5),
    };

    let output = state.latest_articles.execute(input).await?;

    Ok(Json(ArticlesResponse {
        articles: articles_to_dto(&output.articles),
        pagination: None,
    }))
}

/// `GET /api/v1/categories/{slug}/articles`
pub async fn articles_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ArticlesResponse>> {
    if slug.is_empty() {
        return Err(Error::BadRequest("category slug is required".to_string()));
    }

    let input = ArticlesByCategoryInput {
        category_slug: slug,
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(10),
    };

    let output = state.articles_by_category.execute(input).await?;

    Ok(Json(ArticlesResponse {
        articles: articles_to_dto(&output.articles),
        pagination: Some(PaginationDto::from(output.pagination)),
    }))
}
