//! Secondary-source article endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::handlers::PageQuery;
use crate::presenter::{articles_to_dto, ArticlesResponse, PaginationDto};
use crate::state::AppState;
use crate::usecase::ZennArticlesInput;

/// `GET /api/v1/zenn/articles`
///
/// Pagination is attached, but its total is always 0: the secondary API
/// does not expose a reliable total count.
pub async fn zenn_articles(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ArticlesResponse>> {
    let input = ZennArticlesInput {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(10),
    };

    let output = state.zenn_articles.execute(input).await?;

    Ok(Json(ArticlesResponse {
        articles: articles_to_dto(&output.articles),
        pagination: Some(PaginationDto::from(output.pagination)),
    }))
}
