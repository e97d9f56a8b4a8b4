//! Category endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::presenter::{categories_to_dto, CategoriesResponse};
use crate::state::AppState;

/// `GET /api/v1/categories`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let output = state.list_categories.execute().await?;

    Ok(Json(CategoriesResponse {
        categories: categories_to_dto(&output.categories),
    }))
}
