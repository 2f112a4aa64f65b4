//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::PathId;
use crate::http::server::AppState;

/// Category mapping response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Questions within one category.
///
/// `current_category` is always null here, matching the published API docs.
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

/// GET /categories - id to name mapping for every category
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).mapping().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - every question in a category
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    PathId(category_id): PathId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    CategoryRepo::new(&state.pool)
        .ensure_exists(category_id)
        .await?;

    let questions = QuestionRepo::new(&state.pool)
        .list_for_category(category_id)
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: None,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
