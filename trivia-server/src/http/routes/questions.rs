//! Question endpoints

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, PathId};
use crate::http::server::AppState;
use crate::models::{required, CategoryFilter, NewQuestion, Pagination, ValidationError};

/// Listing query params. An empty value (`?page=`) counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuestionsParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub current_category: Option<i32>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Create question request.
///
/// Fields are optional here so a missing one is reported by name.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ValidationError> {
        let question = required("question", self.question)?;
        let answer = required("answer", self.answer)?;
        let category = required("category", self.category)?;
        let difficulty = required("difficulty", self.difficulty)?;
        NewQuestion::new(&question, &answer, category, difficulty)
    }
}

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(alias = "searchTerm")]
    pub search: Option<String>,
}

/// Question list response shared by listing and search
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// GET /questions - one page of questions, optionally within a category
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListQuestionsParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = Pagination::questions(params.page)?;
    let filter = CategoryFilter::new(params.current_category);
    let categories = CategoryRepo::new(&state.pool);

    if let Some(id) = filter.id() {
        categories.ensure_exists(id).await?;
    }

    let result = QuestionRepo::new(&state.pool).list(filter, page).await?;
    if result.is_out_of_range() {
        return Err(ApiError::NotFound {
            resource: "page",
            id: page.page.to_string(),
        });
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories: categories.mapping().await?,
        current_category: filter.id(),
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new = req.validate()?;
    let id = QuestionRepo::new(&state.pool).create(&new).await?;
    tracing::info!(id, category = new.category, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            created: id,
        }),
    ))
}

/// DELETE /questions/{id} - delete a question permanently
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    QuestionRepo::new(&state.pool).delete(id).await?;
    tracing::info!(id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// `current_category` is always null here, matching the published API docs.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let term = required("search", req.search)?;
    let questions = QuestionRepo::new(&state.pool).search(&term).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        categories: CategoryRepo::new(&state.pool).mapping().await?,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
