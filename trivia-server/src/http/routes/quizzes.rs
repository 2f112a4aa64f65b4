//! Quiz endpoint
//!
//! The server keeps no quiz session; the client sends back every id it
//! has already been served.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{pick_random, CategoryFilter};

/// Category selector sent by quiz clients. Their `type` key is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    pub id: Option<i32>,
}

/// Next-question request
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

impl QuizRequest {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.quiz_category.as_ref().and_then(|c| c.id))
    }
}

/// Next question, or null once the quiz is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - random question not yet served in this quiz
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let filter = req.filter();
    if let Some(id) = filter.id() {
        CategoryRepo::new(&state.pool).ensure_exists(id).await?;
    }

    let previous = req.previous_questions.unwrap_or_default();
    let candidates = QuestionRepo::new(&state.pool)
        .quiz_candidates(filter, &previous)
        .await?;

    tracing::debug!(
        category = ?filter.id(),
        served = previous.len(),
        remaining = candidates.len(),
        "Selecting quiz question"
    );
    let question = pick_random(candidates, &mut rand::thread_rng());

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
