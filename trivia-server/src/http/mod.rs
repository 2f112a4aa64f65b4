//! HTTP server layer
//!
//! Axum server with:
//! - CORS (any origin by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, CorsOrigins, ServerConfig, ServerError};
pub use error::ApiError;

#[cfg(test)]
mod tests {
    //! Router tests for every path that is rejected before a query runs.
    //! The pool connects lazily, so no database is needed.

    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        // Requests that get past validation fail fast with a 500.
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy("postgres://localhost/trivia_unreachable")
            .expect("lazy pool");
        build_router(AppState::new(pool), &CorsOrigins::Any)
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.expect("infallible")
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn assert_error(response: Response, status: StatusCode) {
        assert_eq!(response.status(), status);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], status.as_u16());
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn healthcheck_is_ok() {
        for uri in ["/healthcheck", "/health"] {
            let response = send(get(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["status"], "ok");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let response = send(get("/category/1000/questions")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "not found");
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        let response = send(json_request(Method::PUT, "/questions", "{}")).await;
        assert_error(response, StatusCode::METHOD_NOT_ALLOWED).await;

        let response = send(get("/quizzes")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "method not allowed");
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let response = send(json_request(Method::POST, "/questions", "{not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "invalid request");
    }

    #[tokio::test]
    async fn missing_content_type_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/quizzes")
            .body(Body::from("{}"))
            .unwrap();
        let response = send(request).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn create_with_missing_field_is_400() {
        let body = r#"{"question": "How do magnets work?", "answer": "Magic", "category": 1}"#;
        let response = send(json_request(Method::POST, "/questions", body)).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn create_with_wrong_type_is_400() {
        let body = r#"{"question": "Q", "answer": "A", "category": "science", "difficulty": 1}"#;
        let response = send(json_request(Method::POST, "/questions", body)).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn create_with_blank_answer_is_400() {
        let body = r#"{"question": "Q", "answer": "  ", "category": 1, "difficulty": 1}"#;
        let response = send(json_request(Method::POST, "/questions", body)).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn create_with_out_of_range_difficulty_is_422() {
        let body = r#"{"question": "Q", "answer": "A", "category": 1, "difficulty": 1000}"#;
        let response = send(json_request(Method::POST, "/questions", body)).await;
        assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await;
    }

    #[tokio::test]
    async fn search_without_term_is_400() {
        let response = send(json_request(Method::POST, "/questions/search", "{}")).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn quiz_with_bad_history_is_400() {
        let body = r#"{"previous_questions": ["one"], "quiz_category": {"id": 0}}"#;
        let response = send(json_request(Method::POST, "/quizzes", body)).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn page_zero_is_400() {
        let response = send(get("/questions?page=0")).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn non_numeric_page_is_400() {
        let response = send(get("/questions?page=two")).await;
        assert_error(response, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn empty_query_values_reach_the_database() {
        for uri in [
            "/questions?page=",
            "/questions?current_category=",
            "/questions?page=&current_category=",
        ] {
            let response = send(get(uri)).await;
            assert_error(response, StatusCode::INTERNAL_SERVER_ERROR).await;
        }
    }

    #[tokio::test]
    async fn non_integer_ids_are_404() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/questions/abc")
            .body(Body::empty())
            .unwrap();
        assert_error(send(request).await, StatusCode::NOT_FOUND).await;

        let response = send(get("/categories/science/questions")).await;
        assert_error(response, StatusCode::NOT_FOUND).await;
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/healthcheck")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn cors_preflight_lists_methods() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/questions")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert!(response.status().is_success());

        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn cors_restricted_origin_list() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/trivia_unreachable")
            .expect("lazy pool");
        let origins = CorsOrigins::parse(["http://localhost:3000"]).unwrap();
        let app = build_router(AppState::new(pool), &origins);

        let request = Request::builder()
            .uri("/healthcheck")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
