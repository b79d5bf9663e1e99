use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 User
        .route(
            "/api/users",
            get(handlers::a001_user::list_all).post(handlers::a001_user::create),
        )
        .route(
            "/api/users/:id",
            put(handlers::a001_user::update).delete(handlers::a001_user::delete),
        )
        // A002 Post
        .route(
            "/api/posts",
            get(handlers::a002_post::list_all).post(handlers::a002_post::create),
        )
        .route(
            "/api/posts/:id",
            put(handlers::a002_post::update).delete(handlers::a002_post::delete),
        )
        .route("/api/posts/:id/publish", post(handlers::a002_post::publish))
        .route("/api/posts/:id/archive", post(handlers::a002_post::archive))
        .route("/api/posts/:id/restore", post(handlers::a002_post::restore))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::shared::error::ApiErrorBody;
    use tower::ServiceExt;

    async fn send(method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = configure_routes()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn message(bytes: &[u8]) -> String {
        serde_json::from_slice::<ApiErrorBody>(bytes).unwrap().message
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn lists_are_json_arrays() {
        for uri in ["/api/users", "/api/posts"] {
            let (status, body) = send("GET", uri, None).await;
            assert_eq!(status, StatusCode::OK);
            let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert!(value.is_array());
        }
    }

    #[tokio::test]
    async fn invalid_create_is_bad_request_with_message() {
        let (status, body) = send(
            "POST",
            "/api/users",
            Some(r#"{"username":"","email":"kim@example.com","role":"user","status":"active"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), "사용자명과 이메일은 필수입니다");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let (status, body) = send("PUT", "/api/users/987654", Some("{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(message(&body).contains("987654"));

        let (status, _) = send("DELETE", "/api/posts/987654", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send("POST", "/api/posts/987654/publish", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_create_transition_delete() {
        let (status, body) = send(
            "POST",
            "/api/posts",
            Some(r#"{"title":"라우터 테스트 게시글","content":"","author":"kim","category":"design","status":"draft"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let post: contracts::domain::a002_post::aggregate::Post =
            serde_json::from_slice(&body).unwrap();

        let (status, body) = send("POST", &format!("/api/posts/{}/restore", post.id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message(&body), "보관된 게시글만 복원할 수 있습니다");

        let (status, _) = send("POST", &format!("/api/posts/{}/publish", post.id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send("DELETE", &format!("/api/posts/{}", post.id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
