mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use ttl_shortener::routes::app_router;

#[tokio::test]
async fn test_trailing_slash_on_shorten() {
    let app = app_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shorten/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"long_url":"https://example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_on_redirect() {
    let state = common::create_test_state();
    let code = state.registry.create("https://example.com").await.unwrap();
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{code}/"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}
