use axum::body::Body;
use axum::http::{Request, StatusCode};
use pontobot::web::liveness::{RUNNING, router};
use tower::ServiceExt;

#[tokio::test]
async fn test_root_answers_running() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), RUNNING);
}

#[tokio::test]
async fn test_other_paths_are_not_found() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_serve_stops_on_shutdown() {
    let listener = pontobot::web::bind(0).await.unwrap();
    let handle = tokio::spawn(pontobot::web::serve(listener, async {}));
    handle.await.unwrap().unwrap();
}
