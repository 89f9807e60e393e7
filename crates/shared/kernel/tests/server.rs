#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use k1_kernel::server::router::system_router;
use k1_kernel::server::{ApiError, ErrorBody, panic_response};
use serde_json::Value;
use tower::ServiceExt;

async fn error_body(response: axum::response::Response) -> ErrorBody {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("error payload")
}

#[tokio::test]
async fn validation_errors_are_unprocessable_with_message() {
    let err = ApiError::Validation { message: "missing k1a_version".into(), context: None };
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(response).await;
    assert!(body.error.contains("missing k1a_version"));
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let err = ApiError::Internal { message: "db password leaked".into(), context: None };
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = error_body(response).await;
    assert_eq!(body.error, "Internal server error");
}

#[tokio::test]
async fn panics_render_as_internal_errors() {
    let response = panic_response(Box::new("index out of bounds"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_body(response).await.error, "Internal server error");
}

#[tokio::test]
async fn health_reports_up_without_caching() {
    let (router, api) = system_router::<()>().split_for_parts();
    assert!(api.paths.paths.contains_key("/health"));

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
