use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use k1::domain::config::{ApiConfig, SslConfig};
use k1_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn server() -> Server {
    Server::builder().build().await.expect("server over mem://")
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.expect("body").to_vec()
}

#[tokio::test]
async fn verify_round_trip() {
    let server = server().await;
    let body = json!([
        {"name": "Python", "version": "3.8"},
        {"name": "Redis", "version": "7"},
    ]);

    let response = server
        .router()
        .oneshot(
            Request::post("/integration/verify?k1a_version=1.0&integration_strategy=api")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(
        json,
        json!({
            "compatible": false,
            "issues": ["'k1a' integration does not support the tech stack component Redis."],
            "recommendations": [],
        })
    );
}

#[tokio::test]
async fn missing_body_is_unprocessable() {
    let response = server()
        .await
        .router()
        .oneshot(
            Request::post("/integration/verify?k1a_version=1.0&integration_strategy=api")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let server = server().await;

    let health = server
        .router()
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(health.status(), StatusCode::OK);

    let docs = server
        .router()
        .oneshot(Request::get("/api").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(docs.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(docs).await).expect("utf-8");
    assert!(html.contains("/integration/verify"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = server()
        .await
        .router()
        .oneshot(Request::get("/integration").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn state_carries_config_and_database() {
    let server = Server::builder().port(9123).build().await.expect("server");

    assert_eq!(server.state().config.server.port, 9123);
    assert_eq!(server.state().database.namespace(), "k1");
    assert_eq!(server.state().database.database(), "core");
}

#[tokio::test]
async fn missing_tls_files_abort_the_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(SslConfig {
        cert: dir.path().join("cert.pem"),
        key: dir.path().join("key.pem"),
    });

    let err = Server::builder().config(cfg).build().await.unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
