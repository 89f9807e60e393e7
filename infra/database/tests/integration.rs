use k1_database::*;

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    assert_eq!(db.namespace(), "test_ns");
    assert_eq!(db.database(), "test_db");
    db.health().await.expect("health check");

    let clone = db.clone();
    db.close();
    clone.health().await.expect("clone keeps the connection open");
    clone.close();
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));

    let err = Database::builder().url("mem://").init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn blank_url_fails_validation() {
    let err = Database::builder().url("  ").session("ns", "db").init().await.unwrap_err();
    assert!(err.to_string().contains("URL is required"));
}
