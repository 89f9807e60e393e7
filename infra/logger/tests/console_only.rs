use k1_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("k1-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(component = "console", "console-only logger ready");
    assert!(logger.guard().is_none());
}
