use k1_kernel::config::{ConfigError, load_config};
use k1_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8088

[database]
url = "ws://localhost:8000"
namespace = "k1"
database = "verification"
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.database.url, "ws://localhost:8000");
    assert_eq!(cfg.database.database, "verification");
    Ok(())
}

#[test]
fn missing_file_yields_defaults() -> Result<(), ConfigError> {
    let dir = tempdir().expect("tempdir");
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent")))?;

    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.database.url, "mem://");
    Ok(())
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").expect("write");

    let res: Result<ApiConfig, _> = load_config(Some(&path));
    assert!(matches!(res, Err(ConfigError::Config { .. })));
}
