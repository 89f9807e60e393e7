use config::{Config, Environment, File};
use k1_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[k1_derive::k1_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from a file overlaid with environment variables.
///
/// Layers, lowest precedence first:
/// 1. **File**: `path`, or `server` when `None`. The extension may be omitted
///    (`server` resolves `server.toml`, `server.yaml`, `server.json`, ...).
///    A missing file is not an error; the structure's defaults apply.
/// 2. **Environment**: variables prefixed with `K1__`, nested with `__`
///    (`K1__SERVER__PORT=8080` sets `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but cannot be parsed, or
/// if the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use k1_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    load_from(
        Config::builder().add_source(File::from(effective_path.as_path()).required(false)),
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}

fn load_from<T>(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
