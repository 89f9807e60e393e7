//! Names shared by the router, the `OpenAPI` document and the logs.

/// Service name used as the `OpenAPI` title.
pub const SERVICE_NAME: &str = "k1";

/// Product whose integration is being verified.
pub const PRODUCT_NAME: &str = "k1a";

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";

/// `OpenAPI` tag for the integration verification endpoint.
pub const INTEGRATION_TAG: &str = "Integration";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "K1";

/// Default configuration file stem (resolved as `server.toml`, `server.yaml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "server";
