//! # k1 Server
//!
//! HTTP front of the `k1a` integration checker, built on `Axum` and `SurrealDB`.
//!
//! ## Example
//! ```no_run
//! use k1_server::Server;
//!
//! #[k1_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4583)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use k1::domain::config::{ApiConfig, SslConfig};
use k1::kernel::server::ApiState;
use k1_database::Database;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// Time granted to in-flight requests once a shutdown signal arrives.
const GRACEFUL_SHUTDOWN: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    async fn init_database(&self) -> Result<Database> {
        let db_cfg = &self.cfg.database;
        let mut builder =
            Database::builder().url(&db_cfg.url).session(&db_cfg.namespace, &db_cfg.database);

        if let Some(creds) = &db_cfg.credentials {
            builder = builder.auth(&creds.username, &creds.password);
        }

        builder.init().await.context("Failed to establish database connection")
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Checks that configured TLS files exist
    /// 2. Opens the database connection
    /// 3. Constructs application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * SSL certificate/key files are missing
    /// * Database connection fails (unreachable host, invalid credentials)
    pub async fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        let db = self.init_database().await?;

        let state = ApiState::builder()
            .config(self.cfg)
            .db(db)
            .build()
            .context("Failed to finalize API state")?;
        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
///
/// This struct is returned by [`ServerBuilder::build`] and contains
/// all necessary runtime state.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// In-flight requests get [`GRACEFUL_SHUTDOWN`] to finish; the database
    /// handle is released afterwards.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        info!(address = %address, ssl = cfg.server.ssl.is_some(), "Starting server");

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(shutdown_on_signal(handle.clone()));

        serve(self.router(), address, cfg.server.ssl.as_ref(), handle).await?;

        self.shutdown();
        info!("Server shutdown complete");
        Ok(())
    }

    /// Builds the full router over this server's state, docs and middleware included.
    #[must_use]
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }

    /// Releases the database once no request holds the state any more.
    fn shutdown(self) {
        match self.state.try_into_inner() {
            Ok(inner) => inner.database.close(),
            Err(_) => {
                warn!("Application state still shared at shutdown; database released on drop");
            }
        }
    }
}

/// Fails when the certificate or key file is missing.
/// Warns when group or others can access the key.
fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    for (what, path) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
        if !path.exists() {
            anyhow::bail!("SSL {what} not found at: {}", path.display());
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if ssl.key.metadata()?.permissions().mode() & 0o077 != 0 {
            warn!(
                key = %ssl.key.display(),
                "SSL private key is accessible by group or others (expected 600)"
            );
        }
    }
    Ok(())
}

async fn serve(
    app: Router,
    address: SocketAddr,
    ssl: Option<&SslConfig>,
    handle: Handle<SocketAddr>,
) -> Result<()> {
    let service = app.into_make_service();

    match ssl {
        Some(ssl) => {
            info!("Listening on https://{address}");
            let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;
            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(service)
                .await
                .context("HTTPS server failed")
        }
        None => {
            info!("Listening on http://{address}");
            axum_server::bind(address)
                .handle(handle)
                .serve(service)
                .await
                .context("HTTP server failed")
        }
    }
}

/// Starts a graceful shutdown of `handle` on the first Ctrl+C or SIGTERM.
async fn shutdown_on_signal(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(()) => {
            info!(grace_secs = GRACEFUL_SHUTDOWN.as_secs(), "Shutdown signal received");
            handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN));
        }
        Err(e) => error!("Error while waiting for shutdown signal: {e:#}"),
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
