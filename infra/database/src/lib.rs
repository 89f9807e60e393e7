//! # Database Infrastructure
//!
//! Opens the service's [SurrealDB](https://surrealdb.com) connection at startup and
//! releases it at shutdown. Any engine reachable through the `any` connector works
//! (`mem://`, `ws://`, `http://`).
//!
//! ```rust
//! use k1_database::{Database, DatabaseError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("mem://").session("k1", "core").init().await?;
//!     db.health().await?;
//!     db.close();
//!     Ok(())
//! }
//! ```

mod error;

pub use error::{DatabaseError, DatabaseErrorExt};

use std::ops::Deref;
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{info, instrument};

/// Connection state shared by every clone of a [`Database`].
#[derive(Debug)]
pub struct DatabaseInner {
    instance: Surreal<Any>,
    url: String,
    ns: String,
    db: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(url = %self.url, ns = %self.ns, db = %self.db, "Database connection closed");
    }
}

/// Cloneable handle to an open connection; dereferences to the client.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    /// Namespace selected for this connection.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.ns
    }

    /// Database selected for this connection.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.inner.db
    }

    /// Releases this handle. The connection closes once the last clone is gone.
    pub fn close(self) {
        let remaining = Arc::strong_count(&self.inner) - 1;
        info!(remaining, "Releasing database handle");
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.inner.instance
    }
}

/// Fluent builder for a [`Database`] connection.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    ns: Option<String>,
    db: Option<String>,
    auth: Option<(String, String)>,
}

impl DatabaseBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the namespace and database to activate after connecting.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.ns = Some(namespace.into());
        self.db = Some(database.into());
        self
    }

    /// Signs in as a root user after connecting.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Connects, checks health once, authenticates and activates the session.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if the URL, namespace or database is missing.
    /// * [`DatabaseError::Connection`] if the engine cannot be started or is unhealthy.
    /// * [`DatabaseError::Auth`] if the credentials are rejected.
    /// * [`DatabaseError::Surreal`] if the namespace/database cannot be selected.
    #[instrument(skip(self), fields(url = self.url, ns = self.ns, db = self.db))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = required(self.url, "URL is required")?;
        let ns = required(self.ns, "Namespace is required")?;
        let db = required(self.db, "Database is required")?;

        let instance = connect(&url).await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some("Initializing engine".into()),
        })?;

        instance.health().await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some(url.clone().into()),
        })?;

        if let Some((username, password)) = self.auth {
            instance.signin(Root { username, password }).await.map_err(|e| DatabaseError::Auth {
                message: e.to_string().into(),
                context: Some(url.clone().into()),
            })?;
        }

        instance.use_ns(&ns).use_db(&db).await.context("Activating session")?;

        let version =
            instance.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = %ns, database = %db, %version, "Database connection established");

        Ok(Database { inner: Arc::new(DatabaseInner { instance, url, ns, db }) })
    }
}

fn required(value: Option<String>, message: &'static str) -> Result<String, DatabaseError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(DatabaseError::Validation { message: message.into(), context: None })
}
