//! Connection bootstrap for the identity store.
//!
//! [`DbManager::connect`] opens the WebSocket client, authenticates,
//! selects the namespace/database pair, and brings the schema up to
//! date before handing the client out, so a connected manager always
//! points at a migrated store. Repositories clone the client; it
//! multiplexes their statements over the single connection.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

use crate::error::DbError;
use crate::schema;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Connection settings for the identity store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DbConfig {
    /// Read `PALISADE_DB_*` environment variables, falling back to
    /// the local-development defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_or("PALISADE_DB_URL", &defaults.url),
            namespace: env_or("PALISADE_DB_NAMESPACE", &defaults.namespace),
            database: env_or("PALISADE_DB_DATABASE", &defaults.database),
            username: env_or("PALISADE_DB_USERNAME", &defaults.username),
            password: env_or("PALISADE_DB_PASSWORD", &defaults.password),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "palisade".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

/// Connected, migrated handle to the identity store.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Connect, authenticate as root, select the configured
    /// namespace and database, and apply pending migrations.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to the identity store"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        schema::run_migrations(&db).await?;

        info!("Identity store ready");

        Ok(Self { db })
    }

    /// The underlying client, cloned into repositories.
    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}
