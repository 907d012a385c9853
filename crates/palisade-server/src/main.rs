//! Palisade Server — application entry point.
//!
//! Loads configuration from the environment, connects to SurrealDB,
//! and applies pending schema migrations. The HTTP router and CORS
//! middleware are provided by the embedding deployment and are not
//! wired here.

use palisade_auth::AuthConfig;
use palisade_db::{DbConfig, DbManager};
use tracing_subscriber::EnvFilter;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn auth_config_from_env() -> AuthConfig {
    AuthConfig {
        jwt_secret: env_or("PALISADE_JWT_SECRET", "dev-secret"),
        access_token_lifetime_secs: env_or("PALISADE_TOKEN_TTL_SECS", "86400")
            .parse()
            .unwrap_or(86_400),
        ..AuthConfig::default()
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("palisade=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting Palisade server...");

    let db_config = DbConfig::from_env();
    let auth_config = auth_config_from_env();
    if auth_config.jwt_secret == "dev-secret" {
        tracing::warn!("PALISADE_JWT_SECRET is unset; using the development default");
    }

    // Connecting also applies pending migrations.
    if let Err(e) = DbManager::connect(&db_config).await {
        tracing::error!(error = %e, "Identity store bootstrap failed");
        std::process::exit(1);
    }

    tracing::info!(
        token_ttl_secs = auth_config.access_token_lifetime_secs,
        "Palisade core initialized; hand off to the HTTP layer"
    );
}
