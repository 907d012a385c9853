//! Palisade Database — SurrealDB connection management, schema
//! migrations, and repository implementations for the
//! `palisade-core` traits.
//!
//! Tenant scoping is enforced here: every user-level query carries a
//! mandatory `tenant_id` predicate, so cross-tenant rows are
//! unreachable regardless of what ids a caller guesses.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
