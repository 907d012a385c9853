//! Database-specific error types and conversions.

use palisade_core::error::PalisadeError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Duplicate value for unique field on {entity}")]
    Conflict { entity: String },

    #[error("Query failed: {0}")]
    Query(String),
}

impl DbError {
    /// Classify a write failure: a unique-index violation becomes
    /// `Conflict` (surfaced as a client error, no internal detail),
    /// anything else stays a query error.
    pub(crate) fn classify_write(entity: &str, err: surrealdb::Error) -> DbError {
        let msg = err.to_string();
        if msg.contains("already contains") {
            DbError::Conflict {
                entity: entity.into(),
            }
        } else {
            DbError::Query(msg)
        }
    }
}

impl From<DbError> for PalisadeError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => PalisadeError::NotFound { entity, id },
            DbError::Conflict { entity } => PalisadeError::Conflict { entity },
            other => PalisadeError::Database(other.to_string()),
        }
    }
}
