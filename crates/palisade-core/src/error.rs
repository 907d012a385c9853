//! Error types for the Palisade system.
//!
//! `Unauthorized` carries one fixed message regardless of root cause
//! (missing token, bad signature, expired, unknown identity, tenant
//! mismatch) so that callers cannot enumerate accounts or tokens.
//! `NotFound` is also returned for rows outside the caller's tenant
//! scope — absent and out-of-scope are indistinguishable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PalisadeError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    Conflict { entity: String },

    #[error("Could not validate credentials")]
    Unauthorized,

    #[error("The user doesn't have enough privileges")]
    Forbidden,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PalisadeResult<T> = Result<T, PalisadeError>;
