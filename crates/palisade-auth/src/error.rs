//! Authentication error types.

use palisade_core::error::PalisadeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("inactive user")]
    AccountInactive,

    #[error("invalid token")]
    InvalidToken,

    #[error("missing or malformed authorization header")]
    MissingBearer,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for PalisadeError {
    fn from(err: AuthError) -> Self {
        match err {
            // Every credential/token failure collapses into the one
            // generic Unauthorized, regardless of root cause.
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::MissingBearer => {
                PalisadeError::Unauthorized
            }
            AuthError::AccountInactive => PalisadeError::Validation {
                message: "Inactive user".into(),
            },
            AuthError::EmptyPassword => PalisadeError::Validation {
                message: "Password cannot be empty".into(),
            },
            AuthError::Crypto(msg) => PalisadeError::Crypto(msg),
        }
    }
}
