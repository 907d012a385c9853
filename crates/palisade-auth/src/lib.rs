//! Palisade Auth — password hashing, JWT issuance/validation, and
//! tenant-bound principal resolution.
//!
//! Repositories arrive as generics over the `palisade-core` traits,
//! so this crate has no dependency on the database layer.

pub mod config;
pub mod error;
pub mod password;
pub mod principal;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use principal::{require_active, require_superuser, resolve_principal};
pub use service::{AuthService, LoginInput, LoginOutput, SignupInput};
pub use token::AccessTokenClaims;
