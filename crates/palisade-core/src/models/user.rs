//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse role distinction. `Admin` is assigned once, to the first
/// user ever created; everyone else is `User`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// The tenant this user belongs to. Set at creation, never
    /// changed in normal flows.
    pub tenant_id: Uuid,
    pub name: Option<String>,
    /// Login identifier. Globally unique across all tenants, so
    /// login needs no tenant hint.
    pub email: String,
    /// Argon2id PHC-format hash. Plaintext is never stored.
    pub password_hash: String,
    pub role: Role,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new user.
///
/// Role and superuser status are not accepted from the caller: the
/// repository assigns them transactionally (first user ever created
/// becomes an admin superuser, everyone else a regular user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub tenant_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
}

/// Allow-listed updatable fields. `None` leaves a field untouched
/// (merge-patch semantics, not full replace).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Raw password; re-hashed before storage.
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}
