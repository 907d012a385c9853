//! Tenant domain model.
//!
//! A tenant is the unit of data isolation: every user belongs to
//! exactly one tenant, and all user-level data access is filtered by
//! the acting principal's tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An isolated customer context.
///
/// Tenants are created implicitly the first time a signup references
/// a new tenant name, or explicitly by a superuser. Tenant names are
/// globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
}

/// Fields that can be updated on an existing tenant.
///
/// `None` leaves the field untouched (merge-patch semantics).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTenant {
    pub name: Option<String>,
}
