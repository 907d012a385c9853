//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. User operations are
//! tenant-scoped: they take a `tenant_id` parameter and must apply
//! it as a mandatory filter, so a caller can never observe, modify,
//! or delete a row belonging to another tenant — out-of-scope rows
//! surface as `NotFound`. Tenant operations are unscoped; the layer
//! above restricts them to superusers.

use uuid::Uuid;

use crate::error::PalisadeResult;
use crate::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use crate::models::user::{CreateUser, UpdateUser, User};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

pub trait UserRepository: Send + Sync {
    /// Create a user. The implementation hashes the raw password and
    /// decides role/superuser status atomically: if no user exists
    /// at creation time (inside the creating transaction), the new
    /// user is an admin superuser; otherwise a regular user.
    /// Duplicate email is `Conflict`.
    fn create(&self, input: CreateUser) -> impl Future<Output = PalisadeResult<User>> + Send;

    fn get_by_id(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = PalisadeResult<User>> + Send;

    /// Global (unscoped) lookup by email. Email is globally unique,
    /// and this is the entry point for login and token resolution,
    /// which arrive without a tenant hint.
    fn get_by_email(&self, email: &str) -> impl Future<Output = PalisadeResult<User>> + Send;

    /// Merge-patch update over the allow-listed fields; password
    /// values are re-hashed. Duplicate email is `Conflict`.
    fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateUser,
    ) -> impl Future<Output = PalisadeResult<User>> + Send;

    /// Hard delete. `NotFound` if the row is absent or outside the
    /// tenant scope.
    fn delete(&self, tenant_id: Uuid, id: Uuid) -> impl Future<Output = PalisadeResult<()>> + Send;

    fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = PalisadeResult<PaginatedResult<User>>> + Send;
}

pub trait TenantRepository: Send + Sync {
    /// Create a tenant. Duplicate name is `Conflict`.
    fn create(&self, input: CreateTenant) -> impl Future<Output = PalisadeResult<Tenant>> + Send;

    /// Fetch by exact name, creating the tenant if absent. Used by
    /// the signup flow. A concurrent create racing on the same name
    /// fails with `Conflict` via the unique index.
    fn get_or_create_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = PalisadeResult<Tenant>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = PalisadeResult<Tenant>> + Send;

    fn update(
        &self,
        id: Uuid,
        input: UpdateTenant,
    ) -> impl Future<Output = PalisadeResult<Tenant>> + Send;

    /// Hard delete that cascades to the tenant's users. Irreversible.
    fn delete(&self, id: Uuid) -> impl Future<Output = PalisadeResult<()>> + Send;

    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = PalisadeResult<PaginatedResult<Tenant>>> + Send;
}
