//! SurrealDB repository implementations.

mod tenant;
mod user;

pub use tenant::SurrealTenantRepository;
pub use user::SurrealUserRepository;
