//! Principal resolution and coarse access policy.
//!
//! Replaces framework-style dependency injection with explicit
//! composition: callers thread `resolve_principal` →
//! [`require_active`] → [`require_superuser`] as plain functions,
//! each returning a `Result`.

use palisade_core::error::{PalisadeError, PalisadeResult};
use palisade_core::models::user::User;
use palisade_core::repository::UserRepository;
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Extract the token from an `Authorization` header value.
///
/// Only the `Bearer` scheme is accepted (case-insensitive, per RFC
/// 7235); anything else is a missing credential.
pub fn extract_bearer(header_value: &str) -> Result<&str, AuthError> {
    let (scheme, credentials) = header_value
        .split_once(' ')
        .ok_or(AuthError::MissingBearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingBearer);
    }
    let credentials = credentials.trim();
    if credentials.is_empty() {
        return Err(AuthError::MissingBearer);
    }
    Ok(credentials)
}

/// Resolve the acting user from an `Authorization` header value,
/// enforcing tenant binding.
///
/// The order matters: signature and expiry are verified before any
/// database lookup (cheap rejection first), and the tenant-binding
/// comparison runs last because it needs the freshly loaded user
/// state rather than the token payload alone. A token minted for
/// tenant A cannot authenticate a user whose stored tenant has since
/// changed.
///
/// Every failure path maps to [`PalisadeError::Unauthorized`] with
/// one generic message.
pub async fn resolve_principal<R: UserRepository>(
    repo: &R,
    config: &AuthConfig,
    authorization: &str,
) -> PalisadeResult<User> {
    let raw_token = extract_bearer(authorization)?;

    // Stateless checks first: signature, expiry, claim shape.
    let claims = token::decode_access_token(raw_token, config)?;
    let token_tenant_id =
        Uuid::parse_str(&claims.tenant_id).map_err(|_| AuthError::InvalidToken)?;

    // Identity lookup is global: email is unique across tenants.
    let user = repo.get_by_email(&claims.sub).await.map_err(|e| match e {
        PalisadeError::NotFound { .. } => PalisadeError::Unauthorized,
        other => other,
    })?;

    if user.tenant_id != token_tenant_id {
        debug!(email = %claims.sub, "token tenant does not match stored tenant");
        return Err(PalisadeError::Unauthorized);
    }

    Ok(user)
}

/// Reject inactive principals. Applied after resolution and never
/// bypassed, superuser or not.
pub fn require_active(user: User) -> PalisadeResult<User> {
    if !user.is_active {
        return Err(AuthError::AccountInactive.into());
    }
    Ok(user)
}

/// Reject non-superuser principals. Distinct from `Unauthorized`:
/// the caller is authenticated, just not privileged.
pub fn require_superuser(user: User) -> PalisadeResult<User> {
    if !user.is_superuser {
        return Err(PalisadeError::Forbidden);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use palisade_core::models::user::Role;

    fn make_user(is_active: bool, is_superuser: bool) -> User {
        User {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            name: None,
            email: "u@example.com".into(),
            password_hash: String::new(),
            role: Role::User,
            is_superuser,
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer("bearer tok").unwrap(), "tok");
        assert!(extract_bearer("Basic dXNlcjpwdw==").is_err());
        assert!(extract_bearer("Bearer ").is_err());
        assert!(extract_bearer("just-a-token").is_err());
        assert!(extract_bearer("").is_err());
    }

    #[test]
    fn active_gate() {
        assert!(require_active(make_user(true, false)).is_ok());
        assert!(matches!(
            require_active(make_user(false, false)),
            Err(PalisadeError::Validation { .. })
        ));
    }

    #[test]
    fn superuser_gate() {
        assert!(require_superuser(make_user(true, true)).is_ok());
        assert!(matches!(
            require_superuser(make_user(true, false)),
            Err(PalisadeError::Forbidden)
        ));
    }

    #[test]
    fn active_gate_applies_to_superusers_too() {
        let inactive_superuser = make_user(false, true);
        assert!(require_active(inactive_superuser).is_err());
    }
}
