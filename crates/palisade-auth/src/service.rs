//! Authentication service — signup and login orchestration.

use palisade_core::error::{PalisadeError, PalisadeResult};
use palisade_core::models::user::{CreateUser, User};
use palisade_core::repository::{TenantRepository, UserRepository};
use tracing::info;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::principal;
use crate::token;

/// Input for the signup flow.
#[derive(Debug)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Tenant resolved/created by exact name match.
    pub tenant_name: String,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed JWT access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

/// Minimal email-shape check: one `@`, non-empty local part, and a
/// domain containing a dot, with no whitespace.
fn validate_email(email: &str) -> PalisadeResult<()> {
    let shape_ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !shape_ok {
        return Err(PalisadeError::Validation {
            message: format!("Invalid email address: {email}"),
        });
    }
    Ok(())
}

/// Authentication service.
///
/// Generic over repository implementations so the auth layer has no
/// dependency on the database crate.
pub struct AuthService<U: UserRepository, T: TenantRepository> {
    user_repo: U,
    tenant_repo: T,
    config: AuthConfig,
}

impl<U: UserRepository, T: TenantRepository> AuthService<U, T> {
    pub fn new(user_repo: U, tenant_repo: T, config: AuthConfig) -> Self {
        Self {
            user_repo,
            tenant_repo,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Create an account. No token is issued — the caller must log
    /// in explicitly afterwards.
    ///
    /// The tenant is resolved or created by exact name before the
    /// user row is built; the repository decides role and superuser
    /// status atomically (first user ever created becomes the admin
    /// superuser).
    pub async fn signup(&self, input: SignupInput) -> PalisadeResult<User> {
        validate_email(&input.email)?;
        if input.password.len() < self.config.min_password_length {
            return Err(PalisadeError::Validation {
                message: format!(
                    "Password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        // Pre-check for a friendlier error; the unique index on
        // email remains the authority under concurrent signups.
        match self.user_repo.get_by_email(&input.email).await {
            Ok(_) => {
                return Err(PalisadeError::Conflict {
                    entity: "user".into(),
                });
            }
            Err(PalisadeError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let tenant = self
            .tenant_repo
            .get_or_create_by_name(&input.tenant_name)
            .await?;

        let user = self
            .user_repo
            .create(CreateUser {
                tenant_id: tenant.id,
                name: Some(input.name),
                email: input.email,
                password: input.password,
            })
            .await?;

        info!(tenant = %tenant.name, role = ?user.role, "user signed up");
        Ok(user)
    }

    /// Authenticate with email + password and issue an access token
    /// carrying the user's email and tenant.
    ///
    /// Both unknown-email and wrong-password collapse into the same
    /// generic error, with no hint of which field was wrong.
    pub async fn login(&self, input: LoginInput) -> PalisadeResult<LoginOutput> {
        // Only an unknown email collapses into the generic error;
        // storage failures stay server errors.
        let user = match self.user_repo.get_by_email(&input.email).await {
            Ok(user) => user,
            Err(PalisadeError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !password::verify_password(&input.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = token::issue_access_token(&user.email, user.tenant_id, &self.config)?;

        Ok(LoginOutput {
            access_token,
            token_type: "bearer",
            expires_in: self.config.access_token_lifetime_secs,
        })
    }

    /// Resolve the acting user from an `Authorization` header value
    /// and apply the active gate ("who am I" semantics).
    pub async fn authenticate(&self, authorization: &str) -> PalisadeResult<User> {
        let user = principal::resolve_principal(&self.user_repo, &self.config, authorization).await?;
        principal::require_active(user)
    }

    /// Like [`authenticate`](Self::authenticate), but additionally
    /// requires superuser status. The active check is sequenced
    /// first and is not bypassed for superusers.
    pub async fn authenticate_superuser(&self, authorization: &str) -> PalisadeResult<User> {
        let user = self.authenticate(authorization).await?;
        principal::require_superuser(user)
    }
}
