//! JWT access token issuance and verification.
//!
//! Tokens are self-contained and stateless: there is no session
//! store and no revocation list, so a token stays valid until its
//! `exp` regardless of subsequent account changes. Signing is HS256
//! with a server-held secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — the user's email.
    pub sub: String,
    /// Tenant ID (UUID string), copied from the user at issuance.
    pub tenant_id: String,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed HS256 JWT with the default lifetime from `config`.
pub fn issue_access_token(
    email: &str,
    tenant_id: Uuid,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    issue_access_token_with_ttl(
        email,
        tenant_id,
        Duration::seconds(config.access_token_lifetime_secs as i64),
        config,
    )
}

/// Issue a signed HS256 JWT with an explicit lifetime.
pub fn issue_access_token_with_ttl(
    email: &str,
    tenant_id: Uuid,
    ttl: Duration,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let claims = AccessTokenClaims {
        sub: email.to_string(),
        tenant_id: tenant_id.to_string(),
        exp: (Utc::now() + ttl).timestamp(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    let header = Header::new(Algorithm::HS256);
    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an access token.
///
/// Every failure mode — bad signature, malformed payload, missing
/// claims, expired — collapses into the single
/// [`AuthError::InvalidToken`] so the caller cannot distinguish why
/// a token was rejected.
pub fn decode_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp"]);
    validation.leeway = 0;

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-signing-secret".into(),
            access_token_lifetime_secs: 900,
            min_password_length: 8,
        }
    }

    #[test]
    fn jwt_roundtrip() {
        let config = test_config();
        let tenant_id = Uuid::new_v4();

        let token = issue_access_token("alice@example.com", tenant_id, &config).unwrap();
        let claims = decode_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.tenant_id, tenant_id.to_string());
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn claims_serialize_with_wire_field_names() {
        // The payload field names are the wire contract with any
        // other token consumer: sub, tenant_id, exp, nothing else.
        let tenant_id = Uuid::new_v4();
        let claims = AccessTokenClaims {
            sub: "alice@example.com".into(),
            tenant_id: tenant_id.to_string(),
            exp: 1_700_000_000,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "alice@example.com");
        assert_eq!(value["tenant_id"], tenant_id.to_string());
        assert_eq!(value["exp"], 1_700_000_000);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn expired_token_is_invalid() {
        let config = test_config();
        let token = issue_access_token_with_ttl(
            "alice@example.com",
            Uuid::new_v4(),
            Duration::seconds(-60),
            &config,
        )
        .unwrap();

        assert!(matches!(
            decode_access_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let config = test_config();
        let token = issue_access_token("alice@example.com", Uuid::new_v4(), &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-different-secret".into(),
            ..test_config()
        };
        assert!(matches!(
            decode_access_token(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let config = test_config();
        assert!(matches!(
            decode_access_token("not.a.jwt", &config),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            decode_access_token("", &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn token_missing_tenant_claim_is_invalid() {
        // Sign a token whose payload lacks `tenant_id`; decoding
        // into AccessTokenClaims must fail with the same error.
        #[derive(Serialize)]
        struct PartialClaims {
            sub: String,
            exp: i64,
        }

        let config = test_config();
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &PartialClaims {
                sub: "alice@example.com".into(),
                exp: (Utc::now() + Duration::hours(1)).timestamp(),
            },
            &key,
        )
        .unwrap();

        assert!(matches!(
            decode_access_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }
}
