//! Password hashing and verification using Argon2id.
//!
//! Only the first [`MAX_PASSWORD_BYTES`] bytes of a password are
//! significant. Truncation is UTF-8-aware (a trailing partial
//! multibyte sequence is dropped) and applied identically on the
//! hash and verify paths — if the two paths ever truncated
//! differently, legitimate passwords longer than the bound would
//! never verify again.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

/// Upper bound on significant password bytes. Two passwords that
/// agree in their first 72 bytes hash identically.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// OWASP ASVS recommended Argon2id parameters: m=19456 (19 MiB),
/// t=2, p=1.
fn argon2() -> Result<Argon2<'static>, AuthError> {
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| AuthError::Crypto(format!("argon2 params error: {e}")))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Truncate a password to at most [`MAX_PASSWORD_BYTES`] bytes
/// without splitting a multibyte character.
///
/// The cut point backs up to the nearest character boundary, so the
/// same password always truncates to the same prefix.
pub fn truncate_password(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }
    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}

/// Hash a password with Argon2id and a per-hash random salt.
///
/// Fails with [`AuthError::EmptyPassword`] on an empty input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    let truncated = truncate_password(password);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2()?
        .hash_password(truncated.as_bytes(), &salt)
        .map_err(|e| AuthError::Crypto(format!("password hash error: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a PHC-format hash using the
/// algorithm's constant-time check.
///
/// Returns `false` — never an error — on empty or malformed input,
/// so the login path has exactly one failure mode.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if password.is_empty() || hash.is_empty() {
        return false;
    }
    let Ok(parsed_hash) = argon2::PasswordHash::new(hash) else {
        return false;
    };
    let truncated = truncate_password(password);
    Argon2::default()
        .verify_password(truncated.as_bytes(), &parsed_hash)
        .is_ok()
}
