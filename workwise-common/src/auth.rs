//! Password and session token hashing
//!
//! # Pure Functions
//!
//! Nothing here touches the database or HTTP layer. Repository code stores
//! the outputs; the web crate compares them.
//!
//! - Passwords: Argon2id with a random salt, stored as a PHC string
//!   (`$argon2id$v=19$...`) that carries its own salt and parameters.
//! - Session tokens: 32 random bytes as hex, handed to the client once.
//!   Only the SHA-256 of the token is persisted.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::{Error, Result};

/// Hash of a throwaway password, verified against when an account is missing
static DUMMY_PASSWORD_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("workwise-nonexistent-account").ok());

/// Hash a password with a freshly generated salt, returning the PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password attempt against a stored PHC string
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parsed = match PasswordHash::new(stored) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Do the work of [`verify_password`] for an account that does not exist
///
/// Always returns `false`. Login calls this for unknown emails so both
/// rejection paths take about as long.
pub fn verify_dummy_password(password: &str) -> bool {
    if let Some(hash) = DUMMY_PASSWORD_HASH.as_deref() {
        verify_password(password, hash);
    }
    false
}

/// Generate a new opaque session token
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    to_hex(&bytes)
}

/// Digest under which a session token is stored and looked up
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
