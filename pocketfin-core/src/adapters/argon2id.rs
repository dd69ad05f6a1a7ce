//! Argon2id password hash adapter
//!
//! Salted PHC-string scheme, selected via `passwordScheme = "argon2id"`
//! in settings. Not compatible with hashes written by the digest scheme:
//! stored values that do not parse as PHC strings simply fail to verify.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::ports::hasher::PasswordHasher;

/// Argon2id hasher producing salted PHC strings
pub struct Argon2idHasher;

#[async_trait]
impl PasswordHasher for Argon2idHasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| Error::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    async fn verify(&self, plaintext: &str, stored: &str) -> Result<bool> {
        let parsed = match PasswordHash::new(stored) {
            Ok(parsed) => parsed,
            Err(_) => return Ok(false),
        };
        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
