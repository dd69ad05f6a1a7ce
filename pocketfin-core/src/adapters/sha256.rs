//! SHA-256 password digest adapter
//!
//! The compatibility scheme: an unsalted, unstretched hex digest,
//! deterministic so stored hashes from existing user lists keep
//! verifying by equality. The salted alternative is
//! [`crate::adapters::argon2id::Argon2idHasher`].

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::result::Result;
use crate::ports::hasher::PasswordHasher;

/// Hex SHA-256 digest hasher
pub struct Sha256Hasher;

#[async_trait]
impl PasswordHasher for Sha256Hasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    async fn verify(&self, plaintext: &str, stored: &str) -> Result<bool> {
        Ok(self.hash(plaintext).await? == stored)
    }
}
