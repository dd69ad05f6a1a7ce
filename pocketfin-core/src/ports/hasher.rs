//! Password hasher port
//!
//! Hashing is the only asynchronous boundary in the core; the session
//! manager serializes submissions around it so a second rapid submit
//! waits instead of racing.

use async_trait::async_trait;

use crate::domain::result::Result;

/// One-way password digest abstraction
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce the stored encoding of a plaintext password
    async fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check a plaintext password against a stored encoding
    async fn verify(&self, plaintext: &str, stored: &str) -> Result<bool>;
}
