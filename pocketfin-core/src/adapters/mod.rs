//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON files on the local filesystem for the KeyValueStore port
//! - In-memory maps for tests and tab simulation
//! - SHA-256 digest for the PasswordHasher port (compatibility scheme)
//! - Argon2id for the PasswordHasher port (salted scheme, opt-in)
//! - Starter data for first-login seeding

pub mod argon2id;
pub mod json_file;
pub mod memory;
pub mod seed;
pub mod sha256;
