//! Storage port - key-value persistence abstraction
//!
//! The persisted state is a handful of string blobs behind stable keys,
//! split across two lifetimes. Adapters decide what "durable" and
//! "session" mean for their backend; business logic only picks the scope.

use crate::domain::result::Result;

/// Lifetime of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// Survives restarts
    Durable,
    /// Lives for a single tab/shell
    Session,
}

/// Key-value store over the two scopes
///
/// All operations are synchronous and effectively instantaneous; the
/// backing store is single-writer per context and last-write-wins across
/// contexts.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is absent
    fn get(&self, scope: StoreScope, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn put(&self, scope: StoreScope, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is a no-op
    fn delete(&self, scope: StoreScope, key: &str) -> Result<()>;
}

// Key layout, kept stable for existing blobs.

/// Registered users, JSON array of User records (durable)
pub const USERS_KEY: &str = "pf_users_v1";

/// The active session projection (durable or session scope, never both)
pub const SESSION_KEY: &str = "pf_current_user_v1";

/// Dark mode flag, `"1"` or `"0"` (durable)
pub const DARK_MODE_KEY: &str = "pf_dark";

/// Per-user transaction partition (durable)
pub fn dashboard_key(user_id: &str) -> String {
    format!("pf_dashboard_v1_{}", user_id)
}
