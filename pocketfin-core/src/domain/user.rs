//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
///
/// Created on registration and never updated or deleted afterwards. The
/// stored blob layout is camelCase (`passwordHash`), kept stable for
/// existing `pf_users_v1` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Case-insensitive email comparison, the uniqueness rule for accounts
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
