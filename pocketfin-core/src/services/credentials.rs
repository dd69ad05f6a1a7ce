//! Credential service - registration and account lookup
//!
//! Owns the `pf_users_v1` blob. Accounts are append-only: there is no
//! profile edit and no delete flow.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::hasher::PasswordHasher;
use crate::ports::storage::{KeyValueStore, StoreScope, USERS_KEY};

/// Minimum password length accepted at registration
const MIN_PASSWORD_CHARS: usize = 6;

/// Raw registration form fields
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Credential store over the key-value port
pub struct CredentialService {
    store: Arc<dyn KeyValueStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn KeyValueStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account and persist the full user list
    pub async fn register(&self, req: &RegisterRequest) -> Result<User> {
        let name = req.name.trim();
        let email = req.email.trim();

        if name.is_empty() || email.is_empty() || req.password.is_empty() {
            return Err(Error::invalid_input("all fields are required"));
        }
        if req.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(Error::invalid_input(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        if req.password != req.confirm {
            return Err(Error::invalid_input("passwords do not match"));
        }
        if self.find_by_email(email)?.is_some() {
            return Err(Error::EmailTaken);
        }

        let password_hash = self.hasher.hash(&req.password).await?;
        let user = User::new(name, email, password_hash);

        let mut users = self.users()?;
        users.push(user.clone());
        self.save_users(&users)?;

        Ok(user)
    }

    /// Case-insensitive account lookup
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users()?
            .into_iter()
            .find(|u| u.email_matches(email)))
    }

    /// Check credentials, distinguishing unknown accounts from bad
    /// passwords (both messages are user-visible by design)
    pub async fn verify(&self, email: &str, password: &str) -> Result<User> {
        let user = self.find_by_email(email)?.ok_or(Error::NoSuchAccount)?;
        if self.hasher.verify(password, &user.password_hash).await? {
            Ok(user)
        } else {
            Err(Error::WrongPassword)
        }
    }

    fn users(&self) -> Result<Vec<User>> {
        match self.store.get(StoreScope::Durable, USERS_KEY)? {
            // A malformed user list degrades to empty rather than failing
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users)?;
        self.store.put(StoreScope::Durable, USERS_KEY, &raw)
    }
}
