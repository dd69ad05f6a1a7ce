//! Session service - the Anonymous/Authenticated state machine
//!
//! The active session is `pf_current_user_v1` in exactly one scope:
//! durable when "remember me" is set, session scope otherwise. Every
//! write evicts the other copy, so the at-most-one invariant holds
//! regardless of the path that led here.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::result::Result;
use crate::domain::Session;
use crate::ports::storage::{KeyValueStore, StoreScope, SESSION_KEY};
use crate::services::credentials::{CredentialService, RegisterRequest};

/// Session manager over the key-value port
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    credentials: Arc<CredentialService>,
    // Serializes auth submissions; a second rapid submit waits for the
    // in-flight hash instead of racing it
    submit_guard: Mutex<()>,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>, credentials: Arc<CredentialService>) -> Self {
        Self {
            store,
            credentials,
            submit_guard: Mutex::new(()),
        }
    }

    /// Authenticate and persist the session per the remember flag
    pub async fn login(&self, email: &str, password: &str, remember: bool) -> Result<Session> {
        let _guard = self.submit_guard.lock().await;
        let user = self.credentials.verify(email, password).await?;
        let session = Session::from(&user);
        self.persist(&session, remember)?;
        Ok(session)
    }

    /// Register a new account and transition straight to Authenticated
    /// (auto-login, remembered)
    pub async fn register(&self, req: &RegisterRequest) -> Result<Session> {
        let _guard = self.submit_guard.lock().await;
        let user = self.credentials.register(req).await?;
        let session = Session::from(&user);
        self.persist(&session, true)?;
        Ok(session)
    }

    /// Recover the active session on startup: durable copy first, then
    /// the session-scoped one. The underlying user record is not
    /// re-validated.
    pub fn restore(&self) -> Result<Option<Session>> {
        for scope in [StoreScope::Durable, StoreScope::Session] {
            if let Some(raw) = self.store.get(scope, SESSION_KEY)? {
                if let Ok(session) = serde_json::from_str(&raw) {
                    return Ok(Some(session));
                }
            }
        }
        Ok(None)
    }

    /// Transition to Anonymous, clearing both copies. Idempotent.
    pub fn logout(&self) -> Result<()> {
        self.store.delete(StoreScope::Durable, SESSION_KEY)?;
        self.store.delete(StoreScope::Session, SESSION_KEY)?;
        Ok(())
    }

    fn persist(&self, session: &Session, remember: bool) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        let (write, evict) = if remember {
            (StoreScope::Durable, StoreScope::Session)
        } else {
            (StoreScope::Session, StoreScope::Durable)
        };
        self.store.put(write, SESSION_KEY, &raw)?;
        self.store.delete(evict, SESSION_KEY)?;
        Ok(())
    }
}
