//! Pocketfin Core - business logic for personal finance tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Session, Transaction)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore, PasswordHasher)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON files, SHA-256, Argon2id, starter data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::argon2id::Argon2idHasher;
use adapters::json_file::JsonFileStore;
use adapters::sha256::Sha256Hasher;
use config::{Config, PasswordScheme};
use ports::hasher::PasswordHasher;
use ports::storage::KeyValueStore;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Session, Transaction, TransactionKind, User};
pub use services::{
    report, CredentialService, DashboardService, EntryPoint, LogEvent, LoggingService,
    PreferenceService, RegisterRequest, SessionService, TransactionDraft,
};

/// Main context for Pocketfin operations
///
/// This is the primary entry point for all business logic. It holds the
/// storage backend, configuration, and all services.
pub struct PocketfinContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub credential_service: Arc<CredentialService>,
    pub session_service: SessionService,
    pub dashboard_service: DashboardService,
    pub preference_service: PreferenceService,
}

impl PocketfinContext {
    /// Create a context backed by JSON files in the given directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(data_dir)?);
        let hasher: Arc<dyn PasswordHasher> = match config.password_scheme {
            PasswordScheme::Sha256 => Arc::new(Sha256Hasher),
            PasswordScheme::Argon2id => Arc::new(Argon2idHasher),
        };
        Ok(Self::with_store(config, store, hasher))
    }

    /// Create a context over an arbitrary store and hasher (tests,
    /// alternative backends)
    pub fn with_store(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let credential_service = Arc::new(CredentialService::new(Arc::clone(&store), hasher));
        let session_service =
            SessionService::new(Arc::clone(&store), Arc::clone(&credential_service));
        let dashboard_service = DashboardService::new(Arc::clone(&store));
        let preference_service = PreferenceService::new(Arc::clone(&store));

        Self {
            config,
            store,
            credential_service,
            session_service,
            dashboard_service,
            preference_service,
        }
    }
}
