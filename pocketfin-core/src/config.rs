//! Configuration management
//!
//! `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "passwordScheme": "sha256", "seedStarterData": true, ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which PasswordHasher adapter the context wires up
///
/// `sha256` keeps existing stored hashes verifying; `argon2id` is the
/// salted scheme and is not compatible with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Sha256,
    Argon2id,
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    // Preserve sections this crate doesn't manage
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    password_scheme: PasswordScheme,
    #[serde(default = "default_seed")]
    seed_starter_data: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            password_scheme: PasswordScheme::default(),
            seed_starter_data: true,
            other: HashMap::new(),
        }
    }
}

fn default_seed() -> bool {
    true
}

/// Pocketfin configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub password_scheme: PasswordScheme,
    pub seed_starter_data: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_scheme: PasswordScheme::default(),
            seed_starter_data: true,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Env overrides (for CI/testing):
    /// `POCKETFIN_PASSWORD_SCHEME` (`sha256` | `argon2id`) and
    /// `POCKETFIN_SEED` (`true`/`1`/`yes` or `false`/`0`/`no`).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let password_scheme = match std::env::var("POCKETFIN_PASSWORD_SCHEME").ok().as_deref() {
            Some("argon2id") => PasswordScheme::Argon2id,
            Some("sha256") => PasswordScheme::Sha256,
            _ => raw.app.password_scheme,
        };

        let seed_starter_data = match std::env::var("POCKETFIN_SEED").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.seed_starter_data,
        };

        Ok(Self {
            password_scheme,
            seed_starter_data,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory, preserving settings this
    /// crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.password_scheme = self.password_scheme;
        settings.app.seed_starter_data = self.seed_starter_data;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
