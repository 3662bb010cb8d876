//! Configuration data model
//!
//! `Config` is the merged result handed to the application. `ConfigLayer` is what
//! a single file contributes: every field is optional so that a file only
//! overrides what it actually sets.

use serde::{Deserialize, Serialize};

/// Placeholder printed instead of a non-empty password.
pub const REDACTED: &str = "********";

/// Merged application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Database connection settings. All values are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    /// Copy of this config with the password masked, for display.
    pub fn redacted(&self) -> Config {
        let mut cfg = self.clone();
        if !cfg.database.password.is_empty() {
            cfg.database.password = REDACTED.to_string();
        }
        cfg
    }
}

/// Content decoded from one configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub database: Option<DatabaseLayer>,
}

/// Database fields set by one configuration file.
///
/// Scalars keep the text they were written with, so `port: 5432` reads as
/// `"5432"` and `password: 1.10` stays `"1.10"`. A `null` value leaves the
/// field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatabaseLayer {
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}
