//! Provisioning inputs read from the environment.
//!
//! Every input has a named default so the resulting state can be audited
//! without reading the code that applies it.

use std::env;
use std::fmt;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "mern_app";
pub const DEFAULT_APP_USERNAME: &str = "mern_user";
pub const DEFAULT_APP_PASSWORD: &str = "mern_password";

/// Value of `NODE_ENV` that enables seed data.
pub const DEVELOPMENT: &str = "development";

#[derive(Clone)]
pub struct BootstrapConfig {
    /// Admin connection string (`MONGODB_URI`)
    pub mongodb_uri: String,
    /// Target database (`MONGO_INITDB_DATABASE`)
    pub database: String,
    /// Application user name (`MONGO_USERNAME`)
    pub app_username: String,
    /// Application user secret (`MONGO_PASSWORD`)
    pub app_password: String,
    /// Environment indicator (`NODE_ENV`), `None` when unset
    pub environment: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_username: DEFAULT_APP_USERNAME.to_string(),
            app_password: DEFAULT_APP_PASSWORD.to_string(),
            environment: None,
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset and fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        Self {
            mongodb_uri: get("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: get("MONGO_INITDB_DATABASE").unwrap_or(defaults.database),
            app_username: get("MONGO_USERNAME").unwrap_or(defaults.app_username),
            app_password: get("MONGO_PASSWORD").unwrap_or(defaults.app_password),
            environment: get("NODE_ENV"),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.as_deref() == Some(DEVELOPMENT)
    }
}

impl fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("mongodb_uri", &"<redacted>")
            .field("database", &self.database)
            .field("app_username", &self.app_username)
            .field("app_password", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
