//! Configuration provider — resolve named OAuth settings by key.
//!
//! Lookup order per key: process environment variable named exactly like
//! the key, then the host application's settings file (TOML). A key that
//! resolves in neither place, or resolves to the wrong type, is
//! unavailable.

use anyhow::{Result, bail};
use std::path::Path;
use thiserror::Error;

use crate::resolve;

/// Keys of the OAuth group-management settings this tool reports on.
pub mod keys {
    pub const ENABLE_OAUTH_GROUP_MANAGEMENT: &str = "ENABLE_OAUTH_GROUP_MANAGEMENT";
    pub const OAUTH_GROUPS_CLAIM: &str = "OAUTH_GROUPS_CLAIM";
    pub const OAUTH_ADMIN_ROLES: &str = "OAUTH_ADMIN_ROLES";
    pub const OAUTH_ALLOWED_ROLES: &str = "OAUTH_ALLOWED_ROLES";
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration value '{key}' could not be resolved")]
    Unavailable { key: String },
}

impl ConfigError {
    pub fn unavailable(key: &str) -> Self {
        Self::Unavailable {
            key: key.to_string(),
        }
    }
}

/// Read access to named settings, typed per call site.
pub trait ConfigProvider {
    fn flag(&self, key: &str) -> Result<bool, ConfigError>;
    fn string(&self, key: &str) -> Result<String, ConfigError>;
    fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigError>;
}

/// Provider backed by a TOML settings file plus env var overrides.
#[derive(Debug)]
pub struct TomlProvider {
    table: toml::map::Map<String, toml::Value>,
}

impl TomlProvider {
    /// Load settings from an explicit path, or from the resolved default
    /// location. An explicit path must exist; the default location may be
    /// absent (env-only operation).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("settings file not found at {}", path.display());
                }
                Self::from_file(path)
            }
            None => {
                let path = resolve::settings_toml();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self {
                        table: toml::map::Map::new(),
                    })
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let val: toml::Value = toml::from_str(&content)?;
        let table = val.as_table().cloned().unwrap_or_default();
        Ok(Self { table })
    }

    fn env(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigProvider for TomlProvider {
    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        if let Some(raw) = Self::env(key) {
            return parse_flag(&raw).ok_or_else(|| ConfigError::unavailable(key));
        }
        self.table
            .get(key)
            .and_then(toml::Value::as_bool)
            .ok_or_else(|| ConfigError::unavailable(key))
    }

    fn string(&self, key: &str) -> Result<String, ConfigError> {
        if let Some(raw) = Self::env(key) {
            return Ok(raw);
        }
        self.table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::unavailable(key))
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        if let Some(raw) = Self::env(key) {
            return Ok(split_list(&raw));
        }
        let arr = self
            .table
            .get(key)
            .and_then(toml::Value::as_array)
            .ok_or_else(|| ConfigError::unavailable(key))?;
        arr.iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ConfigError::unavailable(key))
    }
}

/// Parse a boolean from env text: true/false/1/0, case-insensitive.
fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}

/// Split comma-separated env text into trimmed, non-empty items.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
