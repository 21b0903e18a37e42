//! Resolution settings.
//!
//! Settings are optional: every field has a default, and a missing file or
//! section means "use the defaults". The CLI reads the file named by
//! `--config` or the `RESOLVE_CONFIG` environment variable.
//!
//! ```toml
//! [cache]
//! initial_capacity = 16
//! shard_amount = 8          # power of two greater than one
//!
//! [selection]
//! lenient_overrides = false
//! ```

use super::parser::parse_config;
use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "RESOLVE_CONFIG";

/// Top-level resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolutionSettings {
    /// Sizing of the per-component variant state cache
    pub cache: CacheSettings,
    /// Behaviour of the bundled artifact selector
    pub selection: SelectionSettings,
}

/// Sizing of the per-component variant state cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSettings {
    /// Entries to reserve up front
    pub initial_capacity: usize,
    /// Number of lock shards; `None` uses the map's default
    pub shard_amount: Option<usize>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            shard_amount: None,
        }
    }
}

impl CacheSettings {
    /// Shard counts must be a power of two greater than one.
    pub fn is_valid_shard_amount(shards: usize) -> bool {
        shards > 1 && shards.is_power_of_two()
    }

    /// Check the settings for values the cache cannot honour.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if `shard_amount` is not a power of two greater than one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.shard_amount {
            Some(shards) if !Self::is_valid_shard_amount(shards) => Err(ConfigError::Invalid {
                reason: format!(
                    "cache.shard_amount must be a power of two greater than one, got {shards}"
                ),
            }),
            _ => Ok(()),
        }
    }
}

/// Behaviour of [`crate::selector::AttributeMatchingSelector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionSettings {
    /// Fall back to the declared variants when no variant matches the overrides
    pub lenient_overrides: bool,
}

impl ResolutionSettings {
    /// Load and validate settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading, parsing or validating the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = parse_config(path)?;
        settings.validate()?;
        tracing::debug!(target: "config", "loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, else from `RESOLVE_CONFIG` if set, else defaults.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from the selected file.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(env_path) => Self::load(Path::new(&env_path)),
            None => Ok(Self::default()),
        }
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}
