//! Generic configuration parsing utilities.
//!
//! Settings files and component descriptors are both TOML. This module reads
//! a file and deserializes it into any `DeserializeOwned` type, reporting
//! which file failed and whether reading or parsing was the problem.
//!
//! Example error output:
//! ```text
//! Invalid syntax in /path/to/component.toml
//! Caused by:
//!     invalid type: integer `3`, expected a string
//! ```

use crate::core::ConfigError;
use std::path::Path;

/// Parse a TOML file into the specified type.
///
/// # Examples
///
/// ```rust,no_run
/// use variant_resolve::config::parse_config;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     name: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let config: Config = parse_config(Path::new("settings.toml"))?;
/// println!("Loaded {}", config.name);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`ConfigError::Io`] if the file cannot be read
/// - [`ConfigError::Parse`] if the content is not valid TOML for `T`
pub fn parse_config<T>(path: &Path) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
