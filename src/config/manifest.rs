//! Optional `assets.toml` manifest parsing.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Parsed manifest contents.
///
/// A manifest lets a source tree override the built-in module order
/// without editing the program:
///
/// ```toml
/// modules = ["core", "button", "alert"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Module concatenation order override; `None` keeps the default
    /// order.
    #[serde(default)]
    pub modules: Option<Vec<String>>,
}

/// Load the manifest at `path`.
///
/// A missing file is not an error — it yields an empty [`Manifest`] so
/// callers fall back to defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Manifest, ConfigError> {
    if !path.exists() {
        return Ok(Manifest::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
