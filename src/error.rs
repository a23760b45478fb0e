//! Domain-specific error types for the asset build engine.
//!
//! Internal modules return typed errors ([`AssetError`], [`ConfigError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error taxonomy
//!
//! ```text
//! AssetError
//! ├── MissingFragment   — a required per-module fragment is absent/unreadable
//! ├── MissingSourceTree — the image source directory does not exist
//! └── Io                — any other read/write/copy/remove failure
//! ConfigError
//! ├── Io                — manifest file could not be read
//! ├── Parse             — manifest file is not valid TOML
//! └── EmptyModuleOrder  — manifest explicitly lists zero modules
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise while reading fragments or producing outputs.
///
/// Every variant is fatal: the build aborts at the first occurrence and
/// the error propagates to the process boundary unchanged.
#[derive(Error, Debug)]
pub enum AssetError {
    /// A required per-module stylesheet or script fragment does not exist
    /// or cannot be opened for reading.
    #[error("missing fragment for module '{module}': {}", .path.display())]
    MissingFragment {
        /// Module whose fragment could not be read.
        module: String,
        /// Path of the fragment file that was expected.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image source directory does not exist or is not a directory.
    #[error("image source directory not found: {}", .path.display())]
    MissingSourceTree {
        /// Path that was expected to be the image source tree.
        path: PathBuf,
    },

    /// Any other read/write/copy/remove failure (permissions, disk full,
    /// path too long, invalid stylesheet encoding, ...).
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted, e.g. `"writing build/js/amp.js"`.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that arise from loading the optional `assets.toml` manifest.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest file.
    #[error("IO error reading manifest {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest file contains a syntax error that prevents parsing.
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The manifest sets `modules` to an empty list.
    ///
    /// An absent manifest (or an absent `modules` key) falls back to the
    /// default module order; an explicitly empty order is rejected.
    #[error("manifest {path} lists no modules")]
    EmptyModuleOrder {
        /// Path to the offending manifest file.
        path: String,
    },
}
