//! Build configuration: source layout, module order, output locations.
//!
//! The hardcoded globals of the original build script are expressed as an
//! explicit [`BuildConfig`] object resolved once at startup and passed
//! into the task layer.

pub mod manifest;

use std::path::{Path, PathBuf};

use crate::concat::Fragment;
use crate::error::ConfigError;

/// Order in which module fragments are concatenated when no manifest
/// overrides it. Goes for stylesheets and scripts both.
pub const DEFAULT_MODULE_ORDER: &[&str] = &[
    "core",
    "button",
    "input",
    "panel",
    "datepicker",
    "list",
    "grid",
];

/// Default location of the source asset tree, relative to the build root.
pub const DEFAULT_SOURCE_PATH: &str = "../src";

/// Name of the optional module-order manifest in the source root.
pub const MANIFEST_FILE: &str = "assets.toml";

/// Fixed output locations, all rooted at the build directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Combined stylesheet (`css/styles.less`), compiled downstream into
    /// `css/styles.css` by an external stylesheet compiler.
    pub stylesheet: PathBuf,
    /// Combined script (`js/amp.js`).
    pub script: PathBuf,
    /// Image output directory (`img/`), replaced wholesale on each run.
    pub images: PathBuf,
}

impl OutputPaths {
    fn under(build_root: &Path) -> Self {
        Self {
            stylesheet: build_root.join("css").join("styles.less"),
            script: build_root.join("js").join("amp.js"),
            images: build_root.join("img"),
        }
    }
}

/// Resolved configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the source asset tree; `css/`, `js/` and `img/` live below.
    pub source_root: PathBuf,
    /// Ordered module names; order determines concatenation order in both
    /// combined outputs.
    pub modules: Vec<String>,
    /// Output locations under the build root.
    pub outputs: OutputPaths,
}

impl BuildConfig {
    /// Resolve the configuration for a build rooted at `build_root`.
    ///
    /// `source_path` (the `--path` flag) defaults to
    /// [`DEFAULT_SOURCE_PATH`] and is joined onto the build root when
    /// relative. The module order comes from `assets.toml` in the source
    /// root when present, else [`DEFAULT_MODULE_ORDER`].
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists but cannot be read or
    /// parsed, or lists an empty module order.
    pub fn resolve(build_root: &Path, source_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = source_path.unwrap_or_else(|| Path::new(DEFAULT_SOURCE_PATH));
        let source_root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            build_root.join(path)
        };

        let manifest_path = source_root.join(MANIFEST_FILE);
        let manifest = manifest::load(&manifest_path)?;
        let modules = match manifest.modules {
            Some(modules) if modules.is_empty() => {
                return Err(ConfigError::EmptyModuleOrder {
                    path: manifest_path.display().to_string(),
                });
            }
            Some(modules) => modules,
            None => DEFAULT_MODULE_ORDER.iter().map(ToString::to_string).collect(),
        };

        Ok(Self {
            source_root,
            modules,
            outputs: OutputPaths::under(build_root),
        })
    }

    /// Stylesheet source directory (`<source_root>/css`).
    #[must_use]
    pub fn stylesheet_dir(&self) -> PathBuf {
        self.source_root.join("css")
    }

    /// Script source directory (`<source_root>/js`).
    #[must_use]
    pub fn script_dir(&self) -> PathBuf {
        self.source_root.join("js")
    }

    /// Image source directory (`<source_root>/img`).
    #[must_use]
    pub fn image_dir(&self) -> PathBuf {
        self.source_root.join("img")
    }

    /// Stylesheet fragments (`<module>.less`), one per module, in module
    /// order.
    #[must_use]
    pub fn stylesheet_fragments(&self) -> Vec<Fragment> {
        let dir = self.stylesheet_dir();
        self.modules
            .iter()
            .map(|module| Fragment::new(module.clone(), dir.join(format!("{module}.less"))))
            .collect()
    }

    /// Script fragments (`<module>.js`), one per module, in module order.
    #[must_use]
    pub fn script_fragments(&self) -> Vec<Fragment> {
        let dir = self.script_dir();
        self.modules
            .iter()
            .map(|module| Fragment::new(module.clone(), dir.join(format!("{module}.js"))))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_default_order_without_manifest() {
        let build_root = tempfile::tempdir().unwrap();
        let config = BuildConfig::resolve(build_root.path(), None).unwrap();
        assert_eq!(config.modules.len(), 7);
        assert_eq!(config.modules[0], "core");
        assert_eq!(config.modules[6], "grid");
    }

    #[test]
    fn resolve_derives_source_root_relative_to_build_root() {
        let build_root = tempfile::tempdir().unwrap();
        let config = BuildConfig::resolve(build_root.path(), None).unwrap();
        assert_eq!(config.source_root, build_root.path().join("../src"));
    }

    #[test]
    fn resolve_keeps_absolute_source_path() {
        let build_root = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        let config = BuildConfig::resolve(build_root.path(), Some(src.path())).unwrap();
        assert_eq!(config.source_root, src.path());
    }

    #[test]
    fn resolve_reads_module_order_from_manifest() {
        let build_root = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        std::fs::write(
            src.path().join(MANIFEST_FILE),
            "modules = [\"alert\", \"core\"]\n",
        )
        .unwrap();
        let config = BuildConfig::resolve(build_root.path(), Some(src.path())).unwrap();
        assert_eq!(config.modules, vec!["alert", "core"]);
    }

    #[test]
    fn resolve_rejects_empty_module_order() {
        let build_root = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join(MANIFEST_FILE), "modules = []\n").unwrap();
        let err = BuildConfig::resolve(build_root.path(), Some(src.path())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyModuleOrder { .. }));
    }

    #[test]
    fn output_paths_are_rooted_at_the_build_root() {
        let build_root = tempfile::tempdir().unwrap();
        let config = BuildConfig::resolve(build_root.path(), None).unwrap();
        assert_eq!(
            config.outputs.stylesheet,
            build_root.path().join("css/styles.less")
        );
        assert_eq!(config.outputs.script, build_root.path().join("js/amp.js"));
        assert_eq!(config.outputs.images, build_root.path().join("img"));
    }

    #[test]
    fn fragments_follow_module_order_and_extensions() {
        let build_root = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        std::fs::write(
            src.path().join(MANIFEST_FILE),
            "modules = [\"core\", \"grid\"]\n",
        )
        .unwrap();
        let config = BuildConfig::resolve(build_root.path(), Some(src.path())).unwrap();

        let less = config.stylesheet_fragments();
        assert_eq!(less[0].path, src.path().join("css/core.less"));
        assert_eq!(less[1].path, src.path().join("css/grid.less"));

        let js = config.script_fragments();
        assert_eq!(js[0].module, "core");
        assert_eq!(js[1].path, src.path().join("js/grid.js"));
    }
}
