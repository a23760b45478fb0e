// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed Amp site (source tree plus build
// root) and a fluent builder so each integration test can set up an
// isolated environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;

use ampbuild::cli::Cli;
use ampbuild::commands;
use ampbuild::config::BuildConfig;
use ampbuild::logging::Logger;
use clap::Parser as _;

/// An isolated Amp site backed by a [`tempfile::TempDir`].
///
/// Holds `src/css`, `src/js`, `src/img` and an empty `build/` directory.
/// The directory is automatically deleted when dropped.
pub struct TestSite {
    /// Temporary directory containing the site.
    pub root: tempfile::TempDir,
}

impl TestSite {
    /// Create a new site with the empty directory skeleton in place.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for sub in ["src/css", "src/js", "src/img", "build"] {
            std::fs::create_dir_all(root.path().join(sub)).expect("create site dirs");
        }
        Self { root }
    }

    /// Path to the source asset tree.
    pub fn source_root(&self) -> PathBuf {
        self.root.path().join("src")
    }

    /// Path to the build output root.
    pub fn build_root(&self) -> PathBuf {
        self.root.path().join("build")
    }

    /// CLI arguments pointing the build at this site.
    pub fn args(&self) -> Cli {
        self.args_with(&[])
    }

    /// CLI arguments pointing at this site, with extra flags appended.
    pub fn args_with(&self, extra: &[&str]) -> Cli {
        let mut argv = vec![
            "ampbuild".to_string(),
            "--root".to_string(),
            self.build_root().display().to_string(),
            "--path".to_string(),
            self.source_root().display().to_string(),
        ];
        argv.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(argv)
    }

    /// Resolve the build configuration for this site.
    pub fn config(&self) -> BuildConfig {
        BuildConfig::resolve(&self.build_root(), Some(&self.source_root()))
            .expect("resolve config")
    }

    /// Run a full build against this site.
    pub fn run_build(&self) -> anyhow::Result<()> {
        let log = Logger::new("test");
        commands::build::run(&self.args(), &log)
    }

    /// Run a dry-run build against this site.
    pub fn run_dry_build(&self) -> anyhow::Result<()> {
        let log = Logger::new("test");
        commands::build::run(&self.args_with(&["--dry-run"]), &log)
    }

    /// Contents of the combined stylesheet output.
    pub fn read_stylesheet(&self) -> Vec<u8> {
        std::fs::read(self.build_root().join("css/styles.less")).expect("read styles.less")
    }

    /// Contents of the combined script output.
    pub fn read_script(&self) -> Vec<u8> {
        std::fs::read(self.build_root().join("js/amp.js")).expect("read amp.js")
    }
}

/// Fluent builder for [`TestSite`].
///
/// Allows individual tests to populate the source tree before the site is
/// finalised without modifying the shared setup.
pub struct TestSiteBuilder {
    site: TestSite,
}

impl TestSiteBuilder {
    /// Begin building a new site backed by the empty skeleton.
    pub fn new() -> Self {
        Self {
            site: TestSite::new(),
        }
    }

    /// Write `assets.toml` restricting the module order.
    pub fn with_manifest(self, modules: &[&str]) -> Self {
        let list = modules
            .iter()
            .map(|m| format!("\"{m}\""))
            .collect::<Vec<_>>()
            .join(", ");
        std::fs::write(
            self.site.source_root().join("assets.toml"),
            format!("modules = [{list}]\n"),
        )
        .expect("write manifest");
        self
    }

    /// Write both fragments for a module.
    pub fn with_module(self, name: &str, less: &str, js: &str) -> Self {
        self.with_stylesheet(name, less).with_script(name, js)
    }

    /// Write a stylesheet fragment `css/<name>.less`.
    pub fn with_stylesheet(self, name: &str, content: &str) -> Self {
        let path = self.site.source_root().join("css").join(format!("{name}.less"));
        std::fs::write(path, content).expect("write stylesheet fragment");
        self
    }

    /// Write a script fragment `js/<name>.js`.
    pub fn with_script(self, name: &str, content: &str) -> Self {
        let path = self.site.source_root().join("js").join(format!("{name}.js"));
        std::fs::write(path, content).expect("write script fragment");
        self
    }

    /// Write an image file at `img/<rel>`, creating subdirectories.
    pub fn with_image(self, rel: &str, content: &[u8]) -> Self {
        let path = self.site.source_root().join("img").join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create image parent");
        }
        std::fs::write(path, content).expect("write image file");
        self
    }

    /// Finish building and return the configured site.
    pub fn build(self) -> TestSite {
        self.site
    }
}
