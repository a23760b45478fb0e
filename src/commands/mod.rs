//! Top-level command orchestration for the CLI.
pub mod build;
