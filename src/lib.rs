//! Asset build engine for the Amp UI widget library.
//!
//! A thin, linear, single-pass build helper: concatenate per-module
//! stylesheet fragments (dropping import-directive lines) and script
//! fragments (byte-for-byte) into one combined file each, then replace
//! the image output directory with a fresh copy of the image source tree.
//! The combined stylesheet is an intermediate, compiled into CSS
//! downstream by an external stylesheet compiler.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]** — resolve source layout, module order and output paths
//! - **[`concat`]** / **[`fsops`]** — pure concatenation core and filesystem primitives
//! - **[`tasks`]** — the sequential build steps wired to those primitives
//! - **[`commands`]** — top-level orchestration for the CLI
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod concat;
pub mod config;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod tasks;
