//! nova-rs maintenance updater library.
//!
//! This crate rewrites the project version in `Cargo.toml` and the pinned
//! Rust toolchain across CI configuration and documentation files using
//! whole-file regex substitution. It backs the `nova-update` binary and can
//! be driven programmatically with a custom [`targets::UpdateTargets`] set.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - `version` and `toolchain` command handlers
//! - [`error`] - Error types and the crate `Result` alias
//! - [`launcher`] - Host toolchain and project root pre-flight checks
//! - [`logging`] - Stderr log subscriber setup
//! - [`substitute`] - Whole-file regex substitution
//! - [`targets`] - The manifest and ordered toolchain file list
//! - [`toolchain`] - Validated toolchain identifiers
//! - [`version`] - Validated Nova version strings

pub mod cli;
pub mod commands;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod substitute;
pub mod targets;
pub mod toolchain;
pub mod version;
