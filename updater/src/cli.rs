//! CLI argument definitions for the nova updater.
//!
//! Positional values are validated by clap value parsers, so a malformed
//! version or toolchain is rejected as a usage error before any file is
//! opened.

use crate::commands::COMMIT_REMINDER;
use crate::toolchain::ToolchainVersion;
use crate::version::NovaVersion;
use clap::{Parser, Subcommand};

/// nova-rs version updater.
#[derive(Parser, Debug)]
#[command(name = "nova-update")]
#[command(version, about)]
#[command(long_about = concat!(
    "nova-rs version updater.\n\n",
    "Rewrites the crate version in Cargo.toml, or the pinned Rust toolchain in ",
    "the CI configuration, README, and rust-toolchain file. Run it from the ",
    "nova-rs checkout root (the directory containing .nova-root).",
))]
#[command(after_help = COMMIT_REMINDER)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity on stderr (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count
    )]
    pub verbosity: u8,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Update the default rust toolchain version.
    #[command(after_help = COMMIT_REMINDER)]
    Toolchain {
        /// New toolchain, ex: nightly-2019-07-02.
        #[arg(value_name = "TOOLCHAIN_VERSION", value_parser = parse_toolchain)]
        toolchain_version: ToolchainVersion,
    },

    /// Update the nova-rs crate version.
    #[command(after_help = COMMIT_REMINDER)]
    Version {
        /// New version, ex: 0.5.4-superbeta.
        #[arg(value_name = "NOVA_VERSION", value_parser = parse_version)]
        nova_version: NovaVersion,
    },
}

fn parse_version(value: &str) -> Result<NovaVersion, String> {
    NovaVersion::try_from(value).map_err(|err| err.to_string())
}

fn parse_toolchain(value: &str) -> Result<ToolchainVersion, String> {
    ToolchainVersion::try_from(value).map_err(|err| err.to_string())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
