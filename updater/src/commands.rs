//! Sub-command handlers.
//!
//! Each handler rewrites its target files and writes progress lines to the
//! supplied output stream. Handlers never roll back: when a file in the
//! toolchain list is missing, files earlier in the list stay rewritten.

use crate::error::{Result, UpdaterError};
use crate::substitute::{MANIFEST_VERSION_PATTERN, replace_in_file};
use crate::targets::UpdateTargets;
use crate::toolchain::{TOOLCHAIN_PATTERN, ToolchainVersion};
use crate::version::NovaVersion;
use camino::Utf8Path;
use log::{debug, info};
use std::io::Write;

/// Reminder printed after every successful command.
pub const COMMIT_REMINDER: &str =
    "Please commit changes made by this tool in their own commit and PR.";

/// Write `version = "<version>"` over every version line of the manifest.
///
/// After rewriting, reports the new version and reminds the operator to
/// regenerate `Cargo.lock`, naming the manifest's package when it has one.
///
/// # Errors
///
/// Returns an error if the manifest is missing, cannot be rewritten, or if
/// writing to `stdout` fails.
pub fn run_version(
    targets: &UpdateTargets,
    version: &NovaVersion,
    stdout: &mut dyn Write,
) -> Result<()> {
    let manifest = targets.manifest();
    let replacement = format!("version = \"{version}\"");
    let count = replace_in_file(manifest, &MANIFEST_VERSION_PATTERN, &replacement)?;
    debug!("rewrote {count} version line(s) in {manifest}");

    write_line(stdout, format!("Updated {version}"))?;
    write_line(stdout, lockfile_reminder(manifest)?)?;
    write_line(stdout, COMMIT_REMINDER)?;

    info!("set project version to {version}");
    Ok(())
}

/// Pin `toolchain` in every toolchain file, in declared order.
///
/// Each file is reported as soon as it has been rewritten. A missing file
/// stops the run immediately.
///
/// # Errors
///
/// Returns [`UpdaterError::FileNotFound`] for the first missing file, any
/// other I/O error from rewriting a file, or a failure writing to `stdout`.
pub fn run_toolchain(
    targets: &UpdateTargets,
    toolchain: &ToolchainVersion,
    stdout: &mut dyn Write,
) -> Result<()> {
    let replacement = toolchain.to_string();
    for file in targets.toolchain_files() {
        let count = replace_in_file(file, &TOOLCHAIN_PATTERN, &replacement)?;
        debug!("rewrote {count} toolchain identifier(s) in {file}");
        write_line(stdout, format!("Updated {file}"))?;
    }

    write_line(stdout, COMMIT_REMINDER)?;

    info!("pinned toolchain {toolchain}");
    Ok(())
}

/// Extract `package.name` from manifest text.
///
/// Returns `None` for virtual manifests and for text that is not valid TOML.
///
/// # Examples
///
/// ```
/// use nova_updater::commands::manifest_package_name;
///
/// let manifest = "[package]\nname = \"nova-rs\"\nversion = \"0.1.0\"\n";
/// assert_eq!(manifest_package_name(manifest).as_deref(), Some("nova-rs"));
/// assert_eq!(manifest_package_name("[workspace]\n"), None);
/// ```
#[must_use]
pub fn manifest_package_name(contents: &str) -> Option<String> {
    let manifest = contents.parse::<toml::Table>().ok()?;
    manifest
        .get("package")
        .and_then(|package| package.get("name"))
        .and_then(|name| name.as_str())
        .map(str::to_owned)
}

fn lockfile_reminder(manifest: &Utf8Path) -> Result<String> {
    let contents = std::fs::read_to_string(manifest).map_err(|source| UpdaterError::Read {
        path: manifest.to_owned(),
        source,
    })?;
    let command = match manifest_package_name(&contents) {
        Some(package) => format!("cargo update -p {package}"),
        None => "cargo update --workspace".to_owned(),
    };
    Ok(format!("Please run `{command}` to update Cargo.lock"))
}

fn write_line(stdout: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
    writeln!(stdout, "{message}").map_err(|source| UpdaterError::WriteFailed { source })
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
