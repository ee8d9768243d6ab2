//! Pre-flight checks run before any argument parsing.
//!
//! The updater is run from a checkout of nova-rs with a Rust toolchain on the
//! `PATH`. Two things are checked up front:
//!
//! - the host `rustc` is at least [`MINIMUM_RUSTC`]; anything older, or a
//!   `rustc` that cannot be probed, is fatal. The check runs outside the
//!   project with `RUSTUP_TOOLCHAIN` cleared, so the toolchain pinned by the
//!   checkout (which this tool rewrites) never selects the compiler checked;
//! - the working directory contains the [`SENTINEL_FILE`] marking the project
//!   root. A missing sentinel only produces a warning.

use crate::error::{Result, UpdaterError};
use camino::Utf8Path;
use log::debug;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// File whose presence marks the nova-rs project root.
pub const SENTINEL_FILE: &str = ".nova-root";

/// Oldest supported host compiler.
pub const MINIMUM_RUSTC: RustcVersion = RustcVersion::new(1, 85, 0);

/// rustup override that would otherwise pin the probed compiler.
const RUSTUP_TOOLCHAIN_VAR: &str = "RUSTUP_TOOLCHAIN";

/// A `major.minor.patch` compiler release, ignoring any channel suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RustcVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl RustcVersion {
    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the output of `rustc --version`.
    ///
    /// Accepts the release field with or without a channel suffix, e.g.
    /// `rustc 1.85.0 (4d91de4e4 2025-02-17)` or
    /// `rustc 1.87.0-nightly (f280acf4c 2025-02-19)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nova_updater::launcher::RustcVersion;
    ///
    /// let parsed = RustcVersion::parse_version_output("rustc 1.87.0-nightly (f280acf4c 2025-02-19)");
    /// assert_eq!(parsed, Some(RustcVersion::new(1, 87, 0)));
    /// assert_eq!(RustcVersion::parse_version_output("cargo 1.87.0"), None);
    /// ```
    #[must_use]
    pub fn parse_version_output(output: &str) -> Option<Self> {
        let release = output.trim().strip_prefix("rustc ")?.split_whitespace().next()?;
        let numeric = release.split('-').next()?;
        let mut parts = numeric.split('.').map(str::parse::<u64>);
        let major = parts.next()?.ok()?;
        let minor = parts.next()?.ok()?;
        let patch = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for RustcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output>;
}

/// Runs commands from `dir` with any rustup toolchain override removed.
struct SystemCommandRunner {
    dir: PathBuf,
}

impl SystemCommandRunner {
    /// A runner rooted in the system temporary directory, away from any
    /// `rust-toolchain` file in the working directory.
    fn outside_project() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        neutral_command(program, args, &self.dir)
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output> {
        self.command(program, args).output()
    }
}

fn neutral_command(program: &str, args: &[String], dir: &Path) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(dir)
        .env_remove(RUSTUP_TOOLCHAIN_VAR);
    command
}

/// Verify that the host `rustc` is at least [`MINIMUM_RUSTC`].
///
/// `program` is the name the tool was invoked as; it is quoted in the error
/// so the operator knows which command refused to run.
///
/// # Errors
///
/// Returns [`UpdaterError::UnsupportedRuntime`] for an older compiler and
/// [`UpdaterError::RuntimeUnavailable`] when `rustc` cannot be run or its
/// version cannot be read.
pub fn check_runtime(program: &str) -> Result<RustcVersion> {
    check_runtime_with(&SystemCommandRunner::outside_project(), program, MINIMUM_RUSTC)
}

fn check_runtime_with(
    runner: &dyn CommandRunner,
    program: &str,
    minimum: RustcVersion,
) -> Result<RustcVersion> {
    let unavailable = |reason: String| UpdaterError::RuntimeUnavailable {
        program: program.to_owned(),
        required: minimum.to_string(),
        reason,
    };

    let output = runner
        .run("rustc", &["--version".to_owned()])
        .map_err(|err| unavailable(format!("failed to run rustc: {err}")))?;
    if !output.status.success() {
        return Err(unavailable(format!(
            "rustc --version failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let found = RustcVersion::parse_version_output(&stdout)
        .ok_or_else(|| unavailable(format!("unrecognised rustc version: {}", stdout.trim())))?;
    debug!("host rustc {found}, minimum {minimum}");

    if found < minimum {
        return Err(UpdaterError::UnsupportedRuntime {
            program: program.to_owned(),
            found: found.to_string(),
            required: minimum.to_string(),
        });
    }
    Ok(found)
}

/// Warn on `stderr` when `dir` does not contain [`SENTINEL_FILE`].
///
/// Returns whether the sentinel was found. The check never fails the run.
pub fn check_project_root(dir: &Utf8Path, stderr: &mut dyn Write) -> bool {
    let sentinel = dir.join(SENTINEL_FILE);
    if sentinel.exists() {
        return true;
    }

    debug!("{sentinel} does not exist");
    write_stderr_line(stderr, "This tool must be run inside nova's root directory");
    write_stderr_line(stderr, format!("Cannot find {SENTINEL_FILE}"));
    false
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort warning; ignore write failures.
    }
}
