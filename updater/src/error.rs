//! Error types for the nova updater CLI.
//!
//! Each variant maps to one failure class of the tool: an unusable host
//! toolchain, a malformed argument, a missing target file, or an I/O failure.
//! All of them are fatal and end the process with exit code 1.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while validating input or rewriting project files.
#[derive(Debug, Error)]
pub enum UpdaterError {
    /// The host `rustc` is older than the supported minimum.
    #[error("{program} requires rustc >= {required} (found {found}); run: rustup update")]
    UnsupportedRuntime {
        /// Name the tool was invoked as.
        program: String,
        /// Version reported by the host compiler.
        found: String,
        /// Minimum supported version.
        required: String,
    },

    /// The host `rustc` could not be run or its version could not be read.
    #[error("{program} requires rustc >= {required}: {reason}")]
    RuntimeUnavailable {
        /// Name the tool was invoked as.
        program: String,
        /// Minimum supported version.
        required: String,
        /// Description of why the version probe failed.
        reason: String,
    },

    /// A version argument does not match `<major>.<minor>.<patch>[-suffix]`.
    #[error("\"{value}\" is not a valid Nova version. ex: 0.2.3-superbeta")]
    InvalidVersion {
        /// The rejected input.
        value: String,
    },

    /// A toolchain argument does not match `<channel>-YYYY-MM-DD`.
    #[error("\"{value}\" is not a valid toolchain version. ex: nightly-2019-07-23")]
    InvalidToolchain {
        /// The rejected input.
        value: String,
    },

    /// A target file for substitution does not exist.
    #[error("File {path} not found.")]
    FileNotFound {
        /// Path of the missing file.
        path: Utf8PathBuf,
    },

    /// A target file exists but could not be read as UTF-8 text.
    #[error("failed to read {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A target file could not be rewritten.
    #[error("failed to write {path}")]
    Write {
        /// Path of the file being rewritten.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a report line.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`UpdaterError`].
pub type Result<T> = std::result::Result<T, UpdaterError>;
