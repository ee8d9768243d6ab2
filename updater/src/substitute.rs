//! Whole-file regex substitution.
//!
//! Target files are treated as opaque text: each one is read completely,
//! every match of a pattern is rewritten, and the result is written back over
//! the original through a truncating handle. There is no locking and no
//! atomic rename, so an interrupted write can leave a file truncated.

use crate::error::{Result, UpdaterError};
use camino::Utf8Path;
use log::debug;
use regex::{NoExpand, Regex};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::sync::LazyLock;

/// Matches a whole `version = "x.y.z[-suffix]"` line of a Cargo manifest.
///
/// Only horizontal whitespace is allowed around the assignment so the line
/// terminator (`\n` or `\r\n`) is never consumed.
pub(crate) static MANIFEST_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?mR)^version[ \t]*=[ \t]*"\d+\.\d+\.\d+(-[^"]+)?"[ \t]*$"#)
        .unwrap_or_else(|err| panic!("manifest version pattern: {err}"))
});

/// Replace every match of `pattern` in the file at `path` with `replacement`.
///
/// The replacement is inserted literally; `$` sequences are not expanded.
/// A file without matches is rewritten unchanged. Returns the number of
/// replacements made.
///
/// # Errors
///
/// Returns [`UpdaterError::FileNotFound`] if `path` does not exist,
/// [`UpdaterError::Read`] if it cannot be read as UTF-8 text, and
/// [`UpdaterError::Write`] if it cannot be rewritten.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use nova_updater::substitute::replace_in_file;
/// use regex::Regex;
///
/// let dir = tempfile::tempdir().expect("temp dir");
/// let path = Utf8PathBuf::try_from(dir.path().join("notes.txt")).expect("utf-8 path");
/// std::fs::write(&path, "a1 b2 c3").expect("seed file");
///
/// let pattern = Regex::new(r"\d").expect("pattern");
/// let count = replace_in_file(&path, &pattern, "#").expect("substitution");
///
/// assert_eq!(count, 3);
/// assert_eq!(std::fs::read_to_string(&path).expect("read back"), "a# b# c#");
/// ```
pub fn replace_in_file(path: &Utf8Path, pattern: &Regex, replacement: &str) -> Result<usize> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => UpdaterError::FileNotFound {
            path: path.to_owned(),
        },
        _ => UpdaterError::Read {
            path: path.to_owned(),
            source,
        },
    })?;

    let count = pattern.find_iter(&contents).count();
    let replaced = pattern.replace_all(&contents, NoExpand(replacement));
    debug!("{path}: {count} match(es) for /{}/", pattern.as_str());

    let write_error = |source: std::io::Error| UpdaterError::Write {
        path: path.to_owned(),
        source,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(replaced.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    Ok(count)
}
