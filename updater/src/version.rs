//! Nova version newtype.
//!
//! A Nova version is a dotted `major.minor.patch` triple of decimal integers,
//! optionally followed by a hyphen and a pre-release tag made of word
//! characters (e.g. `0.2.3-superbeta`).

use crate::error::{Result, UpdaterError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-\w+)?$").unwrap_or_else(|err| panic!("version pattern: {err}"))
});

/// A validated Nova version string.
///
/// # Examples
///
/// ```
/// use nova_updater::version::NovaVersion;
///
/// let version = NovaVersion::try_from("1.3.0-beta").expect("valid version");
/// assert_eq!(version.as_str(), "1.3.0-beta");
/// assert!(NovaVersion::try_from("1.3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NovaVersion(String);

impl NovaVersion {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn validate(value: &str) -> Result<()> {
    if VERSION_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(UpdaterError::InvalidVersion {
            value: value.to_owned(),
        })
    }
}

impl TryFrom<&str> for NovaVersion {
    type Error = UpdaterError;

    fn try_from(value: &str) -> Result<Self> {
        validate(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for NovaVersion {
    type Error = UpdaterError;

    fn try_from(value: String) -> Result<Self> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for NovaVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NovaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
