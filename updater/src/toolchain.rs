//! Rust toolchain identifiers pinned by the project.
//!
//! A toolchain identifier is a release channel followed by an ISO-8601 date,
//! e.g. `nightly-2019-07-23`. The date is checked against the pattern only;
//! it is not validated as a real calendar day.

use crate::error::{Result, UpdaterError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Pattern matching a toolchain identifier anywhere inside a text blob.
pub(crate) static TOOLCHAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(stable|beta|nightly)-\d{4}-\d{2}-\d{2}")
        .unwrap_or_else(|err| panic!("toolchain pattern: {err}"))
});

static EXACT_TOOLCHAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(stable|beta|nightly)-(\d{4}-\d{2}-\d{2})$")
        .unwrap_or_else(|err| panic!("toolchain pattern: {err}"))
});

/// Rust release channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The stable channel.
    Stable,
    /// The beta channel.
    Beta,
    /// The nightly channel.
    Nightly,
}

impl Channel {
    /// Return the channel name as used in toolchain identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Nightly => "nightly",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "stable" => Some(Self::Stable),
            "beta" => Some(Self::Beta),
            "nightly" => Some(Self::Nightly),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, date-pinned toolchain identifier.
///
/// # Examples
///
/// ```
/// use nova_updater::toolchain::{Channel, ToolchainVersion};
///
/// let toolchain = ToolchainVersion::try_from("nightly-2019-07-23").expect("valid toolchain");
/// assert_eq!(toolchain.channel(), Channel::Nightly);
/// assert_eq!(toolchain.date(), "2019-07-23");
/// assert!(ToolchainVersion::try_from("nightly").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolchainVersion {
    channel: Channel,
    date: String,
}

impl ToolchainVersion {
    /// Return the release channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Return the `YYYY-MM-DD` date part.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl TryFrom<&str> for ToolchainVersion {
    type Error = UpdaterError;

    fn try_from(value: &str) -> Result<Self> {
        let invalid = || UpdaterError::InvalidToolchain {
            value: value.to_owned(),
        };
        let captures = EXACT_TOOLCHAIN_PATTERN.captures(value).ok_or_else(invalid)?;
        let channel = captures
            .get(1)
            .and_then(|name| Channel::from_name(name.as_str()))
            .ok_or_else(invalid)?;
        let date = captures.get(2).ok_or_else(invalid)?.as_str().to_owned();
        Ok(Self { channel, date })
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.channel, self.date)
    }
}
