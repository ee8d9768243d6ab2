//! Files rewritten by the updater.
//!
//! The nova-rs project keeps its version in `Cargo.toml` and pins its
//! toolchain in CI configuration, the README, and `rust-toolchain`. The list
//! is ordered: toolchain files are rewritten in exactly this order.

use camino::{Utf8Path, Utf8PathBuf};

/// Manifest holding the canonical project version.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Files pinning the project toolchain, in processing order.
pub const TOOLCHAIN_FILES: [&str; 4] = [
    ".appveyor.yml",
    ".travis.yml",
    "README.md",
    "rust-toolchain",
];

/// The set of files a single invocation may rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTargets {
    manifest: Utf8PathBuf,
    toolchain_files: Vec<Utf8PathBuf>,
}

impl UpdateTargets {
    /// Create targets from an explicit manifest and ordered toolchain list.
    #[must_use]
    pub fn new(manifest: Utf8PathBuf, toolchain_files: Vec<Utf8PathBuf>) -> Self {
        Self {
            manifest,
            toolchain_files,
        }
    }

    /// Resolve every target relative to `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use nova_updater::targets::UpdateTargets;
    ///
    /// let targets = UpdateTargets::default().rooted_at(Utf8Path::new("/work/nova"));
    /// assert_eq!(targets.manifest().as_str(), "/work/nova/Cargo.toml");
    /// assert_eq!(targets.toolchain_files()[0].as_str(), "/work/nova/.appveyor.yml");
    /// ```
    #[must_use]
    pub fn rooted_at(&self, root: &Utf8Path) -> Self {
        Self {
            manifest: root.join(&self.manifest),
            toolchain_files: self
                .toolchain_files
                .iter()
                .map(|file| root.join(file))
                .collect(),
        }
    }

    /// Path of the version manifest.
    #[must_use]
    pub fn manifest(&self) -> &Utf8Path {
        &self.manifest
    }

    /// Toolchain files in processing order.
    #[must_use]
    pub fn toolchain_files(&self) -> &[Utf8PathBuf] {
        &self.toolchain_files
    }
}

impl Default for UpdateTargets {
    fn default() -> Self {
        Self::new(
            Utf8PathBuf::from(MANIFEST_FILE),
            TOOLCHAIN_FILES.iter().map(Utf8PathBuf::from).collect(),
        )
    }
}
