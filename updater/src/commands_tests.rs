//! Tests for the `version` and `toolchain` command handlers.

use super::*;
use crate::targets::TOOLCHAIN_FILES;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = concat!(
    "[package]\n",
    "name = \"nova-rs\"\n",
    "version = \"0.0.0\"\n",
    "edition = \"2018\"\n",
    "\n",
    "[dependencies]\n",
    "log = \"0.4.8\"\n",
    "serde = { version = \"1.0.99\", features = [\"derive\"] }\n",
);

/// A scratch project root with resolved update targets.
struct Project {
    _temp: TempDir,
    root: Utf8PathBuf,
    targets: UpdateTargets,
}

impl Project {
    fn write(&self, name: &str, contents: &str) {
        fs::write(self.root.join(name), contents).expect("failed to seed project file");
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.join(name)).expect("failed to read project file")
    }

    fn seed_toolchain_files(&self, toolchain: &str) {
        for name in TOOLCHAIN_FILES {
            self.write(name, &format!("channel = {toolchain}\n"));
        }
    }
}

#[fixture]
fn project() -> Project {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(temp.path().to_owned()).expect("non-UTF8 temp path");
    let targets = UpdateTargets::default().rooted_at(&root);
    Project {
        _temp: temp,
        root,
        targets,
    }
}

fn version(value: &str) -> NovaVersion {
    NovaVersion::try_from(value).expect("valid test version")
}

fn toolchain(value: &str) -> ToolchainVersion {
    ToolchainVersion::try_from(value).expect("valid test toolchain")
}

fn output_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8(stdout.to_vec())
        .expect("stdout was not UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[rstest]
fn version_rewrites_only_the_version_line(project: Project) {
    project.write("Cargo.toml", MANIFEST);
    let mut stdout = Vec::new();

    run_version(&project.targets, &version("1.3.0-beta"), &mut stdout).expect("version update");

    let expected = MANIFEST.replace("version = \"0.0.0\"", "version = \"1.3.0-beta\"");
    assert_eq!(project.read("Cargo.toml"), expected);
}

#[rstest]
fn version_reports_update_and_reminders(project: Project) {
    project.write("Cargo.toml", MANIFEST);
    let mut stdout = Vec::new();

    run_version(&project.targets, &version("1.2.3"), &mut stdout).expect("version update");

    assert_eq!(
        output_lines(&stdout),
        [
            "Updated 1.2.3",
            "Please run `cargo update -p nova-rs` to update Cargo.lock",
            COMMIT_REMINDER,
        ]
    );
}

#[rstest]
fn version_reminder_falls_back_for_virtual_manifests(project: Project) {
    project.write("Cargo.toml", "[workspace]\nmembers = [\"a\"]\n");
    let mut stdout = Vec::new();

    run_version(&project.targets, &version("1.2.3"), &mut stdout).expect("version update");

    let lines = output_lines(&stdout);
    assert!(lines.contains(&"Please run `cargo update --workspace` to update Cargo.lock".to_owned()));
    assert_eq!(project.read("Cargo.toml"), "[workspace]\nmembers = [\"a\"]\n");
}

#[rstest]
fn version_fails_without_manifest(project: Project) {
    let mut stdout = Vec::new();

    let err = run_version(&project.targets, &version("1.2.3"), &mut stdout)
        .expect_err("expected missing manifest");

    assert!(matches!(err, UpdaterError::FileNotFound { .. }));
    assert!(stdout.is_empty());
}

#[rstest]
fn toolchain_rewrites_every_file_in_order(project: Project) {
    project.seed_toolchain_files("stable-2019-01-01");
    let mut stdout = Vec::new();

    run_toolchain(&project.targets, &toolchain("nightly-2020-06-15"), &mut stdout)
        .expect("toolchain update");

    for name in TOOLCHAIN_FILES {
        assert_eq!(project.read(name), "channel = nightly-2020-06-15\n");
    }
    let mut expected: Vec<String> = project
        .targets
        .toolchain_files()
        .iter()
        .map(|file| format!("Updated {file}"))
        .collect();
    expected.push(COMMIT_REMINDER.to_owned());
    assert_eq!(output_lines(&stdout), expected);
}

#[rstest]
fn toolchain_replaces_all_identifiers_in_a_file(project: Project) {
    project.seed_toolchain_files("stable-2019-01-01");
    project.write(
        "README.md",
        "Install nightly-2019-07-02:\n\n    rustup install nightly-2019-07-02\n",
    );
    let mut stdout = Vec::new();

    run_toolchain(&project.targets, &toolchain("beta-2021-03-04"), &mut stdout)
        .expect("toolchain update");

    assert_eq!(
        project.read("README.md"),
        "Install beta-2021-03-04:\n\n    rustup install beta-2021-03-04\n"
    );
}

#[rstest]
fn toolchain_is_idempotent(project: Project) {
    project.seed_toolchain_files("stable-2019-01-01");
    let mut stdout = Vec::new();
    let pinned = toolchain("nightly-2019-07-23");

    run_toolchain(&project.targets, &pinned, &mut stdout).expect("first update");
    let once: Vec<String> = TOOLCHAIN_FILES.iter().map(|name| project.read(name)).collect();
    run_toolchain(&project.targets, &pinned, &mut stdout).expect("second update");
    let twice: Vec<String> = TOOLCHAIN_FILES.iter().map(|name| project.read(name)).collect();

    assert_eq!(once, twice);
}

#[rstest]
fn toolchain_file_without_identifier_still_succeeds(project: Project) {
    project.seed_toolchain_files("stable-2019-01-01");
    project.write("README.md", "# nova-rs\n");
    let mut stdout = Vec::new();

    run_toolchain(&project.targets, &toolchain("nightly-2020-06-15"), &mut stdout)
        .expect("toolchain update");

    assert_eq!(project.read("README.md"), "# nova-rs\n");
    let readme = project.root.join("README.md");
    assert!(output_lines(&stdout).contains(&format!("Updated {readme}")));
}

#[rstest]
fn toolchain_aborts_at_missing_file_without_rollback(project: Project) {
    project.seed_toolchain_files("stable-2019-01-01");
    fs::remove_file(project.root.join(".travis.yml")).expect("remove second file");
    let mut stdout = Vec::new();

    let err = run_toolchain(&project.targets, &toolchain("nightly-2020-06-15"), &mut stdout)
        .expect_err("expected missing file");

    let missing = project.root.join(".travis.yml");
    assert!(matches!(err, UpdaterError::FileNotFound { ref path } if *path == missing));
    assert_eq!(project.read(".appveyor.yml"), "channel = nightly-2020-06-15\n");
    assert_eq!(project.read("README.md"), "channel = stable-2019-01-01\n");
    assert_eq!(project.read("rust-toolchain"), "channel = stable-2019-01-01\n");

    let appveyor = project.root.join(".appveyor.yml");
    assert_eq!(output_lines(&stdout), [format!("Updated {appveyor}")]);
}

#[rstest]
#[case::package("[package]\nname = \"nova-rs\"\n", Some("nova-rs"))]
#[case::workspace("[workspace]\nmembers = []\n", None)]
#[case::nameless_package("[package]\nversion = \"0.1.0\"\n", None)]
#[case::not_toml("version = ", None)]
fn manifest_package_name_reads_package_table(
    #[case] contents: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(manifest_package_name(contents).as_deref(), expected);
}
