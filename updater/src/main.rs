//! nova-update CLI entrypoint.
//!
//! Checks the host toolchain, warns when run outside the project root, parses
//! the sub-command, and dispatches to the command handlers. Every failure
//! ends the process with exit code 1.

use camino::Utf8PathBuf;
use clap::Parser;
use nova_updater::cli::{Cli, Command};
use nova_updater::commands::{run_toolchain, run_version};
use nova_updater::error::Result;
use nova_updater::launcher::{check_project_root, check_runtime};
use nova_updater::logging::init_logging;
use nova_updater::targets::UpdateTargets;
use std::io::Write;

const DEFAULT_PROGRAM_NAME: &str = "nova-update";

fn main() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_owned());
    let mut stderr = std::io::stderr();

    // Runs before argument parsing so an unusable toolchain is reported first.
    if let Err(err) = check_runtime(&program) {
        write_stderr_line(&mut stderr, err);
        std::process::exit(1);
    }

    warn_outside_project_root(&mut stderr);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.print().is_err() {
                // Nothing else to report to.
            }
            std::process::exit(exit_code_for_parse_error(&err));
        }
    };
    init_logging(cli.verbosity);

    let mut stdout = std::io::stdout();
    let run_result = run(&cli, &UpdateTargets::default(), &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, targets: &UpdateTargets, stdout: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Version { nova_version } => run_version(targets, nova_version, stdout),
        Command::Toolchain { toolchain_version } => {
            run_toolchain(targets, toolchain_version, stdout)
        }
    }
}

fn warn_outside_project_root(stderr: &mut dyn Write) {
    let cwd = std::env::current_dir()
        .ok()
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."));
    check_project_root(&cwd, stderr);
}

/// Help and version requests succeed; every other parse failure exits 1.
fn exit_code_for_parse_error(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
