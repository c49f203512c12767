//! Application orchestrator.
//! Builds the config from flags, initializes logging, installs the interrupt
//! handler, checks preconditions, runs the requested walk and turns the
//! outcome into stdout/stderr text and an exit status.

use anyhow::Result;
use tracing::{debug, error, warn};

use treewalk::cli::{Args, Command};
use treewalk::config::{validate_destination, validate_source};
use treewalk::output as out;
use treewalk::{Config, TreeError, count_dirs, count_files, mirror, move_tree, shutdown, total_size};

use crate::logging::init_tracing;

/// Run the CLI application and return the process exit status.
pub fn run(args: Args) -> i32 {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    let guard = match init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return 1;
        }
    };

    if let Err(e) = ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Received interrupt; stopping after the current entry...");
    }) {
        warn!(error = %e, "Could not install interrupt handler");
    }

    debug!("Starting treewalk: {:?}", args);

    let code = match dispatch(&cfg, &args.command) {
        Ok(()) => 0,
        Err(e) => report_failure(&args.command, &e),
    };

    // Flush the file appender before the process exits.
    drop(guard);
    code
}

fn dispatch(cfg: &Config, command: &Command) -> Result<()> {
    validate_source(command.source())?;
    if let Some(dest) = command.destination() {
        validate_destination(dest)?;
    }

    match command {
        Command::CountFiles { source } => {
            let n = count_files(cfg, source)?;
            out::print_user(&format!("Total files found: {n}"));
        }
        Command::CountDirs { source } => {
            let n = count_dirs(cfg, source)?;
            out::print_user(&format!("Total directories found: {n}"));
        }
        Command::Size { source } => {
            let total = total_size(cfg, source)?;
            if total == 0 {
                out::print_user("No files in the provided path and its sub-paths.");
            } else {
                out::print_user(&format!("Total size of all files: {total} bytes"));
            }
        }
        Command::Copy {
            source,
            destination,
            exclude,
        } => {
            let report = mirror(cfg, source, destination, exclude.as_deref())?;
            if cfg.dry_run {
                out::print_info(&format!(
                    "Dry-run: would create {} directories and copy {} files ({} bytes) into '{}'",
                    report.dirs_created,
                    report.files_copied,
                    report.bytes_copied,
                    report.destination.display()
                ));
            }
            out::print_success(&format!(
                "Copy from {} to {} finished properly",
                source.display(),
                destination.display()
            ));
        }
        Command::Move {
            source,
            destination,
        } => {
            let report = move_tree(cfg, source, destination)?;
            if cfg.dry_run {
                out::print_info(&format!(
                    "Dry-run: would move '{}' -> '{}'",
                    source.display(),
                    report.destination.display()
                ));
            }
            out::print_success(&format!(
                "Move from {} to {} finished properly",
                source.display(),
                destination.display()
            ));
        }
    }
    Ok(())
}

/// One-line description of what failed, in the tool's usual wording.
fn failure_summary(command: &Command) -> String {
    match command {
        Command::CountFiles { source } => {
            format!("Error counting files in directory: {}", source.display())
        }
        Command::CountDirs { source } => {
            format!("Error counting directories in directory: {}", source.display())
        }
        Command::Size { source } => format!(
            "Error calculating total file size in directory: {}",
            source.display()
        ),
        Command::Copy {
            source,
            destination,
            ..
        } => format!(
            "Error copying directory from {} to {}",
            source.display(),
            destination.display()
        ),
        Command::Move {
            source,
            destination,
        } => format!(
            "Error moving directory from {} to {}",
            source.display(),
            destination.display()
        ),
    }
}

/// Log and print a failure; return the exit status for it.
fn report_failure(command: &Command, e: &anyhow::Error) -> i32 {
    let op = command.name();
    let Some(te) = e.downcast_ref::<TreeError>() else {
        error!(op, error = ?e, "Operation failed");
        out::print_error(&format!("{}: {:#}", failure_summary(command), e));
        return 1;
    };

    error!(op, code = te.code(), kind = te.kind(), error = %te, "Operation failed");
    match te {
        // Preconditions speak for themselves; nothing was attempted.
        TreeError::SourceInvalid(_)
        | TreeError::DestinationInvalid(_)
        | TreeError::SourceIsSymlink(_) => {
            out::print_error(&te.to_string());
        }
        _ => {
            out::print_error(&format!("{}: {}", failure_summary(command), te));
        }
    }
    if te.leaves_partial_state() && matches!(command, Command::Copy { .. } | Command::Move { .. }) {
        out::print_warn("Changes made before the failure were not rolled back.");
    }
    te.exit_code()
}
