//! CLI definition and parsing.
//!
//! Notes:
//! - Each operation is a subcommand with a short alias (`nf`, `nd`, `sf`,
//!   `cpx`, `mv`). The historical single-dash spellings (`-nf`, `-cpx`, ...)
//!   are rewritten to those aliases before clap parses the arguments.
//! - Logging/behavior flags are global and may appear before or after the
//!   operation.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};
use crate::fs_ops::Matching;

/// Historical operation flags and the subcommand alias each maps to.
pub const LEGACY_FLAGS: [(&str, &str); 5] = [
    ("-nf", "nf"),
    ("-nd", "nd"),
    ("-sf", "sf"),
    ("-cpx", "cpx"),
    ("-mv", "mv"),
];

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Count, size, copy and move directory trees",
    after_help = "Legacy forms are accepted too:\n  treewalk -nf <source_dir>\n  treewalk -nd <source_dir>\n  treewalk -sf <source_dir>\n  treewalk -cpx <source_dir> <destination_dir> [.pdf|.txt|.c]\n  treewalk -mv <source_dir> <destination_dir>"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON on stderr.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also append logs to this file.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Dry-run: walk and log actions but do not modify the filesystem.
    #[arg(long, global = true, help = "Show what copy/move would do without touching files")]
    pub dry_run: bool,

    /// Maximum number of directory handles a walk keeps open.
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_open: Option<u32>,

    /// Exclude only files whose name ends with the extension (default: the
    /// extension may appear anywhere in the path).
    #[arg(long, global = true, help = "Match the excluded extension as a file-name suffix")]
    pub suffix_match: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count regular files recursively.
    #[command(name = "count-files", visible_alias = "nf")]
    CountFiles {
        #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
        source: PathBuf,
    },

    /// Count directories recursively, not counting SOURCE_DIR itself.
    #[command(name = "count-dirs", visible_alias = "nd")]
    CountDirs {
        #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
        source: PathBuf,
    },

    /// Sum the sizes of regular files recursively.
    #[command(name = "size", visible_alias = "sf")]
    Size {
        #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
        source: PathBuf,
    },

    /// Copy SOURCE_DIR to DESTINATION_DIR/<name of SOURCE_DIR>.
    #[command(name = "copy", visible_alias = "cpx")]
    Copy {
        #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
        source: PathBuf,
        #[arg(value_name = "DESTINATION_DIR", value_hint = ValueHint::DirPath)]
        destination: PathBuf,
        /// Skip files matching this extension (.pdf, .txt or .c).
        #[arg(value_name = "EXTENSION")]
        exclude: Option<String>,
    },

    /// Copy, then delete SOURCE_DIR once the copy has fully succeeded.
    #[command(name = "move", visible_alias = "mv")]
    Move {
        #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
        source: PathBuf,
        #[arg(value_name = "DESTINATION_DIR", value_hint = ValueHint::DirPath)]
        destination: PathBuf,
    },
}

impl Command {
    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CountFiles { .. } => "count-files",
            Command::CountDirs { .. } => "count-dirs",
            Command::Size { .. } => "size",
            Command::Copy { .. } => "copy",
            Command::Move { .. } => "move",
        }
    }

    pub fn source(&self) -> &Path {
        match self {
            Command::CountFiles { source }
            | Command::CountDirs { source }
            | Command::Size { source }
            | Command::Copy { source, .. }
            | Command::Move { source, .. } => source.as_path(),
        }
    }

    pub fn destination(&self) -> Option<&Path> {
        match self {
            Command::Copy { destination, .. } | Command::Move { destination, .. } => {
                Some(destination.as_path())
            }
            _ => None,
        }
    }
}

/// Rewrite the first legacy operation flag into its subcommand alias.
/// argv[0] is never touched; later occurrences are left for clap to judge.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rewritten = false;
    args.into_iter()
        .map(|a| a.into())
        .enumerate()
        .map(|(i, arg): (usize, OsString)| {
            if i == 0 || rewritten {
                return arg;
            }
            match LEGACY_FLAGS.iter().find(|(flag, _)| arg.as_os_str() == OsStr::new(flag)) {
                Some((_, alias)) => {
                    rewritten = true;
                    OsString::from(*alias)
                }
                None => arg,
            }
        })
        .collect()
}

impl Args {
    /// Parse an argument list that may use the legacy flag spellings.
    pub fn try_parse_legacy_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_args(args))
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI flags to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(n) = self.max_open {
            cfg.max_open = Some(n as usize);
        }
        if self.suffix_match {
            cfg.matching = Matching::Suffix;
        }
    }
}

pub fn parse() -> Args {
    Args::parse_from(normalize_legacy_args(std::env::args_os()))
}
