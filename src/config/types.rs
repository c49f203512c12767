//! Core configuration types.
//! - Config holds runtime settings with defaults suited to a one-shot CLI run.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::Matching;
use crate::walk::WalkOptions;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; stdout carries the results)
    #[default]
    Quiet,
    /// One line per completed operation
    Normal,
    /// Per-entry actions (copies, removals)
    Info,
    /// Everything, including every visited entry
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration shared by every operation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit logs as JSON lines
    pub json: bool,
    /// Walk and log, but do not create, copy or remove anything
    pub dry_run: bool,
    /// Override for the open-directory bound of every walk
    pub max_open: Option<usize>,
    /// How an excluded extension is matched against file paths
    pub matching: Matching,
}

impl Config {
    /// Walk options for an operation whose built-in bound is `default_max_open`.
    pub fn walk_options(&self, default_max_open: usize) -> WalkOptions {
        WalkOptions::new(self.max_open.unwrap_or(default_max_open))
    }
}
