//! Typed error definitions for treewalk.
//! Provides the well-known failure modes of a walk so the CLI can log a stable
//! kind/code and pick an exit status.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Source directory does not exist or is not a directory: {0}")]
    SourceInvalid(PathBuf),

    #[error("Destination directory does not exist or is not a directory: {0}")]
    DestinationInvalid(PathBuf),

    #[error("Source directory is a symbolic link; refusing to copy or move through it: {0}")]
    SourceIsSymlink(PathBuf),

    #[error("Refusing to mirror '{src}' into its own subtree '{dest}'")]
    DestinationInsideSource { src: PathBuf, dest: PathBuf },

    #[error("Traversal failed at {path}: {message}")]
    Traversal { path: PathBuf, message: String },

    #[error("Only .txt, .c and .pdf extensions can be excluded (got '{0}')")]
    UnsupportedExclusion(String),

    #[error("Copy failed {src} -> {dest}: {context}")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        context: String,
    },

    #[error("Deletion failed at {path}: {context}")]
    RemoveFailed { path: PathBuf, context: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl TreeError {
    /// Stable numeric code used in structured logs.
    pub fn code(&self) -> u16 {
        match self {
            TreeError::SourceInvalid(_) => 10,
            TreeError::DestinationInvalid(_) => 11,
            TreeError::DestinationInsideSource { .. } => 12,
            TreeError::SourceIsSymlink(_) => 13,
            TreeError::Traversal { .. } => 20,
            TreeError::UnsupportedExclusion(_) => 30,
            TreeError::CopyFailed { .. } => 31,
            TreeError::RemoveFailed { .. } => 40,
            TreeError::Interrupted => 130,
        }
    }

    /// Short snake_case name for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TreeError::SourceInvalid(_) => "source_invalid",
            TreeError::DestinationInvalid(_) => "destination_invalid",
            TreeError::DestinationInsideSource { .. } => "destination_inside_source",
            TreeError::SourceIsSymlink(_) => "source_is_symlink",
            TreeError::Traversal { .. } => "traversal",
            TreeError::UnsupportedExclusion(_) => "unsupported_exclusion",
            TreeError::CopyFailed { .. } => "copy_failed",
            TreeError::RemoveFailed { .. } => "remove_failed",
            TreeError::Interrupted => "interrupted",
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            TreeError::Interrupted => 130,
            _ => 1,
        }
    }

    /// True when the failure may have left a partially written destination
    /// or a partially removed source behind.
    pub fn leaves_partial_state(&self) -> bool {
        matches!(
            self,
            TreeError::UnsupportedExclusion(_)
                | TreeError::CopyFailed { .. }
                | TreeError::RemoveFailed { .. }
                | TreeError::Interrupted
        )
    }
}
