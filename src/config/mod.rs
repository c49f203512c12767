//! Runtime configuration.
//! Settings come from CLI flags only; this module holds the typed `Config`,
//! the log level, and the precondition checks run before any walk.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};
pub use validate::{validate_destination, validate_source};
