//! tables_core - Static character-creation data tables
//!
//! Birth-augur (d30) and occupation (d100) tables loaded from TOML files.
//! Tables are validated when loaded: every face of the table's die must be
//! covered by exactly one entry, so a bad roll at creation time can only mean
//! the table was never loaded.

mod augur;
mod config;
mod occupation;
mod registry;

pub use augur::{AugurEntry, AugurTable};
pub use occupation::{OccupationEntry, OccupationTable};
pub use registry::TableRegistry;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error looking up a table entry by roll
#[derive(Debug, Error)]
pub enum TableError {
    #[error("No {table} table has been loaded")]
    MissingTable { table: &'static str },
    #[error("Roll {roll} has no entry in the {table} table")]
    RollOutOfRange { table: &'static str, roll: i32 },
}
