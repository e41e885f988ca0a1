use crate::augur::AugurTable;
use crate::config::{TableFileConfig, TableKind};
use crate::occupation::OccupationTable;
use crate::{AugurEntry, ConfigError, OccupationEntry, TableError};
use std::path::Path;
use tracing::debug;

/// Registry of character-creation tables, loaded from TOML files
#[derive(Debug, Default)]
pub struct TableRegistry {
    augurs: Option<AugurTable>,
    occupations: Option<OccupationTable>,
}

impl TableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all table files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    /// Load tables from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single table file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: TableFileConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        let kind = config.table.kind;
        match kind {
            TableKind::Augur => {
                let table = AugurTable::from_config(config).map_err(|message| {
                    ConfigError::Validation {
                        message,
                        path: path.to_path_buf(),
                    }
                })?;
                debug!(path = %path.display(), entries = table.len(), "loaded augur table");
                self.augurs = Some(table);
            }
            TableKind::Occupation => {
                let table = OccupationTable::from_config(config).map_err(|message| {
                    ConfigError::Validation {
                        message,
                        path: path.to_path_buf(),
                    }
                })?;
                debug!(path = %path.display(), entries = table.len(), "loaded occupation table");
                self.occupations = Some(table);
            }
        }
        Ok(())
    }

    /// Look up the birth augur for a d30 roll
    pub fn augur_for_roll(&self, roll: i32) -> Result<&AugurEntry, TableError> {
        self.augurs
            .as_ref()
            .ok_or(TableError::MissingTable { table: "augur" })?
            .for_roll(roll)
    }

    /// Look up the occupation for a d100 roll
    pub fn occupation_for_roll(&self, roll: i32) -> Result<&OccupationEntry, TableError> {
        self.occupations
            .as_ref()
            .ok_or(TableError::MissingTable {
                table: "occupation",
            })?
            .for_roll(roll)
    }

    /// Whether both tables have been loaded
    pub fn is_complete(&self) -> bool {
        self.augurs.is_some() && self.occupations.is_some()
    }
}
