use crate::config::{check_die_coverage, EntryConfig, TableFileConfig};
use crate::TableError;
use world_core::AuraEffect;

/// Die the birth-augur table is rolled on
pub const AUGUR_DIE: u32 = 30;

/// The birth-augur table (d30)
#[derive(Debug, Clone)]
pub struct AugurTable {
    entries: Vec<AugurEntry>,
}

/// A single birth augur
#[derive(Debug, Clone)]
pub struct AugurEntry {
    roll_min: u32,
    roll_max: u32,
    pub name: String,
    pub desc: String,
    /// Attribute kinds the augur's aura modifies; empty means no aura
    pub effects: Vec<AuraEffect>,
    /// Scales the luck modifier per affected attribute (1 if unspecified)
    pub modifier_multiplier: Option<i32>,
}

impl AugurEntry {
    fn from_config(config: EntryConfig) -> Result<Self, String> {
        if !config.items.is_empty() || config.race.is_some() || config.money.is_some() {
            return Err(format!(
                "augur '{}' sets occupation-only fields",
                config.name
            ));
        }
        Ok(AugurEntry {
            roll_min: config.roll.min(),
            roll_max: config.roll.max(),
            name: config.name,
            desc: config.desc.unwrap_or_default(),
            effects: config.effects,
            modifier_multiplier: config.modifier_multiplier,
        })
    }
}

impl AugurTable {
    /// Parse and validate an augur table from config
    pub(crate) fn from_config(config: TableFileConfig) -> Result<Self, String> {
        if config.table.die != AUGUR_DIE {
            return Err(format!(
                "augur table must be rolled on a d{AUGUR_DIE}, got d{}",
                config.table.die
            ));
        }

        let mut entries: Vec<AugurEntry> = config
            .entries
            .into_iter()
            .map(AugurEntry::from_config)
            .collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.roll_min);

        let spans: Vec<(u32, u32, &str)> = entries
            .iter()
            .map(|e| (e.roll_min, e.roll_max, e.name.as_str()))
            .collect();
        check_die_coverage(AUGUR_DIE, &spans)?;

        Ok(AugurTable { entries })
    }

    /// Look up the augur for a d30 roll
    pub fn for_roll(&self, roll: i32) -> Result<&AugurEntry, TableError> {
        self.entries
            .iter()
            .find(|e| roll >= e.roll_min as i32 && roll <= e.roll_max as i32)
            .ok_or(TableError::RollOutOfRange {
                table: "augur",
                roll,
            })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
