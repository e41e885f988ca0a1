use serde::Deserialize;
use world_core::{AuraEffect, Coins, ItemPrototype, Race, WeaponType};

/// TOML configuration for a table file
#[derive(Debug, Deserialize)]
pub struct TableFileConfig {
    pub table: TableConfig,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// Header describing the table itself
#[derive(Debug, Deserialize)]
pub struct TableConfig {
    pub kind: TableKind,
    /// Die the table is rolled on; entries must cover 1..=die exactly
    pub die: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Augur,
    Occupation,
}

/// Configuration for a single table entry
///
/// Augur and occupation entries share a file shape; each table kind reads the
/// fields it cares about and rejects files that set the wrong ones.
#[derive(Debug, Deserialize)]
pub struct EntryConfig {
    pub roll: RollConfig,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,

    // Augur-specific fields
    #[serde(default)]
    pub effects: Vec<AuraEffect>,
    #[serde(default)]
    pub modifier_multiplier: Option<i32>,

    // Occupation-specific fields
    #[serde(default)]
    pub items: Vec<ItemPrototype>,
    #[serde(default)]
    pub weapon_proficiencies: Vec<WeaponType>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub money: Option<Coins>,
}

/// A roll can be a single face or an inclusive [min, max] range
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RollConfig {
    Single(u32),
    Range([u32; 2]),
}

impl RollConfig {
    pub fn min(&self) -> u32 {
        match self {
            RollConfig::Single(v) => *v,
            RollConfig::Range([min, _]) => *min,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            RollConfig::Single(v) => *v,
            RollConfig::Range([_, max]) => *max,
        }
    }
}

/// Check that `spans` (sorted by caller or not) cover 1..=die exactly once
///
/// Returns a human-readable message on gap, overlap, or out-of-range spans.
pub(crate) fn check_die_coverage(die: u32, spans: &[(u32, u32, &str)]) -> Result<(), String> {
    let mut sorted: Vec<_> = spans.to_vec();
    sorted.sort_by_key(|(min, _, _)| *min);

    let mut expected = 1u32;
    for (min, max, name) in sorted {
        if min > max {
            return Err(format!("'{name}' has an inverted roll range {min}-{max}"));
        }
        if min < expected {
            return Err(format!("'{name}' overlaps an earlier entry at roll {min}"));
        }
        if min > expected {
            return Err(format!("rolls {expected}-{} have no entry", min - 1));
        }
        if max > die {
            return Err(format!("'{name}' extends past the d{die} at roll {max}"));
        }
        expected = max + 1;
    }
    if expected != die + 1 {
        return Err(format!("rolls {expected}-{die} have no entry"));
    }
    Ok(())
}
