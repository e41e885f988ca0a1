use crate::config::{check_die_coverage, EntryConfig, TableFileConfig};
use crate::TableError;
use world_core::{Coins, ItemPrototype, Race, WeaponType};

/// Die the occupation table is rolled on
pub const OCCUPATION_DIE: u32 = 100;

/// The starting-occupation table (d100)
#[derive(Debug, Clone)]
pub struct OccupationTable {
    entries: Vec<OccupationEntry>,
}

/// A single starting occupation
#[derive(Debug, Clone)]
pub struct OccupationEntry {
    roll_min: u32,
    roll_max: u32,
    pub name: String,
    /// Starting gear spawned onto the character
    pub items: Vec<ItemPrototype>,
    /// Proficiencies granted in addition to Basic
    pub weapon_proficiencies: Vec<WeaponType>,
    /// Racial occupations force the character's race
    pub race: Option<Race>,
    /// Starting money added on top of the copper roll
    pub money: Option<Coins>,
}

impl OccupationEntry {
    fn from_config(config: EntryConfig) -> Result<Self, String> {
        if !config.effects.is_empty() || config.modifier_multiplier.is_some() {
            return Err(format!(
                "occupation '{}' sets augur-only fields",
                config.name
            ));
        }
        Ok(OccupationEntry {
            roll_min: config.roll.min(),
            roll_max: config.roll.max(),
            name: config.name,
            items: config.items,
            weapon_proficiencies: config.weapon_proficiencies,
            race: config.race,
            money: config.money,
        })
    }
}

impl OccupationTable {
    /// Parse and validate an occupation table from config
    pub(crate) fn from_config(config: TableFileConfig) -> Result<Self, String> {
        if config.table.die != OCCUPATION_DIE {
            return Err(format!(
                "occupation table must be rolled on a d{OCCUPATION_DIE}, got d{}",
                config.table.die
            ));
        }

        let mut entries: Vec<OccupationEntry> = config
            .entries
            .into_iter()
            .map(OccupationEntry::from_config)
            .collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.roll_min);

        let spans: Vec<(u32, u32, &str)> = entries
            .iter()
            .map(|e| (e.roll_min, e.roll_max, e.name.as_str()))
            .collect();
        check_die_coverage(OCCUPATION_DIE, &spans)?;

        Ok(OccupationTable { entries })
    }

    /// Look up the occupation for a d100 roll
    pub fn for_roll(&self, roll: i32) -> Result<&OccupationEntry, TableError> {
        self.entries
            .iter()
            .find(|e| roll >= e.roll_min as i32 && roll <= e.roll_max as i32)
            .ok_or(TableError::RollOutOfRange {
                table: "occupation",
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
