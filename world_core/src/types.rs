use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Attribute kinds an aura can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuraEffect {
    Hp,
    Strength,
    Agility,
    Stamina,
    Personality,
    Intelligence,
    Luck,
    Speed,
    Ac,
}

impl AuraEffect {
    /// Get all effect kinds
    pub fn all() -> &'static [AuraEffect] {
        &[
            AuraEffect::Hp,
            AuraEffect::Strength,
            AuraEffect::Agility,
            AuraEffect::Stamina,
            AuraEffect::Personality,
            AuraEffect::Intelligence,
            AuraEffect::Luck,
            AuraEffect::Speed,
            AuraEffect::Ac,
        ]
    }
}

impl fmt::Display for AuraEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuraEffect::Hp => write!(f, "HP"),
            AuraEffect::Strength => write!(f, "Strength"),
            AuraEffect::Agility => write!(f, "Agility"),
            AuraEffect::Stamina => write!(f, "Stamina"),
            AuraEffect::Personality => write!(f, "Personality"),
            AuraEffect::Intelligence => write!(f, "Intelligence"),
            AuraEffect::Luck => write!(f, "Luck"),
            AuraEffect::Speed => write!(f, "Speed"),
            AuraEffect::Ac => write!(f, "AC"),
        }
    }
}

/// Playable races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    #[default]
    Human,
    Dwarf,
    Elf,
    Halfling,
}

impl Race {
    /// Unmodified movement speed for the race (short races move slower)
    pub fn base_speed(&self) -> i32 {
        match self {
            Race::Dwarf | Race::Halfling => 20,
            Race::Human | Race::Elf => 30,
        }
    }

    /// Inclusive starting-age range rolled at creation
    pub fn age_range(&self) -> RangeInclusive<i32> {
        match self {
            Race::Human => 18..=45,
            Race::Dwarf => 37..=75,
            Race::Elf => 35..=100,
            Race::Halfling => 20..=55,
        }
    }

    /// Racial language granted to bright characters; humans only speak Common
    pub fn native_language(&self) -> Option<Language> {
        match self {
            Race::Human => None,
            Race::Dwarf => Some(Language::Dwarvish),
            Race::Elf => Some(Language::Elvish),
            Race::Halfling => Some(Language::Halfling),
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Race::Human => write!(f, "Human"),
            Race::Dwarf => write!(f, "Dwarf"),
            Race::Elf => write!(f, "Elf"),
            Race::Halfling => write!(f, "Halfling"),
        }
    }
}

/// Languages a character can know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Common,
    Dwarvish,
    Elvish,
    Halfling,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Common => write!(f, "Common"),
            Language::Dwarvish => write!(f, "Dwarvish"),
            Language::Elvish => write!(f, "Elvish"),
            Language::Halfling => write!(f, "Halfling"),
        }
    }
}

/// Weapon proficiency categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Basic,
    Sword,
    Axe,
    Dagger,
    Club,
    Staff,
    Spear,
    Sling,
    Bow,
    Mace,
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponType::Basic => write!(f, "Basic"),
            WeaponType::Sword => write!(f, "Sword"),
            WeaponType::Axe => write!(f, "Axe"),
            WeaponType::Dagger => write!(f, "Dagger"),
            WeaponType::Club => write!(f, "Club"),
            WeaponType::Staff => write!(f, "Staff"),
            WeaponType::Spear => write!(f, "Spear"),
            WeaponType::Sling => write!(f, "Sling"),
            WeaponType::Bow => write!(f, "Bow"),
            WeaponType::Mace => write!(f, "Mace"),
        }
    }
}

/// Moral alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Lawful,
    #[default]
    Neutral,
    Chaotic,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Lawful => write!(f, "Lawful"),
            Alignment::Neutral => write!(f, "Neutral"),
            Alignment::Chaotic => write!(f, "Chaotic"),
        }
    }
}

/// Carried currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coins {
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub copper: i64,
}

impl Coins {
    /// Add another purse to this one
    pub fn add(&mut self, other: Coins) {
        self.gold = self.gold.saturating_add(other.gold);
        self.silver = self.silver.saturating_add(other.silver);
        self.copper = self.copper.saturating_add(other.copper);
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}gp {}sp {}cp", self.gold, self.silver, self.copper)
    }
}
