//! Character record and derived-attribute accessors

use crate::aura::Aura;
use crate::dice::ability_modifier;
use serde::{Deserialize, Serialize};
use world_core::{Alignment, AuraEffect, Coins, Language, Race, WeaponType};

/// A player character
///
/// Typed fields replace the host framework's per-object attribute bag; the
/// framework persists this record, this crate owns its meaning. Base scores
/// stay untouched after creation; [`Character::modified`] layers aura deltas
/// on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub alignment: Alignment,
    pub level: i32,
    pub xp: i32,

    // Base scores, each rolled on 3d6 at creation
    pub strength: i32,
    pub agility: i32,
    pub stamina: i32,
    pub personality: i32,
    pub intelligence: i32,
    pub luck: i32,

    /// Base hit points, 1d4 at creation
    pub hp: i32,
    pub ac: i32,
    pub speed: i32,

    pub race: Race,
    pub age: i32,
    pub coins: Coins,
    /// Always contains Common; ordered, no duplicates
    pub known_languages: Vec<Language>,
    /// Always contains Basic; ordered, no duplicates
    pub weapon_proficiencies: Vec<WeaponType>,
    pub birth_augur: String,
    pub occupation: String,

    /// Active auras, in the order they were attached
    pub auras: Vec<Aura>,
    pub current_hp: i32,
}

impl Character {
    /// The unmodified base value for an effect kind
    pub fn base(&self, kind: AuraEffect) -> i32 {
        match kind {
            AuraEffect::Hp => self.hp,
            AuraEffect::Strength => self.strength,
            AuraEffect::Agility => self.agility,
            AuraEffect::Stamina => self.stamina,
            AuraEffect::Personality => self.personality,
            AuraEffect::Intelligence => self.intelligence,
            AuraEffect::Luck => self.luck,
            AuraEffect::Speed => self.speed,
            AuraEffect::Ac => self.ac,
        }
    }

    /// Base value plus every aura delta tagged with `kind`
    ///
    /// HP and AC additionally gain the ability-modifier of modified stamina
    /// and modified agility respectively. That recursion is one level deep:
    /// stamina and agility have no secondary bonus of their own.
    pub fn modified(&self, kind: AuraEffect) -> i32 {
        let secondary = match kind {
            AuraEffect::Hp => ability_modifier(self.modified(AuraEffect::Stamina)),
            AuraEffect::Ac => ability_modifier(self.modified(AuraEffect::Agility)),
            _ => 0,
        };
        self.base(kind) + secondary + self.aura_modifier(kind)
    }

    /// Sum of aura deltas for one effect kind, in attachment order
    fn aura_modifier(&self, kind: AuraEffect) -> i32 {
        self.auras.iter().map(|aura| aura.modifier_for(kind)).sum()
    }

    pub fn knows_language(&self, language: Language) -> bool {
        self.known_languages.contains(&language)
    }

    pub fn is_proficient_with(&self, weapon: WeaponType) -> bool {
        self.weapon_proficiencies.contains(&weapon)
    }
}
