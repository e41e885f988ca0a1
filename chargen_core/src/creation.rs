//! One-shot character creation
//!
//! Rolls base scores, birth augur, occupation, starting gear and money.
//! Creation is all-or-nothing: any table or spawn failure aborts with an
//! error and the caller discards the partial character.

use crate::aura::Aura;
use crate::character::Character;
use crate::dice::{ability_modifier, DiceRoller};
use tables_core::{TableError, TableRegistry};
use thiserror::Error;
use tracing::{debug, info};
use world_core::{Alignment, AuraEffect, Coins, ItemPrototype, Language, Race, WeaponType};

/// Error from the host framework's object spawner
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to spawn '{key}': {message}")]
    Failed { key: String, message: String },
}

/// Error during character creation
#[derive(Debug, Error)]
pub enum CreationError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// The host framework's prototype-spawning primitive
///
/// Implementations create a live object from the template and place it on the
/// character being created.
pub trait ItemSpawner {
    fn spawn(&mut self, prototype: &ItemPrototype) -> Result<(), SpawnError>;
}

/// Spawner that records prototypes instead of creating objects
///
/// Suitable for tests and offline harnesses.
#[derive(Debug, Default)]
pub struct CollectingSpawner {
    pub spawned: Vec<ItemPrototype>,
}

impl CollectingSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemSpawner for CollectingSpawner {
    fn spawn(&mut self, prototype: &ItemPrototype) -> Result<(), SpawnError> {
        self.spawned.push(prototype.clone());
        Ok(())
    }
}

impl Character {
    /// Roll a brand-new character
    ///
    /// Single pass: base scores and hp, birth augur (and its aura when the
    /// luck modifier is non-zero), starting languages and proficiencies,
    /// copper, occupation grants, race, age, and finally `current_hp` from
    /// the fully modified HP.
    pub fn roll_new<D, S>(
        name: impl Into<String>,
        dice: &mut D,
        tables: &TableRegistry,
        spawner: &mut S,
    ) -> Result<Character, CreationError>
    where
        D: DiceRoller,
        S: ItemSpawner,
    {
        let mut character = Character {
            name: name.into(),
            alignment: Alignment::Neutral, // TODO: alignment selection at creation
            level: 0,
            xp: 0,
            strength: dice.roll(3, 6),
            agility: dice.roll(3, 6),
            stamina: dice.roll(3, 6),
            personality: dice.roll(3, 6),
            intelligence: dice.roll(3, 6),
            luck: dice.roll(3, 6),
            hp: dice.roll(1, 4),
            ac: 0,
            speed: 30,
            race: Race::Human,
            age: 0,
            coins: Coins::default(),
            known_languages: vec![Language::Common],
            weapon_proficiencies: vec![WeaponType::Basic],
            birth_augur: String::new(),
            occupation: String::new(),
            auras: Vec::new(),
            current_hp: 0,
        };

        let augur = tables.augur_for_roll(dice.roll(1, 30))?;
        character.birth_augur = augur.name.clone();

        let luck_modifier = ability_modifier(character.luck);
        if !augur.effects.is_empty() && luck_modifier != 0 {
            let multiplier = augur.modifier_multiplier.unwrap_or(1);
            let mut aura = Aura::new(augur.name.clone(), augur.desc.clone());
            for kind in &augur.effects {
                aura = aura.with_modifier(*kind, luck_modifier * multiplier);
            }
            debug!(aura = %aura.modifier_description(), "birth augur granted an aura");
            character.auras.push(aura);
        }

        character.coins.copper = dice.roll(5, 12) as i64;

        let occupation = tables.occupation_for_roll(dice.roll(1, 100))?;
        character.occupation = occupation.name.clone();

        for weapon in &occupation.weapon_proficiencies {
            if !character.weapon_proficiencies.contains(weapon) {
                character.weapon_proficiencies.push(*weapon);
            }
        }

        for prototype in &occupation.items {
            spawner.spawn(prototype)?;
        }

        character.race = occupation.race.unwrap_or_default();
        character.speed = character.race.base_speed();

        let ages = character.race.age_range();
        character.age = dice.roll_range(*ages.start(), *ages.end());

        if let Some(money) = occupation.money {
            character.coins.add(money);
        }

        if character.intelligence >= 8 {
            if let Some(native) = character.race.native_language() {
                if !character.known_languages.contains(&native) {
                    character.known_languages.push(native);
                }
            }
        }

        // Last, so the omen aura and stamina bonus are reflected
        character.current_hp = character.modified(AuraEffect::Hp);

        info!(
            name = %character.name,
            occupation = %character.occupation,
            augur = %character.birth_augur,
            race = %character.race,
            "rolled a new character"
        );
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, ScriptedDice};
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_table(dir: &Path, name: &str, content: &str) {
        let path = dir.join(format!("{}.toml", name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    /// Registry where every augur roll hits one entry and every occupation
    /// roll hits one entry, keeping scripted sequences simple
    fn single_entry_registry(
        augur_effects: &str,
        augur_multiplier: Option<i32>,
        occupation_extra: &str,
    ) -> (TempDir, TableRegistry) {
        let dir = TempDir::new().unwrap();
        let multiplier = augur_multiplier
            .map(|m| format!("modifier_multiplier = {m}\n"))
            .unwrap_or_default();
        write_table(
            dir.path(),
            "augurs",
            &format!(
                r#"
[table]
kind = "augur"
die = 30

[[entries]]
roll = [1, 30]
name = "Harsh winter"
desc = "Born in the teeth of a bitter winter."
effects = {augur_effects}
{multiplier}"#
            ),
        );
        write_table(
            dir.path(),
            "occupations",
            &format!(
                r#"
[table]
kind = "occupation"
die = 100

[[entries]]
roll = [1, 100]
name = "Gongfarmer"
{occupation_extra}

[[entries.items]]
key = "trowel"
desc = "a crusted trowel"
"#
            ),
        );
        let registry = TableRegistry::load(dir.path()).unwrap();
        (dir, registry)
    }

    /// Scripted creation: scores, hp, augur roll, copper, occupation roll, age
    fn script(scores: [i32; 6], hp: i32, augur: i32, copper: i32, occupation: i32, age: i32) -> ScriptedDice {
        ScriptedDice::new([
            scores[0], scores[1], scores[2], scores[3], scores[4], scores[5],
            hp, augur, copper, occupation, age,
        ])
    }

    #[test]
    fn test_augur_aura_scales_with_luck_modifier() {
        // Luck 17 has a +2 modifier; the augur affects strength with no multiplier
        let (_dir, registry) = single_entry_registry(r#"["strength"]"#, None, "");
        let mut dice = script([10, 10, 10, 10, 10, 17], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Aldrik", &mut dice, &registry, &mut spawner).unwrap();

        assert_eq!(character.auras.len(), 1);
        assert_eq!(
            character.auras[0].modifiers(),
            &[(AuraEffect::Strength, 2)]
        );
        assert_eq!(character.modified(AuraEffect::Strength), 12);
        assert_eq!(character.strength, 10);
    }

    #[test]
    fn test_zero_luck_modifier_grants_no_aura() {
        let (_dir, registry) = single_entry_registry(r#"["strength"]"#, None, "");
        // Luck 10 has a 0 modifier
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Berrin", &mut dice, &registry, &mut spawner).unwrap();
        assert!(character.auras.is_empty());
    }

    #[test]
    fn test_effectless_augur_grants_no_aura() {
        let (_dir, registry) = single_entry_registry("[]", None, "");
        let mut dice = script([10, 10, 10, 10, 10, 18], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Corvin", &mut dice, &registry, &mut spawner).unwrap();
        assert!(character.auras.is_empty());
        assert_eq!(character.birth_augur, "Harsh winter");
    }

    #[test]
    fn test_modifier_multiplier_scales_the_aura() {
        // Luck 3 has a -3 modifier; speed augurs multiply by 5
        let (_dir, registry) = single_entry_registry(r#"["speed"]"#, Some(5), "");
        let mut dice = script([10, 10, 10, 10, 10, 3], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Darl", &mut dice, &registry, &mut spawner).unwrap();
        assert_eq!(character.auras[0].modifiers(), &[(AuraEffect::Speed, -15)]);
        assert_eq!(character.modified(AuraEffect::Speed), 15);
    }

    #[test]
    fn test_defaults_common_and_basic_and_human() {
        let (_dir, registry) = single_entry_registry("[]", None, "");
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Edda", &mut dice, &registry, &mut spawner).unwrap();
        assert!(character.knows_language(Language::Common));
        assert!(character.is_proficient_with(WeaponType::Basic));
        assert_eq!(character.race, Race::Human);
        assert_eq!(character.speed, 30);
        assert_eq!(character.alignment, Alignment::Neutral);
        assert_eq!(character.level, 0);
        assert_eq!(character.xp, 0);
        assert_eq!(character.ac, 0);
    }

    #[test]
    fn test_occupation_grants_race_speed_language_and_money() {
        let (_dir, registry) = single_entry_registry(
            "[]",
            None,
            "race = \"dwarf\"\nweapon_proficiencies = [\"axe\"]\nmoney = { gold = 2 }",
        );
        // Intelligence 10 is enough for the racial language; age roll lands at 40
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 40);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Fargrim", &mut dice, &registry, &mut spawner).unwrap();
        assert_eq!(character.race, Race::Dwarf);
        assert_eq!(character.speed, 20);
        assert_eq!(character.age, 40);
        assert!(character.knows_language(Language::Dwarvish));
        assert!(character.is_proficient_with(WeaponType::Axe));
        assert!(character.is_proficient_with(WeaponType::Basic));
        assert_eq!(character.coins.gold, 2);
        assert_eq!(character.coins.copper, 30);
    }

    #[test]
    fn test_dull_characters_skip_the_racial_language() {
        let (_dir, registry) =
            single_entry_registry("[]", None, "race = \"halfling\"");
        // Intelligence 7 is below the threshold
        let mut dice = script([10, 10, 10, 10, 7, 10], 4, 1, 30, 1, 25);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Gilly", &mut dice, &registry, &mut spawner).unwrap();
        assert_eq!(character.known_languages, vec![Language::Common]);
    }

    #[test]
    fn test_starting_items_are_spawned() {
        let (_dir, registry) = single_entry_registry("[]", None, "");
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Hobb", &mut dice, &registry, &mut spawner).unwrap();
        assert_eq!(character.occupation, "Gongfarmer");
        assert_eq!(spawner.spawned.len(), 1);
        assert_eq!(spawner.spawned[0].key, "trowel");
    }

    #[test]
    fn test_current_hp_reflects_aura_and_stamina() {
        // Stamina 16 gives +2; luck 17 gives a +2 hp aura
        let (_dir, registry) = single_entry_registry(r#"["hp"]"#, None, "");
        let mut dice = script([10, 10, 16, 10, 10, 17], 3, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let character =
            Character::roll_new("Isolde", &mut dice, &registry, &mut spawner).unwrap();
        assert_eq!(character.hp, 3);
        assert_eq!(character.current_hp, 3 + 2 + 2);
    }

    #[test]
    fn test_creation_fails_on_missing_table() {
        let registry = TableRegistry::new();
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 20);
        let mut spawner = CollectingSpawner::new();

        let result = Character::roll_new("Jora", &mut dice, &registry, &mut spawner);
        assert!(matches!(result, Err(CreationError::Table(_))));
    }

    #[test]
    fn test_creation_fails_on_spawn_error() {
        struct FailingSpawner;
        impl ItemSpawner for FailingSpawner {
            fn spawn(&mut self, prototype: &ItemPrototype) -> Result<(), SpawnError> {
                Err(SpawnError::Failed {
                    key: prototype.key.clone(),
                    message: "no room".to_string(),
                })
            }
        }

        let (_dir, registry) = single_entry_registry("[]", None, "");
        let mut dice = script([10, 10, 10, 10, 10, 10], 4, 1, 30, 1, 20);
        let result = Character::roll_new("Karsa", &mut dice, &registry, &mut FailingSpawner);
        assert!(matches!(result, Err(CreationError::Spawn(_))));
    }

    #[test]
    fn test_random_creation_against_shipped_tables() {
        let data = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../data"));
        let registry = TableRegistry::load(data).unwrap();
        let mut spawner = CollectingSpawner::new();

        for seed in 0..200 {
            let mut dice = RandomDice::seeded(seed);
            let character =
                Character::roll_new("Wanderer", &mut dice, &registry, &mut spawner).unwrap();

            for &score in &[
                character.strength,
                character.agility,
                character.stamina,
                character.personality,
                character.intelligence,
                character.luck,
            ] {
                assert!((3..=18).contains(&score));
            }
            assert!((1..=4).contains(&character.hp));
            assert!(character.knows_language(Language::Common));
            assert!(character.is_proficient_with(WeaponType::Basic));
            assert_eq!(character.speed, character.race.base_speed());
            assert!(character.race.age_range().contains(&character.age));
            assert!(character.auras.len() <= 1);
            assert_eq!(character.current_hp, character.modified(AuraEffect::Hp));
        }
    }
}
