//! chargen_core - Character creation and derived attributes
//!
//! This library provides:
//! - Character: typed player-character record with modified-attribute accessors
//! - Aura: named effects carrying per-attribute deltas
//! - DiceRoller: injected randomness (random or scripted)
//! - Character::roll_new: the one-shot creation routine
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chargen_core::prelude::*;
//! use std::path::Path;
//!
//! let tables = TableRegistry::load(Path::new("data/")).unwrap();
//! let mut dice = RandomDice::from_entropy();
//! let mut spawner = CollectingSpawner::new();
//! let character = Character::roll_new("Aldrik", &mut dice, &tables, &mut spawner)?;
//! println!("{} the {}", character.name, character.occupation);
//! println!("strength {}", character.modified(AuraEffect::Strength));
//! ```

pub mod aura;
pub mod character;
pub mod creation;
pub mod dice;
pub mod prelude;

// Core API - what most users need
pub use aura::Aura;
pub use character::Character;
pub use creation::{CollectingSpawner, CreationError, ItemSpawner, SpawnError};
pub use dice::{ability_modifier, DiceRoller, RandomDice, ScriptedDice};

// Re-export commonly needed collaborator types
pub use tables_core::TableRegistry;
pub use world_core::{Alignment, AuraEffect, Coins, ItemPrototype, Language, Race, WeaponType};
