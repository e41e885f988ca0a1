//! Prelude module for convenient imports
//!
//! ```rust
//! use chargen_core::prelude::*;
//! ```

// Core types
pub use crate::aura::Aura;
pub use crate::character::Character;

// Dice
pub use crate::dice::{ability_modifier, DiceRoller, RandomDice, ScriptedDice};

// Creation
pub use crate::creation::{CollectingSpawner, CreationError, ItemSpawner, SpawnError};

// Re-exports from collaborator crates
pub use tables_core::TableRegistry;
pub use world_core::{Alignment, AuraEffect, Coins, ItemPrototype, Language, Race, WeaponType};
