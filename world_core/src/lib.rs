//! world_core - Shared world types for the character module
//!
//! Pure data: races, languages, weapon types, aura effect kinds, coinage,
//! and the item prototype record handed to the host framework's spawner.

pub mod item;
pub mod types;

pub use item::ItemPrototype;
pub use types::{Alignment, AuraEffect, Coins, Language, Race, WeaponType};
