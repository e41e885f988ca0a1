//! Auras - named effects carrying per-attribute modifiers

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use world_core::AuraEffect;

/// A persistent effect attached to a character
///
/// Carries an insertion-ordered list of `(effect kind, delta)` pairs; order is
/// preserved so descriptions and iteration stay deterministic. The only aura
/// granted here is the birth-augur one, but the type accepts modifiers from
/// any later source (spells, equipment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aura {
    pub name: String,
    pub desc: String,
    modifiers: Vec<(AuraEffect, i32)>,
}

impl Aura {
    /// Create an aura with no modifiers yet
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Aura {
            name: name.into(),
            desc: desc.into(),
            modifiers: Vec::new(),
        }
    }

    /// Append a modifier, preserving insertion order
    pub fn with_modifier(mut self, kind: AuraEffect, delta: i32) -> Self {
        self.modifiers.push((kind, delta));
        self
    }

    /// Total delta this aura contributes to one effect kind
    pub fn modifier_for(&self, kind: AuraEffect) -> i32 {
        self.modifiers
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, delta)| delta)
            .sum()
    }

    /// The modifier pairs in insertion order
    pub fn modifiers(&self) -> &[(AuraEffect, i32)] {
        &self.modifiers
    }

    /// Player-facing summary, e.g. "Charmed house (+1 AC)"
    pub fn modifier_description(&self) -> String {
        let mut out = self.name.clone();
        if self.modifiers.is_empty() {
            return out;
        }
        out.push_str(" (");
        for (i, (kind, delta)) in self.modifiers.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{:+} {}", delta, kind);
        }
        out.push(')');
        out
    }
}
