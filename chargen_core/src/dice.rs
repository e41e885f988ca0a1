//! Dice rolling and the ability modifier table

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Convert a raw ability score to its modifier
///
/// Fixed breakpoints, inclusive on the upper bound of each band:
/// 3 or less is -3, 4-5 is -2, 6-8 is -1, 9-12 is 0, 13-15 is +1,
/// 16-17 is +2, 18 and up is +3.
pub fn ability_modifier(score: i32) -> i32 {
    if score <= 3 {
        -3
    } else if score <= 5 {
        -2
    } else if score <= 8 {
        -1
    } else if score <= 12 {
        0
    } else if score <= 15 {
        1
    } else if score <= 17 {
        2
    } else {
        3
    }
}

/// Source of dice rolls, injected into character creation
///
/// Production code uses [`RandomDice`]; tests can supply a [`ScriptedDice`]
/// with a fixed sequence of outcomes.
pub trait DiceRoller {
    /// Sum of `num_dice` independent rolls of a `sides`-sided die
    ///
    /// 3d6, for example, would be `num_dice = 3, sides = 6`.
    fn roll(&mut self, num_dice: u32, sides: u32) -> i32;

    /// Uniform draw from the inclusive range `[low, high]`
    fn roll_range(&mut self, low: i32, high: i32) -> i32;
}

/// Dice backed by an RNG
#[derive(Debug, Clone)]
pub struct RandomDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    /// Wrap an existing RNG
    pub fn new(rng: R) -> Self {
        RandomDice { rng }
    }
}

impl RandomDice<ThreadRng> {
    /// Dice backed by the thread-local RNG
    pub fn from_entropy() -> Self {
        RandomDice {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomDice<ChaCha8Rng> {
    /// Dice with a reproducible seed
    pub fn seeded(seed: u64) -> Self {
        RandomDice {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> DiceRoller for RandomDice<R> {
    fn roll(&mut self, num_dice: u32, sides: u32) -> i32 {
        (0..num_dice)
            .map(|_| self.rng.gen_range(1..=sides as i32))
            .sum()
    }

    fn roll_range(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

/// Dice that replay a fixed sequence of outcomes
///
/// Each call to `roll` or `roll_range` consumes one scripted value, ignoring
/// the requested dice. Panics when the script runs out, so only suitable for
/// tests and harnesses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    outcomes: VecDeque<i32>,
}

impl ScriptedDice {
    pub fn new(outcomes: impl IntoIterator<Item = i32>) -> Self {
        ScriptedDice {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, _num_dice: u32, _sides: u32) -> i32 {
        self.outcomes
            .pop_front()
            .expect("ScriptedDice ran out of scripted outcomes")
    }

    fn roll_range(&mut self, _low: i32, _high: i32) -> i32 {
        self.outcomes
            .pop_front()
            .expect("ScriptedDice ran out of scripted outcomes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ability_modifier_breakpoints() {
        assert_eq!(ability_modifier(3), -3);
        assert_eq!(ability_modifier(4), -2);
        assert_eq!(ability_modifier(5), -2);
        assert_eq!(ability_modifier(6), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), 0);
        assert_eq!(ability_modifier(12), 0);
        assert_eq!(ability_modifier(13), 1);
        assert_eq!(ability_modifier(15), 1);
        assert_eq!(ability_modifier(16), 2);
        assert_eq!(ability_modifier(17), 2);
        assert_eq!(ability_modifier(18), 3);
    }

    #[test]
    fn test_roll_mean_is_centered() {
        // Mean of n d-sided dice is n*(d+1)/2; 3d6 should average 10.5
        let mut dice = RandomDice::seeded(7);
        let iterations = 10000;
        let mut total = 0i64;
        for _ in 0..iterations {
            total += dice.roll(3, 6) as i64;
        }
        let avg = total as f64 / iterations as f64;
        assert!(avg > 10.2 && avg < 10.8, "Average was {}", avg);
    }

    #[test]
    fn test_scripted_dice_replay_in_order() {
        let mut dice = ScriptedDice::new([10, 4, 30]);
        assert_eq!(dice.roll(3, 6), 10);
        assert_eq!(dice.roll(1, 4), 4);
        assert_eq!(dice.roll_range(18, 45), 30);
        assert_eq!(dice.remaining(), 0);
    }

    proptest! {
        #[test]
        fn prop_roll_stays_in_bounds(num_dice in 1u32..8, sides in 1u32..30, seed in any::<u64>()) {
            let mut dice = RandomDice::seeded(seed);
            let result = dice.roll(num_dice, sides);
            prop_assert!(result >= num_dice as i32);
            prop_assert!(result <= (num_dice * sides) as i32);
        }

        #[test]
        fn prop_roll_range_inclusive(low in -50i32..50, span in 0i32..50, seed in any::<u64>()) {
            let high = low + span;
            let mut dice = RandomDice::seeded(seed);
            let result = dice.roll_range(low, high);
            prop_assert!(result >= low && result <= high);
        }

        #[test]
        fn prop_modifier_bands_are_monotonic(score in 3i32..=18) {
            let here = ability_modifier(score);
            let next = ability_modifier(score + 1);
            prop_assert!(next >= here);
            prop_assert!((-3..=3).contains(&here));
        }
    }
}
