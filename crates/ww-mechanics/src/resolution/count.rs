//! Count-successes resolution (2d20-style).
//!
//! Roll multiple d20s. Each die at or below the target number scores one success.
//! A die at or below the critical threshold scores two successes instead.
//! Meeting or exceeding `successes_needed` is a success.

use serde::{Deserialize, Serialize};

use crate::dice::RollResult;
use crate::resolution::Outcome;

/// Configuration for count-successes resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountSuccesses {
    /// Roll at or below this value to score a success.
    pub target_number: u32,
    /// Roll at or below this value to score two successes (critical range).
    pub critical_threshold: u32,
    /// How many successes are needed for a standard success.
    pub successes_needed: u32,
}

impl Default for CountSuccesses {
    fn default() -> Self {
        Self {
            target_number: 10,
            critical_threshold: 1,
            successes_needed: 1,
        }
    }
}

impl CountSuccesses {
    /// Resolve a roll by counting successes.
    pub fn resolve(&self, roll: &RollResult) -> Outcome {
        let mut successes: u32 = 0;
        let mut has_natural_20 = false;

        for die in &roll.dice {
            if die.value <= self.critical_threshold {
                successes += 2;
            } else if die.value <= self.target_number {
                successes += 1;
            }
            if die.value == die.die.sides() {
                has_natural_20 = true;
            }
        }

        if successes == 0 && has_natural_20 {
            return Outcome::CriticalFailure;
        }

        if successes >= self.successes_needed {
            let margin = successes - self.successes_needed;
            if successes >= self.successes_needed * 2 {
                Outcome::CriticalSuccess { margin }
            } else {
                Outcome::Success { margin }
            }
        } else if successes > 0 {
            Outcome::Partial
        } else {
            Outcome::Failure
        }
    }
}
