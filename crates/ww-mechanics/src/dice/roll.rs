//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::{DiceTag, Die};

/// The result of rolling a single die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The tag on this die.
    pub tag: DiceTag,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).min().unwrap_or(0)
    }

    /// Count dice with values at or below the given threshold.
    pub fn count_at_or_below(&self, threshold: u32) -> u32 {
        self.dice.iter().filter(|d| d.value <= threshold).count() as u32
    }

    /// Count dice with values at or above the given threshold.
    pub fn count_at_or_above(&self, threshold: u32) -> u32 {
        self.dice.iter().filter(|d| d.value >= threshold).count() as u32
    }

    /// Get all die results with a specific tag.
    pub fn by_tag(&self, tag: &DiceTag) -> Vec<&DieResult> {
        self.dice.iter().filter(|d| &d.tag == tag).collect()
    }

    /// The highest value among dice with a specific tag, or 0 if none.
    pub fn highest_by_tag(&self, tag: &DiceTag) -> u32 {
        self.by_tag(tag).iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
