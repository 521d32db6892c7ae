//! Coin lines and six-line sequences.
//!
//! One divination line comes from three coin tosses. Heads counts 2, tails
//! counts 3, so the sum is always 6, 7, 8, or 9. Old (moving) lines — 6 and
//! 9 — flip their polarity when the changed hexagram is derived.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One cast line, identified by its coin sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinLine {
    /// Sum 6: broken line that will flip (老阴).
    OldYin,
    /// Sum 7: solid line, stable (少阳).
    YoungYang,
    /// Sum 8: broken line, stable (少阴).
    YoungYin,
    /// Sum 9: solid line that will flip (老阳).
    OldYang,
}

impl CoinLine {
    /// Cast one line from three fair coin tosses.
    ///
    /// The `Err` branch is defensive: with heads = 2 and tails = 3 the sum
    /// cannot leave the 6-9 range, so an error here means the caster itself
    /// is broken.
    pub fn cast(rng: &mut StdRng) -> CoreResult<Self> {
        let mut sum = 0u8;
        for _ in 0..3 {
            sum += if rng.random_bool(0.5) { 2 } else { 3 };
        }
        Self::from_sum(sum)
    }

    /// Map a coin sum to its line, rejecting anything outside 6-9.
    pub fn from_sum(sum: u8) -> CoreResult<Self> {
        match sum {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(CoreError::InvalidCoinSum(other)),
        }
    }

    /// The coin sum this line was cast from.
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether this is a broken (yin) line.
    pub fn is_yin(self) -> bool {
        matches!(self, Self::OldYin | Self::YoungYin)
    }

    /// Whether this line flips when the changed hexagram is derived.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The line this one becomes in the changed hexagram.
    ///
    /// Old lines flip polarity and come to rest; young lines pass through.
    /// The result is always a young line.
    pub fn settle(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            young => young,
        }
    }

    /// Traditional name of the line.
    pub fn name(self) -> &'static str {
        match self {
            Self::OldYin => "老阴",
            Self::YoungYang => "少阳",
            Self::YoungYin => "少阴",
            Self::OldYang => "老阳",
        }
    }
}

impl std::fmt::Display for CoinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

/// Six ordered lines, index 0 = bottom (cast first) through 5 = top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSequence([CoinLine; 6]);

impl LineSequence {
    /// Build a sequence from exactly six lines.
    pub fn new(lines: [CoinLine; 6]) -> Self {
        Self(lines)
    }

    /// Build a sequence from a slice, rejecting any length other than six.
    pub fn from_slice(lines: &[CoinLine]) -> CoreResult<Self> {
        let arr: [CoinLine; 6] = lines
            .try_into()
            .map_err(|_| CoreError::WrongLineCount(lines.len()))?;
        Ok(Self(arr))
    }

    /// Cast six fresh lines, bottom first.
    pub fn cast(rng: &mut StdRng) -> CoreResult<Self> {
        let mut lines = [CoinLine::YoungYang; 6];
        for line in &mut lines {
            *line = CoinLine::cast(rng)?;
        }
        Ok(Self(lines))
    }

    /// The lines, bottom to top.
    pub fn lines(&self) -> &[CoinLine; 6] {
        &self.0
    }

    /// Iterate the lines bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = CoinLine> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// Derive the changed sequence: every old line settles into its flipped
    /// young form, young lines pass through untouched.
    pub fn transform(&self) -> Self {
        Self(self.0.map(CoinLine::settle))
    }

    /// Number of broken lines.
    pub fn yin_count(&self) -> usize {
        self.iter().filter(|l| l.is_yin()).count()
    }

    /// Number of moving lines.
    pub fn changing_count(&self) -> usize {
        self.iter().filter(|l| l.is_changing()).count()
    }

    /// Whether any line is moving.
    pub fn has_changing(&self) -> bool {
        self.iter().any(CoinLine::is_changing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sum_six_is_old_yin() {
        let line = CoinLine::from_sum(6).unwrap();
        assert!(line.is_yin());
        assert!(line.is_changing());
        assert_eq!(line.value(), 6);
    }

    #[test]
    fn sum_seven_is_young_yang() {
        let line = CoinLine::from_sum(7).unwrap();
        assert!(!line.is_yin());
        assert!(!line.is_changing());
        assert_eq!(line.value(), 7);
    }

    #[test]
    fn sum_eight_is_young_yin() {
        let line = CoinLine::from_sum(8).unwrap();
        assert!(line.is_yin());
        assert!(!line.is_changing());
        assert_eq!(line.value(), 8);
    }

    #[test]
    fn sum_nine_is_old_yang() {
        let line = CoinLine::from_sum(9).unwrap();
        assert!(!line.is_yin());
        assert!(line.is_changing());
        assert_eq!(line.value(), 9);
    }

    #[test]
    fn out_of_range_sums_rejected() {
        for sum in [0, 5, 10, 255] {
            assert_eq!(CoinLine::from_sum(sum), Err(CoreError::InvalidCoinSum(sum)));
        }
    }

    #[test]
    fn cast_always_lands_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let line = CoinLine::cast(&mut rng).unwrap();
            assert!((6..=9).contains(&line.value()));
        }
    }

    #[test]
    fn cast_is_reproducible_per_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let seq_a = LineSequence::cast(&mut a).unwrap();
        let seq_b = LineSequence::cast(&mut b).unwrap();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn settle_flips_old_lines_once() {
        assert_eq!(CoinLine::OldYin.settle(), CoinLine::YoungYang);
        assert_eq!(CoinLine::OldYang.settle(), CoinLine::YoungYin);
        assert!(!CoinLine::OldYin.settle().is_yin());
        assert!(CoinLine::OldYang.settle().is_yin());
    }

    #[test]
    fn settle_keeps_young_lines() {
        assert_eq!(CoinLine::YoungYang.settle(), CoinLine::YoungYang);
        assert_eq!(CoinLine::YoungYin.settle(), CoinLine::YoungYin);
    }

    #[test]
    fn transform_clears_all_movement() {
        let seq = LineSequence::new([
            CoinLine::OldYin,
            CoinLine::YoungYang,
            CoinLine::OldYang,
            CoinLine::YoungYin,
            CoinLine::OldYin,
            CoinLine::OldYang,
        ]);
        let changed = seq.transform();
        assert_eq!(changed.changing_count(), 0);
        // Polarity flipped exactly where the line was old.
        assert!(!changed.lines()[0].is_yin());
        assert!(changed.lines()[2].is_yin());
        assert!(!changed.lines()[4].is_yin());
        assert!(changed.lines()[5].is_yin());
        // Young lines untouched.
        assert_eq!(changed.lines()[1], CoinLine::YoungYang);
        assert_eq!(changed.lines()[3], CoinLine::YoungYin);
    }

    #[test]
    fn transform_is_identity_on_settled_sequences() {
        let seq = LineSequence::new([CoinLine::YoungYin; 6]);
        assert_eq!(seq.transform(), seq);
    }

    #[test]
    fn from_slice_rejects_wrong_lengths() {
        let short = [CoinLine::YoungYang; 5];
        assert_eq!(
            LineSequence::from_slice(&short),
            Err(CoreError::WrongLineCount(5))
        );
        let long = [CoinLine::YoungYang; 7];
        assert_eq!(
            LineSequence::from_slice(&long),
            Err(CoreError::WrongLineCount(7))
        );
    }

    #[test]
    fn counts() {
        let seq = LineSequence::new([
            CoinLine::OldYin,
            CoinLine::YoungYin,
            CoinLine::YoungYang,
            CoinLine::YoungYang,
            CoinLine::OldYang,
            CoinLine::YoungYin,
        ]);
        assert_eq!(seq.yin_count(), 3);
        assert_eq!(seq.changing_count(), 2);
        assert!(seq.has_changing());
    }

    #[test]
    fn display() {
        assert_eq!(CoinLine::OldYin.to_string(), "老阴 (6)");
        assert_eq!(CoinLine::YoungYang.to_string(), "少阳 (7)");
    }
}
