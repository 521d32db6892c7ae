//! King Wen hexagram resolution.
//!
//! Six lines split into a lower trigram (lines 0-2) and an upper trigram
//! (lines 3-5). The ordered pair indexes a fixed 8x8 table of King Wen
//! numbers; the number then keys into the canon dataset.

use crate::canon::{self, HexagramRecord};
use crate::error::{CoreError, CoreResult};
use crate::line::LineSequence;
use crate::trigram::Trigram;

/// King Wen numbers indexed `[upper][lower]`, both in tian..di order.
///
/// Rows are the upper trigram, columns the lower.
pub const KING_WEN: [[u8; 8]; 8] = [
    // lower: tian  ze  huo lei feng shui shan  di
    [1, 10, 13, 25, 44, 6, 33, 12],   // upper tian
    [43, 58, 49, 17, 28, 47, 31, 45], // upper ze
    [14, 38, 30, 21, 50, 64, 56, 35], // upper huo
    [34, 54, 55, 51, 32, 40, 62, 16], // upper lei
    [9, 61, 37, 42, 57, 59, 53, 20],  // upper feng
    [5, 60, 63, 3, 48, 29, 39, 8],    // upper shui
    [26, 41, 22, 27, 18, 4, 52, 23],  // upper shan
    [11, 19, 36, 24, 46, 7, 15, 2],   // upper di
];

/// King Wen number for an ordered trigram pair.
pub fn number(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.index()][lower.index()]
}

/// Split a sequence into its (lower, upper) trigrams.
pub fn trigrams(lines: &LineSequence) -> (Trigram, Trigram) {
    let l = lines.lines();
    let lower = Trigram::from_lines([l[0], l[1], l[2]]);
    let upper = Trigram::from_lines([l[3], l[4], l[5]]);
    (lower, upper)
}

/// Resolve six lines to their canon record.
///
/// A lookup miss means the canon dataset is corrupt — the table covers all
/// 64 numbers by construction — so it surfaces as an error rather than being
/// papered over.
pub fn resolve(lines: &LineSequence) -> CoreResult<&'static HexagramRecord> {
    let (lower, upper) = trigrams(lines);
    let n = number(upper, lower);
    canon::record(n).ok_or(CoreError::MissingRecord(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::CoinLine;
    use proptest::prelude::*;

    fn seq_of(line: CoinLine) -> LineSequence {
        LineSequence::new([line; 6])
    }

    #[test]
    fn all_young_yang_is_hexagram_one() {
        let record = resolve(&seq_of(CoinLine::YoungYang)).unwrap();
        assert_eq!(record.id, 1);
    }

    #[test]
    fn all_young_yin_is_hexagram_two() {
        let record = resolve(&seq_of(CoinLine::YoungYin)).unwrap();
        assert_eq!(record.id, 2);
    }

    #[test]
    fn trigram_split_order() {
        // Lower half yin, upper half yang: di below, tian above -> 12 (否).
        let seq = LineSequence::new([
            CoinLine::YoungYin,
            CoinLine::YoungYin,
            CoinLine::YoungYin,
            CoinLine::YoungYang,
            CoinLine::YoungYang,
            CoinLine::YoungYang,
        ]);
        let (lower, upper) = trigrams(&seq);
        assert_eq!(lower, Trigram::Di);
        assert_eq!(upper, Trigram::Tian);
        assert_eq!(resolve(&seq).unwrap().id, 12);

        // And the reverse stacking is 11 (泰).
        let seq = LineSequence::new([
            CoinLine::YoungYang,
            CoinLine::YoungYang,
            CoinLine::YoungYang,
            CoinLine::YoungYin,
            CoinLine::YoungYin,
            CoinLine::YoungYin,
        ]);
        assert_eq!(resolve(&seq).unwrap().id, 11);
    }

    #[test]
    fn table_corners() {
        assert_eq!(number(Trigram::Tian, Trigram::Tian), 1);
        assert_eq!(number(Trigram::Di, Trigram::Di), 2);
        assert_eq!(number(Trigram::Shui, Trigram::Huo), 63);
        assert_eq!(number(Trigram::Huo, Trigram::Shui), 64);
    }

    #[test]
    fn mountain_over_fire_is_twenty_two() {
        assert_eq!(number(Trigram::Shan, Trigram::Huo), 22);
    }

    #[test]
    fn table_is_a_permutation_of_one_to_sixty_four() {
        let mut seen = [false; 65];
        for row in &KING_WEN {
            for &n in row {
                assert!((1..=64).contains(&n));
                assert!(!seen[n as usize], "duplicate King Wen number {n}");
                seen[n as usize] = true;
            }
        }
    }

    fn arb_line() -> impl Strategy<Value = CoinLine> {
        prop_oneof![
            Just(CoinLine::OldYin),
            Just(CoinLine::YoungYang),
            Just(CoinLine::YoungYin),
            Just(CoinLine::OldYang),
        ]
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(lines in prop::array::uniform6(arb_line())) {
            let seq = LineSequence::new(lines);
            let a = resolve(&seq).unwrap();
            let b = resolve(&seq).unwrap();
            prop_assert_eq!(a.id, b.id);
        }

        #[test]
        fn resolve_ignores_movement(lines in prop::array::uniform6(arb_line())) {
            // The primary hexagram depends only on polarity, not on whether
            // a line is old or young.
            let seq = LineSequence::new(lines);
            let settled_same_polarity = LineSequence::new(lines.map(|l| {
                if l.is_yin() { CoinLine::YoungYin } else { CoinLine::YoungYang }
            }));
            prop_assert_eq!(
                resolve(&seq).unwrap().id,
                resolve(&settled_same_polarity).unwrap().id
            );
        }

        #[test]
        fn transform_resolves_somewhere(lines in prop::array::uniform6(arb_line())) {
            let seq = LineSequence::new(lines);
            let id = resolve(&seq.transform()).unwrap().id;
            prop_assert!((1..=64).contains(&id));
        }
    }
}
