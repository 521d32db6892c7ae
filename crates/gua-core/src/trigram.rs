//! The eight trigrams and their 3-bit line encoding.
//!
//! A trigram is three stacked lines read bottom to top. The encoding packs
//! them into three bits — bit k is set when line k is solid (yang), with
//! bit 0 the bottom line — so 0b111 is all-solid Heaven and 0b000 all-broken
//! Earth.

use serde::{Deserialize, Serialize};

use crate::line::CoinLine;

/// One of the eight trigrams, in King Wen table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ 乾 — heaven (天), three solid lines.
    Tian,
    /// ☱ 兑 — lake (泽).
    Ze,
    /// ☲ 离 — fire (火).
    Huo,
    /// ☳ 震 — thunder (雷).
    Lei,
    /// ☴ 巽 — wind (风).
    Feng,
    /// ☵ 坎 — water (水).
    Shui,
    /// ☶ 艮 — mountain (山).
    Shan,
    /// ☷ 坤 — earth (地), three broken lines.
    Di,
}

impl Trigram {
    /// Decode a 3-bit pattern (bit 0 = bottom line, set = yang).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b111 => Some(Self::Tian),
            0b110 => Some(Self::Ze),
            0b101 => Some(Self::Huo),
            0b100 => Some(Self::Lei),
            0b011 => Some(Self::Feng),
            0b010 => Some(Self::Shui),
            0b001 => Some(Self::Shan),
            0b000 => Some(Self::Di),
            _ => None,
        }
    }

    /// Derive a trigram from three lines, bottom to top.
    pub fn from_lines(lines: [CoinLine; 3]) -> Self {
        match (lines[0].is_yin(), lines[1].is_yin(), lines[2].is_yin()) {
            (false, false, false) => Self::Tian,
            (true, false, false) => Self::Ze,
            (false, true, false) => Self::Huo,
            (true, true, false) => Self::Lei,
            (false, false, true) => Self::Feng,
            (true, false, true) => Self::Shui,
            (false, true, true) => Self::Shan,
            (true, true, true) => Self::Di,
        }
    }

    /// The 3-bit pattern for this trigram.
    pub fn bits(self) -> u8 {
        match self {
            Self::Tian => 0b111,
            Self::Ze => 0b110,
            Self::Huo => 0b101,
            Self::Lei => 0b100,
            Self::Feng => 0b011,
            Self::Shui => 0b010,
            Self::Shan => 0b001,
            Self::Di => 0b000,
        }
    }

    /// Row/column index into the King Wen table (tian = 0 .. di = 7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tian => "tian",
            Self::Ze => "ze",
            Self::Huo => "huo",
            Self::Lei => "lei",
            Self::Feng => "feng",
            Self::Shui => "shui",
            Self::Shan => "shan",
            Self::Di => "di",
        }
    }

    /// The trigram's own character (乾, 兑, ...).
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Tian => "乾",
            Self::Ze => "兑",
            Self::Huo => "离",
            Self::Lei => "震",
            Self::Feng => "巽",
            Self::Shui => "坎",
            Self::Shan => "艮",
            Self::Di => "坤",
        }
    }

    /// The natural image the trigram stands for (天, 泽, ...).
    pub fn nature(self) -> &'static str {
        match self {
            Self::Tian => "天",
            Self::Ze => "泽",
            Self::Huo => "火",
            Self::Lei => "雷",
            Self::Feng => "风",
            Self::Shui => "水",
            Self::Shan => "山",
            Self::Di => "地",
        }
    }

    /// Unicode trigram glyph.
    pub fn glyph(self) -> char {
        match self {
            Self::Tian => '☰',
            Self::Ze => '☱',
            Self::Huo => '☲',
            Self::Lei => '☳',
            Self::Feng => '☴',
            Self::Shui => '☵',
            Self::Shan => '☶',
            Self::Di => '☷',
        }
    }

    /// All eight trigrams in table order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Tian,
            Self::Ze,
            Self::Huo,
            Self::Lei,
            Self::Feng,
            Self::Shui,
            Self::Shan,
            Self::Di,
        ]
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::CoinLine;

    #[test]
    fn bits_roundtrip() {
        for &t in Trigram::all() {
            assert_eq!(Trigram::from_bits(t.bits()), Some(t));
        }
    }

    #[test]
    fn from_bits_rejects_out_of_range() {
        assert_eq!(Trigram::from_bits(0b1000), None);
        assert_eq!(Trigram::from_bits(0xff), None);
    }

    #[test]
    fn all_yang_is_tian() {
        let t = Trigram::from_lines([CoinLine::YoungYang; 3]);
        assert_eq!(t, Trigram::Tian);
    }

    #[test]
    fn all_yin_is_di() {
        let t = Trigram::from_lines([CoinLine::YoungYin; 3]);
        assert_eq!(t, Trigram::Di);
    }

    // Bit order pins: the bottom line is bit 0. A single yin line at the
    // bottom (pattern 110) must read as Ze, not Feng (011).
    #[test]
    fn bottom_line_is_lowest_bit() {
        let t = Trigram::from_lines([
            CoinLine::YoungYin,
            CoinLine::YoungYang,
            CoinLine::YoungYang,
        ]);
        assert_eq!(t, Trigram::Ze);

        let t = Trigram::from_lines([
            CoinLine::YoungYang,
            CoinLine::YoungYang,
            CoinLine::YoungYin,
        ]);
        assert_eq!(t, Trigram::Feng);
    }

    #[test]
    fn middle_line_patterns() {
        let t = Trigram::from_lines([
            CoinLine::YoungYang,
            CoinLine::YoungYin,
            CoinLine::YoungYang,
        ]);
        assert_eq!(t, Trigram::Huo);

        let t = Trigram::from_lines([
            CoinLine::YoungYin,
            CoinLine::YoungYang,
            CoinLine::YoungYin,
        ]);
        assert_eq!(t, Trigram::Shui);
    }

    #[test]
    fn old_lines_use_their_uncast_polarity() {
        // An old yang is still yang until the transform settles it.
        let t = Trigram::from_lines([CoinLine::OldYang; 3]);
        assert_eq!(t, Trigram::Tian);
        let t = Trigram::from_lines([CoinLine::OldYin; 3]);
        assert_eq!(t, Trigram::Di);
    }

    #[test]
    fn table_order_indices() {
        assert_eq!(Trigram::Tian.index(), 0);
        assert_eq!(Trigram::Di.index(), 7);
        for (i, &t) in Trigram::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn display_and_metadata() {
        assert_eq!(Trigram::Tian.to_string(), "tian");
        assert_eq!(Trigram::Shui.chinese(), "坎");
        assert_eq!(Trigram::Shui.nature(), "水");
        assert_eq!(Trigram::Di.glyph(), '☷');
    }
}
