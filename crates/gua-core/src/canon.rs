//! The canon dataset: 64 hexagram records.
//!
//! The records are embedded at compile time and parsed once on first access.
//! They are consumed only by id lookup; the core never interprets their
//! contents.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One hexagram's canonical texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    /// King Wen number, 1-64.
    pub id: u8,
    /// Hexagram name, e.g. "乾卦".
    pub title: String,
    /// The judgment (卦辞).
    pub judgment: String,
    /// Per-line statements (爻辞), bottom line first.
    pub line_texts: Vec<String>,
    /// Commentary on the judgment (彖传).
    pub tuan: Vec<String>,
    /// Commentary on the image (象传).
    pub xiang: Vec<String>,
    /// The extended commentary (文言), present only for hexagrams 1 and 2.
    pub wenyan: Vec<String>,
}

static CANON: LazyLock<Vec<HexagramRecord>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/zhouyi.json"))
        .expect("embedded canon dataset is malformed")
});

/// Look up a record by King Wen number.
pub fn record(id: u8) -> Option<&'static HexagramRecord> {
    CANON.iter().find(|r| r.id == id)
}

/// All 64 records in King Wen order.
pub fn all() -> &'static [HexagramRecord] {
    &CANON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_is_complete() {
        assert_eq!(all().len(), 64);
        for id in 1..=64u8 {
            let r = record(id).unwrap_or_else(|| panic!("missing record {id}"));
            assert_eq!(r.id, id);
            assert!(!r.title.is_empty());
            assert!(!r.judgment.is_empty());
            assert!(!r.line_texts.is_empty());
        }
    }

    #[test]
    fn canon_is_in_king_wen_order() {
        for (i, r) in all().iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
        }
    }

    #[test]
    fn first_two_records() {
        assert_eq!(record(1).unwrap().title, "乾卦");
        assert_eq!(record(2).unwrap().title, "坤卦");
        // Only the first two hexagrams carry 文言 commentary.
        assert!(!record(1).unwrap().wenyan.is_empty());
        assert!(!record(2).unwrap().wenyan.is_empty());
        assert!(record(3).unwrap().wenyan.is_empty());
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(record(0).is_none());
        assert!(record(65).is_none());
    }
}
