//! One complete divination: lines, primary and changed hexagrams.

use rand::rngs::StdRng;

use crate::canon::HexagramRecord;
use crate::error::CoreResult;
use crate::hexagram;
use crate::line::LineSequence;

/// The aggregate of one three-coin divination.
#[derive(Debug, Clone, Copy)]
pub struct Cast {
    /// The six lines as cast, bottom first.
    pub lines: LineSequence,
    /// The hexagram the cast lines resolve to.
    pub primary: &'static HexagramRecord,
    /// The lines after every moving line has settled.
    pub changed_lines: LineSequence,
    /// The hexagram the settled lines resolve to.
    pub changed: &'static HexagramRecord,
}

impl Cast {
    /// Cast six fresh lines and resolve both hexagrams.
    pub fn perform(rng: &mut StdRng) -> CoreResult<Self> {
        Self::from_lines(LineSequence::cast(rng)?)
    }

    /// Resolve an already-cast sequence.
    pub fn from_lines(lines: LineSequence) -> CoreResult<Self> {
        let primary = hexagram::resolve(&lines)?;
        let changed_lines = lines.transform();
        let changed = hexagram::resolve(&changed_lines)?;
        Ok(Self {
            lines,
            primary,
            changed_lines,
            changed,
        })
    }

    /// The focal transition: index of the topmost moving line, if any.
    pub fn topmost_changing(&self) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .rev()
            .find(|(_, l)| l.is_changing())
            .map(|(i, _)| i)
    }

    /// 1-based positions of all moving lines, bottom first.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// A short offline reading derived from the line counts alone.
    ///
    /// This predates the streamed interpretation and survives as the
    /// no-network summary: yin/yang balance plus how much movement the cast
    /// carries.
    pub fn summary(&self) -> Vec<String> {
        let yin = self.lines.yin_count();
        let yang = 6 - yin;
        let moving = self.lines.changing_count();

        let balance = match yin.cmp(&yang) {
            std::cmp::Ordering::Equal => "阴阳相济",
            std::cmp::Ordering::Greater => "阴势偏盛",
            std::cmp::Ordering::Less => "阳势偏盛",
        };

        let movement = match moving {
            0 => "局势趋于稳定，可守可进",
            1..=2 => "变化初起，宜顺势而行",
            3..=4 => "变化加速，宜稳中求变",
            _ => "变动剧烈，宜谨慎收束",
        };

        vec![
            format!("当前形势呈现「{balance}」之象。"),
            format!("变爻数量为 {moving}，{movement}。"),
            "先明内心所求，再定行动次序，切勿急于求成。".to_string(),
        ]
    }
}
