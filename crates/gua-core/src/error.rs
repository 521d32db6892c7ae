//! Error types for the casting core.

use thiserror::Error;

/// Result type for casting operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while casting or resolving a hexagram.
///
/// All of these indicate a broken table or caster rather than a condition a
/// user can trigger: a correctly encoded coin toss cannot sum outside 6-9,
/// and the King Wen table and canon dataset are complete by construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A coin sum outside the valid 6-9 range.
    #[error("invalid coin sum: {0}")]
    InvalidCoinSum(u8),

    /// A line sequence that is not exactly six lines long.
    #[error("expected 6 lines, got {0}")]
    WrongLineCount(usize),

    /// A hexagram number with no record in the canon dataset.
    #[error("no canon record for hexagram {0}")]
    MissingRecord(u8),
}
