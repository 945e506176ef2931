//! Corruption detection for live allocations.
//!
//! A sparse, address dependent pattern is written into every allocation
//! right after it is obtained and compared again before the block is reused
//! or released. Zeroed allocations are additionally scanned in full.

pub mod pattern;
pub mod zero;

pub use self::pattern::{check, fill, mem_check, mem_fill, pattern_byte, STRIDE};
pub use self::zero::{check_zeroed, zero_check};

/// Which part of the pattern did not match.
#[derive(Clone,Copy,Debug,PartialEq,Eq,thiserror::Error)]
pub enum CheckFailure {
    #[error("pattern mismatch at offset {offset}")]
    Stride { offset: usize },
    #[error("pattern mismatch at final byte {offset}")]
    Tail { offset: usize },
}

impl CheckFailure {
    /// diagnostic code, 1 for a stride byte and 2 for the final byte
    pub fn code(&self) -> i32 {
        match self {
            CheckFailure::Stride{..} => 1,
            CheckFailure::Tail{..} => 2,
        }
    }
    pub fn offset(&self) -> usize {
        match *self {
            CheckFailure::Stride{offset} | CheckFailure::Tail{offset} => offset,
        }
    }
}
