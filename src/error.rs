//! Conditions after which the heap under test can no longer be trusted.
//!
//! None of these are recoverable. The engine hands them back instead of
//! exiting so the caller decides how to stop, but it must stop.

use crate::verify::CheckFailure;

pub const EXIT_CODE: i32 = 1;

#[derive(Debug,PartialEq,Eq,thiserror::Error)]
pub enum FatalError {
    #[error("out of memory (r={r}, size={size})!")]
    OutOfMemory { r: u32, size: usize },
    #[error("memory corrupt! (ptr={ptr:#x}, size={size}: {failure})")]
    Corrupt { ptr: usize, size: usize, failure: CheckFailure },
    #[error("calloc'ed memory non-zero (ptr={ptr:#x}, i={offset})!")]
    NonZero { ptr: usize, offset: usize },
}

impl FatalError {
    pub fn exit_code(&self) -> i32 {
        EXIT_CODE
    }

    /// Print the diagnostic and terminate the process.
    pub fn exit(self) -> ! {
        eprintln!("{}", self);
        std::process::exit(self.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, FatalError>;
