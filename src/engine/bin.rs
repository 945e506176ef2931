use std::fmt;
use std::ptr::{self, NonNull};

use size_format::SizeFormatterBinary;

/// A single allocation slot.
///
/// `size == 0` exactly when the bin holds no block. A bin does not free its
/// block on drop, release it with [`Engine::bin_free`](super::Engine::bin_free).
#[derive(Debug,Default)]
pub struct Bin {
    pub(crate) ptr: Option<NonNull<u8>>,
    pub(crate) size: usize,
}

// The block is owned exclusively by the bin, moving the bin moves the block.
unsafe impl Send for Bin {}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }
    /// start of the block, null for an empty bin
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }
    pub fn addr(&self) -> usize {
        self.as_ptr() as usize
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr {
            None => write!(f, "empty bin"),
            Some(p) => write!(f, "bin {:p} ({}B)", p, SizeFormatterBinary::new(self.size as u64)),
        }
    }
}
