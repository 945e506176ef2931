//! The allocator under test.

pub mod sys;

pub use self::sys::SysHeap;

/// Raw allocation primitives the engine exercises.
///
/// Every method returns null when no memory is available.
///
/// # Safety
///
/// A non-null pointer returned for `size` bytes must be valid for reads and
/// writes of `size` bytes until it is passed to `realloc` or `free`.
/// `memalign` results must be aligned to `align`. `calloc` results are
/// expected to be zeroed, the engine verifies that when verification is on.
pub unsafe trait Heap {
    fn malloc(&self, size: usize) -> *mut u8;
    fn calloc(&self, size: usize) -> *mut u8;
    /// `align` is a power of two and a multiple of the word size,
    /// `size` is a multiple of `align`.
    fn memalign(&self, align: usize, size: usize) -> *mut u8;
    /// Grow or shrink `ptr`, keeping the common prefix. A null `ptr` behaves
    /// like `malloc`. On failure `ptr` stays valid.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live block from this heap.
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8;
    /// # Safety
    ///
    /// `ptr` must be a live block from this heap.
    unsafe fn free(&self, ptr: *mut u8);
}
