use std::mem::size_of;

/// Confirm that all `size` bytes are zero, scanning a word at a time and then
/// the trailing bytes. On failure returns the offset of the first non-zero byte.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size` initialized bytes.
pub unsafe fn zero_check(ptr: *const u8, size: usize) -> Result<(), usize> {
    let word = size_of::<usize>();
    let words = size / word;
    for w in 0..words {
        let v = (ptr.add(w * word) as *const usize).read_unaligned();
        if v != 0 {
            return Err(first_non_zero(ptr, w * word, size));
        }
    }
    match first_non_zero(ptr, words * word, size) {
        off if off < size => Err(off),
        _ => Ok(()),
    }
}

/// returns `size` when everything from `from` on is zero
unsafe fn first_non_zero(ptr: *const u8, from: usize, size: usize) -> usize {
    (from..size).find(|&i| ptr.add(i).read() != 0).unwrap_or(size)
}

pub fn check_zeroed(buf: &[u8]) -> Result<(), usize> {
    unsafe { zero_check(buf.as_ptr(), buf.len()) }
}
