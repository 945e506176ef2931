use super::CheckFailure;

/// distance between two pattern bytes
pub const STRIDE: usize = 2047;

/// Expected byte at `offset` of a block starting at `addr`.
#[inline]
pub fn pattern_byte(addr: usize, offset: usize) -> u8 {
    let j = addr ^ offset;
    ((j ^ (j >> 8)) & 0xFF) as u8
}

/// Write the pattern every [`STRIDE`] bytes and at the final byte.
///
/// # Safety
///
/// `ptr` must be valid for writes of `size` bytes.
pub unsafe fn mem_fill(ptr: *mut u8, size: usize) {
    if size == 0 {
        return;
    }
    let addr = ptr as usize;
    for i in (0..size).step_by(STRIDE) {
        ptr.add(i).write(pattern_byte(addr, i));
    }
    ptr.add(size-1).write(pattern_byte(addr, size-1));
}

/// Compare the bytes written by [`mem_fill`]. Only those bytes are read.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size` bytes and the pattern positions
/// must have been written.
pub unsafe fn mem_check(ptr: *const u8, size: usize) -> Result<(), CheckFailure> {
    if size == 0 {
        return Ok(());
    }
    let addr = ptr as usize;
    for i in (0..size).step_by(STRIDE) {
        if ptr.add(i).read() != pattern_byte(addr, i) {
            return Err(CheckFailure::Stride{offset: i});
        }
    }
    if ptr.add(size-1).read() != pattern_byte(addr, size-1) {
        return Err(CheckFailure::Tail{offset: size-1});
    }
    Ok(())
}

pub fn fill(buf: &mut [u8]) {
    unsafe { mem_fill(buf.as_mut_ptr(), buf.len()) }
}

pub fn check(buf: &[u8]) -> Result<(), CheckFailure> {
    unsafe { mem_check(buf.as_ptr(), buf.len()) }
}

#[cfg(test)]
mod test {
    use maligned::{A4096, align_first};

    use super::super::CheckFailure;
    use super::{STRIDE, check, fill, pattern_byte};

    /// page-aligned zeroed buffer
    fn create_buf(len: usize) -> Vec<u8> {
        let mut buf = align_first::<u8,A4096>(len);
        buf.resize(len, 0);
        assert_eq!(buf.as_ptr() as usize % 4096, 0);
        buf
    }

    #[test]
    fn test_pattern_byte() {
        assert_eq!(pattern_byte(0, 0), 0);
        assert_eq!(pattern_byte(0x1000, 0), 0x10);
        assert_eq!(pattern_byte(0x1000, 0x01), 0x11);
        assert_eq!(pattern_byte(0x12345, 0x45), 0x23);
    }

    #[test]
    fn test_fill_is_sparse() {
        let mut buf = create_buf(3 * STRIDE + 10);
        fill(&mut buf);
        let addr = buf.as_ptr() as usize;
        for (i, &b) in buf.iter().enumerate() {
            if i % STRIDE == 0 || i == buf.len() - 1 {
                assert_eq!(b, pattern_byte(addr, i));
            } else {
                assert_eq!(b, 0, "byte {} touched", i);
            }
        }
    }

    #[test]
    fn test_check_reports_position() {
        let mut buf = create_buf(5000);
        fill(&mut buf);
        assert_eq!(check(&buf), Ok(()));

        buf[STRIDE] ^= 0xFF;
        assert_eq!(check(&buf), Err(CheckFailure::Stride{offset: STRIDE}));
        assert_eq!(check(&buf).unwrap_err().code(), 1);
        buf[STRIDE] ^= 0xFF;

        buf[4999] ^= 0x01;
        assert_eq!(check(&buf), Err(CheckFailure::Tail{offset: 4999}));
        assert_eq!(check(&buf).unwrap_err().code(), 2);
    }

    #[test]
    fn test_unpatterned_bytes_ignored() {
        let mut buf = create_buf(100);
        fill(&mut buf);
        buf[50] = 0xAB;
        assert!(check(&buf).is_ok());
    }

    #[test]
    fn test_empty() {
        let mut buf: Vec<u8> = Vec::new();
        fill(&mut buf);
        assert!(check(&buf).is_ok());
    }

    #[test]
    fn test_moved_block_fails() {
        // the pattern depends on the address, a copy elsewhere no longer matches
        let mut buf = create_buf(4096 * 2);
        fill(&mut buf[..4096]);
        let (a, b) = buf.split_at_mut(4096);
        b.copy_from_slice(a);
        assert!(check(a).is_ok());
        assert!(check(b).is_err());
    }
}
