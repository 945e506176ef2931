use std::mem::size_of;

/// Only the selector modulo this value is significant.
pub const SELECTOR_RANGE: u32 = 1024;

/// How a bin gets its next block.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Strategy {
    /// memalign, the size is rounded up to a multiple of `align`
    Aligned { align: usize },
    /// calloc
    Zeroed,
    /// realloc of the current block
    Resize,
    /// malloc
    Plain,
}

impl Strategy {
    /// Map a random selector to a strategy.
    ///
    /// | `r % 1024`  | strategy                                   |
    /// |-------------|--------------------------------------------|
    /// | `0..4`      | aligned to `word << r`                     |
    /// | `4..20`     | zeroed                                     |
    /// | `20..100`   | resize, if `bin_size < realloc_max`        |
    /// | otherwise   | plain                                      |
    pub fn select(r: u32, bin_size: usize, realloc_max: usize) -> Self {
        let r = r % SELECTOR_RANGE;
        if r < 4 {
            Strategy::Aligned{align: size_of::<usize>() << r}
        } else if r < 20 {
            Strategy::Zeroed
        } else if r < 100 && bin_size < realloc_max {
            Strategy::Resize
        } else {
            Strategy::Plain
        }
    }

    /// Size actually requested for `size`, `None` on overflow.
    pub fn adjust_size(&self, size: usize) -> Option<usize> {
        match *self {
            Strategy::Aligned{align} => round_up(size, align),
            _ => Some(size),
        }
    }

    /// whether the current block is released before the new one is requested
    pub fn releases_first(&self) -> bool {
        *self != Strategy::Resize
    }
}

/// smallest multiple of `align` that is `>= size`
pub fn round_up(size: usize, align: usize) -> Option<usize> {
    match size % align {
        0 => Some(size),
        rem => size.checked_add(align - rem),
    }
}

#[cfg(test)]
mod test {
    use std::mem::size_of;

    use super::{Strategy, round_up};

    const MAX: usize = 2000;

    #[test]
    fn test_select_boundaries() {
        let word = size_of::<usize>();
        assert_eq!(Strategy::select(1024, 0, MAX), Strategy::Aligned{align: word});
        assert_eq!(Strategy::select(1027, 0, MAX), Strategy::Aligned{align: word * 8});
        assert_eq!(Strategy::select(1028, 0, MAX), Strategy::Zeroed);
        assert_eq!(Strategy::select(1043, 0, MAX), Strategy::Zeroed);
        assert_eq!(Strategy::select(1044, 0, MAX), Strategy::Resize);
        assert_eq!(Strategy::select(1123, 1999, MAX), Strategy::Resize);
        assert_eq!(Strategy::select(1124, 0, MAX), Strategy::Plain);
        assert_eq!(Strategy::select(2047, 0, MAX), Strategy::Plain);
    }

    #[test]
    fn test_resize_capped() {
        assert_eq!(Strategy::select(1044, MAX, MAX), Strategy::Plain);
        assert_eq!(Strategy::select(1044, 2500, MAX), Strategy::Plain);
        assert_eq!(Strategy::select(1044, 0, 0), Strategy::Plain);
    }

    #[test]
    fn test_adjust() {
        assert_eq!(Strategy::Aligned{align: 16}.adjust_size(0), Some(0));
        assert_eq!(Strategy::Aligned{align: 16}.adjust_size(1), Some(16));
        assert_eq!(Strategy::Aligned{align: 16}.adjust_size(32), Some(32));
        assert_eq!(Strategy::Aligned{align: 64}.adjust_size(100), Some(128));
        assert_eq!(Strategy::Zeroed.adjust_size(100), Some(100));
        assert_eq!(Strategy::Plain.adjust_size(3), Some(3));
        assert_eq!(round_up(usize::MAX, 8), None);
    }

    #[test]
    fn test_releases_first() {
        assert!(!Strategy::Resize.releases_first());
        assert!(Strategy::Plain.releases_first());
        assert!(Strategy::Zeroed.releases_first());
        assert!(Strategy::Aligned{align: 8}.releases_first());
    }
}
