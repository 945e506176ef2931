use std::ptr::NonNull;

use log::{error, trace, warn};
use size_format::SizeFormatterBinary;

use crate::conf::AConf;
use crate::error::{FatalError, Result};
use crate::heap::{Heap, SysHeap};
use crate::verify;

pub mod bin;
pub mod strategy;

pub use self::bin::Bin;
pub use self::strategy::{SELECTOR_RANGE, Strategy};

/// Drives bins through the heap under test.
///
/// Holds no per-bin state. Each bin must be handled by one caller at a time,
/// there is no locking.
pub struct Engine<H: Heap = SysHeap> {
    heap: H,
    conf: AConf,
}

impl Engine<SysHeap> {
    pub fn new(conf: AConf) -> Self {
        Self::with_heap(SysHeap, conf)
    }
}

impl<H: Heap> Engine<H> {
    pub fn with_heap(heap: H, conf: AConf) -> Self {
        Self{
            heap,
            conf,
        }
    }
    pub fn heap(&self) -> &H {
        &self.heap
    }
    pub fn conf(&self) -> &AConf {
        &self.conf
    }

    /// Give `bin` a fresh block of (about) `size` bytes using the strategy
    /// picked by `r`, which should be `>= 1024`.
    ///
    /// With verification enabled the current block is checked first and the
    /// new one is filled with the pattern afterwards.
    pub fn bin_alloc(&self, bin: &mut Bin, size: usize, r: u32) -> Result<Strategy> {
        if self.conf.verify() {
            self.check(bin)?;
        }
        if r < SELECTOR_RANGE {
            warn!("selector {} below {}, strategy distribution is biased", r, SELECTOR_RANGE);
        }
        let strategy = Strategy::select(r, bin.size, self.conf.realloc_max);
        let r = r % SELECTOR_RANGE;
        let size = match strategy.adjust_size(size) {
            Some(s) => s,
            None => return Err(self.fatal(FatalError::OutOfMemory{r, size})),
        };
        trace!("bin_alloc r={} {:?} {}B", r, strategy, SizeFormatterBinary::new(size as u64));

        if size == 0 {
            // nothing to request, an empty bin is the only state with size 0
            self.release(bin);
            return Ok(strategy);
        }

        if strategy.releases_first() {
            self.release(bin);
        }
        let ptr = match strategy {
            Strategy::Aligned{align} => self.heap.memalign(align, size),
            Strategy::Zeroed => self.heap.calloc(size),
            Strategy::Resize => unsafe { self.heap.realloc(bin.as_ptr(), size) },
            Strategy::Plain => self.heap.malloc(size),
        };
        let ptr = match NonNull::new(ptr) {
            Some(p) => p,
            // a failed resize leaves the old block in place
            None => return Err(self.fatal(FatalError::OutOfMemory{r, size})),
        };
        bin.ptr = Some(ptr);
        bin.size = size;

        if self.conf.verify() {
            if strategy == Strategy::Zeroed {
                if let Err(offset) = unsafe { verify::zero_check(ptr.as_ptr(), size) } {
                    return Err(self.fatal(FatalError::NonZero{ptr: bin.addr(), offset}));
                }
            }
            unsafe { verify::mem_fill(ptr.as_ptr(), size) };
        }
        Ok(strategy)
    }

    /// Release the block of `bin`, checking it first when verification is
    /// enabled. Empty bins are left alone.
    pub fn bin_free(&self, bin: &mut Bin) -> Result<()> {
        if bin.size == 0 {
            return Ok(());
        }
        if self.conf.verify() {
            self.check(bin)?;
        }
        self.release(bin);
        Ok(())
    }

    fn check(&self, bin: &Bin) -> Result<()> {
        let ptr = match bin.ptr {
            Some(p) => p,
            None => return Ok(()),
        };
        match unsafe { verify::mem_check(ptr.as_ptr(), bin.size) } {
            Ok(()) => Ok(()),
            Err(failure) => Err(self.fatal(FatalError::Corrupt{ptr: bin.addr(), size: bin.size, failure})),
        }
    }

    fn release(&self, bin: &mut Bin) {
        if let Some(p) = bin.ptr.take() {
            unsafe { self.heap.free(p.as_ptr()) };
        }
        bin.size = 0;
    }

    fn fatal(&self, e: FatalError) -> FatalError {
        error!("{}", e);
        e
    }
}
