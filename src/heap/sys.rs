use std::ptr;

use super::Heap;

/// The process allocator, reached through libc.
#[derive(Clone,Copy,Debug,Default)]
pub struct SysHeap;

unsafe impl Heap for SysHeap {
    fn malloc(&self, size: usize) -> *mut u8 {
        unsafe { libc::malloc(size) as *mut u8 }
    }
    fn calloc(&self, size: usize) -> *mut u8 {
        unsafe { libc::calloc(size, 1) as *mut u8 }
    }
    fn memalign(&self, align: usize, size: usize) -> *mut u8 {
        // posix_memalign instead of memalign, the latter is missing on macOS
        let mut out: *mut libc::c_void = ptr::null_mut();
        match unsafe { libc::posix_memalign(&mut out, align, size) } {
            0 => out as *mut u8,
            _ => ptr::null_mut(),
        }
    }
    unsafe fn realloc(&self, ptr: *mut u8, size: usize) -> *mut u8 {
        libc::realloc(ptr as *mut libc::c_void, size) as *mut u8
    }
    unsafe fn free(&self, ptr: *mut u8) {
        libc::free(ptr as *mut libc::c_void)
    }
}
