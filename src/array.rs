//! The raw, two-sided growable byte array underneath [`Text`](crate::Text).
//!
//! This is the array-primitives layer (allocate, grow, copy, pin) that the
//! buffer engine in [`text`](crate::text) builds on. It is deliberately kept
//! below the level of UTF-8 awareness: everything here operates on raw bytes
//! and raw offsets, the same way a cross-platform buffer type owns a single
//! contiguous allocation and leaves the meaning of its contents to callers.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// A raw, manually-managed byte allocation with a capacity and a pin flag.
///
/// `RawArray` owns its memory outright: there is no reference counting and
/// no borrowing story here, only a single owner responsible for eventually
/// dropping it. [`Text`](crate::Text) is that owner.
pub(crate) struct RawArray {
    ptr: NonNull<u8>,
    cap: usize,
    pinned: bool,
}

fn layout_for(cap: usize) -> Layout {
    Layout::array::<u8>(cap).unwrap_or_else(|_| capacity_overflow())
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl RawArray {
    /// Allocates a new, unpinned array of the given capacity. Contents are
    /// indeterminate; callers must not read before writing.
    pub(crate) fn new(cap: usize) -> Self {
        Self::alloc(cap, false)
    }

    /// Allocates a new, pinned array of the given capacity.
    ///
    /// Pinning only matters at [`Text::run_bytes`](crate::Text::run_bytes):
    /// it is the promise that this array (or whatever it is reallocated
    /// into as it grows) may be handed out as an externally owned byte
    /// buffer. See the module docs on why this is a documented contract
    /// rather than a safety-load-bearing one in this implementation.
    pub(crate) fn new_pinned(cap: usize) -> Self {
        Self::alloc(cap, true)
    }

    fn alloc(cap: usize, pinned: bool) -> Self {
        if cap == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap: 0,
                pinned,
            };
        }
        let layout = layout_for(cap);
        let ptr = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Self { ptr, cap, pinned }
    }

    /// Reallocates in place to a new capacity, preserving the pin flag and
    /// the first `keep` bytes of the old content at the same offset.
    ///
    /// Used only by the buffer engine's growth paths, which always build a
    /// brand new `RawArray` and copy into it (front/back reserve placement
    /// differs from the old array's layout), so this is the one path that
    /// needs to move bytes between two distinct allocations rather than
    /// growing a single one in place.
    pub(crate) fn with_pinned(cap: usize, pinned: bool) -> Self {
        Self::alloc(cap, pinned)
    }

    #[inline]
    pub(crate) fn is_pinned(&self) -> bool {
        self.pinned
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    /// Copies `n` bytes from `src_off` to `dst_off` within this array.
    /// Ranges may overlap (implemented as a memmove).
    #[inline]
    pub(crate) fn copy_within(&mut self, src_off: usize, dst_off: usize, n: usize) {
        debug_assert!(src_off + n <= self.cap && dst_off + n <= self.cap);
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(src_off), base.add(dst_off), n);
        }
    }

    /// Copies `src` into this array starting at `dst_off`.
    #[inline]
    pub(crate) fn copy_from_slice(&mut self, dst_off: usize, src: &[u8]) {
        debug_assert!(dst_off + src.len() <= self.cap);
        self.as_mut_slice()[dst_off..dst_off + src.len()].copy_from_slice(src);
    }

    /// Consumes the array, returning an owned `Vec<u8>` holding exactly the
    /// `[off, off+len)` valid range. This is the "freeze" step for `run`.
    ///
    /// # Safety
    /// The caller must guarantee that `[off, off+len)` holds valid UTF-8;
    /// this is an invariant of [`Text`](crate::Text), not re-checked here.
    pub(crate) fn into_vec(self, off: usize, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().add(off), out.as_mut_ptr(), len);
            out.set_len(len);
        }
        out
    }
}

impl Drop for RawArray {
    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe { alloc::dealloc(self.ptr.as_ptr(), layout_for(self.cap)) }
        }
    }
}
