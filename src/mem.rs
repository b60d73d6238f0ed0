//! Aligned memory helpers and ordering shims.
//!
//! [`mm_malloc`]/[`mm_free`] keep the origin contract: a raw pointer that is
//! null on failure, freed with the paired call, where freeing null is a
//! no-op. Rust callers that can afford a safe API should prefer the `Vec`
//! helpers, which report failures through [`CompatError`].

use std::alloc::{alloc, alloc_zeroed, dealloc, Layout};
use std::ptr;

use crate::error::{allocation_error, layout_error, CompatError, Result};

/// Prefetch hint: into all cache levels.
pub const MM_HINT_T0: i32 = 3;
/// Prefetch hint: into L2 and higher.
pub const MM_HINT_T1: i32 = 2;
/// Prefetch hint: into L3 and higher.
pub const MM_HINT_T2: i32 = 1;
/// Prefetch hint: non-temporal.
pub const MM_HINT_NTA: i32 = 0;

// Bookkeeping stored immediately below the pointer handed out by mm_malloc:
// distance back to the raw allocation, total allocated size, and alignment.
const HEADER_WORDS: usize = 3;
const HEADER_BYTES: usize = HEADER_WORDS * std::mem::size_of::<usize>();

/// Allocates `size` bytes aligned to `align`, returning null on failure.
///
/// `align` values below the native word size are widened to it, matching the
/// origin allocator's normalization of small alignments. A non-power-of-two
/// alignment fails the allocation.
///
/// # Safety
///
/// The returned pointer must be released with [`mm_free`] and not with any
/// other deallocator.
pub unsafe fn mm_malloc(size: usize, align: usize) -> *mut u8 {
    let align = align.max(std::mem::size_of::<usize>());
    if !align.is_power_of_two() {
        return ptr::null_mut();
    }

    let total = match size.checked_add(align + HEADER_BYTES) {
        Some(t) => t,
        None => return ptr::null_mut(),
    };
    let layout = match Layout::from_size_align(total, align) {
        Ok(l) => l,
        Err(_) => return ptr::null_mut(),
    };

    let raw = alloc(layout);
    if raw.is_null() {
        return ptr::null_mut();
    }

    let addr = raw as usize + HEADER_BYTES;
    let user = ((addr + align - 1) & !(align - 1)) as *mut u8;

    let header = user.sub(HEADER_BYTES) as *mut usize;
    header.write(user as usize - raw as usize);
    header.add(1).write(total);
    header.add(2).write(align);

    user
}

/// Releases a pointer obtained from [`mm_malloc`]. Freeing null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by [`mm_malloc`] that
/// has not already been freed.
pub unsafe fn mm_free(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }

    let header = ptr.sub(HEADER_BYTES) as *const usize;
    let offset = header.read();
    let total = header.add(1).read();
    let align = header.add(2).read();

    let raw = ptr.sub(offset);
    dealloc(raw, Layout::from_size_align_unchecked(total, align));
}

#[inline(always)]
fn f32_layout(len: usize, align: usize) -> Result<Layout> {
    let size = len
        .checked_mul(std::mem::size_of::<f32>())
        .ok_or_else(|| layout_error(usize::MAX, align, "total size overflows"))?;
    Layout::from_size_align(size, align)
        .map_err(|_| layout_error(size, align, "alignment must be a power of two"))
}

/// Allocates a `Vec<f32>` of `len` zeroes whose buffer is aligned to `align`.
#[inline(always)]
pub fn alloc_zeroed_f32_vec(len: usize, align: usize) -> Result<Vec<f32>> {
    if len == 0 {
        return Ok(Vec::new());
    }

    let layout = f32_layout(len, align)?;
    let ptr = unsafe { alloc_zeroed(layout) as *mut f32 };
    if ptr.is_null() {
        return Err(allocation_error(layout.size(), align));
    }

    // SAFETY: ptr is non-null, was allocated with this layout, and all
    // len elements are initialized to zero. Capacity equals len, so the
    // Vec will not grow in place past the allocation.
    Ok(unsafe { Vec::from_raw_parts(ptr, len, len) })
}

/// Allocates an uninitialized `Vec<f32>` of `len` elements aligned to `align`.
///
/// # Safety
///
/// The caller must initialize every element before reading it.
#[inline(always)]
pub unsafe fn alloc_uninit_f32_vec(len: usize, align: usize) -> Result<Vec<f32>> {
    if len == 0 {
        return Ok(Vec::new());
    }

    let layout = f32_layout(len, align)?;
    let ptr = alloc(layout) as *mut f32;
    if ptr.is_null() {
        return Err(allocation_error(layout.size(), align));
    }

    Ok(Vec::from_raw_parts(ptr, len, len))
}

/// Cache prefetch hint. The portable lane model has no cache to steer, so
/// this validates nothing and touches nothing.
#[inline(always)]
pub fn mm_prefetch(_p: *const u8, _hint: i32) {}

/// Spin-wait hint for busy-polling loops.
#[inline(always)]
pub fn mm_pause() {
    std::hint::spin_loop();
}

/// Store fence. All stores are plain memory writes here, so a full fence
/// over-delivers on the origin guarantee.
#[inline(always)]
pub fn mm_sfence() {
    std::sync::atomic::fence(std::sync::atomic::Ordering::SeqCst);
}

/// Load fence.
#[inline(always)]
pub fn mm_lfence() {
    std::sync::atomic::fence(std::sync::atomic::Ordering::SeqCst);
}

/// Full memory fence.
#[inline(always)]
pub fn mm_mfence() {
    std::sync::atomic::fence(std::sync::atomic::Ordering::SeqCst);
}
