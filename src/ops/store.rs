//! Stores.
//!
//! Partial stores write exactly their documented footprint. The `stream`
//! variants are plain stores here: with no cache hierarchy to bypass, the
//! non-temporal hint degenerates to the store itself.

use crate::reg::{M128, M128d, M128i, M64};

#[inline(always)]
unsafe fn write_16(mem_addr: *mut u8, bytes: [u8; 16]) {
    (mem_addr as *mut [u8; 16]).write_unaligned(bytes);
}

#[inline(always)]
unsafe fn write_8(mem_addr: *mut u8, bytes: [u8; 8]) {
    (mem_addr as *mut [u8; 8]).write_unaligned(bytes);
}

/// Stores four single-precision lanes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store_ps(mem_addr: *mut f32, a: M128) {
    write_16(mem_addr as *mut u8, a.to_bytes());
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_ps(mem_addr: *mut f32, a: M128) {
    mm_store_ps(mem_addr, a);
}

/// Stores lane 0 to all four destination elements.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store1_ps(mem_addr: *mut f32, a: M128) {
    let e0 = a.to_f32x4()[0];
    mm_store_ps(mem_addr, M128::from_f32x4([e0; 4]));
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store_ps1(mem_addr: *mut f32, a: M128) {
    mm_store1_ps(mem_addr, a);
}

/// Stores lane 0 only.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 4 bytes.
#[inline(always)]
pub unsafe fn mm_store_ss(mem_addr: *mut f32, a: M128) {
    mem_addr.write_unaligned(a.to_f32x4()[0]);
}

/// Stores the four lanes in reversed order.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_storer_ps(mem_addr: *mut f32, a: M128) {
    let [e0, e1, e2, e3] = a.to_f32x4();
    mm_store_ps(mem_addr, M128::from_f32x4([e3, e2, e1, e0]));
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store_pd(mem_addr: *mut f64, a: M128d) {
    write_16(mem_addr as *mut u8, a.to_bytes());
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_pd(mem_addr: *mut f64, a: M128d) {
    mm_store_pd(mem_addr, a);
}

/// Stores lane 0 to both destination elements.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store_pd1(mem_addr: *mut f64, a: M128d) {
    let e0 = a.to_f64x2()[0];
    mm_store_pd(mem_addr, M128d::from_f64x2([e0; 2]));
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store1_pd(mem_addr: *mut f64, a: M128d) {
    mm_store_pd1(mem_addr, a);
}

/// Stores the low double-precision lane.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_store_sd(mem_addr: *mut f64, a: M128d) {
    mem_addr.write_unaligned(a.to_f64x2()[0]);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storel_pd(mem_addr: *mut f64, a: M128d) {
    mem_addr.write_unaligned(a.to_f64x2()[0]);
}

/// Stores the high double-precision lane.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storeh_pd(mem_addr: *mut f64, a: M128d) {
    mem_addr.write_unaligned(a.to_f64x2()[1]);
}

/// Stores the two lanes in reversed order.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_storer_pd(mem_addr: *mut f64, a: M128d) {
    let [e0, e1] = a.to_f64x2();
    mm_store_pd(mem_addr, M128d::from_f64x2([e1, e0]));
}

/// Stores the low 8 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storel_pi(mem_addr: *mut M64, a: M128) {
    let [lo, _] = a.to_halves();
    write_8(mem_addr as *mut u8, lo.to_bytes());
}

/// Stores the high 8 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storeh_pi(mem_addr: *mut M64, a: M128) {
    let [_, hi] = a.to_halves();
    write_8(mem_addr as *mut u8, hi.to_bytes());
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_store_si128(mem_addr: *mut M128i, a: M128i) {
    write_16(mem_addr as *mut u8, a.to_bytes());
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_si128(mem_addr: *mut M128i, a: M128i) {
    mm_store_si128(mem_addr, a);
}

/// Stores the low 8 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storel_epi64(mem_addr: *mut M128i, a: M128i) {
    let [lo, _] = a.to_halves();
    write_8(mem_addr as *mut u8, lo.to_bytes());
}

/// Stores the low 8 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_si64(mem_addr: *mut u8, a: M128i) {
    let [lo, _] = a.to_halves();
    write_8(mem_addr, lo.to_bytes());
}

/// Stores the low 4 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 4 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_si32(mem_addr: *mut u8, a: M128i) {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&a.to_bytes()[..4]);
    (mem_addr as *mut [u8; 4]).write_unaligned(bytes);
}

/// Stores the low 2 bytes.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 2 bytes.
#[inline(always)]
pub unsafe fn mm_storeu_si16(mem_addr: *mut u8, a: M128i) {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&a.to_bytes()[..2]);
    (mem_addr as *mut [u8; 2]).write_unaligned(bytes);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_stream_ps(mem_addr: *mut f32, a: M128) {
    mm_store_ps(mem_addr, a);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_stream_pd(mem_addr: *mut f64, a: M128d) {
    mm_store_pd(mem_addr, a);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline(always)]
pub unsafe fn mm_stream_si128(mem_addr: *mut M128i, a: M128i) {
    mm_store_si128(mem_addr, a);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_stream_pi(mem_addr: *mut M64, a: M64) {
    write_8(mem_addr as *mut u8, a.to_bytes());
}

/// # Safety
///
/// `mem_addr` must be valid for writing 4 bytes.
#[inline(always)]
pub unsafe fn mm_stream_si32(mem_addr: *mut i32, a: i32) {
    mem_addr.write_unaligned(a);
}

/// # Safety
///
/// `mem_addr` must be valid for writing 8 bytes.
#[inline(always)]
pub unsafe fn mm_stream_si64(mem_addr: *mut i64, a: i64) {
    mem_addr.write_unaligned(a);
}
