//! Loads.
//!
//! The aligned and unaligned variants share one tolerant implementation, as
//! the translation target's load instructions accept any address. Partial
//! loads read exactly their documented footprint and nothing beyond it.

use crate::reg::{M128, M128d, M128i, M64};

#[inline(always)]
unsafe fn read_16(mem_addr: *const u8) -> [u8; 16] {
    (mem_addr as *const [u8; 16]).read_unaligned()
}

#[inline(always)]
unsafe fn read_8(mem_addr: *const u8) -> [u8; 8] {
    (mem_addr as *const [u8; 8]).read_unaligned()
}

/// Loads four single-precision lanes.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_load_ps(mem_addr: *const f32) -> M128 {
    M128::from_bytes(read_16(mem_addr as *const u8))
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_ps(mem_addr: *const f32) -> M128 {
    mm_load_ps(mem_addr)
}

/// Broadcasts the addressed scalar to all four lanes.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 4 bytes.
#[inline(always)]
pub unsafe fn mm_load1_ps(mem_addr: *const f32) -> M128 {
    M128::from_f32x4([mem_addr.read_unaligned(); 4])
}

/// # Safety
///
/// `mem_addr` must be valid for reading 4 bytes.
#[inline(always)]
pub unsafe fn mm_load_ps1(mem_addr: *const f32) -> M128 {
    mm_load1_ps(mem_addr)
}

/// Loads the addressed scalar into lane 0 and zeroes the upper lanes.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 4 bytes.
#[inline(always)]
pub unsafe fn mm_load_ss(mem_addr: *const f32) -> M128 {
    M128::from_f32x4([mem_addr.read_unaligned(), 0.0, 0.0, 0.0])
}

/// Loads four lanes in reversed order: the addressed element lands in lane 3.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_loadr_ps(mem_addr: *const f32) -> M128 {
    let [e0, e1, e2, e3] = mm_load_ps(mem_addr).to_f32x4();
    M128::from_f32x4([e3, e2, e1, e0])
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_load_pd(mem_addr: *const f64) -> M128d {
    M128d::from_bytes(read_16(mem_addr as *const u8))
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_pd(mem_addr: *const f64) -> M128d {
    mm_load_pd(mem_addr)
}

/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_load1_pd(mem_addr: *const f64) -> M128d {
    M128d::from_f64x2([mem_addr.read_unaligned(); 2])
}

/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_load_pd1(mem_addr: *const f64) -> M128d {
    mm_load1_pd(mem_addr)
}

/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_load_sd(mem_addr: *const f64) -> M128d {
    M128d::from_f64x2([mem_addr.read_unaligned(), 0.0])
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_loadr_pd(mem_addr: *const f64) -> M128d {
    let [e0, e1] = mm_load_pd(mem_addr).to_f64x2();
    M128d::from_f64x2([e1, e0])
}

/// Replaces the low double-precision lane of `a` with the addressed scalar.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadl_pd(a: M128d, mem_addr: *const f64) -> M128d {
    let mut lanes = a.to_f64x2();
    lanes[0] = mem_addr.read_unaligned();
    M128d::from_f64x2(lanes)
}

/// Replaces the high double-precision lane of `a` with the addressed scalar.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadh_pd(a: M128d, mem_addr: *const f64) -> M128d {
    let mut lanes = a.to_f64x2();
    lanes[1] = mem_addr.read_unaligned();
    M128d::from_f64x2(lanes)
}

/// Replaces the low 8 bytes of `a` with the addressed 64-bit register.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadl_pi(a: M128, mem_addr: *const M64) -> M128 {
    let [_, hi] = a.to_halves();
    M128::from_halves(M64::from_bytes(read_8(mem_addr as *const u8)), hi)
}

/// Replaces the high 8 bytes of `a` with the addressed 64-bit register.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadh_pi(a: M128, mem_addr: *const M64) -> M128 {
    let [lo, _] = a.to_halves();
    M128::from_halves(lo, M64::from_bytes(read_8(mem_addr as *const u8)))
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_load_si128(mem_addr: *const M128i) -> M128i {
    M128i::from_bytes(read_16(mem_addr as *const u8))
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_si128(mem_addr: *const M128i) -> M128i {
    mm_load_si128(mem_addr)
}

/// Loads the low 8 bytes and zeroes the high half.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadl_epi64(mem_addr: *const M128i) -> M128i {
    M64::from_bytes(read_8(mem_addr as *const u8)).widen()
}

/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_si64(mem_addr: *const u8) -> M128i {
    M64::from_bytes(read_8(mem_addr)).widen()
}

/// Loads 4 bytes into the low lane and zeroes the rest.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 4 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_si32(mem_addr: *const u8) -> M128i {
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&(mem_addr as *const [u8; 4]).read_unaligned());
    M128i::from_bytes(bytes)
}

/// Loads 2 bytes into the low lane and zeroes the rest.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 2 bytes.
#[inline(always)]
pub unsafe fn mm_loadu_si16(mem_addr: *const u8) -> M128i {
    let mut bytes = [0u8; 16];
    bytes[..2].copy_from_slice(&(mem_addr as *const [u8; 2]).read_unaligned());
    M128i::from_bytes(bytes)
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_lddqu_si128(mem_addr: *const M128i) -> M128i {
    mm_loadu_si128(mem_addr)
}

/// Broadcasts the addressed double to both lanes.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 8 bytes.
#[inline(always)]
pub unsafe fn mm_loaddup_pd(mem_addr: *const f64) -> M128d {
    mm_load1_pd(mem_addr)
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline(always)]
pub unsafe fn mm_stream_load_si128(mem_addr: *const M128i) -> M128i {
    mm_load_si128(mem_addr)
}
