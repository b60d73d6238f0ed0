//! Register construction.
//!
//! The `set` family takes arguments from the highest lane down to lane 0;
//! the `setr` family takes them in lane order. Both store lane 0 in the
//! lowest-addressed bytes, so `set` and `setr` with reversed argument lists
//! produce identical registers.

use crate::reg::{M128, M128d, M128i, M64};

#[inline(always)]
pub fn mm_setzero_ps() -> M128 {
    M128::from_bytes([0u8; 16])
}

#[inline(always)]
pub fn mm_setzero_pd() -> M128d {
    M128d::from_bytes([0u8; 16])
}

#[inline(always)]
pub fn mm_setzero_si128() -> M128i {
    M128i::from_bytes([0u8; 16])
}

#[inline(always)]
pub fn mm_setzero_si64() -> M64 {
    M64::from_bytes([0u8; 8])
}

/// Four single-precision lanes, highest lane first.
#[inline(always)]
pub fn mm_set_ps(e3: f32, e2: f32, e1: f32, e0: f32) -> M128 {
    M128::from_f32x4([e0, e1, e2, e3])
}

/// Four single-precision lanes in lane order.
#[inline(always)]
pub fn mm_setr_ps(e0: f32, e1: f32, e2: f32, e3: f32) -> M128 {
    M128::from_f32x4([e0, e1, e2, e3])
}

#[inline(always)]
pub fn mm_set1_ps(a: f32) -> M128 {
    M128::from_f32x4([a; 4])
}

#[inline(always)]
pub fn mm_set_ps1(a: f32) -> M128 {
    mm_set1_ps(a)
}

/// `a` in lane 0, upper lanes zeroed.
#[inline(always)]
pub fn mm_set_ss(a: f32) -> M128 {
    M128::from_f32x4([a, 0.0, 0.0, 0.0])
}

/// Two double-precision lanes, high lane first.
#[inline(always)]
pub fn mm_set_pd(e1: f64, e0: f64) -> M128d {
    M128d::from_f64x2([e0, e1])
}

#[inline(always)]
pub fn mm_setr_pd(e0: f64, e1: f64) -> M128d {
    M128d::from_f64x2([e0, e1])
}

#[inline(always)]
pub fn mm_set1_pd(a: f64) -> M128d {
    M128d::from_f64x2([a; 2])
}

#[inline(always)]
pub fn mm_set_pd1(a: f64) -> M128d {
    mm_set1_pd(a)
}

/// `a` in lane 0, high lane zeroed.
#[inline(always)]
pub fn mm_set_sd(a: f64) -> M128d {
    M128d::from_f64x2([a, 0.0])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_set_epi8(
    e15: i8,
    e14: i8,
    e13: i8,
    e12: i8,
    e11: i8,
    e10: i8,
    e9: i8,
    e8: i8,
    e7: i8,
    e6: i8,
    e5: i8,
    e4: i8,
    e3: i8,
    e2: i8,
    e1: i8,
    e0: i8,
) -> M128i {
    M128i::from_i8x16([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_setr_epi8(
    e0: i8,
    e1: i8,
    e2: i8,
    e3: i8,
    e4: i8,
    e5: i8,
    e6: i8,
    e7: i8,
    e8: i8,
    e9: i8,
    e10: i8,
    e11: i8,
    e12: i8,
    e13: i8,
    e14: i8,
    e15: i8,
) -> M128i {
    M128i::from_i8x16([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
}

#[inline(always)]
pub fn mm_set1_epi8(a: i8) -> M128i {
    M128i::from_i8x16([a; 16])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_set_epi16(
    e7: i16,
    e6: i16,
    e5: i16,
    e4: i16,
    e3: i16,
    e2: i16,
    e1: i16,
    e0: i16,
) -> M128i {
    M128i::from_i16x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_setr_epi16(
    e0: i16,
    e1: i16,
    e2: i16,
    e3: i16,
    e4: i16,
    e5: i16,
    e6: i16,
    e7: i16,
) -> M128i {
    M128i::from_i16x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline(always)]
pub fn mm_set1_epi16(a: i16) -> M128i {
    M128i::from_i16x8([a; 8])
}

#[inline(always)]
pub fn mm_set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> M128i {
    M128i::from_i32x4([e0, e1, e2, e3])
}

#[inline(always)]
pub fn mm_setr_epi32(e0: i32, e1: i32, e2: i32, e3: i32) -> M128i {
    M128i::from_i32x4([e0, e1, e2, e3])
}

#[inline(always)]
pub fn mm_set1_epi32(a: i32) -> M128i {
    M128i::from_i32x4([a; 4])
}

#[inline(always)]
pub fn mm_set_epi64x(e1: i64, e0: i64) -> M128i {
    M128i::from_i64x2([e0, e1])
}

#[inline(always)]
pub fn mm_set1_epi64x(a: i64) -> M128i {
    M128i::from_i64x2([a; 2])
}

/// Two 64-bit registers packed together, high half first.
#[inline(always)]
pub fn mm_set_epi64(e1: M64, e0: M64) -> M128i {
    M128i::from_halves(e0, e1)
}

#[inline(always)]
pub fn mm_setr_epi64(e0: M64, e1: M64) -> M128i {
    M128i::from_halves(e0, e1)
}

#[inline(always)]
pub fn mm_set1_epi64(a: M64) -> M128i {
    M128i::from_halves(a, a)
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_set_pi8(e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8) -> M64 {
    M64::from_i8x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn mm_setr_pi8(e0: i8, e1: i8, e2: i8, e3: i8, e4: i8, e5: i8, e6: i8, e7: i8) -> M64 {
    M64::from_i8x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline(always)]
pub fn mm_set1_pi8(a: i8) -> M64 {
    M64::from_i8x8([a; 8])
}

#[inline(always)]
pub fn mm_set_pi16(e3: i16, e2: i16, e1: i16, e0: i16) -> M64 {
    M64::from_i16x4([e0, e1, e2, e3])
}

#[inline(always)]
pub fn mm_setr_pi16(e0: i16, e1: i16, e2: i16, e3: i16) -> M64 {
    M64::from_i16x4([e0, e1, e2, e3])
}

#[inline(always)]
pub fn mm_set1_pi16(a: i16) -> M64 {
    M64::from_i16x4([a; 4])
}

#[inline(always)]
pub fn mm_set_pi32(e1: i32, e0: i32) -> M64 {
    M64::from_i32x2([e0, e1])
}

#[inline(always)]
pub fn mm_setr_pi32(e0: i32, e1: i32) -> M64 {
    M64::from_i32x2([e0, e1])
}

#[inline(always)]
pub fn mm_set1_pi32(a: i32) -> M64 {
    M64::from_i32x2([a; 2])
}

// The "undefined" constructors promise some value; zero is the only reading
// that stays defined without handing out uninitialized memory.

#[inline(always)]
pub fn mm_undefined_ps() -> M128 {
    mm_setzero_ps()
}

#[inline(always)]
pub fn mm_undefined_pd() -> M128d {
    mm_setzero_pd()
}

#[inline(always)]
pub fn mm_undefined_si128() -> M128i {
    mm_setzero_si128()
}
