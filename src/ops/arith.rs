//! Packed integer arithmetic.
//!
//! Plain `add`/`sub`/`mullo` wrap around on overflow; the `adds`/`subs`
//! families clamp to the lane's representable range instead. Widening
//! multiplies, multiply-accumulate, absolute difference and the horizontal
//! pair operations all follow the documented lane index orders exactly.

use num::traits::{SaturatingAdd, SaturatingSub, WrappingAdd, WrappingSub};

use crate::reg::{M128i, M64};

#[inline(always)]
fn add_lanes<T: WrappingAdd + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].wrapping_add(&b[i]))
}

#[inline(always)]
fn sub_lanes<T: WrappingSub + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].wrapping_sub(&b[i]))
}

#[inline(always)]
fn adds_lanes<T: SaturatingAdd + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].saturating_add(&b[i]))
}

#[inline(always)]
fn subs_lanes<T: SaturatingSub + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].saturating_sub(&b[i]))
}

#[inline(always)]
fn min_lanes<T: Ord + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].min(b[i]))
}

#[inline(always)]
fn max_lanes<T: Ord + Copy, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].max(b[i]))
}

// Pairwise horizontal combine: the low output lanes come from adjacent pairs
// of `a`, the high output lanes from adjacent pairs of `b`.
#[inline(always)]
fn horizontal<T: Copy, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> T) -> [T; N] {
    std::array::from_fn(|i| {
        if i < N / 2 {
            f(a[2 * i], a[2 * i + 1])
        } else {
            f(b[2 * (i - N / 2)], b[2 * (i - N / 2) + 1])
        }
    })
}

#[inline(always)]
pub fn mm_add_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(add_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_add_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(add_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_add_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(add_lanes(a.to_i32x4(), b.to_i32x4()))
}

#[inline(always)]
pub fn mm_add_epi64(a: M128i, b: M128i) -> M128i {
    M128i::from_i64x2(add_lanes(a.to_i64x2(), b.to_i64x2()))
}

#[inline(always)]
pub fn mm_add_si64(a: M64, b: M64) -> M64 {
    M64::from_i64(a.to_i64().wrapping_add(b.to_i64()))
}

#[inline(always)]
pub fn mm_sub_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(sub_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_sub_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(sub_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_sub_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(sub_lanes(a.to_i32x4(), b.to_i32x4()))
}

#[inline(always)]
pub fn mm_sub_epi64(a: M128i, b: M128i) -> M128i {
    M128i::from_i64x2(sub_lanes(a.to_i64x2(), b.to_i64x2()))
}

#[inline(always)]
pub fn mm_sub_si64(a: M64, b: M64) -> M64 {
    M64::from_i64(a.to_i64().wrapping_sub(b.to_i64()))
}

#[inline(always)]
pub fn mm_adds_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(adds_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_adds_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(adds_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_adds_epu8(a: M128i, b: M128i) -> M128i {
    M128i::from_u8x16(adds_lanes(a.to_u8x16(), b.to_u8x16()))
}

#[inline(always)]
pub fn mm_adds_epu16(a: M128i, b: M128i) -> M128i {
    M128i::from_u16x8(adds_lanes(a.to_u16x8(), b.to_u16x8()))
}

#[inline(always)]
pub fn mm_subs_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(subs_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_subs_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(subs_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_subs_epu8(a: M128i, b: M128i) -> M128i {
    M128i::from_u8x16(subs_lanes(a.to_u8x16(), b.to_u8x16()))
}

#[inline(always)]
pub fn mm_subs_epu16(a: M128i, b: M128i) -> M128i {
    M128i::from_u16x8(subs_lanes(a.to_u16x8(), b.to_u16x8()))
}

/// Rounding average: `(a + b + 1) >> 1` without overflow.
#[inline(always)]
pub fn mm_avg_epu8(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u8x16(), b.to_u8x16());
    M128i::from_u8x16(std::array::from_fn(|i| {
        ((a[i] as u16 + b[i] as u16 + 1) >> 1) as u8
    }))
}

#[inline(always)]
pub fn mm_avg_epu16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u16x8(), b.to_u16x8());
    M128i::from_u16x8(std::array::from_fn(|i| {
        ((a[i] as u32 + b[i] as u32 + 1) >> 1) as u16
    }))
}

#[inline(always)]
pub fn mm_avg_pu8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u8x8(), b.to_u8x8());
    M64::from_u8x8(std::array::from_fn(|i| {
        ((a[i] as u16 + b[i] as u16 + 1) >> 1) as u8
    }))
}

#[inline(always)]
pub fn mm_avg_pu16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u16x4(), b.to_u16x4());
    M64::from_u16x4(std::array::from_fn(|i| {
        ((a[i] as u32 + b[i] as u32 + 1) >> 1) as u16
    }))
}

#[inline(always)]
pub fn mm_abs_epi8(a: M128i) -> M128i {
    M128i::from_i8x16(a.to_i8x16().map(|x| x.wrapping_abs()))
}

#[inline(always)]
pub fn mm_abs_epi16(a: M128i) -> M128i {
    M128i::from_i16x8(a.to_i16x8().map(|x| x.wrapping_abs()))
}

#[inline(always)]
pub fn mm_abs_epi32(a: M128i) -> M128i {
    M128i::from_i32x4(a.to_i32x4().map(|x| x.wrapping_abs()))
}

#[inline(always)]
pub fn mm_abs_pi8(a: M64) -> M64 {
    M64::from_i8x8(a.to_i8x8().map(|x| x.wrapping_abs()))
}

#[inline(always)]
pub fn mm_abs_pi16(a: M64) -> M64 {
    M64::from_i16x4(a.to_i16x4().map(|x| x.wrapping_abs()))
}

#[inline(always)]
pub fn mm_abs_pi32(a: M64) -> M64 {
    M64::from_i32x2(a.to_i32x2().map(|x| x.wrapping_abs()))
}

#[inline(always)]
fn sign_apply<T: num::traits::PrimInt + WrappingSub + Copy>(a: T, b: T) -> T {
    let zero = T::zero();
    if b < zero {
        zero.wrapping_sub(&a)
    } else if b == zero {
        zero
    } else {
        a
    }
}

/// Negates, zeroes or passes each lane of `a` by the sign of the matching
/// lane of `b`.
#[inline(always)]
pub fn mm_sign_epi8(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i8x16(), b.to_i8x16());
    M128i::from_i8x16(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

#[inline(always)]
pub fn mm_sign_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i16x8(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

#[inline(always)]
pub fn mm_sign_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i32x4(), b.to_i32x4());
    M128i::from_i32x4(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

#[inline(always)]
pub fn mm_sign_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8x8(), b.to_i8x8());
    M64::from_i8x8(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

#[inline(always)]
pub fn mm_sign_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16x4(), b.to_i16x4());
    M64::from_i16x4(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

#[inline(always)]
pub fn mm_sign_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32x2(), b.to_i32x2());
    M64::from_i32x2(std::array::from_fn(|i| sign_apply(a[i], b[i])))
}

/// Low 16 bits of each 16x16-bit product.
#[inline(always)]
pub fn mm_mullo_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i16x8(std::array::from_fn(|i| a[i].wrapping_mul(b[i])))
}

/// Low 32 bits of each 32x32-bit product.
#[inline(always)]
pub fn mm_mullo_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i32x4(), b.to_i32x4());
    M128i::from_i32x4(std::array::from_fn(|i| a[i].wrapping_mul(b[i])))
}

#[inline(always)]
pub fn mm_mullo_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16x4(), b.to_i16x4());
    M64::from_i16x4(std::array::from_fn(|i| a[i].wrapping_mul(b[i])))
}

/// High 16 bits of each signed 16x16-bit product.
#[inline(always)]
pub fn mm_mulhi_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i16x8(std::array::from_fn(|i| {
        ((a[i] as i32 * b[i] as i32) >> 16) as i16
    }))
}

/// High 16 bits of each unsigned 16x16-bit product.
#[inline(always)]
pub fn mm_mulhi_epu16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u16x8(), b.to_u16x8());
    M128i::from_u16x8(std::array::from_fn(|i| {
        ((a[i] as u32 * b[i] as u32) >> 16) as u16
    }))
}

#[inline(always)]
pub fn mm_mulhi_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16x4(), b.to_i16x4());
    M64::from_i16x4(std::array::from_fn(|i| {
        ((a[i] as i32 * b[i] as i32) >> 16) as i16
    }))
}

#[inline(always)]
pub fn mm_mulhi_pu16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u16x4(), b.to_u16x4());
    M64::from_u16x4(std::array::from_fn(|i| {
        ((a[i] as u32 * b[i] as u32) >> 16) as u16
    }))
}

#[inline(always)]
fn mulhrs_one(a: i16, b: i16) -> i16 {
    let t = ((a as i32 * b as i32) >> 14) + 1;
    (t >> 1) as i16
}

/// Fixed-point multiply: `((a * b) >> 14 + 1) >> 1`, truncated to 16 bits.
#[inline(always)]
pub fn mm_mulhrs_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i16x8(std::array::from_fn(|i| mulhrs_one(a[i], b[i])))
}

#[inline(always)]
pub fn mm_mulhrs_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16x4(), b.to_i16x4());
    M64::from_i16x4(std::array::from_fn(|i| mulhrs_one(a[i], b[i])))
}

/// Widening unsigned multiply of lanes 0 and 2.
#[inline(always)]
pub fn mm_mul_epu32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u32x4(), b.to_u32x4());
    M128i::from_u64x2([
        a[0] as u64 * b[0] as u64,
        a[2] as u64 * b[2] as u64,
    ])
}

/// Widening signed multiply of lanes 0 and 2.
#[inline(always)]
pub fn mm_mul_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i32x4(), b.to_i32x4());
    M128i::from_i64x2([
        a[0] as i64 * b[0] as i64,
        a[2] as i64 * b[2] as i64,
    ])
}

/// Widening unsigned multiply of the low 32-bit lanes.
#[inline(always)]
pub fn mm_mul_su32(a: M64, b: M64) -> M64 {
    M64::from_u64(a.to_u32x2()[0] as u64 * b.to_u32x2()[0] as u64)
}

/// Signed 16-bit pair products, wrapping-added into 32-bit lanes.
#[inline(always)]
pub fn mm_madd_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i32x4(std::array::from_fn(|i| {
        let lo = a[2 * i] as i32 * b[2 * i] as i32;
        let hi = a[2 * i + 1] as i32 * b[2 * i + 1] as i32;
        lo.wrapping_add(hi)
    }))
}

#[inline(always)]
fn maddubs_pair(a0: u8, b0: i8, a1: u8, b1: i8) -> i16 {
    // Each product fits in i16; only the pair sum saturates.
    let sum = a0 as i32 * b0 as i32 + a1 as i32 * b1 as i32;
    sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Unsigned-by-signed byte pair products, saturating-added into 16-bit lanes.
#[inline(always)]
pub fn mm_maddubs_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u8x16(), b.to_i8x16());
    M128i::from_i16x8(std::array::from_fn(|i| {
        maddubs_pair(a[2 * i], b[2 * i], a[2 * i + 1], b[2 * i + 1])
    }))
}

#[inline(always)]
pub fn mm_maddubs_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u8x8(), b.to_i8x8());
    M64::from_i16x4(std::array::from_fn(|i| {
        maddubs_pair(a[2 * i], b[2 * i], a[2 * i + 1], b[2 * i + 1])
    }))
}

/// Sums absolute byte differences over each 8-byte half into the two 64-bit
/// lanes.
#[inline(always)]
pub fn mm_sad_epu8(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_u8x16(), b.to_u8x16());
    let mut sums = [0u64; 2];
    for i in 0..16 {
        sums[i / 8] += a[i].abs_diff(b[i]) as u64;
    }
    M128i::from_u64x2(sums)
}

#[inline(always)]
pub fn mm_sad_pu8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u8x8(), b.to_u8x8());
    let mut sum = 0u64;
    for i in 0..8 {
        sum += a[i].abs_diff(b[i]) as u64;
    }
    M64::from_u64(sum)
}

#[inline(always)]
pub fn mm_min_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(min_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_min_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(min_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_min_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(min_lanes(a.to_i32x4(), b.to_i32x4()))
}

#[inline(always)]
pub fn mm_min_epu8(a: M128i, b: M128i) -> M128i {
    M128i::from_u8x16(min_lanes(a.to_u8x16(), b.to_u8x16()))
}

#[inline(always)]
pub fn mm_min_epu16(a: M128i, b: M128i) -> M128i {
    M128i::from_u16x8(min_lanes(a.to_u16x8(), b.to_u16x8()))
}

#[inline(always)]
pub fn mm_min_epu32(a: M128i, b: M128i) -> M128i {
    M128i::from_u32x4(min_lanes(a.to_u32x4(), b.to_u32x4()))
}

#[inline(always)]
pub fn mm_max_epi8(a: M128i, b: M128i) -> M128i {
    M128i::from_i8x16(max_lanes(a.to_i8x16(), b.to_i8x16()))
}

#[inline(always)]
pub fn mm_max_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(max_lanes(a.to_i16x8(), b.to_i16x8()))
}

#[inline(always)]
pub fn mm_max_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(max_lanes(a.to_i32x4(), b.to_i32x4()))
}

#[inline(always)]
pub fn mm_max_epu8(a: M128i, b: M128i) -> M128i {
    M128i::from_u8x16(max_lanes(a.to_u8x16(), b.to_u8x16()))
}

#[inline(always)]
pub fn mm_max_epu16(a: M128i, b: M128i) -> M128i {
    M128i::from_u16x8(max_lanes(a.to_u16x8(), b.to_u16x8()))
}

#[inline(always)]
pub fn mm_max_epu32(a: M128i, b: M128i) -> M128i {
    M128i::from_u32x4(max_lanes(a.to_u32x4(), b.to_u32x4()))
}

#[inline(always)]
pub fn mm_min_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(min_lanes(a.to_i16x4(), b.to_i16x4()))
}

#[inline(always)]
pub fn mm_max_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(max_lanes(a.to_i16x4(), b.to_i16x4()))
}

#[inline(always)]
pub fn mm_min_pu8(a: M64, b: M64) -> M64 {
    M64::from_u8x8(min_lanes(a.to_u8x8(), b.to_u8x8()))
}

#[inline(always)]
pub fn mm_max_pu8(a: M64, b: M64) -> M64 {
    M64::from_u8x8(max_lanes(a.to_u8x8(), b.to_u8x8()))
}

#[inline(always)]
pub fn mm_hadd_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(horizontal(a.to_i16x8(), b.to_i16x8(), |x, y| {
        x.wrapping_add(y)
    }))
}

#[inline(always)]
pub fn mm_hadd_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(horizontal(a.to_i32x4(), b.to_i32x4(), |x, y| {
        x.wrapping_add(y)
    }))
}

#[inline(always)]
pub fn mm_hadds_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(horizontal(a.to_i16x8(), b.to_i16x8(), |x, y| {
        x.saturating_add(y)
    }))
}

#[inline(always)]
pub fn mm_hsub_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(horizontal(a.to_i16x8(), b.to_i16x8(), |x, y| {
        x.wrapping_sub(y)
    }))
}

#[inline(always)]
pub fn mm_hsub_epi32(a: M128i, b: M128i) -> M128i {
    M128i::from_i32x4(horizontal(a.to_i32x4(), b.to_i32x4(), |x, y| {
        x.wrapping_sub(y)
    }))
}

#[inline(always)]
pub fn mm_hsubs_epi16(a: M128i, b: M128i) -> M128i {
    M128i::from_i16x8(horizontal(a.to_i16x8(), b.to_i16x8(), |x, y| {
        x.saturating_sub(y)
    }))
}

#[inline(always)]
pub fn mm_hadd_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(horizontal(a.to_i16x4(), b.to_i16x4(), |x, y| {
        x.wrapping_add(y)
    }))
}

#[inline(always)]
pub fn mm_hadd_pi32(a: M64, b: M64) -> M64 {
    M64::from_i32x2(horizontal(a.to_i32x2(), b.to_i32x2(), |x, y| {
        x.wrapping_add(y)
    }))
}

#[inline(always)]
pub fn mm_hadds_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(horizontal(a.to_i16x4(), b.to_i16x4(), |x, y| {
        x.saturating_add(y)
    }))
}

#[inline(always)]
pub fn mm_hsub_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(horizontal(a.to_i16x4(), b.to_i16x4(), |x, y| {
        x.wrapping_sub(y)
    }))
}

#[inline(always)]
pub fn mm_hsub_pi32(a: M64, b: M64) -> M64 {
    M64::from_i32x2(horizontal(a.to_i32x2(), b.to_i32x2(), |x, y| {
        x.wrapping_sub(y)
    }))
}

#[inline(always)]
pub fn mm_hsubs_pi16(a: M64, b: M64) -> M64 {
    M64::from_i16x4(horizontal(a.to_i16x4(), b.to_i16x4(), |x, y| {
        x.saturating_sub(y)
    }))
}

#[inline(always)]
pub fn mm_popcnt_u32(a: u32) -> i32 {
    a.count_ones() as i32
}

#[inline(always)]
pub fn mm_popcnt_u64(a: u64) -> i64 {
    a.count_ones() as i64
}
