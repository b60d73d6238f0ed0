//! Conversions between lane types, plus the directed rounding operations.
//!
//! Float-to-integer conversions round according to the current thread's
//! rounding mode, saturate to the destination range, and map NaN to zero.
//! The `tt`-prefixed truncating forms ignore the mode and always chop toward
//! zero. `mm_round_*` called with an explicit direction, and `mm_ceil_*` /
//! `mm_floor_*`, switch the thread's mode to that direction and leave it
//! switched; see [`crate::rounding`].

use crate::reg::{M128, M128d, M128i, M64};
use crate::rounding::{
    current_mode, round_f32, round_f64, set_mode, RoundingMode, MM_FROUND_NO_EXC,
    MM_FROUND_TO_NEAREST_INT, MM_FROUND_TO_NEG_INF, MM_FROUND_TO_POS_INF, MM_FROUND_TO_ZERO,
};

use super::shuffle::{mm_move_sd, mm_move_ss};

const NEAREST_NO_EXC: i32 = MM_FROUND_TO_NEAREST_INT | MM_FROUND_NO_EXC;
const NEG_INF_NO_EXC: i32 = MM_FROUND_TO_NEG_INF | MM_FROUND_NO_EXC;
const POS_INF_NO_EXC: i32 = MM_FROUND_TO_POS_INF | MM_FROUND_NO_EXC;
const ZERO_NO_EXC: i32 = MM_FROUND_TO_ZERO | MM_FROUND_NO_EXC;

/// Maps a `MM_FROUND_*` request onto a direction, switching the thread's mode
/// when the request names one of the four explicit directions. Every other
/// request resolves to the current mode and switches nothing.
#[inline(always)]
fn resolve_direction(rounding: i32) -> RoundingMode {
    let mode = match rounding {
        NEAREST_NO_EXC => RoundingMode::Nearest,
        NEG_INF_NO_EXC => RoundingMode::Down,
        POS_INF_NO_EXC => RoundingMode::Up,
        ZERO_NO_EXC => RoundingMode::TowardZero,
        _ => return current_mode(),
    };
    set_mode(mode);
    mode
}

#[inline(always)]
pub fn mm_round_ps(a: M128, rounding: i32) -> M128 {
    let mode = resolve_direction(rounding);
    M128::from_f32x4(a.to_f32x4().map(|x| round_f32(x, mode)))
}

#[inline(always)]
pub fn mm_round_pd(a: M128d, rounding: i32) -> M128d {
    let mode = resolve_direction(rounding);
    M128d::from_f64x2(a.to_f64x2().map(|x| round_f64(x, mode)))
}

#[inline(always)]
pub fn mm_round_ss(a: M128, b: M128, rounding: i32) -> M128 {
    mm_move_ss(a, mm_round_ps(b, rounding))
}

#[inline(always)]
pub fn mm_round_sd(a: M128d, b: M128d, rounding: i32) -> M128d {
    mm_move_sd(a, mm_round_pd(b, rounding))
}

#[inline(always)]
pub fn mm_ceil_ps(a: M128) -> M128 {
    mm_round_ps(a, POS_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_ceil_pd(a: M128d) -> M128d {
    mm_round_pd(a, POS_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_ceil_ss(a: M128, b: M128) -> M128 {
    mm_round_ss(a, b, POS_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_ceil_sd(a: M128d, b: M128d) -> M128d {
    mm_round_sd(a, b, POS_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_floor_ps(a: M128) -> M128 {
    mm_round_ps(a, NEG_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_floor_pd(a: M128d) -> M128d {
    mm_round_pd(a, NEG_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_floor_ss(a: M128, b: M128) -> M128 {
    mm_round_ss(a, b, NEG_INF_NO_EXC)
}

#[inline(always)]
pub fn mm_floor_sd(a: M128d, b: M128d) -> M128d {
    mm_round_sd(a, b, NEG_INF_NO_EXC)
}

// Rounding to integer: round by the current mode first, then let the `as`
// cast saturate and send NaN to zero.

#[inline(always)]
fn f32_by_mode(x: f32) -> f32 {
    round_f32(x, current_mode())
}

#[inline(always)]
fn f64_by_mode(x: f64) -> f64 {
    round_f64(x, current_mode())
}

#[inline(always)]
pub fn mm_cvtps_epi32(a: M128) -> M128i {
    M128i::from_i32x4(a.to_f32x4().map(|x| f32_by_mode(x) as i32))
}

#[inline(always)]
pub fn mm_cvttps_epi32(a: M128) -> M128i {
    M128i::from_i32x4(a.to_f32x4().map(|x| x as i32))
}

#[inline(always)]
pub fn mm_cvtps_pi32(a: M128) -> M64 {
    let f = a.to_f32x4();
    M64::from_i32x2([f32_by_mode(f[0]) as i32, f32_by_mode(f[1]) as i32])
}

#[inline(always)]
pub fn mm_cvt_ps2pi(a: M128) -> M64 {
    mm_cvtps_pi32(a)
}

#[inline(always)]
pub fn mm_cvttps_pi32(a: M128) -> M64 {
    let f = a.to_f32x4();
    M64::from_i32x2([f[0] as i32, f[1] as i32])
}

#[inline(always)]
pub fn mm_cvtt_ps2pi(a: M128) -> M64 {
    mm_cvttps_pi32(a)
}

#[inline(always)]
pub fn mm_cvtss_si32(a: M128) -> i32 {
    f32_by_mode(a.to_f32x4()[0]) as i32
}

#[inline(always)]
pub fn mm_cvt_ss2si(a: M128) -> i32 {
    mm_cvtss_si32(a)
}

#[inline(always)]
pub fn mm_cvtss_si64(a: M128) -> i64 {
    f32_by_mode(a.to_f32x4()[0]) as i64
}

#[inline(always)]
pub fn mm_cvttss_si32(a: M128) -> i32 {
    a.to_f32x4()[0] as i32
}

#[inline(always)]
pub fn mm_cvtt_ss2si(a: M128) -> i32 {
    mm_cvttss_si32(a)
}

#[inline(always)]
pub fn mm_cvttss_si64(a: M128) -> i64 {
    a.to_f32x4()[0] as i64
}

#[inline(always)]
pub fn mm_cvtsd_si32(a: M128d) -> i32 {
    f64_by_mode(a.to_f64x2()[0]) as i32
}

#[inline(always)]
pub fn mm_cvtsd_si64(a: M128d) -> i64 {
    f64_by_mode(a.to_f64x2()[0]) as i64
}

#[inline(always)]
pub fn mm_cvttsd_si32(a: M128d) -> i32 {
    a.to_f64x2()[0] as i32
}

#[inline(always)]
pub fn mm_cvttsd_si64(a: M128d) -> i64 {
    a.to_f64x2()[0] as i64
}

#[inline(always)]
pub fn mm_cvttsd_si64x(a: M128d) -> i64 {
    mm_cvttsd_si64(a)
}

/// Converts both double lanes to 32-bit integers in the low half; the high
/// half is zeroed.
#[inline(always)]
pub fn mm_cvtpd_epi32(a: M128d) -> M128i {
    let d = a.to_f64x2();
    M128i::from_i32x4([f64_by_mode(d[0]) as i32, f64_by_mode(d[1]) as i32, 0, 0])
}

#[inline(always)]
pub fn mm_cvttpd_epi32(a: M128d) -> M128i {
    let d = a.to_f64x2();
    M128i::from_i32x4([d[0] as i32, d[1] as i32, 0, 0])
}

#[inline(always)]
pub fn mm_cvtpd_pi32(a: M128d) -> M64 {
    let d = a.to_f64x2();
    M64::from_i32x2([f64_by_mode(d[0]) as i32, f64_by_mode(d[1]) as i32])
}

#[inline(always)]
pub fn mm_cvttpd_pi32(a: M128d) -> M64 {
    let d = a.to_f64x2();
    M64::from_i32x2([d[0] as i32, d[1] as i32])
}

#[inline(always)]
pub fn mm_cvtps_pi16(a: M128) -> M64 {
    let f = a.to_f32x4();
    M64::from_i16x4(std::array::from_fn(|i| f32_by_mode(f[i]) as i16))
}

/// The four converted bytes land in the low half; the high half is zeroed.
#[inline(always)]
pub fn mm_cvtps_pi8(a: M128) -> M64 {
    let f = a.to_f32x4();
    M64::from_i8x8(std::array::from_fn(|i| {
        if i < 4 {
            f32_by_mode(f[i]) as i8
        } else {
            0
        }
    }))
}

#[inline(always)]
pub fn mm_cvtepi32_ps(a: M128i) -> M128 {
    M128::from_f32x4(a.to_i32x4().map(|x| x as f32))
}

#[inline(always)]
pub fn mm_cvtepi32_pd(a: M128i) -> M128d {
    let i = a.to_i32x4();
    M128d::from_f64x2([i[0] as f64, i[1] as f64])
}

#[inline(always)]
pub fn mm_cvtpi32_pd(a: M64) -> M128d {
    let i = a.to_i32x2();
    M128d::from_f64x2([i[0] as f64, i[1] as f64])
}

#[inline(always)]
pub fn mm_cvtpi8_ps(a: M64) -> M128 {
    let i = a.to_i8x8();
    M128::from_f32x4(std::array::from_fn(|k| i[k] as f32))
}

#[inline(always)]
pub fn mm_cvtpu8_ps(a: M64) -> M128 {
    let i = a.to_u8x8();
    M128::from_f32x4(std::array::from_fn(|k| i[k] as f32))
}

#[inline(always)]
pub fn mm_cvtpi16_ps(a: M64) -> M128 {
    M128::from_f32x4(a.to_i16x4().map(|x| x as f32))
}

#[inline(always)]
pub fn mm_cvtpu16_ps(a: M64) -> M128 {
    M128::from_f32x4(a.to_u16x4().map(|x| x as f32))
}

#[inline(always)]
pub fn mm_cvtpi32x2_ps(a: M64, b: M64) -> M128 {
    let lo = a.to_i32x2();
    let hi = b.to_i32x2();
    M128::from_f32x4([lo[0] as f32, lo[1] as f32, hi[0] as f32, hi[1] as f32])
}

/// Replaces the low two float lanes of `a` with the converted lanes of `b`.
#[inline(always)]
pub fn mm_cvtpi32_ps(a: M128, b: M64) -> M128 {
    let mut f = a.to_f32x4();
    let i = b.to_i32x2();
    f[0] = i[0] as f32;
    f[1] = i[1] as f32;
    M128::from_f32x4(f)
}

#[inline(always)]
pub fn mm_cvt_pi2ps(a: M128, b: M64) -> M128 {
    mm_cvtpi32_ps(a, b)
}

macro_rules! extend {
    ($($name:ident: $to:ident -> $from:ident as $t:ty),+ $(,)?) => {
        $(
            #[inline(always)]
            pub fn $name(a: M128i) -> M128i {
                let src = a.$to();
                M128i::$from(std::array::from_fn(|i| src[i] as $t))
            }
        )+
    };
}

extend!(
    mm_cvtepi8_epi16: to_i8x16 -> from_i16x8 as i16,
    mm_cvtepi8_epi32: to_i8x16 -> from_i32x4 as i32,
    mm_cvtepi8_epi64: to_i8x16 -> from_i64x2 as i64,
    mm_cvtepu8_epi16: to_u8x16 -> from_i16x8 as i16,
    mm_cvtepu8_epi32: to_u8x16 -> from_i32x4 as i32,
    mm_cvtepu8_epi64: to_u8x16 -> from_i64x2 as i64,
    mm_cvtepi16_epi32: to_i16x8 -> from_i32x4 as i32,
    mm_cvtepi16_epi64: to_i16x8 -> from_i64x2 as i64,
    mm_cvtepu16_epi32: to_u16x8 -> from_i32x4 as i32,
    mm_cvtepu16_epi64: to_u16x8 -> from_i64x2 as i64,
    mm_cvtepi32_epi64: to_i32x4 -> from_i64x2 as i64,
    mm_cvtepu32_epi64: to_u32x4 -> from_i64x2 as i64,
);

/// Narrows both double lanes into the low float lanes; the high half is
/// zeroed.
#[inline(always)]
pub fn mm_cvtpd_ps(a: M128d) -> M128 {
    let d = a.to_f64x2();
    M128::from_f32x4([d[0] as f32, d[1] as f32, 0.0, 0.0])
}

#[inline(always)]
pub fn mm_cvtps_pd(a: M128) -> M128d {
    let f = a.to_f32x4();
    M128d::from_f64x2([f[0] as f64, f[1] as f64])
}

/// Narrows the low double of `b` into lane 0, keeping the upper lanes of `a`.
#[inline(always)]
pub fn mm_cvtsd_ss(a: M128, b: M128d) -> M128 {
    let mut f = a.to_f32x4();
    f[0] = b.to_f64x2()[0] as f32;
    M128::from_f32x4(f)
}

/// Widens the low float of `b` into lane 0, keeping lane 1 of `a`.
#[inline(always)]
pub fn mm_cvtss_sd(a: M128d, b: M128) -> M128d {
    let mut d = a.to_f64x2();
    d[0] = b.to_f32x4()[0] as f64;
    M128d::from_f64x2(d)
}

#[inline(always)]
pub fn mm_cvtsi32_ss(a: M128, b: i32) -> M128 {
    let mut f = a.to_f32x4();
    f[0] = b as f32;
    M128::from_f32x4(f)
}

#[inline(always)]
pub fn mm_cvt_si2ss(a: M128, b: i32) -> M128 {
    mm_cvtsi32_ss(a, b)
}

#[inline(always)]
pub fn mm_cvtsi64_ss(a: M128, b: i64) -> M128 {
    let mut f = a.to_f32x4();
    f[0] = b as f32;
    M128::from_f32x4(f)
}

#[inline(always)]
pub fn mm_cvtsi32_sd(a: M128d, b: i32) -> M128d {
    let mut d = a.to_f64x2();
    d[0] = b as f64;
    M128d::from_f64x2(d)
}

#[inline(always)]
pub fn mm_cvtsi64_sd(a: M128d, b: i64) -> M128d {
    let mut d = a.to_f64x2();
    d[0] = b as f64;
    M128d::from_f64x2(d)
}

#[inline(always)]
pub fn mm_cvtsi64x_sd(a: M128d, b: i64) -> M128d {
    mm_cvtsi64_sd(a, b)
}

#[inline(always)]
pub fn mm_cvtsi32_si128(a: i32) -> M128i {
    M128i::from_i32x4([a, 0, 0, 0])
}

#[inline(always)]
pub fn mm_cvtsi64_si128(a: i64) -> M128i {
    M128i::from_i64x2([a, 0])
}

#[inline(always)]
pub fn mm_cvtsi64x_si128(a: i64) -> M128i {
    mm_cvtsi64_si128(a)
}

#[inline(always)]
pub fn mm_cvtsi128_si32(a: M128i) -> i32 {
    a.to_i32x4()[0]
}

#[inline(always)]
pub fn mm_cvtsi128_si64(a: M128i) -> i64 {
    a.to_i64x2()[0]
}

#[inline(always)]
pub fn mm_cvtsi128_si64x(a: M128i) -> i64 {
    mm_cvtsi128_si64(a)
}

#[inline(always)]
pub fn mm_cvtss_f32(a: M128) -> f32 {
    a.to_f32x4()[0]
}

#[inline(always)]
pub fn mm_cvtsd_f64(a: M128d) -> f64 {
    a.to_f64x2()[0]
}
