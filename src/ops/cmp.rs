//! Comparisons, mask extraction and reduction predicates.
//!
//! Packed compares produce an all-ones lane for true and an all-zeroes lane
//! for false. The quiet float predicates are false on NaN except `cmpunord`;
//! `cmpneq` is the ordered not-equal, and the `n`-prefixed forms are the
//! documented aliases of the opposite plain predicate. Scalar `comi*`
//! predicates return 0/1 ints, with every NaN comparison false except
//! not-equal.

use crate::reg::{M128, M128d, M128i, M64};

use super::shuffle::{mm_move_sd, mm_move_ss};

#[inline(always)]
fn cmp_f32(a: M128, b: M128, p: impl Fn(f32, f32) -> bool) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_u32x4(std::array::from_fn(|i| {
        if p(a[i], b[i]) {
            u32::MAX
        } else {
            0
        }
    }))
}

#[inline(always)]
fn cmp_f64(a: M128d, b: M128d, p: impl Fn(f64, f64) -> bool) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_u64x2(std::array::from_fn(|i| {
        if p(a[i], b[i]) {
            u64::MAX
        } else {
            0
        }
    }))
}

#[inline(always)]
pub fn mm_cmpeq_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x == y)
}

#[inline(always)]
pub fn mm_cmplt_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x < y)
}

#[inline(always)]
pub fn mm_cmple_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x <= y)
}

#[inline(always)]
pub fn mm_cmpgt_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x > y)
}

#[inline(always)]
pub fn mm_cmpge_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x >= y)
}

/// Ordered not-equal: false when either lane is NaN.
#[inline(always)]
pub fn mm_cmpneq_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| !x.is_nan() && !y.is_nan() && x != y)
}

/// True where both lanes are numeric.
#[inline(always)]
pub fn mm_cmpord_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| !x.is_nan() && !y.is_nan())
}

/// True where either lane is NaN.
#[inline(always)]
pub fn mm_cmpunord_ps(a: M128, b: M128) -> M128 {
    cmp_f32(a, b, |x, y| x.is_nan() || y.is_nan())
}

#[inline(always)]
pub fn mm_cmpnge_ps(a: M128, b: M128) -> M128 {
    mm_cmplt_ps(a, b)
}

#[inline(always)]
pub fn mm_cmpngt_ps(a: M128, b: M128) -> M128 {
    mm_cmple_ps(a, b)
}

#[inline(always)]
pub fn mm_cmpnle_ps(a: M128, b: M128) -> M128 {
    mm_cmpgt_ps(a, b)
}

#[inline(always)]
pub fn mm_cmpnlt_ps(a: M128, b: M128) -> M128 {
    mm_cmpge_ps(a, b)
}

macro_rules! scalar_ps_form {
    ($($name:ident => $packed:ident),+ $(,)?) => {
        $(
            #[inline(always)]
            pub fn $name(a: M128, b: M128) -> M128 {
                mm_move_ss(a, $packed(a, b))
            }
        )+
    };
}

scalar_ps_form!(
    mm_cmpeq_ss => mm_cmpeq_ps,
    mm_cmplt_ss => mm_cmplt_ps,
    mm_cmple_ss => mm_cmple_ps,
    mm_cmpgt_ss => mm_cmpgt_ps,
    mm_cmpge_ss => mm_cmpge_ps,
    mm_cmpneq_ss => mm_cmpneq_ps,
    mm_cmpord_ss => mm_cmpord_ps,
    mm_cmpunord_ss => mm_cmpunord_ps,
    mm_cmpnge_ss => mm_cmpnge_ps,
    mm_cmpngt_ss => mm_cmpngt_ps,
    mm_cmpnle_ss => mm_cmpnle_ps,
    mm_cmpnlt_ss => mm_cmpnlt_ps,
);

#[inline(always)]
pub fn mm_cmpeq_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x == y)
}

#[inline(always)]
pub fn mm_cmplt_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x < y)
}

#[inline(always)]
pub fn mm_cmple_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x <= y)
}

#[inline(always)]
pub fn mm_cmpgt_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x > y)
}

#[inline(always)]
pub fn mm_cmpge_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x >= y)
}

#[inline(always)]
pub fn mm_cmpneq_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| !x.is_nan() && !y.is_nan() && x != y)
}

#[inline(always)]
pub fn mm_cmpord_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| !x.is_nan() && !y.is_nan())
}

#[inline(always)]
pub fn mm_cmpunord_pd(a: M128d, b: M128d) -> M128d {
    cmp_f64(a, b, |x, y| x.is_nan() || y.is_nan())
}

#[inline(always)]
pub fn mm_cmpnge_pd(a: M128d, b: M128d) -> M128d {
    mm_cmplt_pd(a, b)
}

#[inline(always)]
pub fn mm_cmpngt_pd(a: M128d, b: M128d) -> M128d {
    mm_cmple_pd(a, b)
}

#[inline(always)]
pub fn mm_cmpnle_pd(a: M128d, b: M128d) -> M128d {
    mm_cmpgt_pd(a, b)
}

#[inline(always)]
pub fn mm_cmpnlt_pd(a: M128d, b: M128d) -> M128d {
    mm_cmpge_pd(a, b)
}

macro_rules! scalar_pd_form {
    ($($name:ident => $packed:ident),+ $(,)?) => {
        $(
            #[inline(always)]
            pub fn $name(a: M128d, b: M128d) -> M128d {
                mm_move_sd(a, $packed(a, b))
            }
        )+
    };
}

scalar_pd_form!(
    mm_cmpeq_sd => mm_cmpeq_pd,
    mm_cmplt_sd => mm_cmplt_pd,
    mm_cmple_sd => mm_cmple_pd,
    mm_cmpgt_sd => mm_cmpgt_pd,
    mm_cmpge_sd => mm_cmpge_pd,
    mm_cmpneq_sd => mm_cmpneq_pd,
    mm_cmpord_sd => mm_cmpord_pd,
    mm_cmpunord_sd => mm_cmpunord_pd,
    mm_cmpnge_sd => mm_cmpnge_pd,
    mm_cmpngt_sd => mm_cmpngt_pd,
    mm_cmpnle_sd => mm_cmpnle_pd,
    mm_cmpnlt_sd => mm_cmpnlt_pd,
);

macro_rules! int_cmp {
    ($name:ident, $to:ident, $from:ident, $p:expr) => {
        #[inline(always)]
        pub fn $name(a: M128i, b: M128i) -> M128i {
            let (a, b) = (a.$to(), b.$to());
            let p = $p;
            M128i::$from(std::array::from_fn(|i| {
                if p(a[i], b[i]) {
                    -1
                } else {
                    0
                }
            }))
        }
    };
}

int_cmp!(mm_cmpeq_epi8, to_i8x16, from_i8x16, |x, y| x == y);
int_cmp!(mm_cmpeq_epi16, to_i16x8, from_i16x8, |x, y| x == y);
int_cmp!(mm_cmpeq_epi32, to_i32x4, from_i32x4, |x, y| x == y);
int_cmp!(mm_cmpeq_epi64, to_i64x2, from_i64x2, |x, y| x == y);
int_cmp!(mm_cmpgt_epi8, to_i8x16, from_i8x16, |x, y| x > y);
int_cmp!(mm_cmpgt_epi16, to_i16x8, from_i16x8, |x, y| x > y);
int_cmp!(mm_cmpgt_epi32, to_i32x4, from_i32x4, |x, y| x > y);
int_cmp!(mm_cmpgt_epi64, to_i64x2, from_i64x2, |x, y| x > y);
int_cmp!(mm_cmplt_epi8, to_i8x16, from_i8x16, |x, y| x < y);
int_cmp!(mm_cmplt_epi16, to_i16x8, from_i16x8, |x, y| x < y);
int_cmp!(mm_cmplt_epi32, to_i32x4, from_i32x4, |x, y| x < y);

macro_rules! comi {
    ($name32:ident, $name64:ident, $p:expr) => {
        #[inline(always)]
        pub fn $name32(a: M128, b: M128) -> i32 {
            let p = $p;
            if p(a.to_f32x4()[0], b.to_f32x4()[0]) {
                1
            } else {
                0
            }
        }

        #[inline(always)]
        pub fn $name64(a: M128d, b: M128d) -> i32 {
            let p = $p;
            if p(a.to_f64x2()[0], b.to_f64x2()[0]) {
                1
            } else {
                0
            }
        }
    };
}

comi!(mm_comieq_ss, mm_comieq_sd, |x, y| x == y);
comi!(mm_comilt_ss, mm_comilt_sd, |x, y| x < y);
comi!(mm_comile_ss, mm_comile_sd, |x, y| x <= y);
comi!(mm_comigt_ss, mm_comigt_sd, |x, y| x > y);
comi!(mm_comige_ss, mm_comige_sd, |x, y| x >= y);
comi!(mm_comineq_ss, mm_comineq_sd, |x, y| x != y);

// The unordered forms share the quiet scalar comparisons.

#[inline(always)]
pub fn mm_ucomieq_ss(a: M128, b: M128) -> i32 {
    mm_comieq_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomilt_ss(a: M128, b: M128) -> i32 {
    mm_comilt_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomile_ss(a: M128, b: M128) -> i32 {
    mm_comile_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomigt_ss(a: M128, b: M128) -> i32 {
    mm_comigt_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomige_ss(a: M128, b: M128) -> i32 {
    mm_comige_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomineq_ss(a: M128, b: M128) -> i32 {
    mm_comineq_ss(a, b)
}

#[inline(always)]
pub fn mm_ucomieq_sd(a: M128d, b: M128d) -> i32 {
    mm_comieq_sd(a, b)
}

#[inline(always)]
pub fn mm_ucomilt_sd(a: M128d, b: M128d) -> i32 {
    mm_comilt_sd(a, b)
}

#[inline(always)]
pub fn mm_ucomile_sd(a: M128d, b: M128d) -> i32 {
    mm_comile_sd(a, b)
}

#[inline(always)]
pub fn mm_ucomigt_sd(a: M128d, b: M128d) -> i32 {
    mm_comigt_sd(a, b)
}

#[inline(always)]
pub fn mm_ucomige_sd(a: M128d, b: M128d) -> i32 {
    mm_comige_sd(a, b)
}

#[inline(always)]
pub fn mm_ucomineq_sd(a: M128d, b: M128d) -> i32 {
    mm_comineq_sd(a, b)
}

/// One bit per byte lane, lane 0 in bit 0.
#[inline(always)]
pub fn mm_movemask_epi8(a: M128i) -> i32 {
    a.to_u8x16()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, byte)| acc | (((byte >> 7) as i32) << i))
}

/// One bit per single-precision lane.
#[inline(always)]
pub fn mm_movemask_ps(a: M128) -> i32 {
    a.to_u32x4()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, lane)| acc | (((lane >> 31) as i32) << i))
}

/// One bit per double-precision lane.
#[inline(always)]
pub fn mm_movemask_pd(a: M128d) -> i32 {
    a.to_u64x2()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, lane)| acc | (((lane >> 63) as i32) << i))
}

#[inline(always)]
pub fn mm_movemask_pi8(a: M64) -> i32 {
    a.to_u8x8()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, byte)| acc | (((byte >> 7) as i32) << i))
}

/// 1 if every bit of `a` is set.
#[inline(always)]
pub fn mm_test_all_ones(a: M128i) -> i32 {
    let [lo, hi] = a.to_i64x2();
    ((lo & hi) == !0i64) as i32
}

/// 1 if `a & mask` is zero.
#[inline(always)]
pub fn mm_test_all_zeros(a: M128i, mask: M128i) -> i32 {
    mm_testz_si128(a, mask)
}

#[inline(always)]
pub fn mm_testz_si128(a: M128i, b: M128i) -> i32 {
    let a = a.to_u64x2();
    let b = b.to_u64x2();
    (((a[0] & b[0]) | (a[1] & b[1])) == 0) as i32
}

#[inline(always)]
pub fn mm_testc_si128(a: M128i, b: M128i) -> i32 {
    let a = a.to_u64x2();
    let b = b.to_u64x2();
    (((!a[0] & b[0]) | (!a[1] & b[1])) == 0) as i32
}

/// 1 if `a & b` and `!a & b` are both nonzero.
#[inline(always)]
pub fn mm_testnzc_si128(a: M128i, b: M128i) -> i32 {
    ((mm_testz_si128(a, b) == 0) && (mm_testc_si128(a, b) == 0)) as i32
}

#[inline(always)]
pub fn mm_test_mix_ones_zeros(a: M128i, b: M128i) -> i32 {
    mm_testnzc_si128(a, b)
}

/// Horizontal minimum of the eight unsigned 16-bit lanes: the value lands in
/// lane 0, its index in lane 1, all other lanes zeroed. Ties go to the lowest
/// index.
#[inline(always)]
pub fn mm_minpos_epu16(a: M128i) -> M128i {
    let lanes = a.to_u16x8();
    let mut min = u16::MAX;
    let mut idx = 0u16;
    for (i, &lane) in lanes.iter().enumerate() {
        if min > lane {
            min = lane;
            idx = i as u16;
        }
    }
    let mut out = [0u16; 8];
    out[0] = min;
    out[1] = idx;
    M128i::from_u16x8(out)
}
