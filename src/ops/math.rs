//! Packed floating-point arithmetic.
//!
//! The `_ss`/`_sd` forms compute on lane 0 and pass the upper lanes of `a`
//! through unchanged. `min`/`max` return the numeric operand when exactly one
//! input lane is NaN. The dot product accumulates with compensated (Kahan)
//! summation, which makes it independent of accumulation order noise.

use crate::reg::{M128, M128d};

use super::shuffle::{mm_move_sd, mm_move_ss};

#[inline(always)]
fn zip_f32(a: M128, b: M128, f: impl Fn(f32, f32) -> f32) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4(std::array::from_fn(|i| f(a[i], b[i])))
}

#[inline(always)]
fn zip_f64(a: M128d, b: M128d, f: impl Fn(f64, f64) -> f64) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2(std::array::from_fn(|i| f(a[i], b[i])))
}

#[inline(always)]
pub fn mm_add_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, |x, y| x + y)
}

#[inline(always)]
pub fn mm_sub_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, |x, y| x - y)
}

#[inline(always)]
pub fn mm_mul_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, |x, y| x * y)
}

#[inline(always)]
pub fn mm_div_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, |x, y| x / y)
}

#[inline(always)]
pub fn mm_add_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_add_ps(a, b))
}

#[inline(always)]
pub fn mm_sub_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_sub_ps(a, b))
}

#[inline(always)]
pub fn mm_mul_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_mul_ps(a, b))
}

#[inline(always)]
pub fn mm_div_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_div_ps(a, b))
}

#[inline(always)]
pub fn mm_add_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, |x, y| x + y)
}

#[inline(always)]
pub fn mm_sub_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, |x, y| x - y)
}

#[inline(always)]
pub fn mm_mul_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, |x, y| x * y)
}

#[inline(always)]
pub fn mm_div_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, |x, y| x / y)
}

#[inline(always)]
pub fn mm_add_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_add_pd(a, b))
}

#[inline(always)]
pub fn mm_sub_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_sub_pd(a, b))
}

#[inline(always)]
pub fn mm_mul_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_mul_pd(a, b))
}

#[inline(always)]
pub fn mm_div_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_div_pd(a, b))
}

#[inline(always)]
pub fn mm_sqrt_ps(a: M128) -> M128 {
    M128::from_f32x4(a.to_f32x4().map(f32::sqrt))
}

#[inline(always)]
pub fn mm_sqrt_ss(a: M128) -> M128 {
    mm_move_ss(a, mm_sqrt_ps(a))
}

#[inline(always)]
pub fn mm_sqrt_pd(a: M128d) -> M128d {
    M128d::from_f64x2(a.to_f64x2().map(f64::sqrt))
}

#[inline(always)]
pub fn mm_sqrt_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_sqrt_pd(b))
}

/// Reciprocal of each lane, computed exactly rather than by a low-precision
/// approximation opcode.
#[inline(always)]
pub fn mm_rcp_ps(a: M128) -> M128 {
    M128::from_f32x4(a.to_f32x4().map(|x| 1.0 / x))
}

#[inline(always)]
pub fn mm_rcp_ss(a: M128) -> M128 {
    mm_move_ss(a, mm_rcp_ps(a))
}

/// Reciprocal square root of each lane, computed exactly.
#[inline(always)]
pub fn mm_rsqrt_ps(a: M128) -> M128 {
    M128::from_f32x4(a.to_f32x4().map(|x| 1.0 / x.sqrt()))
}

#[inline(always)]
pub fn mm_rsqrt_ss(a: M128) -> M128 {
    mm_move_ss(a, mm_rsqrt_ps(a))
}

#[inline(always)]
pub fn mm_min_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, f32::min)
}

#[inline(always)]
pub fn mm_max_ps(a: M128, b: M128) -> M128 {
    zip_f32(a, b, f32::max)
}

#[inline(always)]
pub fn mm_min_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, f64::min)
}

#[inline(always)]
pub fn mm_max_pd(a: M128d, b: M128d) -> M128d {
    zip_f64(a, b, f64::max)
}

#[inline(always)]
pub fn mm_min_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_min_ps(a, b))
}

#[inline(always)]
pub fn mm_max_ss(a: M128, b: M128) -> M128 {
    mm_move_ss(a, mm_max_ps(a, b))
}

#[inline(always)]
pub fn mm_min_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_min_pd(a, b))
}

#[inline(always)]
pub fn mm_max_sd(a: M128d, b: M128d) -> M128d {
    mm_move_sd(a, mm_max_pd(a, b))
}

/// Subtracts in the even lanes, adds in the odd lanes.
#[inline(always)]
pub fn mm_addsub_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([a[0] - b[0], a[1] + b[1], a[2] - b[2], a[3] + b[3]])
}

#[inline(always)]
pub fn mm_addsub_pd(a: M128d, b: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2([a[0] - b[0], a[1] + b[1]])
}

/// Adjacent-pair sums, `a` pairs in the low lanes and `b` pairs in the high.
#[inline(always)]
pub fn mm_hadd_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([a[0] + a[1], a[2] + a[3], b[0] + b[1], b[2] + b[3]])
}

#[inline(always)]
pub fn mm_hsub_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([a[0] - a[1], a[2] - a[3], b[0] - b[1], b[2] - b[3]])
}

#[inline(always)]
pub fn mm_hadd_pd(a: M128d, b: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2([a[0] + a[1], b[0] + b[1]])
}

#[inline(always)]
pub fn mm_hsub_pd(a: M128d, b: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2([a[0] - a[1], b[0] - b[1]])
}

/// One compensated-summation step: folds `y` into the running `sum` while
/// tracking the lost low-order bits in `c`.
#[inline(always)]
fn kadd_f32(sum: &mut f32, c: &mut f32, y: f32) {
    let y = y - *c;
    let t = *sum + y;
    *c = (t - *sum) - y;
    *sum = t;
}

#[inline(always)]
fn ksum_f32(v: [f32; 4]) -> f32 {
    let (mut s, mut c) = (0.0f32, 0.0f32);
    for y in v {
        kadd_f32(&mut s, &mut c, y);
    }
    s + c
}

/// Conditional dot product.
///
/// Bits 4..=7 of `imm8` select which lane products enter the compensated
/// sum; bits 0..=3 select which result lanes receive it, the rest being
/// zeroed.
#[inline(always)]
pub fn mm_dp_ps(a: M128, b: M128, imm8: i32) -> M128 {
    if imm8 == 0xff {
        let products = mm_mul_ps(a, b).to_f32x4();
        return M128::from_f32x4([ksum_f32(products); 4]);
    }
    if imm8 == 0x7f {
        let mut products = mm_mul_ps(a, b).to_f32x4();
        products[3] = 0.0;
        return M128::from_f32x4([ksum_f32(products); 4]);
    }

    let (pa, pb) = (a.to_f32x4(), b.to_f32x4());
    let (mut s, mut c) = (0.0f32, 0.0f32);
    for i in 0..4 {
        if imm8 & (1 << (4 + i)) != 0 {
            kadd_f32(&mut s, &mut c, pa[i] * pb[i]);
        }
    }
    s += c;
    M128::from_f32x4(std::array::from_fn(|i| {
        if imm8 & (1 << i) != 0 {
            s
        } else {
            0.0
        }
    }))
}
