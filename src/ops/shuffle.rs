//! Lane permutation engine.
//!
//! Immediate-mask operations take their selector as a const generic, so the
//! mask is fixed at compile time like the original encodings. Selector bits
//! beyond the documented field are ignored. The vector-mask byte shuffle
//! honors the high-bit-zeroes rule; blends with a vector mask key off each
//! selector lane's sign bit only.

use crate::reg::{M128, M128d, M128i, M64};

/// Builds a four-field two-bit selector, highest field first.
#[inline(always)]
pub const fn mm_shuffle(z: i32, y: i32, x: i32, w: i32) -> i32 {
    (z << 6) | (y << 4) | (x << 2) | w
}

/// `[a[imm&3], a[imm>>2&3], b[imm>>4&3], b[imm>>6&3]]`.
#[inline(always)]
pub fn mm_shuffle_ps<const IMM8: i32>(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([
        a[(IMM8 & 3) as usize],
        a[((IMM8 >> 2) & 3) as usize],
        b[((IMM8 >> 4) & 3) as usize],
        b[((IMM8 >> 6) & 3) as usize],
    ])
}

#[inline(always)]
pub fn mm_shuffle_epi32<const IMM8: i32>(a: M128i) -> M128i {
    let a = a.to_i32x4();
    M128i::from_i32x4([
        a[(IMM8 & 3) as usize],
        a[((IMM8 >> 2) & 3) as usize],
        a[((IMM8 >> 4) & 3) as usize],
        a[((IMM8 >> 6) & 3) as usize],
    ])
}

/// `[a[imm&1], b[imm>>1&1]]`.
#[inline(always)]
pub fn mm_shuffle_pd<const IMM8: i32>(a: M128d, b: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2([a[(IMM8 & 1) as usize], b[((IMM8 >> 1) & 1) as usize]])
}

/// Permutes the low four 16-bit lanes; the high four pass through.
#[inline(always)]
pub fn mm_shufflelo_epi16<const IMM8: i32>(a: M128i) -> M128i {
    let lanes = a.to_i16x8();
    let mut out = lanes;
    for i in 0..4 {
        out[i] = lanes[((IMM8 >> (2 * i)) & 3) as usize];
    }
    M128i::from_i16x8(out)
}

/// Permutes the high four 16-bit lanes; the low four pass through.
#[inline(always)]
pub fn mm_shufflehi_epi16<const IMM8: i32>(a: M128i) -> M128i {
    let lanes = a.to_i16x8();
    let mut out = lanes;
    for i in 0..4 {
        out[4 + i] = lanes[4 + ((IMM8 >> (2 * i)) & 3) as usize];
    }
    M128i::from_i16x8(out)
}

#[inline(always)]
pub fn mm_shuffle_pi16<const IMM8: i32>(a: M64) -> M64 {
    let lanes = a.to_i16x4();
    M64::from_i16x4(std::array::from_fn(|i| {
        lanes[((IMM8 >> (2 * i)) & 3) as usize]
    }))
}

/// Vector-mask byte shuffle. A set high bit in a selector byte zeroes that
/// output byte; otherwise the low four bits index into `a`.
#[inline(always)]
pub fn mm_shuffle_epi8(a: M128i, b: M128i) -> M128i {
    let (table, sel) = (a.to_u8x16(), b.to_u8x16());
    M128i::from_u8x16(std::array::from_fn(|i| {
        if sel[i] & 0x80 != 0 {
            0
        } else {
            table[(sel[i] & 0x0f) as usize]
        }
    }))
}

/// Half-width byte shuffle; selector indices wrap modulo 8.
#[inline(always)]
pub fn mm_shuffle_pi8(a: M64, b: M64) -> M64 {
    let (table, sel) = (a.to_u8x8(), b.to_u8x8());
    M64::from_u8x8(std::array::from_fn(|i| {
        if sel[i] & 0x80 != 0 {
            0
        } else {
            table[(sel[i] & 0x07) as usize]
        }
    }))
}

/// Selects 16-bit lanes from `b` where the matching immediate bit is set.
#[inline(always)]
pub fn mm_blend_epi16<const IMM8: i32>(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i16x8(std::array::from_fn(|i| {
        if IMM8 & (1 << i) != 0 {
            b[i]
        } else {
            a[i]
        }
    }))
}

#[inline(always)]
pub fn mm_blend_ps<const IMM8: i32>(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4(std::array::from_fn(|i| {
        if IMM8 & (1 << i) != 0 {
            b[i]
        } else {
            a[i]
        }
    }))
}

#[inline(always)]
pub fn mm_blend_pd<const IMM8: i32>(a: M128d, b: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    M128d::from_f64x2(std::array::from_fn(|i| {
        if IMM8 & (1 << i) != 0 {
            b[i]
        } else {
            a[i]
        }
    }))
}

/// Selects bytes from `b` where the mask byte's sign bit is set.
#[inline(always)]
pub fn mm_blendv_epi8(a: M128i, b: M128i, mask: M128i) -> M128i {
    let (a, b, mask) = (a.to_i8x16(), b.to_i8x16(), mask.to_i8x16());
    M128i::from_i8x16(std::array::from_fn(|i| if mask[i] < 0 { b[i] } else { a[i] }))
}

#[inline(always)]
pub fn mm_blendv_ps(a: M128, b: M128, mask: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    let mask = mask.to_i32x4();
    M128::from_f32x4(std::array::from_fn(|i| if mask[i] < 0 { b[i] } else { a[i] }))
}

#[inline(always)]
pub fn mm_blendv_pd(a: M128d, b: M128d, mask: M128d) -> M128d {
    let (a, b) = (a.to_f64x2(), b.to_f64x2());
    let mask = mask.to_i64x2();
    M128d::from_f64x2(std::array::from_fn(|i| if mask[i] < 0 { b[i] } else { a[i] }))
}

macro_rules! unpack {
    ($name:ident, $reg:ty, $to:ident, $from:ident, $n:expr, lo) => {
        #[inline(always)]
        pub fn $name(a: $reg, b: $reg) -> $reg {
            let (a, b) = (a.$to(), b.$to());
            <$reg>::$from(std::array::from_fn(|i| {
                if i % 2 == 0 {
                    a[i / 2]
                } else {
                    b[i / 2]
                }
            }))
        }
    };
    ($name:ident, $reg:ty, $to:ident, $from:ident, $n:expr, hi) => {
        #[inline(always)]
        pub fn $name(a: $reg, b: $reg) -> $reg {
            let (a, b) = (a.$to(), b.$to());
            <$reg>::$from(std::array::from_fn(|i| {
                if i % 2 == 0 {
                    a[$n / 2 + i / 2]
                } else {
                    b[$n / 2 + i / 2]
                }
            }))
        }
    };
}

unpack!(mm_unpacklo_epi8, M128i, to_i8x16, from_i8x16, 16, lo);
unpack!(mm_unpackhi_epi8, M128i, to_i8x16, from_i8x16, 16, hi);
unpack!(mm_unpacklo_epi16, M128i, to_i16x8, from_i16x8, 8, lo);
unpack!(mm_unpackhi_epi16, M128i, to_i16x8, from_i16x8, 8, hi);
unpack!(mm_unpacklo_epi32, M128i, to_i32x4, from_i32x4, 4, lo);
unpack!(mm_unpackhi_epi32, M128i, to_i32x4, from_i32x4, 4, hi);
unpack!(mm_unpacklo_epi64, M128i, to_i64x2, from_i64x2, 2, lo);
unpack!(mm_unpackhi_epi64, M128i, to_i64x2, from_i64x2, 2, hi);
unpack!(mm_unpacklo_ps, M128, to_f32x4, from_f32x4, 4, lo);
unpack!(mm_unpackhi_ps, M128, to_f32x4, from_f32x4, 4, hi);
unpack!(mm_unpacklo_pd, M128d, to_f64x2, from_f64x2, 2, lo);
unpack!(mm_unpackhi_pd, M128d, to_f64x2, from_f64x2, 2, hi);

/// Narrows 16-bit lanes to signed bytes with saturation, `a` lanes first.
#[inline(always)]
pub fn mm_packs_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_i8x16(std::array::from_fn(|i| {
        let x = if i < 8 { a[i] } else { b[i - 8] };
        x.clamp(i8::MIN as i16, i8::MAX as i16) as i8
    }))
}

/// Narrows 16-bit lanes to unsigned bytes with saturation.
#[inline(always)]
pub fn mm_packus_epi16(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i16x8(), b.to_i16x8());
    M128i::from_u8x16(std::array::from_fn(|i| {
        let x = if i < 8 { a[i] } else { b[i - 8] };
        x.clamp(0, u8::MAX as i16) as u8
    }))
}

/// Narrows 32-bit lanes to signed 16-bit with saturation.
#[inline(always)]
pub fn mm_packs_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i32x4(), b.to_i32x4());
    M128i::from_i16x8(std::array::from_fn(|i| {
        let x = if i < 4 { a[i] } else { b[i - 4] };
        x.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }))
}

/// Narrows 32-bit lanes to unsigned 16-bit with saturation.
#[inline(always)]
pub fn mm_packus_epi32(a: M128i, b: M128i) -> M128i {
    let (a, b) = (a.to_i32x4(), b.to_i32x4());
    M128i::from_u16x8(std::array::from_fn(|i| {
        let x = if i < 4 { a[i] } else { b[i - 4] };
        x.clamp(0, u16::MAX as i32) as u16
    }))
}

/// Concatenates `a:b` (with `a` in the high bytes) and extracts a 16-byte
/// window starting `imm8` bytes up from the bottom. Windows past byte 31
/// read as zero.
#[inline(always)]
pub fn mm_alignr_epi8(a: M128i, b: M128i, imm8: i32) -> M128i {
    if !(0..=31).contains(&imm8) {
        return M128i::from_bytes([0u8; 16]);
    }
    let (a, b) = (a.to_u8x16(), b.to_u8x16());
    M128i::from_u8x16(std::array::from_fn(|i| {
        let src = i + imm8 as usize;
        if src < 16 {
            b[src]
        } else if src < 32 {
            a[src - 16]
        } else {
            0
        }
    }))
}

/// Half-width window over `a:b`; windows past byte 15 read as zero.
#[inline(always)]
pub fn mm_alignr_pi8(a: M64, b: M64, imm8: i32) -> M64 {
    if !(0..=15).contains(&imm8) {
        return M64::from_bytes([0u8; 8]);
    }
    let (a, b) = (a.to_u8x8(), b.to_u8x8());
    M64::from_u8x8(std::array::from_fn(|i| {
        let src = i + imm8 as usize;
        if src < 8 {
            b[src]
        } else if src < 16 {
            a[src - 8]
        } else {
            0
        }
    }))
}

/// Lane 0 from `b`, lanes 1..3 from `a`.
#[inline(always)]
pub fn mm_move_ss(a: M128, b: M128) -> M128 {
    let mut lanes = a.to_f32x4();
    lanes[0] = b.to_f32x4()[0];
    M128::from_f32x4(lanes)
}

/// Lane 0 from `b`, lane 1 from `a`.
#[inline(always)]
pub fn mm_move_sd(a: M128d, b: M128d) -> M128d {
    let mut lanes = a.to_f64x2();
    lanes[0] = b.to_f64x2()[0];
    M128d::from_f64x2(lanes)
}

/// Low 64 bits of `a`, high half zeroed.
#[inline(always)]
pub fn mm_move_epi64(a: M128i) -> M128i {
    let [lo, _] = a.to_halves();
    lo.widen()
}

/// Broadcasts the low double-precision lane.
#[inline(always)]
pub fn mm_movedup_pd(a: M128d) -> M128d {
    let e0 = a.to_f64x2()[0];
    M128d::from_f64x2([e0; 2])
}

/// Duplicates the odd-indexed lanes downward: `[1,1,3,3]`.
#[inline(always)]
pub fn mm_movehdup_ps(a: M128) -> M128 {
    let a = a.to_f32x4();
    M128::from_f32x4([a[1], a[1], a[3], a[3]])
}

/// Duplicates the even-indexed lanes upward: `[0,0,2,2]`.
#[inline(always)]
pub fn mm_moveldup_ps(a: M128) -> M128 {
    let a = a.to_f32x4();
    M128::from_f32x4([a[0], a[0], a[2], a[2]])
}

/// `[b2, b3, a2, a3]`.
#[inline(always)]
pub fn mm_movehl_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([b[2], b[3], a[2], a[3]])
}

/// `[a0, a1, b0, b1]`.
#[inline(always)]
pub fn mm_movelh_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_f32x4(), b.to_f32x4());
    M128::from_f32x4([a[0], a[1], b[0], b[1]])
}

/// Low half of `a` as a 64-bit register.
#[inline(always)]
pub fn mm_movepi64_pi64(a: M128i) -> M64 {
    let [lo, _] = a.to_halves();
    lo
}

/// Widens `a` into the low half, zeroing the high half.
#[inline(always)]
pub fn mm_movpi64_epi64(a: M64) -> M128i {
    a.widen()
}

#[inline(always)]
pub fn mm_extract_epi8<const IMM8: i32>(a: M128i) -> i32 {
    a.to_u8x16()[(IMM8 & 15) as usize] as i32
}

#[inline(always)]
pub fn mm_extract_epi16<const IMM8: i32>(a: M128i) -> i32 {
    a.to_u16x8()[(IMM8 & 7) as usize] as i32
}

#[inline(always)]
pub fn mm_extract_epi32<const IMM8: i32>(a: M128i) -> i32 {
    a.to_i32x4()[(IMM8 & 3) as usize]
}

#[inline(always)]
pub fn mm_extract_epi64<const IMM8: i32>(a: M128i) -> i64 {
    a.to_i64x2()[(IMM8 & 1) as usize]
}

/// Raw bits of the selected single-precision lane.
#[inline(always)]
pub fn mm_extract_ps<const IMM8: i32>(a: M128) -> i32 {
    a.to_i32x4()[(IMM8 & 3) as usize]
}

#[inline(always)]
pub fn mm_extract_pi16<const IMM8: i32>(a: M64) -> i32 {
    a.to_u16x4()[(IMM8 & 3) as usize] as i32
}

#[inline(always)]
pub fn mm_insert_epi8<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    let mut lanes = a.to_i8x16();
    lanes[(IMM8 & 15) as usize] = i as i8;
    M128i::from_i8x16(lanes)
}

#[inline(always)]
pub fn mm_insert_epi16<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    let mut lanes = a.to_i16x8();
    lanes[(IMM8 & 7) as usize] = i as i16;
    M128i::from_i16x8(lanes)
}

#[inline(always)]
pub fn mm_insert_epi32<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    let mut lanes = a.to_i32x4();
    lanes[(IMM8 & 3) as usize] = i;
    M128i::from_i32x4(lanes)
}

#[inline(always)]
pub fn mm_insert_epi64<const IMM8: i32>(a: M128i, i: i64) -> M128i {
    let mut lanes = a.to_i64x2();
    lanes[(IMM8 & 1) as usize] = i;
    M128i::from_i64x2(lanes)
}

#[inline(always)]
pub fn mm_insert_pi16<const IMM8: i32>(a: M64, i: i32) -> M64 {
    let mut lanes = a.to_i16x4();
    lanes[(IMM8 & 3) as usize] = i as i16;
    M64::from_i16x4(lanes)
}

/// In-place 4x4 transpose of four row registers.
#[inline(always)]
pub fn mm_transpose4_ps(row0: &mut M128, row1: &mut M128, row2: &mut M128, row3: &mut M128) {
    let t0 = mm_unpacklo_ps(*row0, *row1);
    let t1 = mm_unpacklo_ps(*row2, *row3);
    let t2 = mm_unpackhi_ps(*row0, *row1);
    let t3 = mm_unpackhi_ps(*row2, *row3);
    *row0 = mm_movelh_ps(t0, t1);
    *row1 = mm_movehl_ps(t1, t0);
    *row2 = mm_movelh_ps(t2, t3);
    *row3 = mm_movehl_ps(t3, t2);
}
