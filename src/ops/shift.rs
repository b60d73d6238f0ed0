//! Shift engine.
//!
//! Logical shifts by a count at or past the lane width produce zero;
//! arithmetic right shifts clamp the count to `width - 1`, filling with the
//! sign bit. Vector-count forms take their count from the low 64-bit lane of
//! the count register and obey the same out-of-range rules, including for
//! negative counts.

use crate::reg::{M128i, M64};

#[inline(always)]
fn imm_in(imm8: i32, width: i32) -> bool {
    (0..width).contains(&imm8)
}

#[inline(always)]
pub fn mm_slli_epi16(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 16) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u16x8(a.to_u16x8().map(|x| x << imm8))
}

#[inline(always)]
pub fn mm_slli_epi32(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 32) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u32x4(a.to_u32x4().map(|x| x << imm8))
}

#[inline(always)]
pub fn mm_slli_epi64(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 64) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u64x2(a.to_u64x2().map(|x| x << imm8))
}

#[inline(always)]
pub fn mm_srli_epi16(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 16) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u16x8(a.to_u16x8().map(|x| x >> imm8))
}

#[inline(always)]
pub fn mm_srli_epi32(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 32) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u32x4(a.to_u32x4().map(|x| x >> imm8))
}

#[inline(always)]
pub fn mm_srli_epi64(a: M128i, imm8: i32) -> M128i {
    if !imm_in(imm8, 64) {
        return M128i::from_bytes([0u8; 16]);
    }
    M128i::from_u64x2(a.to_u64x2().map(|x| x >> imm8))
}

#[inline(always)]
pub fn mm_srai_epi16(a: M128i, imm8: i32) -> M128i {
    let count = if imm_in(imm8, 16) { imm8 } else { 15 };
    M128i::from_i16x8(a.to_i16x8().map(|x| x >> count))
}

#[inline(always)]
pub fn mm_srai_epi32(a: M128i, imm8: i32) -> M128i {
    let count = if imm_in(imm8, 32) { imm8 } else { 31 };
    M128i::from_i32x4(a.to_i32x4().map(|x| x >> count))
}

#[inline(always)]
pub fn mm_srai_epi64(a: M128i, imm8: i32) -> M128i {
    let count = if imm_in(imm8, 64) { imm8 } else { 63 };
    M128i::from_i64x2(a.to_i64x2().map(|x| x >> count))
}

#[inline(always)]
fn vector_count(count: M128i) -> i64 {
    count.to_i64x2()[0]
}

#[inline(always)]
pub fn mm_sll_epi16(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=15 => mm_slli_epi16(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_sll_epi32(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=31 => mm_slli_epi32(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_sll_epi64(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=63 => mm_slli_epi64(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_srl_epi16(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=15 => mm_srli_epi16(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_srl_epi32(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=31 => mm_srli_epi32(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_srl_epi64(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=63 => mm_srli_epi64(a, c as i32),
        _ => M128i::from_bytes([0u8; 16]),
    }
}

#[inline(always)]
pub fn mm_sra_epi16(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=15 => mm_srai_epi16(a, c as i32),
        _ => mm_srai_epi16(a, 15),
    }
}

#[inline(always)]
pub fn mm_sra_epi32(a: M128i, count: M128i) -> M128i {
    match vector_count(count) {
        c @ 0..=31 => mm_srai_epi32(a, c as i32),
        _ => mm_srai_epi32(a, 31),
    }
}

/// Shifts the whole register left by `imm8` bytes (toward higher lanes).
/// A non-positive count returns `a` unchanged; counts past 15 return zero.
#[inline(always)]
pub fn mm_slli_si128(a: M128i, imm8: i32) -> M128i {
    if imm8 <= 0 {
        return a;
    }
    if imm8 > 15 {
        return M128i::from_bytes([0u8; 16]);
    }
    let v = u128::from_le_bytes(a.to_bytes()) << (8 * imm8);
    M128i::from_bytes(v.to_le_bytes())
}

/// Shifts the whole register right by `imm8` bytes (toward lane 0).
/// A non-positive count returns `a` unchanged; counts past 15 return zero.
#[inline(always)]
pub fn mm_srli_si128(a: M128i, imm8: i32) -> M128i {
    if imm8 <= 0 {
        return a;
    }
    if imm8 > 15 {
        return M128i::from_bytes([0u8; 16]);
    }
    let v = u128::from_le_bytes(a.to_bytes()) >> (8 * imm8);
    M128i::from_bytes(v.to_le_bytes())
}

/// `mm_srli_si128` under its byte-shuffle-era name.
#[inline(always)]
pub fn mm_bsrli_si128(a: M128i, imm8: i32) -> M128i {
    mm_srli_si128(a, imm8)
}

#[inline(always)]
pub fn mm_bslli_si128(a: M128i, imm8: i32) -> M128i {
    mm_slli_si128(a, imm8)
}

#[inline(always)]
pub fn mm_slli_pi16(a: M64, imm8: i32) -> M64 {
    if !imm_in(imm8, 16) {
        return M64::from_bytes([0u8; 8]);
    }
    M64::from_u16x4(a.to_u16x4().map(|x| x << imm8))
}

#[inline(always)]
pub fn mm_srli_pi16(a: M64, imm8: i32) -> M64 {
    if !imm_in(imm8, 16) {
        return M64::from_bytes([0u8; 8]);
    }
    M64::from_u16x4(a.to_u16x4().map(|x| x >> imm8))
}

#[inline(always)]
pub fn mm_srai_pi16(a: M64, imm8: i32) -> M64 {
    let count = if imm_in(imm8, 16) { imm8 } else { 15 };
    M64::from_i16x4(a.to_i16x4().map(|x| x >> count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::set::{mm_set1_epi16, mm_set1_epi32, mm_set_epi64x, mm_setr_epi8};

    #[test]
    fn test_logical_shifts_zero_out_of_range() {
        let a = mm_set1_epi16(-1);
        assert_eq!(mm_slli_epi16(a, 0), a);
        assert_eq!(mm_slli_epi16(a, 15).to_u16x8(), [0x8000u16; 8]);
        assert_eq!(mm_slli_epi16(a, 16).to_bytes(), [0u8; 16]);
        assert_eq!(mm_srli_epi16(a, 15).to_u16x8(), [1u16; 8]);
        assert_eq!(mm_srli_epi16(a, 200).to_bytes(), [0u8; 16]);

        let a = mm_set1_epi32(i32::MIN);
        assert_eq!(mm_srli_epi32(a, 31).to_u32x4(), [1u32; 4]);
        assert_eq!(mm_srli_epi32(a, 32).to_bytes(), [0u8; 16]);

        let a = mm_set_epi64x(-1, -1);
        assert_eq!(mm_slli_epi64(a, 63).to_u64x2(), [1u64 << 63; 2]);
        assert_eq!(mm_srli_epi64(a, 64).to_bytes(), [0u8; 16]);
    }

    #[test]
    fn test_arithmetic_shifts_clamp_and_sign_fill() {
        let a = mm_set1_epi16(-4);
        assert_eq!(mm_srai_epi16(a, 1).to_i16x8(), [-2i16; 8]);
        assert_eq!(mm_srai_epi16(a, 99).to_i16x8(), [-1i16; 8]);

        let a = mm_set1_epi32(1 << 30);
        assert_eq!(mm_srai_epi32(a, 99).to_i32x4(), [0i32; 4]);

        let a = mm_set_epi64x(i64::MIN, i64::MIN);
        assert_eq!(mm_srai_epi64(a, 100).to_i64x2(), [-1i64; 2]);
    }

    #[test]
    fn test_vector_counts_read_the_low_lane() {
        let a = mm_set1_epi16(2);
        let three = mm_set_epi64x(99, 3);
        assert_eq!(mm_sll_epi16(a, three).to_i16x8(), [16i16; 8]);
        assert_eq!(
            mm_srl_epi16(mm_set1_epi16(16), three).to_i16x8(),
            [2i16; 8]
        );

        let negative = mm_set_epi64x(0, -1);
        assert_eq!(mm_sll_epi16(a, negative).to_bytes(), [0u8; 16]);
        assert_eq!(mm_srl_epi32(a, negative).to_bytes(), [0u8; 16]);

        // Arithmetic form sign-fills instead of zeroing.
        let minus = mm_set1_epi16(-2);
        assert_eq!(mm_sra_epi16(minus, negative).to_i16x8(), [-1i16; 8]);
        let big = mm_set_epi64x(0, 1i64 << 40);
        assert_eq!(mm_sra_epi32(mm_set1_epi32(-8), big).to_i32x4(), [-1i32; 4]);
    }

    #[test]
    fn test_byte_shifts() {
        let a = mm_setr_epi8(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);

        assert_eq!(
            mm_slli_si128(a, 3).to_i8x16(),
            [0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
        assert_eq!(
            mm_srli_si128(a, 3).to_i8x16(),
            [3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0, 0, 0]
        );
        assert_eq!(mm_srli_si128(a, 16).to_bytes(), [0u8; 16]);
        assert_eq!(mm_slli_si128(a, 16).to_bytes(), [0u8; 16]);

        // Non-positive counts pass the input through.
        assert_eq!(mm_slli_si128(a, 0), a);
        assert_eq!(mm_srli_si128(a, -2), a);

        assert_eq!(mm_bsrli_si128(a, 3), mm_srli_si128(a, 3));
        assert_eq!(mm_bslli_si128(a, 3), mm_slli_si128(a, 3));
    }

    #[test]
    fn test_half_register_shifts() {
        let a = M64::from_i16x4([-4, 8, 1, -1]);
        assert_eq!(mm_slli_pi16(a, 2).to_i16x4(), [-16, 32, 4, -4]);
        assert_eq!(mm_srai_pi16(a, 1).to_i16x4(), [-2, 4, 0, -1]);
        assert_eq!(mm_srli_pi16(a, 20).to_bytes(), [0u8; 8]);
    }
}
