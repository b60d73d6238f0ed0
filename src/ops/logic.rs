//! Bitwise operators.
//!
//! All four operate on the raw 128 bits; the ps/pd/si128 variants exist only
//! so callers keep their logical typing. `andnot` complements its *first*
//! operand.

use crate::reg::{M128, M128d, M128i};

#[inline(always)]
fn and_bytes(a: [u8; 16], b: [u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] & b[i])
}

#[inline(always)]
fn or_bytes(a: [u8; 16], b: [u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] | b[i])
}

#[inline(always)]
fn xor_bytes(a: [u8; 16], b: [u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

#[inline(always)]
fn andnot_bytes(a: [u8; 16], b: [u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| !a[i] & b[i])
}

#[inline(always)]
pub fn mm_and_ps(a: M128, b: M128) -> M128 {
    M128::from_bytes(and_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_or_ps(a: M128, b: M128) -> M128 {
    M128::from_bytes(or_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_xor_ps(a: M128, b: M128) -> M128 {
    M128::from_bytes(xor_bytes(a.to_bytes(), b.to_bytes()))
}

/// `(!a) & b`.
#[inline(always)]
pub fn mm_andnot_ps(a: M128, b: M128) -> M128 {
    M128::from_bytes(andnot_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_and_pd(a: M128d, b: M128d) -> M128d {
    M128d::from_bytes(and_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_or_pd(a: M128d, b: M128d) -> M128d {
    M128d::from_bytes(or_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_xor_pd(a: M128d, b: M128d) -> M128d {
    M128d::from_bytes(xor_bytes(a.to_bytes(), b.to_bytes()))
}

/// `(!a) & b`.
#[inline(always)]
pub fn mm_andnot_pd(a: M128d, b: M128d) -> M128d {
    M128d::from_bytes(andnot_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_and_si128(a: M128i, b: M128i) -> M128i {
    M128i::from_bytes(and_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_or_si128(a: M128i, b: M128i) -> M128i {
    M128i::from_bytes(or_bytes(a.to_bytes(), b.to_bytes()))
}

#[inline(always)]
pub fn mm_xor_si128(a: M128i, b: M128i) -> M128i {
    M128i::from_bytes(xor_bytes(a.to_bytes(), b.to_bytes()))
}

/// `(!a) & b`.
#[inline(always)]
pub fn mm_andnot_si128(a: M128i, b: M128i) -> M128i {
    M128i::from_bytes(andnot_bytes(a.to_bytes(), b.to_bytes()))
}
