//! Lane rearrangement tests: shuffles, blends, packs, unpacks and alignment.
//!
//! The variable byte shuffle and the alignment window are also checked
//! against a scalar reference over randomized inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ssecompat::*;

/// Immediate-controlled shuffles pick the documented lanes.
#[test]
fn test_immediate_shuffles() {
    let a = mm_setr_ps(0.0, 1.0, 2.0, 3.0);
    let b = mm_setr_ps(10.0, 11.0, 12.0, 13.0);

    const CTRL: i32 = mm_shuffle(0, 1, 2, 3);
    assert_eq!(
        mm_shuffle_ps::<CTRL>(a, b).to_f32x4(),
        [3.0, 2.0, 11.0, 10.0]
    );

    let a = mm_setr_epi32(0, 1, 2, 3);
    assert_eq!(
        mm_shuffle_epi32::<{ mm_shuffle(0, 0, 3, 3) }>(a).to_i32x4(),
        [3, 3, 0, 0]
    );

    let a = mm_setr_pd(1.0, 2.0);
    let b = mm_setr_pd(3.0, 4.0);
    assert_eq!(mm_shuffle_pd::<0b01>(a, b).to_f64x2(), [2.0, 3.0]);

    let a = M128i::from_i16x8([0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        mm_shufflelo_epi16::<{ mm_shuffle(0, 1, 2, 3) }>(a).to_i16x8(),
        [3, 2, 1, 0, 4, 5, 6, 7]
    );
    assert_eq!(
        mm_shufflehi_epi16::<{ mm_shuffle(0, 1, 2, 3) }>(a).to_i16x8(),
        [0, 1, 2, 3, 7, 6, 5, 4]
    );
}

/// The variable byte shuffle matches its scalar definition on random input.
#[test]
fn test_variable_byte_shuffle_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let src: [u8; 16] = core::array::from_fn(|_| rng.random());
        let ctrl: [u8; 16] = core::array::from_fn(|_| rng.random());

        let expected: [u8; 16] = core::array::from_fn(|i| {
            if ctrl[i] & 0x80 != 0 {
                0
            } else {
                src[(ctrl[i] & 0x0f) as usize]
            }
        });

        let got = mm_shuffle_epi8(M128i::from_u8x16(src), M128i::from_u8x16(ctrl));
        assert_eq!(got.to_u8x16(), expected, "src={src:?} ctrl={ctrl:?}");
    }
}

/// Blends select per-lane from the second operand where the control says so.
#[test]
fn test_blends() {
    let a = mm_setr_epi32(0, 1, 2, 3);
    let b = mm_setr_epi32(10, 11, 12, 13);

    assert_eq!(mm_blend_ps::<0b0101>(mm_cvtepi32_ps(a), mm_cvtepi32_ps(b)).to_f32x4(),
        [10.0, 1.0, 12.0, 3.0]);

    let a16 = M128i::from_i16x8([0, 1, 2, 3, 4, 5, 6, 7]);
    let b16 = M128i::from_i16x8([10, 11, 12, 13, 14, 15, 16, 17]);
    assert_eq!(
        mm_blend_epi16::<0b1111_0000>(a16, b16).to_i16x8(),
        [0, 1, 2, 3, 14, 15, 16, 17]
    );

    // The variable form keys on each lane's sign bit only.
    let mask = mm_setr_epi32(-1, 1, i32::MIN, 0);
    assert_eq!(
        mm_blendv_ps(
            mm_cvtepi32_ps(a),
            mm_cvtepi32_ps(b),
            mm_castsi128_ps(mask)
        )
        .to_f32x4(),
        [10.0, 1.0, 12.0, 3.0]
    );
}

/// Packs narrow with saturation and interleave a-then-b.
#[test]
fn test_packs_and_unpacks() {
    let a = M128i::from_i16x8([300, -300, 5, -5, 127, -128, 0, 1]);
    let b = M128i::from_i16x8([1000, -1000, 2, -2, 3, -3, 4, -4]);
    assert_eq!(
        mm_packs_epi16(a, b).to_i8x16(),
        [127, -128, 5, -5, 127, -128, 0, 1, 127, -128, 2, -2, 3, -3, 4, -4]
    );
    assert_eq!(
        mm_packus_epi16(a, b).to_u8x16(),
        [255, 0, 5, 0, 127, 0, 0, 1, 255, 0, 2, 0, 3, 0, 4, 0]
    );

    let a = mm_setr_epi32(70000, -70000, 1, -1);
    let b = mm_setr_epi32(2, -2, 40000, -40000);
    assert_eq!(
        mm_packs_epi32(a, b).to_i16x8(),
        [32767, -32768, 1, -1, 2, -2, 32767, -32768]
    );
    assert_eq!(
        mm_packus_epi32(a, b).to_u16x8(),
        [65535, 0, 1, 0, 2, 0, 40000, 0]
    );

    let a = mm_setr_epi32(0, 1, 2, 3);
    let b = mm_setr_epi32(10, 11, 12, 13);
    assert_eq!(mm_unpacklo_epi32(a, b).to_i32x4(), [0, 10, 1, 11]);
    assert_eq!(mm_unpackhi_epi32(a, b).to_i32x4(), [2, 12, 3, 13]);

    let a = mm_setr_ps(0.0, 1.0, 2.0, 3.0);
    let b = mm_setr_ps(10.0, 11.0, 12.0, 13.0);
    assert_eq!(mm_unpacklo_ps(a, b).to_f32x4(), [0.0, 10.0, 1.0, 11.0]);
    assert_eq!(mm_unpackhi_ps(a, b).to_f32x4(), [2.0, 12.0, 3.0, 13.0]);
}

/// The alignment window slides across the b:a concatenation, draining to
/// zero past 31 bytes.
#[test]
fn test_alignr_window() {
    let a = M128i::from_u8x16(core::array::from_fn(|i| (i + 16) as u8));
    let b = M128i::from_u8x16(core::array::from_fn(|i| i as u8));

    // A scalar model of the 32-byte concatenation b | a, then zeros.
    let concat: Vec<u8> = (0u8..32).chain(std::iter::repeat(0)).take(64).collect();

    for shift in 0..48 {
        let expected: [u8; 16] = core::array::from_fn(|i| concat[shift as usize + i]);
        let got = mm_alignr_epi8(a, b, shift);
        assert_eq!(got.to_bytes(), expected, "shift={shift}");
    }

    let lo = M64::from_u8x8([0, 1, 2, 3, 4, 5, 6, 7]);
    let hi = M64::from_u8x8([8, 9, 10, 11, 12, 13, 14, 15]);
    assert_eq!(
        mm_alignr_pi8(hi, lo, 3).to_u8x8(),
        [3, 4, 5, 6, 7, 8, 9, 10]
    );
}

/// The four-row transpose really transposes.
#[test]
fn test_transpose() {
    let mut r0 = mm_setr_ps(0.0, 1.0, 2.0, 3.0);
    let mut r1 = mm_setr_ps(10.0, 11.0, 12.0, 13.0);
    let mut r2 = mm_setr_ps(20.0, 21.0, 22.0, 23.0);
    let mut r3 = mm_setr_ps(30.0, 31.0, 32.0, 33.0);

    mm_transpose4_ps(&mut r0, &mut r1, &mut r2, &mut r3);

    assert_eq!(r0.to_f32x4(), [0.0, 10.0, 20.0, 30.0]);
    assert_eq!(r1.to_f32x4(), [1.0, 11.0, 21.0, 31.0]);
    assert_eq!(r2.to_f32x4(), [2.0, 12.0, 22.0, 32.0]);
    assert_eq!(r3.to_f32x4(), [3.0, 13.0, 23.0, 33.0]);
}

/// Insert and extract are inverses at every index.
#[test]
fn test_insert_extract() {
    let a = mm_setzero_si128();
    let r = mm_insert_epi16::<3>(a, -7);
    assert_eq!(mm_extract_epi16::<3>(r), -7i16 as u16 as i32);

    let r = mm_insert_epi8::<15>(a, 0x90);
    // Byte extraction zero-extends.
    assert_eq!(mm_extract_epi8::<15>(r), 0x90);

    let r = mm_insert_epi32::<2>(a, i32::MIN);
    assert_eq!(mm_extract_epi32::<2>(r), i32::MIN);

    let r = mm_insert_epi64::<1>(a, i64::MAX);
    assert_eq!(mm_extract_epi64::<1>(r), i64::MAX);

    let f = mm_setr_ps(0.0, -1.5, 0.0, 0.0);
    assert_eq!(mm_extract_ps::<1>(f), (-1.5f32).to_bits() as i32);
}
