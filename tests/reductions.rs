//! Cross-lane reductions: mask extraction, predicates, sums of absolute
//! differences, horizontal minimum and the dot product.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ssecompat::*;

/// Sign-bit masks match a scalar recomputation on random bytes.
#[test]
fn test_movemask_random() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let bytes: [u8; 16] = core::array::from_fn(|_| rng.random());
        let expected = bytes
            .iter()
            .enumerate()
            .fold(0i32, |acc, (i, b)| acc | (((b >> 7) as i32) << i));
        assert_eq!(mm_movemask_epi8(M128i::from_u8x16(bytes)), expected);
    }

    assert_eq!(mm_movemask_ps(mm_setr_ps(-1.0, 1.0, -0.0, 0.0)), 0b0101);
    assert_eq!(mm_movemask_pd(mm_setr_pd(1.0, -1.0)), 0b10);
}

/// Sum of absolute differences against the scalar definition.
#[test]
fn test_sad_random() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..500 {
        let a: [u8; 16] = core::array::from_fn(|_| rng.random());
        let b: [u8; 16] = core::array::from_fn(|_| rng.random());

        let half = |range: std::ops::Range<usize>| -> u64 {
            range
                .map(|i| (a[i] as i32 - b[i] as i32).unsigned_abs() as u64)
                .sum()
        };
        let got = mm_sad_epu8(M128i::from_u8x16(a), M128i::from_u8x16(b)).to_u64x2();
        assert_eq!(got, [half(0..8), half(8..16)]);
    }
}

/// Horizontal minimum finds the value and its first position.
#[test]
fn test_minpos_random() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..500 {
        let lanes: [u16; 8] = core::array::from_fn(|_| rng.random_range(0..1000));
        let min = *lanes.iter().min().unwrap();
        let idx = lanes.iter().position(|&x| x == min).unwrap() as u16;

        let got = mm_minpos_epu16(M128i::from_u16x8(lanes)).to_u16x8();
        assert_eq!(got, [min, idx, 0, 0, 0, 0, 0, 0], "lanes={lanes:?}");
    }
}

/// Bitwise test predicates, including the carry and mixed forms.
#[test]
fn test_bit_predicates() {
    let a = mm_set1_epi32(0x0000_ffff);
    let b = mm_set1_epi32(0x00ff_0000);
    let c = mm_set1_epi32(0x0000_00ff);

    // Disjoint bits: the and is zero.
    assert_eq!(mm_testz_si128(a, b), 1);
    // c is contained in a, so !a & c is zero.
    assert_eq!(mm_testc_si128(a, c), 1);
    // b straddles a's complement only, so neither mixed condition holds.
    assert_eq!(mm_testnzc_si128(a, b), 0);
    // A mask covering part of a and part of its complement is mixed.
    let straddle = mm_set1_epi32(0x00ff_00ff);
    assert_eq!(mm_testnzc_si128(a, straddle), 1);
}

/// The dot product selects products and broadcast lanes per its control.
#[test]
fn test_dp_control_masks() {
    let a = mm_setr_ps(1.0, 2.0, 3.0, 4.0);
    let b = mm_setr_ps(10.0, 20.0, 30.0, 40.0);

    // All products, all lanes.
    assert_eq!(mm_dp_ps(a, b, 0xff).to_f32x4(), [3000.0; 4]);
    // Drop the last product.
    assert_eq!(mm_dp_ps(a, b, 0x7f).to_f32x4(), [1400.0; 4]);
    // Two products into two lanes.
    assert_eq!(
        mm_dp_ps(a, b, 0b0011_0101).to_f32x4(),
        [50.0, 0.0, 50.0, 0.0]
    );
    // No products: all lanes zero.
    assert_eq!(mm_dp_ps(a, b, 0x0f).to_f32x4(), [0.0; 4]);
}

/// A long dot product pipeline stays close to an f64 reference.
#[test]
fn test_dp_pipeline_accuracy() {
    let mut rng = StdRng::seed_from_u64(19);
    let len = 1024;

    let xs: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect();
    let ys: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect();

    let reference: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum();

    let mut acc = mm_setzero_ps();
    for (cx, cy) in xs.chunks_exact(4).zip(ys.chunks_exact(4)) {
        let vx = mm_setr_ps(cx[0], cx[1], cx[2], cx[3]);
        let vy = mm_setr_ps(cy[0], cy[1], cy[2], cy[3]);
        acc = mm_add_ps(acc, mm_dp_ps(vx, vy, 0xf1));
    }
    let got = mm_cvtss_f32(acc) as f64;

    let error = (got - reference).abs();
    println!("reference={reference:.9} got={got:.9} error={error:.3e}");
    assert!(error < 1e-3, "dot product drifted: {error:.3e}");
}
