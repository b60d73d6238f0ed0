//! End-to-end NaN behavior: quiet comparisons, number-preferring min/max,
//! conversions that zero NaN, and masks built from unordered lanes.

use ssecompat::*;

/// min/max prefer the numeric operand when exactly one lane is NaN.
#[test]
fn test_min_max_prefer_numbers() {
    let nan = f32::NAN;
    let a = mm_setr_ps(nan, 2.0, nan, -5.0);
    let b = mm_setr_ps(1.0, nan, nan, 5.0);

    let min = mm_min_ps(a, b).to_f32x4();
    assert_eq!(min[0], 1.0);
    assert_eq!(min[1], 2.0);
    assert!(min[2].is_nan());
    assert_eq!(min[3], -5.0);

    let max = mm_max_ps(a, b).to_f32x4();
    assert_eq!(max[0], 1.0);
    assert_eq!(max[1], 2.0);
    assert!(max[2].is_nan());
    assert_eq!(max[3], 5.0);

    let da = mm_setr_pd(f64::NAN, 3.0);
    let db = mm_setr_pd(-1.0, f64::NAN);
    assert_eq!(mm_min_pd(da, db).to_f64x2(), [-1.0, 3.0]);
    assert_eq!(mm_max_pd(da, db).to_f64x2(), [-1.0, 3.0]);
}

/// An unordered mask drives a blend that repairs NaN lanes.
#[test]
fn test_blend_repairs_nan_lanes() {
    let data = mm_setr_ps(1.0, f32::NAN, 3.0, f32::NAN);
    let fallback = mm_set1_ps(0.0);

    let unordered = mm_cmpunord_ps(data, data);
    assert_eq!(mm_movemask_ps(unordered), 0b1010);

    let repaired = mm_blendv_ps(data, fallback, unordered);
    assert_eq!(repaired.to_f32x4(), [1.0, 0.0, 3.0, 0.0]);

    // And the repaired vector is fully ordered.
    assert_eq!(
        mm_movemask_ps(mm_cmpord_ps(repaired, repaired)),
        0b1111
    );
}

/// NaN payloads survive a store/load round trip bit-for-bit.
#[test]
fn test_nan_payload_round_trip() {
    let payload = f32::from_bits(0x7fc1_2345);
    let v = mm_set1_ps(payload);

    let mut buf = [0.0f32; 4];
    unsafe {
        mm_storeu_ps(buf.as_mut_ptr(), v);
        let back = mm_loadu_ps(buf.as_ptr());
        for lane in back.to_f32x4() {
            assert_eq!(lane.to_bits(), 0x7fc1_2345);
        }
    }
}

/// Conversions map NaN to zero while saturating finite overflow.
#[test]
fn test_nan_converts_to_zero() {
    let v = mm_setr_ps(f32::NAN, -f32::NAN, 1e20, -1e20);
    assert_eq!(
        mm_cvtps_epi32(v).to_i32x4(),
        [0, 0, i32::MAX, i32::MIN]
    );
    assert_eq!(mm_cvttps_epi32(v).to_i32x4(), [0, 0, i32::MAX, i32::MIN]);
    assert_eq!(mm_cvtss_si32(mm_set_ss(f32::NAN)), 0);
    assert_eq!(mm_cvttsd_si64(mm_set_sd(f64::NAN)), 0);
}

/// Square root of a negative lane is NaN, which the unordered test then sees.
#[test]
fn test_sqrt_feeds_unordered_compare() {
    let v = mm_setr_ps(4.0, -4.0, 0.0, 9.0);
    let roots = mm_sqrt_ps(v);

    let lanes = roots.to_f32x4();
    assert_eq!(lanes[0], 2.0);
    assert!(lanes[1].is_nan());
    assert_eq!(lanes[2], 0.0);
    assert_eq!(lanes[3], 3.0);

    assert_eq!(mm_movemask_ps(mm_cmpunord_ps(roots, roots)), 0b0010);
}

/// Scalar predicates on NaN: ordered forms are false, not-equal is true.
#[test]
fn test_scalar_predicates_on_nan() {
    let nan = mm_set_sd(f64::NAN);
    let two = mm_set_sd(2.0);

    assert_eq!(mm_comieq_sd(nan, two), 0);
    assert_eq!(mm_comilt_sd(nan, two), 0);
    assert_eq!(mm_comige_sd(nan, two), 0);
    assert_eq!(mm_comineq_sd(nan, two), 1);
    assert_eq!(mm_ucomieq_sd(nan, nan), 0);
    assert_eq!(mm_ucomineq_sd(nan, nan), 1);
}
