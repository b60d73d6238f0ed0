//! Behavior of the per-thread rounding mode across the conversion surface.
//!
//! Each test runs on its own thread, so every test starts from the default
//! round-to-nearest state.

use ssecompat::*;

/// One conversion, four modes, the full direction table.
#[test]
fn test_direction_table() {
    let cases: [(u32, [i32; 4]); 4] = [
        (MM_ROUND_NEAREST, [2, -2, 2, -2]),
        (MM_ROUND_DOWN, [2, -3, 1, -2]),
        (MM_ROUND_UP, [3, -2, 2, -1]),
        (MM_ROUND_TOWARD_ZERO, [2, -2, 1, -1]),
    ];
    let input = mm_setr_ps(2.5, -2.5, 1.5, -1.5);

    for (mode, expected) in cases {
        mm_set_rounding_mode(mode);
        let got = mm_cvtps_epi32(input).to_i32x4();
        println!("mode={mode:#06x} -> {got:?}");
        assert_eq!(got, expected);
    }
}

/// Every mode-honoring conversion sees the same switch.
#[test]
fn test_mode_reaches_every_conversion() {
    mm_set_rounding_mode(MM_ROUND_DOWN);

    assert_eq!(mm_cvtss_si32(mm_set_ss(1.9)), 1);
    assert_eq!(mm_cvtss_si64(mm_set_ss(-0.1)), -1);
    assert_eq!(mm_cvtsd_si32(mm_set_sd(-0.5)), -1);
    assert_eq!(mm_cvtsd_si64(mm_set_sd(2.99)), 2);
    assert_eq!(mm_cvtps_pi32(mm_setr_ps(0.7, -0.7, 0.0, 0.0)).to_i32x2(), [0, -1]);
    assert_eq!(
        mm_cvtpd_epi32(mm_setr_pd(0.5, -0.5)).to_i32x4(),
        [0, -1, 0, 0]
    );
    assert_eq!(
        mm_cvtps_pi16(mm_setr_ps(1.5, -1.5, 0.5, -0.5)).to_i16x4(),
        [1, -2, 0, -1]
    );
}

/// Truncating conversions never consult the mode.
#[test]
fn test_truncation_is_mode_independent() {
    for mode in [
        MM_ROUND_NEAREST,
        MM_ROUND_DOWN,
        MM_ROUND_UP,
        MM_ROUND_TOWARD_ZERO,
    ] {
        mm_set_rounding_mode(mode);
        assert_eq!(
            mm_cvttps_epi32(mm_setr_ps(1.9, -1.9, 0.5, -0.5)).to_i32x4(),
            [1, -1, 0, 0]
        );
        assert_eq!(mm_cvttss_si32(mm_set_ss(2.999)), 2);
        assert_eq!(mm_cvttsd_si64(mm_set_sd(-2.999)), -2);
    }
}

/// An explicit direction handed to `mm_round_*` stays in force afterwards.
#[test]
fn test_directed_round_switches_permanently() {
    assert_eq!(mm_get_rounding_mode(), MM_ROUND_NEAREST);

    let r = mm_round_ps(
        mm_setr_ps(0.5, 1.5, -0.5, -1.5),
        MM_FROUND_TO_POS_INF | MM_FROUND_NO_EXC,
    );
    assert_eq!(r.to_f32x4(), [1.0, 2.0, 0.0, -1.0]);
    assert_eq!(mm_get_rounding_mode(), MM_ROUND_UP);

    // Later mode-honoring work now rounds up too.
    assert_eq!(mm_cvtss_si32(mm_set_ss(0.01)), 1);

    // So do the named directional forms.
    let _ = mm_floor_pd(mm_setr_pd(1.0, 2.0));
    assert_eq!(mm_get_rounding_mode(), MM_ROUND_DOWN);
    let _ = mm_ceil_ss(mm_set_ss(1.0), mm_set_ss(2.0));
    assert_eq!(mm_get_rounding_mode(), MM_ROUND_UP);
}

/// Requests without a recognized direction round by the current mode and
/// leave it alone.
#[test]
fn test_unrecognized_round_requests_use_current_mode() {
    mm_set_rounding_mode(MM_ROUND_TOWARD_ZERO);

    let a = mm_setr_pd(1.7, -1.7);
    for request in [MM_FROUND_CUR_DIRECTION, MM_FROUND_TO_NEG_INF, 0x40] {
        assert_eq!(mm_round_pd(a, request).to_f64x2(), [1.0, -1.0]);
        assert_eq!(mm_get_rounding_mode(), MM_ROUND_TOWARD_ZERO);
    }
}

/// Scalar rounding forms merge with the upper lanes of their first operand.
#[test]
fn test_scalar_round_merges_lanes() {
    let a = mm_setr_ps(99.0, 1.0, 2.0, 3.0);
    let b = mm_setr_ps(-2.5, 88.0, 88.0, 88.0);
    let r = mm_round_ss(a, b, MM_FROUND_TO_ZERO | MM_FROUND_NO_EXC);
    assert_eq!(r.to_f32x4(), [-2.0, 1.0, 2.0, 3.0]);

    let a = mm_setr_pd(99.0, 1.0);
    let b = mm_setr_pd(-2.5, 88.0);
    let r = mm_round_sd(a, b, MM_FROUND_TO_NEAREST_INT | MM_FROUND_NO_EXC);
    assert_eq!(r.to_f64x2(), [-2.0, 1.0]);
}
