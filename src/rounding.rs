//! Rounding-mode control register.
//!
//! One four-state rounding mode per thread, initialized to round-to-nearest
//! (ties to even). It directs every conversion and rounding operation that is
//! documented to honor the current mode; truncating (`tt`) conversions ignore
//! it. Functions named `mm_round_*` with an explicit direction, as well as
//! `mm_ceil_*` and `mm_floor_*`, switch the mode and leave it switched — the
//! state is not restored afterwards.

use std::cell::Cell;

/// Rounding-control field value: round to nearest, ties to even.
pub const MM_ROUND_NEAREST: u32 = 0x0000;
/// Rounding-control field value: round toward negative infinity.
pub const MM_ROUND_DOWN: u32 = 0x2000;
/// Rounding-control field value: round toward positive infinity.
pub const MM_ROUND_UP: u32 = 0x4000;
/// Rounding-control field value: round toward zero.
pub const MM_ROUND_TOWARD_ZERO: u32 = 0x6000;

pub const MM_FROUND_TO_NEAREST_INT: i32 = 0x00;
pub const MM_FROUND_TO_NEG_INF: i32 = 0x01;
pub const MM_FROUND_TO_POS_INF: i32 = 0x02;
pub const MM_FROUND_TO_ZERO: i32 = 0x03;
pub const MM_FROUND_CUR_DIRECTION: i32 = 0x04;
pub const MM_FROUND_NO_EXC: i32 = 0x08;

/// The four direction states of the control register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RoundingMode {
    Nearest,
    TowardZero,
    Up,
    Down,
}

thread_local! {
    static ROUNDING_MODE: Cell<RoundingMode> = const { Cell::new(RoundingMode::Nearest) };
}

#[inline(always)]
pub(crate) fn current_mode() -> RoundingMode {
    ROUNDING_MODE.with(|m| m.get())
}

#[inline(always)]
pub(crate) fn set_mode(mode: RoundingMode) {
    ROUNDING_MODE.with(|m| m.set(mode));
}

/// Sets the current thread's rounding mode.
///
/// `mode` is one of [`MM_ROUND_NEAREST`], [`MM_ROUND_DOWN`], [`MM_ROUND_UP`],
/// [`MM_ROUND_TOWARD_ZERO`]. Any other value leaves the mode unchanged.
#[inline(always)]
pub fn mm_set_rounding_mode(mode: u32) {
    match mode {
        MM_ROUND_NEAREST => set_mode(RoundingMode::Nearest),
        MM_ROUND_TOWARD_ZERO => set_mode(RoundingMode::TowardZero),
        MM_ROUND_UP => set_mode(RoundingMode::Up),
        MM_ROUND_DOWN => set_mode(RoundingMode::Down),
        _ => {}
    }
}

/// Reads the current thread's rounding mode.
///
/// Always the exact inverse of [`mm_set_rounding_mode`] for the four defined
/// states.
#[inline(always)]
pub fn mm_get_rounding_mode() -> u32 {
    match current_mode() {
        RoundingMode::Nearest => MM_ROUND_NEAREST,
        RoundingMode::TowardZero => MM_ROUND_TOWARD_ZERO,
        RoundingMode::Up => MM_ROUND_UP,
        RoundingMode::Down => MM_ROUND_DOWN,
    }
}

/// Rounds to an integer-valued float in the given direction.
#[inline(always)]
pub(crate) fn round_f32(x: f32, mode: RoundingMode) -> f32 {
    match mode {
        RoundingMode::Nearest => x.round_ties_even(),
        RoundingMode::TowardZero => x.trunc(),
        RoundingMode::Up => x.ceil(),
        RoundingMode::Down => x.floor(),
    }
}

#[inline(always)]
pub(crate) fn round_f64(x: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Nearest => x.round_ties_even(),
        RoundingMode::TowardZero => x.trunc(),
        RoundingMode::Up => x.ceil(),
        RoundingMode::Down => x.floor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_inverts_for_all_four_states() {
        for mode in [
            MM_ROUND_NEAREST,
            MM_ROUND_DOWN,
            MM_ROUND_UP,
            MM_ROUND_TOWARD_ZERO,
        ] {
            mm_set_rounding_mode(mode);
            assert_eq!(mm_get_rounding_mode(), mode);
        }
        mm_set_rounding_mode(MM_ROUND_NEAREST);
    }

    #[test]
    fn test_unknown_mode_value_is_ignored() {
        mm_set_rounding_mode(MM_ROUND_UP);
        mm_set_rounding_mode(0x1234);
        assert_eq!(mm_get_rounding_mode(), MM_ROUND_UP);
        mm_set_rounding_mode(MM_ROUND_NEAREST);
    }

    #[test]
    fn test_round_directions() {
        assert_eq!(round_f32(2.5, RoundingMode::Nearest), 2.0);
        assert_eq!(round_f32(3.5, RoundingMode::Nearest), 4.0);
        assert_eq!(round_f32(-2.5, RoundingMode::Nearest), -2.0);
        assert_eq!(round_f32(2.5, RoundingMode::TowardZero), 2.0);
        assert_eq!(round_f32(-2.5, RoundingMode::TowardZero), -2.0);
        assert_eq!(round_f32(2.1, RoundingMode::Up), 3.0);
        assert_eq!(round_f32(-2.1, RoundingMode::Up), -2.0);
        assert_eq!(round_f32(2.9, RoundingMode::Down), 2.0);
        assert_eq!(round_f32(-2.1, RoundingMode::Down), -3.0);

        assert_eq!(round_f64(0.5, RoundingMode::Nearest), 0.0);
        assert_eq!(round_f64(1.5, RoundingMode::Nearest), 2.0);
        assert_eq!(round_f64(-7.5, RoundingMode::Down), -8.0);
    }
}
