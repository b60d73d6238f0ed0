//! Register storage and view model.
//!
//! Each vector register is untyped byte storage. The typed "views" are pure
//! reinterpretations of those bytes in native endianness: writing through one
//! view and reading through another is always well-defined and bit-identical
//! to the raw bytes. No view carries semantic meaning on its own; the logical
//! element type of a register lives entirely in the caller's head.
//!
//! Lane index 0 always occupies the lowest-addressed bytes.

/// 128-bit register conventionally holding four `f32` lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct M128(pub(crate) [u8; 16]);

/// 128-bit register conventionally holding integer lanes of any width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct M128i(pub(crate) [u8; 16]);

/// 128-bit register conventionally holding two `f64` lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct M128d(pub(crate) [u8; 16]);

/// 64-bit register conventionally holding packed integer lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct M64(pub(crate) [u8; 8]);

macro_rules! lane_views {
    ($reg:ident, $size:expr, { $($to:ident, $from:ident, $t:ty, $n:expr, $w:expr);+ $(;)? }) => {
        impl $reg {
            $(
                #[inline(always)]
                pub fn $to(self) -> [$t; $n] {
                    let mut lanes = [<$t>::from_ne_bytes([0u8; $w]); $n];
                    for (i, lane) in lanes.iter_mut().enumerate() {
                        let mut raw = [0u8; $w];
                        raw.copy_from_slice(&self.0[i * $w..(i + 1) * $w]);
                        *lane = <$t>::from_ne_bytes(raw);
                    }
                    lanes
                }

                #[inline(always)]
                pub fn $from(lanes: [$t; $n]) -> Self {
                    let mut bytes = [0u8; $size];
                    for (i, lane) in lanes.iter().enumerate() {
                        bytes[i * $w..(i + 1) * $w].copy_from_slice(&lane.to_ne_bytes());
                    }
                    Self(bytes)
                }
            )+
        }
    };
}

macro_rules! reg128_views {
    ($reg:ident) => {
        lane_views!($reg, 16, {
            to_i8x16,  from_i8x16,  i8,  16, 1;
            to_u8x16,  from_u8x16,  u8,  16, 1;
            to_i16x8,  from_i16x8,  i16,  8, 2;
            to_u16x8,  from_u16x8,  u16,  8, 2;
            to_i32x4,  from_i32x4,  i32,  4, 4;
            to_u32x4,  from_u32x4,  u32,  4, 4;
            to_i64x2,  from_i64x2,  i64,  2, 8;
            to_u64x2,  from_u64x2,  u64,  2, 8;
            to_f32x4,  from_f32x4,  f32,  4, 4;
            to_f64x2,  from_f64x2,  f64,  2, 8;
        });

        impl $reg {
            /// Raw byte contents, lane 0 first.
            #[inline(always)]
            pub const fn to_bytes(self) -> [u8; 16] {
                self.0
            }

            #[inline(always)]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(bytes)
            }

            /// Whole register as one native-endian `u128`.
            #[inline(always)]
            pub const fn to_u128(self) -> u128 {
                u128::from_ne_bytes(self.0)
            }

            #[inline(always)]
            pub const fn from_u128(value: u128) -> Self {
                Self(value.to_ne_bytes())
            }

            /// Low and high 8-byte halves as `M64` registers.
            #[inline(always)]
            pub(crate) fn to_halves(self) -> [M64; 2] {
                let mut lo = [0u8; 8];
                let mut hi = [0u8; 8];
                lo.copy_from_slice(&self.0[..8]);
                hi.copy_from_slice(&self.0[8..]);
                [M64(lo), M64(hi)]
            }

            #[inline(always)]
            pub(crate) fn from_halves(lo: M64, hi: M64) -> Self {
                let mut bytes = [0u8; 16];
                bytes[..8].copy_from_slice(&lo.0);
                bytes[8..].copy_from_slice(&hi.0);
                Self(bytes)
            }
        }
    };
}

reg128_views!(M128);
reg128_views!(M128i);
reg128_views!(M128d);

lane_views!(M64, 8, {
    to_i8x8,  from_i8x8,  i8, 8, 1;
    to_u8x8,  from_u8x8,  u8, 8, 1;
    to_i16x4, from_i16x4, i16, 4, 2;
    to_u16x4, from_u16x4, u16, 4, 2;
    to_i32x2, from_i32x2, i32, 2, 4;
    to_u32x2, from_u32x2, u32, 2, 4;
    to_f32x2, from_f32x2, f32, 2, 4;
});

impl M64 {
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn to_i64(self) -> i64 {
        i64::from_ne_bytes(self.0)
    }

    #[inline(always)]
    pub const fn from_i64(value: i64) -> Self {
        Self(value.to_ne_bytes())
    }

    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        u64::from_ne_bytes(self.0)
    }

    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self(value.to_ne_bytes())
    }

    /// Widens to a 128-bit register with the high half zeroed.
    #[inline(always)]
    pub(crate) fn widen(self) -> M128i {
        M128i::from_halves(self, M64([0u8; 8]))
    }
}

/// Reinterprets four packed single-precision lanes as integer lanes.
#[inline(always)]
pub fn mm_castps_si128(a: M128) -> M128i {
    M128i(a.0)
}

/// Reinterprets four packed single-precision lanes as two double-precision lanes.
#[inline(always)]
pub fn mm_castps_pd(a: M128) -> M128d {
    M128d(a.0)
}

/// Reinterprets integer lanes as four packed single-precision lanes.
#[inline(always)]
pub fn mm_castsi128_ps(a: M128i) -> M128 {
    M128(a.0)
}

/// Reinterprets integer lanes as two packed double-precision lanes.
#[inline(always)]
pub fn mm_castsi128_pd(a: M128i) -> M128d {
    M128d(a.0)
}

/// Reinterprets two packed double-precision lanes as single-precision lanes.
#[inline(always)]
pub fn mm_castpd_ps(a: M128d) -> M128 {
    M128(a.0)
}

/// Reinterprets two packed double-precision lanes as integer lanes.
#[inline(always)]
pub fn mm_castpd_si128(a: M128d) -> M128i {
    M128i(a.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_are_bitwise_reinterpretations() {
        let bytes: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        let r = M128i::from_bytes(bytes);

        assert_eq!(M128i::from_i8x16(r.to_i8x16()), r);
        assert_eq!(M128i::from_u16x8(r.to_u16x8()), r);
        assert_eq!(M128i::from_i32x4(r.to_i32x4()), r);
        assert_eq!(M128i::from_u64x2(r.to_u64x2()), r);
        assert_eq!(M128i::from_f32x4(r.to_f32x4()), r);
        assert_eq!(M128i::from_f64x2(r.to_f64x2()), r);
        assert_eq!(M128i::from_u128(r.to_u128()), r);
    }

    #[test]
    fn test_lane_zero_is_lowest_addressed() {
        let r = M128i::from_u32x4([0xdead_beef, 0, 0, 0]);
        assert_eq!(&r.to_bytes()[..4], &0xdead_beef_u32.to_ne_bytes());
        assert_eq!(&r.to_bytes()[4..], &[0u8; 12]);
    }

    #[test]
    fn test_float_views_roundtrip_nan_payloads() {
        let lanes = [f32::from_bits(0x7fc0_1234), f32::NEG_INFINITY, -0.0, 1.5];
        let r = M128::from_f32x4(lanes);
        let back = r.to_f32x4();
        for (orig, got) in lanes.iter().zip(back.iter()) {
            assert_eq!(orig.to_bits(), got.to_bits());
        }
    }

    #[test]
    fn test_casts_preserve_bits() {
        let r = M128::from_f32x4([1.0, -2.5, f32::NAN, 0.0]);
        assert_eq!(mm_castps_si128(r).to_bytes(), r.to_bytes());
        assert_eq!(mm_castsi128_pd(mm_castps_si128(r)).to_bytes(), r.to_bytes());
        assert_eq!(mm_castpd_ps(mm_castps_pd(r)), r);
    }

    #[test]
    fn test_m64_halves_roundtrip() {
        let r = M128i::from_u64x2([0x1122_3344_5566_7788, 0x99aa_bbcc_ddee_ff00]);
        let [lo, hi] = r.to_halves();
        assert_eq!(lo.to_u64(), 0x1122_3344_5566_7788);
        assert_eq!(hi.to_u64(), 0x99aa_bbcc_ddee_ff00);
        assert_eq!(M128i::from_halves(lo, hi), r);
        assert_eq!(lo.widen().to_u64x2(), [0x1122_3344_5566_7788, 0]);
    }
}
