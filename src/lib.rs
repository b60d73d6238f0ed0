//! Portable, bit-exact renditions of the 128-bit vector operations.
//!
//! Registers are plain byte arrays ([`M128`], [`M128d`], [`M128i`], [`M64`])
//! with typed lane views, so any lane pattern written through one view reads
//! back unchanged through another, including NaN payloads. Every operation is
//! an ordinary safe function over those values, except loads and stores,
//! which take raw pointers and carry the usual validity requirements.
//!
//! Semantics follow the hardware reference: integer arithmetic wraps or
//! saturates exactly as the instruction does, float-to-integer conversions
//! honor a per-thread rounding mode ([`rounding`]) and saturate with NaN
//! mapping to zero, and comparison masks are all-ones or all-zeroes lanes.
//!
//! ```
//! use ssecompat::*;
//!
//! let a = mm_setr_ps(1.0, 2.0, 3.0, 4.0);
//! let b = mm_set1_ps(10.0);
//! assert_eq!(mm_add_ps(a, b).to_f32x4(), [11.0, 12.0, 13.0, 14.0]);
//! ```

pub mod error;
pub mod mem;
pub mod ops;
pub mod reg;
pub mod rounding;

pub use error::{CompatError, Result};
pub use mem::{
    alloc_zeroed_f32_vec, mm_free, mm_lfence, mm_malloc, mm_mfence, mm_pause, mm_prefetch,
    mm_sfence, MM_HINT_NTA, MM_HINT_T0, MM_HINT_T1, MM_HINT_T2,
};
pub use ops::*;
pub use reg::{
    mm_castpd_ps, mm_castpd_si128, mm_castps_pd, mm_castps_si128, mm_castsi128_pd,
    mm_castsi128_ps, M128, M128d, M128i, M64,
};
pub use rounding::{
    mm_get_rounding_mode, mm_set_rounding_mode, MM_FROUND_CUR_DIRECTION, MM_FROUND_NO_EXC,
    MM_FROUND_TO_NEAREST_INT, MM_FROUND_TO_NEG_INF, MM_FROUND_TO_POS_INF, MM_FROUND_TO_ZERO,
    MM_ROUND_DOWN, MM_ROUND_NEAREST, MM_ROUND_TOWARD_ZERO, MM_ROUND_UP,
};
