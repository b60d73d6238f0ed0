//! The operation catalog, grouped by concern.

pub mod arith;
pub mod cmp;
pub mod convert;
pub mod load;
pub mod logic;
pub mod math;
pub mod set;
pub mod shift;
pub mod shuffle;
pub mod store;

pub use arith::*;
pub use cmp::*;
pub use convert::*;
pub use load::*;
pub use logic::*;
pub use math::*;
pub use set::*;
pub use shift::*;
pub use shuffle::*;
pub use store::*;
