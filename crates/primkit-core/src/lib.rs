//! primkit core: the floating-point scalar trait, the tolerance policy shared
//! by every primitive, and the crate-wide error type.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{MathError, Result};
pub use tolerance::{approx_eq, is_unit_square, is_zero_square, Real, Tolerance};
pub use traits::Normalize;
