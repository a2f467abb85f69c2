//! Tolerance policy shared by every primitive.
//!
//! Zero and unit classification compares *squared* magnitudes against the
//! squared epsilon, so no square root is taken on that path. All comparisons
//! are inclusive (`<=`): borderline values classify as equal, zero or unit.

use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, ConstOne, ConstZero, Float, FloatConst, NumAssign};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// Floating-point coordinate type with a tuned geometric epsilon.
///
/// Implemented for `f32` and `f64`; each width carries its own epsilon.
pub trait Real:
    Float
    + FloatConst
    + NumAssign
    + ConstZero
    + ConstOne
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Linear tolerance for coordinate comparisons.
    const EPS: Self;
    /// `EPS * EPS`, compared against squared magnitudes.
    const SQUARE_EPS: Self;
}

impl Real for f32 {
    // A normalized f32 vector lands a few ulps (~1.2e-7 each) away from 1,
    // so the squared tolerance must stay above that. The flip side: any f32
    // squared magnitude up to 1e-6 classifies as zero, so f32 triangles with
    // area below 5e-4 report degenerate under the default tolerance.
    const EPS: f32 = 1e-3;
    const SQUARE_EPS: f32 = 1e-6;
}

impl Real for f64 {
    const EPS: f64 = 1e-7;
    const SQUARE_EPS: f64 = 1e-14;
}

/// `|a - b| <= EPS`
#[inline]
pub fn approx_eq<T: Real>(a: T, b: T) -> bool {
    (a - b).abs() <= T::EPS
}

/// `square_magnitude <= EPS²`
#[inline]
pub fn is_zero_square<T: Real>(square_magnitude: T) -> bool {
    square_magnitude <= T::SQUARE_EPS
}

/// `|square_magnitude - 1| <= EPS²`
#[inline]
pub fn is_unit_square<T: Real>(square_magnitude: T) -> bool {
    (square_magnitude - T::ONE).abs() <= T::SQUARE_EPS
}

/// A caller-chosen tolerance, for code that needs something looser or tighter
/// than the per-width default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance<T> {
    /// Linear tolerance for coordinate comparisons
    pub epsilon: T,
    /// Squared tolerance for magnitude classification
    pub square_epsilon: T,
}

impl<T: Real> Tolerance<T> {
    pub fn new(epsilon: T) -> Self {
        Self {
            epsilon,
            square_epsilon: epsilon * epsilon,
        }
    }

    /// Like [`new`](Self::new) but rejects a non-finite or non-positive epsilon.
    pub fn try_new(epsilon: T) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= T::ZERO {
            return Err(MathError::Tolerance(format!(
                "epsilon must be finite and positive, got {epsilon}"
            )));
        }
        Ok(Self::new(epsilon))
    }

    /// Check if two values are equal within the linear tolerance
    pub fn approx_eq(self, a: T, b: T) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Check if a squared magnitude classifies as zero
    pub fn is_zero_square(self, square_magnitude: T) -> bool {
        square_magnitude <= self.square_epsilon
    }

    /// Check if a squared magnitude classifies as unit length
    pub fn is_unit_square(self, square_magnitude: T) -> bool {
        (square_magnitude - T::ONE).abs() <= self.square_epsilon
    }
}

impl<T: Real> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            epsilon: T::EPS,
            square_epsilon: T::SQUARE_EPS,
        }
    }
}
