//! Triangle in 3D space and its derived metrics.

use std::fmt;

use num_traits::AsPrimitive;
use primkit_core::{MathError, Normalize, Real, Result, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Vector3;

/// A triangle with corners `A`, `B`, `C`.
///
/// Corners are fixed at construction. Every metric (sides, area, centroid,
/// angles) is derived from them on each call, so `AB + BC + CA` is always the
/// zero vector. Degenerate corners (coincident or collinear) are accepted;
/// check [`is_degenerate`](Self::is_degenerate) before relying on angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle3<T> {
    a: Vector3<T>,
    b: Vector3<T>,
    c: Vector3<T>,
}

impl<T: Real> Triangle3<T> {
    pub fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self { a, b, c }
    }

    pub fn a(&self) -> Vector3<T> {
        self.a
    }

    pub fn b(&self) -> Vector3<T> {
        self.b
    }

    pub fn c(&self) -> Vector3<T> {
        self.c
    }

    pub fn corners(&self) -> [Vector3<T>; 3] {
        [self.a, self.b, self.c]
    }

    /// `B - A`
    pub fn side_ab(&self) -> Vector3<T> {
        self.b - self.a
    }

    /// `C - B`
    pub fn side_bc(&self) -> Vector3<T> {
        self.c - self.b
    }

    /// `A - C`
    pub fn side_ca(&self) -> Vector3<T> {
        self.a - self.c
    }

    pub fn sides(&self) -> [Vector3<T>; 3] {
        [self.side_ab(), self.side_bc(), self.side_ca()]
    }

    // AB × AC, whose length is twice the area.
    fn doubled_area_vector(&self) -> Vector3<T> {
        self.side_ab().cross_product(-self.side_ca())
    }

    /// Unsigned area, independent of winding.
    pub fn area(&self) -> T {
        self.doubled_area_vector().magnitude() / (T::ONE + T::ONE)
    }

    /// Arithmetic mean of the three corners.
    pub fn centroid(&self) -> Vector3<T> {
        (self.a + self.b + self.c) / (T::ONE + T::ONE + T::ONE)
    }

    /// Interior angle at `A` in `[0, π]`; `NaN` if an edge meeting at `A` has
    /// zero length.
    pub fn angle_a(&self) -> T {
        angle_between(self.side_ab(), -self.side_ca())
    }

    /// Interior angle at `B`, see [`angle_a`](Self::angle_a).
    pub fn angle_b(&self) -> T {
        angle_between(self.side_bc(), -self.side_ab())
    }

    /// Interior angle at `C`, see [`angle_a`](Self::angle_a).
    pub fn angle_c(&self) -> T {
        angle_between(self.side_ca(), -self.side_bc())
    }

    pub fn angles(&self) -> [T; 3] {
        [self.angle_a(), self.angle_b(), self.angle_c()]
    }

    /// Angles at `A`, `B`, `C`, refusing degenerate triangles instead of
    /// returning unreliable values.
    pub fn try_angles(&self) -> Result<[T; 3]> {
        if self.is_degenerate() {
            debug!(triangle = %self, "angles requested for degenerate triangle");
            return Err(MathError::DegenerateTriangle);
        }
        Ok(self.angles())
    }

    /// True when two corners coincide or all three are collinear.
    ///
    /// Decided from side lengths and the cross product only, so it is safe to
    /// call before any angle query.
    ///
    /// The zero test is absolute: `|AB × AC|² <= SQUARE_EPS`. For `f32` that
    /// is `1e-6`, so small but well-shaped triangles (area below `5e-4`) count
    /// as degenerate; use [`is_degenerate_with`](Self::is_degenerate_with)
    /// with a tolerance suited to the model scale.
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate_with(Tolerance::default())
    }

    pub fn is_degenerate_with(&self, tolerance: Tolerance<T>) -> bool {
        if self.sides().iter().any(|side| side.is_zero_with(tolerance)) {
            return true;
        }
        self.doubled_area_vector().is_zero_with(tolerance)
    }

    /// Explicit width conversion of all three corners.
    pub fn cast<U: Real>(&self) -> Triangle3<U>
    where
        T: AsPrimitive<U>,
    {
        Triangle3::new(self.a.cast(), self.b.cast(), self.c.cast())
    }
}

fn angle_between<T: Real>(first: Vector3<T>, second: Vector3<T>) -> T {
    let (Ok(first), Ok(second)) = (first.try_normalized(), second.try_normalized()) else {
        debug!("zero-length edge, angle is undefined");
        return T::nan();
    };
    // Rounding can push the cosine of nearly parallel edges past ±1.
    let cosine = first.scalar_product(second).max(-T::ONE).min(T::ONE);
    cosine.acos()
}

impl<T: fmt::Display> fmt::Display for Triangle3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle3(A: {}, B: {}, C: {})", self.a, self.b, self.c)
    }
}
