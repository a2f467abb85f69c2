//! Three-dimensional vector.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use num_traits::AsPrimitive;
use primkit_core::{is_unit_square, is_zero_square, Normalize, Real, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A vector (or point) in 3D space.
///
/// Zero and unit are tolerance-based classifications, not invariants: any
/// coordinates are valid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Vector3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    pub fn set(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn copy_from(&mut self, other: Self) {
        *self = other;
    }

    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    pub fn square_magnitude(self) -> T {
        self.scalar_product(self)
    }

    pub fn magnitude(self) -> T {
        self.square_magnitude().sqrt()
    }

    pub fn is_zero(self) -> bool {
        is_zero_square(self.square_magnitude())
    }

    pub fn is_zero_with(self, tolerance: Tolerance<T>) -> bool {
        tolerance.is_zero_square(self.square_magnitude())
    }

    pub fn is_unit(self) -> bool {
        is_unit_square(self.square_magnitude())
    }

    pub fn is_unit_with(self, tolerance: Tolerance<T>) -> bool {
        tolerance.is_unit_square(self.square_magnitude())
    }

    /// Dot product. Exact arithmetic, no tolerance.
    pub fn scalar_product(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross_product(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn added(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    pub fn subtracted(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn subtract_in_place(&mut self, other: Self) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    pub fn multiplied(self, value: T) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value)
    }

    pub fn multiply_in_place(&mut self, value: T) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self.z *= value;
        self
    }

    /// Division by zero is not trapped and yields IEEE infinities or NaN.
    pub fn divided(self, value: T) -> Self {
        Self::new(self.x / value, self.y / value, self.z / value)
    }

    pub fn divide_in_place(&mut self, value: T) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self.z /= value;
        self
    }

    pub fn reverse(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn reversed(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Per-axis comparison within the default epsilon.
    pub fn is_equal_to(self, other: Self) -> bool {
        self.is_equal_to_with(other, Tolerance::default())
    }

    pub fn is_equal_to_with(self, other: Self, tolerance: Tolerance<T>) -> bool {
        tolerance.approx_eq(self.x, other.x)
            && tolerance.approx_eq(self.y, other.y)
            && tolerance.approx_eq(self.z, other.z)
    }

    /// Bit-for-bit coordinate equality, for callers that care about identity
    /// rather than proximity.
    pub fn is_strictly_equal_to(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Explicit width conversion. Narrowing (`f64` to `f32`) loses precision.
    pub fn cast<U: Real>(self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(
            AsPrimitive::<U>::as_(self.x),
            AsPrimitive::<U>::as_(self.y),
            AsPrimitive::<U>::as_(self.z),
        )
    }
}

impl<T: Real> Normalize for Vector3<T> {
    /// Scales to unit length.
    ///
    /// An exact unit vector is left alone, an exact zero vector is left alone
    /// and reported as a failure, and a vector whose squared magnitude is
    /// within `SQUARE_EPS` of zero is forced to exact zero and reported as a
    /// failure.
    fn normalize(&mut self) -> bool {
        let square = self.square_magnitude();

        if square == T::ONE {
            return true;
        }

        if square == T::ZERO {
            return false;
        }

        if is_zero_square(square) {
            trace!(square_magnitude = %square, "sub-epsilon Vector3 forced to zero");
            self.set_to_zero();
            return false;
        }

        let magnitude = square.sqrt();
        self.x /= magnitude;
        self.y /= magnitude;
        self.z /= magnitude;
        true
    }
}

impl<T: Real> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.added(rhs)
    }
}

impl<T: Real> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl<T: Real> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtracted(rhs)
    }
}

impl<T: Real> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(rhs);
    }
}

/// `v * w` is the scalar product.
impl<T: Real> Mul for Vector3<T> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.scalar_product(rhs)
    }
}

impl<T: Real> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.multiplied(rhs)
    }
}

impl Mul<Vector3<f32>> for f32 {
    type Output = Vector3<f32>;

    fn mul(self, rhs: Vector3<f32>) -> Vector3<f32> {
        rhs.multiplied(self)
    }
}

impl Mul<Vector3<f64>> for f64 {
    type Output = Vector3<f64>;

    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        rhs.multiplied(self)
    }
}

impl<T: Real> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.multiply_in_place(rhs);
    }
}

impl<T: Real> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.divided(rhs)
    }
}

impl<T: Real> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.divide_in_place(rhs);
    }
}

impl<T: Real> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

impl<T: Real> AbsDiffEq for Vector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}
