//! Quaternion with scalar part `w` and vector part `(x, y, z)`.
//!
//! A quaternion only describes a rotation when it has unit length. Nothing
//! here enforces that: intermediate values may have any magnitude.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use approx::AbsDiffEq;
use num_traits::AsPrimitive;
use primkit_core::{is_unit_square, is_zero_square, Normalize, Real, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Real> Quaternion<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    pub fn copy_from(&mut self, other: Self) {
        *self = other;
    }

    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Negate the vector part, keep the scalar part.
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn conjugated(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn square_module(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean norm over all four components.
    pub fn module(self) -> T {
        self.square_module().sqrt()
    }

    pub fn is_zero(self) -> bool {
        is_zero_square(self.square_module())
    }

    pub fn is_unit(self) -> bool {
        is_unit_square(self.square_module())
    }

    pub fn is_equal_to(self, other: Self) -> bool {
        self.is_equal_to_with(other, Tolerance::default())
    }

    pub fn is_equal_to_with(self, other: Self, tolerance: Tolerance<T>) -> bool {
        tolerance.approx_eq(self.x, other.x)
            && tolerance.approx_eq(self.y, other.y)
            && tolerance.approx_eq(self.z, other.z)
            && tolerance.approx_eq(self.w, other.w)
    }

    pub fn is_strictly_equal_to(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    /// Quaternion product `self * other`. Not commutative.
    pub fn product(self, other: Self) -> Self {
        hamilton(self, other)
    }

    /// `self = self * other`
    pub fn multiply_in_place(&mut self, other: Self) -> &mut Self {
        *self = hamilton(*self, other);
        self
    }

    /// `self = first * second`, reusing the receiver's storage.
    pub fn set_product_of(&mut self, first: Self, second: Self) -> &mut Self {
        *self = hamilton(first, second);
        self
    }

    pub fn scaled(self, value: T) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value, self.w * value)
    }

    pub fn scale_in_place(&mut self, value: T) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self.z *= value;
        self.w *= value;
        self
    }

    pub fn divided(self, value: T) -> Self {
        Self::new(self.x / value, self.y / value, self.z / value, self.w / value)
    }

    pub fn divide_in_place(&mut self, value: T) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self.z /= value;
        self.w /= value;
        self
    }

    /// Explicit width conversion, lossy when narrowing.
    pub fn cast<U: Real>(self) -> Quaternion<U>
    where
        T: AsPrimitive<U>,
    {
        Quaternion::new(
            AsPrimitive::<U>::as_(self.x),
            AsPrimitive::<U>::as_(self.y),
            AsPrimitive::<U>::as_(self.z),
            AsPrimitive::<U>::as_(self.w),
        )
    }
}

// Row order and operand order are fixed; i*j = k, j*k = i, i*k = j.
fn hamilton<T: Real>(a: Quaternion<T>, b: Quaternion<T>) -> Quaternion<T> {
    Quaternion::new(
        a.y * b.z - a.z * b.y + a.w * b.x + a.x * b.w,
        a.x * b.z - a.z * b.x + a.w * b.y + a.y * b.w,
        a.x * b.y - a.y * b.x + a.w * b.z + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

impl<T: Real> Normalize for Quaternion<T> {
    /// A module below `EPS` forces the quaternion to exact zero.
    fn normalize(&mut self) -> bool {
        let module = self.module();

        if module < T::EPS {
            if module != T::ZERO {
                trace!(module = %module, "sub-epsilon Quaternion forced to zero");
            }
            self.set_to_zero();
            return false;
        }

        self.x /= module;
        self.y /= module;
        self.z /= module;
        self.w /= module;
        true
    }
}

impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        hamilton(self, rhs)
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl Mul<Quaternion<f32>> for f32 {
    type Output = Quaternion<f32>;

    fn mul(self, rhs: Quaternion<f32>) -> Quaternion<f32> {
        rhs.scaled(self)
    }
}

impl Mul<Quaternion<f64>> for f64 {
    type Output = Quaternion<f64>;

    fn mul(self, rhs: Quaternion<f64>) -> Quaternion<f64> {
        rhs.scaled(self)
    }
}

impl<T: Real> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.divided(rhs)
    }
}

/// `-q` is the conjugate, not the componentwise negation.
impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.conjugated()
    }
}

impl<T: Real> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w: {}, x: {}, y: {}, z: {})",
            self.w, self.x, self.y, self.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const I: Quaternion<f64> = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    const J: Quaternion<f64> = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    const K: Quaternion<f64> = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    const MINUS_ONE: Quaternion<f64> = Quaternion::new(0.0, 0.0, 0.0, -1.0);

    // Row-by-row reference for the product, kept independent of `hamilton`.
    fn expected_product(a: Quaternion<f64>, b: Quaternion<f64>) -> Quaternion<f64> {
        Quaternion::new(
            a.y * b.z - a.z * b.y + a.w * b.x + a.x * b.w,
            a.x * b.z - a.z * b.x + a.w * b.y + a.y * b.w,
            a.x * b.y - a.y * b.x + a.w * b.z + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    #[test]
    fn test_basis_products() {
        assert_eq!(I * J, K);
        assert_eq!(J * K, I);
        assert_eq!(I * K, J);
        assert_eq!(K * I, J.conjugated());
        assert_eq!(J * I, K.conjugated());
        assert_eq!(I * I, MINUS_ONE);
        assert_eq!(I * J * K, MINUS_ONE);
    }

    #[test]
    fn test_product_rows() {
        let a = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-0.5_f64, 0.25, 2.0, -1.0);
        assert_eq!(a * b, Quaternion::new(0.25, 2.5, 6.25, -10.0));
        assert!((a * b).is_strictly_equal_to(expected_product(a, b)));
        assert!((b * a).is_strictly_equal_to(expected_product(b, a)));

        let c = Quaternion::new(0.3_f64, -0.1, 0.0, 0.95);
        let mut at = c;
        at.multiply_in_place(a);
        assert!(at.is_strictly_equal_to(expected_product(c, a)));
        let mut set = Quaternion::<f64>::ZERO;
        set.set_product_of(a, c);
        assert!(set.is_strictly_equal_to(expected_product(a, c)));
    }

    #[test]
    fn test_identity_is_neutral() {
        let q = Quaternion::new(0.3_f64, -1.2, 2.0, 0.7);
        assert_eq!(q * Quaternion::<f64>::IDENTITY, q);
        assert_eq!(Quaternion::<f64>::IDENTITY * q, q);
    }

    #[test]
    fn test_product_forms_agree() {
        let a = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-0.5_f64, 0.25, 2.0, -1.0);

        let pure = a.product(b);
        let mut at = a;
        at.multiply_in_place(b);
        let mut set = Quaternion::<f64>::ZERO;
        set.set_product_of(a, b);

        assert!(pure.is_strictly_equal_to(a * b));
        assert!(pure.is_strictly_equal_to(at));
        assert!(pure.is_strictly_equal_to(set));
    }

    #[test]
    fn test_product_is_not_commutative() {
        let a = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-0.5_f64, 0.25, 2.0, -1.0);
        assert!(!(a * b).is_equal_to(b * a));
    }

    #[test]
    fn test_conjugate_round_trip() {
        let q = Quaternion::new(0.1_f64, -0.2, 0.3, 0.9);
        assert!(q.conjugated().conjugated().is_strictly_equal_to(q));

        let mut c = q;
        c.conjugate();
        assert_eq!(c, Quaternion::new(-0.1, 0.2, -0.3, 0.9));
        assert_eq!(c, q.conjugated());
    }

    #[test]
    fn test_negation_is_conjugation() {
        let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        assert_eq!(-q, q.conjugated());
        assert_eq!(-q, Quaternion::new(-1.0, -2.0, -3.0, 4.0));
        assert!((-(-q)).is_strictly_equal_to(q));
    }

    #[test]
    fn test_conjugate_product_is_square_module() {
        let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
        assert_eq!(q * q.conjugated(), Quaternion::new(0.0, 0.0, 0.0, 30.0));
        assert_eq!(q.square_module(), 30.0);
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(0.0_f64, 3.0, 0.0, 4.0);
        assert!(q.normalize());
        assert_abs_diff_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8));
        assert!(q.is_unit());
        assert_abs_diff_eq!(q.module(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_degenerate() {
        let mut zero = Quaternion::<f64>::ZERO;
        assert!(!zero.normalize());
        assert!(zero.is_strictly_equal_to(Quaternion::ZERO));

        let mut tiny = Quaternion::new(1e-9_f64, 0.0, -1e-9, 1e-9);
        assert!(!tiny.normalize());
        assert!(tiny.is_strictly_equal_to(Quaternion::ZERO));
        assert!(tiny.try_normalized().is_err());
    }

    #[test]
    fn test_normalize_threshold_is_strict() {
        let mut at_eps = Quaternion::new(0.0, 0.0, 0.0, f64::EPS);
        assert_eq!(at_eps.module(), f64::EPS);
        assert!(at_eps.normalize());
        assert_eq!(at_eps, Quaternion::IDENTITY);

        let mut below = Quaternion::new(0.0, 0.0, 0.0, 0.5 * f64::EPS);
        assert!(!below.normalize());
        assert!(below.is_strictly_equal_to(Quaternion::ZERO));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let q = Quaternion::new(1.0_f64, -2.0, 0.5, 4.0);
        assert_eq!(q * 2.0, Quaternion::new(2.0, -4.0, 1.0, 8.0));
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!(q / 2.0, Quaternion::new(0.5, -1.0, 0.25, 2.0));

        let mut m = q;
        m.scale_in_place(4.0).divide_in_place(2.0);
        assert_eq!(m, q.scaled(2.0));
        assert_eq!(q.divided(0.5), q * 2.0);
    }

    #[test]
    fn test_set_and_zero() {
        let mut q = Quaternion::<f32>::default();
        q.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        let mut copy = Quaternion::ZERO;
        copy.copy_from(q);
        assert!(copy.is_strictly_equal_to(q));
        q.set_to_zero();
        assert_eq!(copy, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert!(q.is_zero());
        assert_eq!(q, Quaternion::ZERO);
    }

    #[test]
    fn test_cast() {
        let q = Quaternion::new(0.5_f64, 0.5, 0.5, 0.5).cast::<f32>();
        assert_eq!(q, Quaternion::new(0.5_f32, 0.5, 0.5, 0.5));
        assert!(q.is_unit());
    }

    #[test]
    fn test_display() {
        let q = Quaternion::new(1.0_f64, 2.0, 3.0, 0.5);
        assert_eq!(q.to_string(), "Quaternion(w: 0.5, x: 1, y: 2, z: 3)");
    }
}
