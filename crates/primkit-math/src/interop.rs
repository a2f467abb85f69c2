//! Same-width conversions to and from `glam`.
//!
//! These are lossless. Changing width goes through the explicit `cast`
//! methods instead.

use glam::{DQuat, DVec2, DVec3, Quat, Vec2, Vec3};

use crate::{Quaternion, Vector2, Vector3};

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2<f64> {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for DVec2 {
    fn from(v: Vector2<f64>) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3<f64> {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for DVec3 {
    fn from(v: Vector3<f64>) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

// glam keeps the same x, y, z, w order.
impl From<Quat> for Quaternion<f32> {
    fn from(q: Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion<f32>> for Quat {
    fn from(q: Quaternion<f32>) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<DQuat> for Quaternion<f64> {
    fn from(q: DQuat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion<f64>> for DQuat {
    fn from(q: Quaternion<f64>) -> Self {
        DQuat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
