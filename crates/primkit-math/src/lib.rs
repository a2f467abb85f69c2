//! primkit primitives: vectors, quaternions and triangles with a shared
//! tolerance policy.

pub mod interop;
pub mod quaternion;
pub mod triangle;
pub mod vector2;
pub mod vector3;

pub use glam;
pub use primkit_core::{MathError, Normalize, Real, Result, Tolerance};
pub use quaternion::Quaternion;
pub use triangle::Triangle3;
pub use vector2::Vector2;
pub use vector3::Vector3;
