use crate::error::Result;

/// Scaling a value to unit length, shared by vectors and quaternions.
///
/// `normalize` never leaves a partially divided value behind: on failure the
/// value is either untouched (already exact zero) or forced to exact zero.
pub trait Normalize: Sized + Copy {
    /// Normalize in place; `false` if the value was (or became) zero.
    fn normalize(&mut self) -> bool;

    /// Non-mutating [`normalize`](Normalize::normalize).
    fn normalized(self) -> Self {
        let mut result = self;
        result.normalize();
        result
    }

    /// Checked variant returning [`MathError::ZeroMagnitude`](crate::MathError::ZeroMagnitude)
    /// where `normalize` would report failure.
    fn try_normalized(self) -> Result<Self> {
        let mut result = self;
        if result.normalize() {
            Ok(result)
        } else {
            Err(crate::MathError::ZeroMagnitude)
        }
    }
}
