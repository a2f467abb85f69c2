use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("Zero magnitude: value is too small to normalize")]
    ZeroMagnitude,

    #[error("Degenerate triangle: corners are coincident or collinear")]
    DegenerateTriangle,

    #[error("Tolerance violation: {0}")]
    Tolerance(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
