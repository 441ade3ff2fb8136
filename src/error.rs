use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("operands must have identical dimensions: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
    #[error("inner dimensions do not agree: {0}x{1} times {2}x{3}")]
    InnerDimensions(usize, usize, usize, usize),
    #[error("vectors must be of the same length: {0} vs {1}")]
    LengthMismatch(usize, usize),
    #[error("missing operand: {0}")]
    MissingOperand(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("index {index} out of range ({bound} available)")]
    IndexOutOfRange { index: usize, bound: usize },
}
