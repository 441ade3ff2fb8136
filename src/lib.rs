//! densemat: dense matrix and vector value types over `f64`
//!
//! This crate provides a resizable row-major [`DenseMatrix`] and a
//! fixed-length [`DenseVector`], with element-wise and matrix arithmetic,
//! block operations (direct sum, transpose), structural predicates, and
//! exact structural equality. A small set of combinatorics helpers
//! (factorial, binomial coefficient, triangular-number test) rounds out the
//! surface.

pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use error::*;
pub use matrix::*;
pub use utils::*;
pub use vector::*;
