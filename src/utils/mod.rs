//! Scalar utilities: combinatorics helpers independent of the matrix types.

pub mod combinatorics;
pub use combinatorics::{binomial_coefficient, factorial, factorial_big, is_triangular};
