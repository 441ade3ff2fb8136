//! Matrix module: the dense 2-D value type.

pub mod dense;
pub use dense::DenseMatrix;
