//! Factorials, binomial coefficients, and the triangular-number test.
//!
//! Stateless free functions with no dependency on the matrix or vector
//! types. The factorial extends below zero as the running product
//! `(-1)(-2)...(x)` rather than the (undefined) mathematical factorial of a
//! negative; both the `f64` and big-integer forms follow that convention.

use num_bigint::BigInt;

use crate::error::MatError;

/// Returns true when `x` is a triangular number (1, 3, 6, 10, 15, ...).
///
/// Uses the inverse formula `n = (sqrt(8x + 1) - 1) / 2` and accepts `n`
/// when it sits within a tiny epsilon of its floor.
pub fn is_triangular(x: f64) -> bool {
    let n = ((8.0 * x + 1.0).sqrt() - 1.0) / 2.0;
    (n.floor() - n).abs() < f64::EPSILON * 100.0
}

/// Fixed-width factorial as an `f64`.
///
/// For `x >= 0` this is the ordinary factorial (`0! == 1`). For negative
/// `x` it is the product of every integer from `-1` down to `x`. Large
/// inputs lose precision in the `f64` mantissa; use [`factorial_big`] when
/// exactness matters.
pub fn factorial(x: i32) -> f64 {
    if x >= 0 {
        let mut result = 1.0;
        for i in 2..=x {
            result *= f64::from(i);
        }
        result
    } else {
        let mut result = -1.0;
        let mut i = -2;
        while i >= x {
            result *= f64::from(i);
            i -= 1;
        }
        result
    }
}

/// Arbitrary-precision factorial, same negative-input convention as
/// [`factorial`].
pub fn factorial_big(x: i64) -> BigInt {
    if x >= 0 {
        let mut result = BigInt::from(1);
        for i in 2..=x {
            result *= i;
        }
        result
    } else {
        let mut result = BigInt::from(-1);
        let mut i = -2;
        while i >= x {
            result *= i;
            i -= 1;
        }
        result
    }
}

/// Binomial coefficient `C(n, k) = n! / (k! (n - k)!)` for `n >= k >= 0`.
///
/// Computed through the fixed-width factorial, so it inherits the `f64`
/// precision loss for large `n`.
pub fn binomial_coefficient(n: i32, k: i32) -> Result<f64, MatError> {
    if n >= k && k >= 0 {
        Ok(factorial(n) / (factorial(k) * factorial(n - k)))
    } else {
        Err(MatError::InvalidArgument("n must be >= k and k must be >= 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_of_zero_and_one() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
    }

    #[test]
    fn factorial_negative_convention() {
        // (-1)(-2)(-3)(-4) = 24
        assert_eq!(factorial(-4), 24.0);
        assert_eq!(factorial(-1), -1.0);
        assert_eq!(factorial(-3), -6.0);
    }

    #[test]
    fn factorial_big_matches_fixed_width_in_range() {
        assert_eq!(factorial_big(10), BigInt::from(3_628_800));
        assert_eq!(factorial_big(-4), BigInt::from(24));
        assert_eq!(factorial_big(0), BigInt::from(1));
    }

    #[test]
    fn factorial_big_goes_past_f64_exactness() {
        // 25! is larger than 2^53 and must still be exact.
        let expected: BigInt = "15511210043330985984000000".parse().unwrap();
        assert_eq!(factorial_big(25), expected);
    }
}
