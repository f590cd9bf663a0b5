//! Pure arithmetic and number-theory operations
//!
//! Every function here is stateless and side-effect free. The two fallible
//! operations (`divide`, `factorial`) return a typed error instead of
//! panicking or leaving the behavior undefined.

use crate::error::{MathError, Result};

/// Add two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

/// Multiply two integers.
pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// Integer division, truncating toward zero.
///
/// Returns [`MathError::DivisionByZero`] when `b` is zero.
pub fn divide(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Check whether `n` is prime by trial division.
///
/// Numbers below 2 are not prime. Only odd candidates up to `sqrt(n)` are
/// tested after the even case is handled.
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i: i32 = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Compute `n!` iteratively as an `i64`.
///
/// `0!` and `1!` are both 1. Returns [`MathError::InvalidArgument`] for
/// negative input.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(MathError::InvalidArgument(format!(
            "factorial is not defined for negative numbers (got {n})"
        )));
    }

    let mut result: i64 = 1;
    for i in 2..=i64::from(n) {
        result *= i;
    }
    Ok(result)
}
