//! 256-bit intermediates: floored multiply-divide and integer square root.
//!
//! Reserve products routinely exceed `u128` (two 1e18-scaled balances are
//! enough), so every multiply-then-divide in the engine widens to 256 bits
//! before dividing. All division here floors; rounding in the pool's favor
//! is what keeps the constant product non-decreasing.

use crate::error::{PoolError, Result};

mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Widens two `u128` values into their full 256-bit product.
#[inline]
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Downcasts a `U256` to `u128`.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if the value does not fit.
#[inline]
pub fn to_u128(value: U256, context: &'static str) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(PoolError::Overflow(context));
    }
    Ok(value.as_u128())
}

/// Computes `floor(a * b / denominator)` without intermediate overflow.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let quotient = full_mul(a, b) / U256::from(denominator);
    to_u128(quotient, "mul_div quotient exceeds u128")
}

/// Returns the floor of the square root, via Newton iteration terminating
/// when successive estimates stop decreasing.
///
/// The inputs this crate feeds in are products of two `u128` values, so
/// the `n + 1` in the first estimate cannot overflow.
#[must_use]
pub fn integer_sqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let mut x = n;
    let mut y = (x + U256::one()) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}
