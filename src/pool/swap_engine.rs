//! Constant-product swap quoting.

use crate::domain::Amount;
use crate::error::{PoolError, Result};
use crate::math::{mul_div, CheckedArithmetic};

/// Quotes the output of a fee-free constant-product swap.
///
/// The quote is `floor(amount_in * reserve_out / (reserve_in + amount_in))`,
/// which is `reserve_out - ceil(k / (reserve_in + amount_in))` for
/// `k = reserve_in * reserve_out`. Flooring the quote leaves any division
/// remainder in the pool, so the product after the swap is never below the
/// product before it.
///
/// # Errors
///
/// - [`PoolError::InsufficientLiquidity`] if either reserve is empty.
/// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
/// - [`PoolError::Overflow`] if the grown input reserve exceeds `u128`.
pub fn quote_swap(reserve_in: Amount, reserve_out: Amount, amount_in: Amount) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }
    if amount_in.is_zero() {
        return Err(PoolError::InvalidAmount("swap input must be non-zero"));
    }
    let reserve_in_after = reserve_in.safe_add(amount_in)?;
    let amount_out = mul_div(amount_in.get(), reserve_out.get(), reserve_in_after.get())?;
    Ok(Amount::new(amount_out))
}
