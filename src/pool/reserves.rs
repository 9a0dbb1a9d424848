//! Internal reserve accounting.
//!
//! [`ReserveLedger`] is a small copyable value: the pool's view of how much
//! of each asset backs the outstanding shares. Transitions are expressed as
//! `with_*` methods returning the next state, so the pool can stage a
//! transition, run external transfers, and only then commit. A failed
//! transfer simply drops the staged value.

use crate::domain::{Amount, Shares};
use crate::error::{PoolError, Result};
use crate::math::{full_mul, CheckedArithmetic, U256};

/// Reserve balances and outstanding share supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReserveLedger {
    reserve0: Amount,
    reserve1: Amount,
    total_shares: Shares,
}

impl ReserveLedger {
    /// Creates an empty ledger: no reserves, no shares.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            total_shares: Shares::ZERO,
        }
    }

    /// Returns the reserve of asset0.
    #[must_use]
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns the reserve of asset1.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Returns the outstanding share supply, locked shares included.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` while the pool has never been funded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns the constant product `reserve0 * reserve1` at full width.
    #[must_use]
    pub fn constant_product(&self) -> U256 {
        full_mul(self.reserve0.get(), self.reserve1.get())
    }

    /// Stages a deposit: both reserves grow, supply grows.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if a reserve or the supply would
    /// exceed `u128`.
    pub fn with_deposit(
        &self,
        amount0: Amount,
        amount1: Amount,
        shares_issued: Shares,
    ) -> Result<Self> {
        Ok(Self {
            reserve0: self.reserve0.safe_add(amount0)?,
            reserve1: self.reserve1.safe_add(amount1)?,
            total_shares: self.total_shares.safe_add(shares_issued)?,
        })
    }

    /// Stages a withdrawal: both reserves shrink, supply shrinks.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if the pool was never funded.
    /// - [`PoolError::Underflow`] if a payout exceeds its reserve or the
    ///   burn exceeds the supply. Floored proportional payouts never do.
    pub fn with_withdrawal(
        &self,
        amount0_out: Amount,
        amount1_out: Amount,
        shares_burned: Shares,
    ) -> Result<Self> {
        if self.is_empty() {
            return Err(PoolError::InsufficientLiquidity);
        }
        Ok(Self {
            reserve0: self.reserve0.safe_sub(amount0_out)?,
            reserve1: self.reserve1.safe_sub(amount1_out)?,
            total_shares: self.total_shares.safe_sub(shares_burned)?,
        })
    }

    /// Stages a swap: the input reserve grows, the output reserve shrinks,
    /// supply is untouched.
    ///
    /// The staged state is checked against the invariant: the constant
    /// product must not decrease across a swap. Floored output quotes
    /// guarantee this, so a violation means the caller computed the output
    /// some other way.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Overflow`] / [`PoolError::Underflow`] on reserve
    ///   arithmetic.
    /// - [`PoolError::InsufficientLiquidity`] if the product would shrink
    ///   or the output reserve would be drained to zero.
    pub fn with_swap(
        &self,
        amount_in: Amount,
        amount_out: Amount,
        asset0_is_input: bool,
    ) -> Result<Self> {
        let next = if asset0_is_input {
            Self {
                reserve0: self.reserve0.safe_add(amount_in)?,
                reserve1: self.reserve1.safe_sub(amount_out)?,
                total_shares: self.total_shares,
            }
        } else {
            Self {
                reserve0: self.reserve0.safe_sub(amount_out)?,
                reserve1: self.reserve1.safe_add(amount_in)?,
                total_shares: self.total_shares,
            }
        };
        if next.reserve0.is_zero() || next.reserve1.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        if next.constant_product() < self.constant_product() {
            return Err(PoolError::InsufficientLiquidity);
        }
        Ok(next)
    }
}
