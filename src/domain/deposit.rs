//! Deposit intent and receipt types.

use super::{Amount, Shares};
use crate::error::PoolError;

/// A liquidity provider's deposit request: the amounts they are willing to
/// supply and the minimum amounts they insist are actually used.
///
/// The desired amounts are upper bounds — the pool matches them against the
/// current reserve ratio and may use less of one side. The minimum bounds
/// are the provider's slippage protection: if the ratio moved so far that a
/// used amount falls below its minimum, the deposit fails instead of
/// executing at a worse rate.
///
/// # Examples
///
/// ```
/// use duopool::domain::{Amount, DepositIntent};
///
/// let intent = DepositIntent::new(
///     Amount::new(1_000),
///     Amount::new(250),
///     Amount::new(1_000),
///     Amount::new(250),
/// ).expect("non-zero deposit");
/// assert_eq!(intent.amount0_desired(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositIntent {
    amount0_desired: Amount,
    amount1_desired: Amount,
    amount0_min: Amount,
    amount1_min: Amount,
}

impl DepositIntent {
    /// Creates a new deposit intent.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if both desired amounts are zero.
    pub fn new(
        amount0_desired: Amount,
        amount1_desired: Amount,
        amount0_min: Amount,
        amount1_min: Amount,
    ) -> Result<Self, PoolError> {
        if amount0_desired.is_zero() && amount1_desired.is_zero() {
            return Err(PoolError::InvalidAmount(
                "deposit requires at least one non-zero desired amount",
            ));
        }
        Ok(Self {
            amount0_desired,
            amount1_desired,
            amount0_min,
            amount1_min,
        })
    }

    /// Returns the desired amount of asset0.
    #[must_use]
    pub const fn amount0_desired(&self) -> Amount {
        self.amount0_desired
    }

    /// Returns the desired amount of asset1.
    #[must_use]
    pub const fn amount1_desired(&self) -> Amount {
        self.amount1_desired
    }

    /// Returns the minimum acceptable used amount of asset0.
    #[must_use]
    pub const fn amount0_min(&self) -> Amount {
        self.amount0_min
    }

    /// Returns the minimum acceptable used amount of asset1.
    #[must_use]
    pub const fn amount1_min(&self) -> Amount {
        self.amount1_min
    }
}

/// The outcome of a successful deposit: shares issued to the provider and
/// the amounts of each asset actually pulled into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    shares_issued: Shares,
    amount0_used: Amount,
    amount1_used: Amount,
}

impl DepositReceipt {
    /// Creates a new deposit receipt.
    #[must_use]
    pub const fn new(shares_issued: Shares, amount0_used: Amount, amount1_used: Amount) -> Self {
        Self {
            shares_issued,
            amount0_used,
            amount1_used,
        }
    }

    /// Returns the shares credited to the provider.
    #[must_use]
    pub const fn shares_issued(&self) -> Shares {
        self.shares_issued
    }

    /// Returns the amount of asset0 pulled into the pool.
    #[must_use]
    pub const fn amount0_used(&self) -> Amount {
        self.amount0_used
    }

    /// Returns the amount of asset1 pulled into the pool.
    #[must_use]
    pub const fn amount1_used(&self) -> Amount {
        self.amount1_used
    }
}
