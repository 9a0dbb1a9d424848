//! Swap intent and receipt types.

use super::{Amount, AssetId};
use crate::error::PoolError;

/// A trader's swap request: the asset and amount they are selling, and the
/// minimum output they will accept.
///
/// `min_amount_out` is the trader's slippage bound — if reserves moved
/// between intent formation and execution, a quote below the bound fails
/// the swap instead of executing at a worse price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIntent {
    asset_in: AssetId,
    amount_in: Amount,
    min_amount_out: Amount,
}

impl SwapIntent {
    /// Creates a new swap intent.
    ///
    /// Whether `asset_in` is actually one of the pool's assets is checked
    /// at execution time, against the pool's pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `amount_in` is zero.
    pub fn new(
        asset_in: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<Self, PoolError> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("swap input must be non-zero"));
        }
        Ok(Self {
            asset_in,
            amount_in,
            min_amount_out,
        })
    }

    /// Returns the asset being sold.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output amount.
    #[must_use]
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }
}

/// The outcome of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReceipt {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapReceipt {
    /// Creates a new swap receipt.
    #[must_use]
    pub const fn new(amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Returns the amount pulled from the trader.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount pushed to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}
