//! Withdrawal intent and receipt types.

use super::{Amount, Shares};
use crate::error::PoolError;

/// A liquidity provider's withdrawal request: the shares to burn and the
/// minimum payout of each asset they will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawIntent {
    shares_to_burn: Shares,
    amount0_min: Amount,
    amount1_min: Amount,
}

impl WithdrawIntent {
    /// Creates a new withdrawal intent.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `shares_to_burn` is zero.
    pub fn new(
        shares_to_burn: Shares,
        amount0_min: Amount,
        amount1_min: Amount,
    ) -> Result<Self, PoolError> {
        if shares_to_burn.is_zero() {
            return Err(PoolError::InvalidAmount(
                "withdrawal requires a non-zero share burn",
            ));
        }
        Ok(Self {
            shares_to_burn,
            amount0_min,
            amount1_min,
        })
    }

    /// Returns the shares to burn.
    #[must_use]
    pub const fn shares_to_burn(&self) -> Shares {
        self.shares_to_burn
    }

    /// Returns the minimum acceptable payout of asset0.
    #[must_use]
    pub const fn amount0_min(&self) -> Amount {
        self.amount0_min
    }

    /// Returns the minimum acceptable payout of asset1.
    #[must_use]
    pub const fn amount1_min(&self) -> Amount {
        self.amount1_min
    }
}

/// The outcome of a successful withdrawal: the proportional payout of each
/// asset, floored so rounding never favors the withdrawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawReceipt {
    amount0_out: Amount,
    amount1_out: Amount,
}

impl WithdrawReceipt {
    /// Creates a new withdrawal receipt.
    #[must_use]
    pub const fn new(amount0_out: Amount, amount1_out: Amount) -> Self {
        Self {
            amount0_out,
            amount1_out,
        }
    }

    /// Returns the payout of asset0.
    #[must_use]
    pub const fn amount0_out(&self) -> Amount {
        self.amount0_out
    }

    /// Returns the payout of asset1.
    #[must_use]
    pub const fn amount1_out(&self) -> Amount {
        self.amount1_out
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_burn_rejected() {
        let result = WithdrawIntent::new(Shares::ZERO, Amount::ZERO, Amount::ZERO);
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn accessors() {
        let Ok(intent) =
            WithdrawIntent::new(Shares::new(250), Amount::new(500), Amount::new(125))
        else {
            panic!("expected Ok");
        };
        assert_eq!(intent.shares_to_burn(), Shares::new(250));
        assert_eq!(intent.amount0_min(), Amount::new(500));
        assert_eq!(intent.amount1_min(), Amount::new(125));
    }

    #[test]
    fn receipt_accessors() {
        let receipt = WithdrawReceipt::new(Amount::new(500), Amount::new(125));
        assert_eq!(receipt.amount0_out(), Amount::new(500));
        assert_eq!(receipt.amount1_out(), Amount::new(125));
    }
}
