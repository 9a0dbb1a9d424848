//! Pool lifecycle events.

use crate::domain::{AccountId, Amount, Shares};

/// A notification recorded after a pool operation commits.
///
/// Events describe committed state transitions only; a failed operation
/// records nothing. The pool buffers them in order and hands them to the
/// caller through [`Pool::drain_events`](crate::pool::Pool::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEvent {
    /// Liquidity entered the pool and shares were issued.
    LiquidityProvided {
        /// Account that supplied the assets.
        provider: AccountId,
        /// Shares credited to the provider.
        shares_issued: Shares,
        /// Asset0 pulled into the pool.
        amount0: Amount,
        /// Asset1 pulled into the pool.
        amount1: Amount,
    },
    /// Shares were burned and liquidity paid back out.
    LiquidityRefunded {
        /// Account that burned the shares.
        provider: AccountId,
        /// Shares debited from the provider.
        shares_burned: Shares,
        /// Asset0 paid out.
        amount0: Amount,
        /// Asset1 paid out.
        amount1: Amount,
    },
    /// One asset was exchanged for the other.
    Swapped {
        /// Account that traded.
        trader: AccountId,
        /// Amount pulled from the trader.
        amount_in: Amount,
        /// Amount pushed to the trader.
        amount_out: Amount,
    },
}
