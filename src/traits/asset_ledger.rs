//! The asset transfer seam between the pool and asset custody.

use crate::domain::{AccountId, Amount, AssetId};

/// Moves assets between accounts on behalf of the pool.
///
/// The pool never holds balances itself; it instructs a ledger to pull
/// assets from counterparties and push payouts back out, and trusts the
/// boolean result. A `false` return is an ordinary refusal (insufficient
/// balance, frozen account) and the pool surfaces it as
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
/// without committing any state.
///
/// Implementations must be synchronous and must not call back into the
/// pool. Reentrancy is the ledger's problem to prevent, not the pool's to
/// survive.
pub trait AssetLedger {
    /// Pulls `amount` of `asset` from `from` into `to`.
    ///
    /// Returns `true` if the transfer settled.
    fn transfer_in(&mut self, asset: AssetId, from: AccountId, to: AccountId, amount: Amount)
        -> bool;

    /// Pushes `amount` of `asset` from `from` out to `to`.
    ///
    /// Returns `true` if the transfer settled.
    fn transfer_out(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> bool;

    /// Returns the balance of `asset` held by `account`.
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount;
}
