//! In-memory asset ledger.
//!
//! A reference [`AssetLedger`] implementation backed by a hash map. It is
//! what the integration tests and the example run against; a production
//! deployment supplies its own custody-backed implementation.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{PoolError, Result};
use crate::traits::AssetLedger;

/// Hash-map-backed ledger of per-account asset balances.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), u128>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// Test and demo setup only; real ledgers have issuance policies.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the account balance would exceed
    /// `u128`.
    pub fn mint(&mut self, asset: AssetId, account: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balances.entry((asset, account)).or_insert(0);
        *balance = balance
            .checked_add(amount.get())
            .ok_or(PoolError::Overflow("ledger balance overflowed"))?;
        Ok(())
    }

    fn transfer(&mut self, asset: AssetId, from: AccountId, to: AccountId, amount: Amount) -> bool {
        if from == to {
            return true;
        }
        let Some(source) = self.balances.get(&(asset, from)).copied() else {
            debug!(%asset, %from, "transfer refused: unknown source account");
            return false;
        };
        let Some(remaining) = source.checked_sub(amount.get()) else {
            debug!(%asset, %from, %amount, "transfer refused: insufficient balance");
            return false;
        };
        let destination = self.balances.entry((asset, to)).or_insert(0);
        let Some(credited) = destination.checked_add(amount.get()) else {
            debug!(%asset, %to, %amount, "transfer refused: destination overflow");
            return false;
        };
        *destination = credited;
        self.balances.insert((asset, from), remaining);
        true
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> bool {
        self.transfer(asset, from, to, amount)
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> bool {
        self.transfer(asset, from, to, amount)
    }

    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        Amount::new(*self.balances.get(&(asset, account)).unwrap_or(&0))
    }
}
