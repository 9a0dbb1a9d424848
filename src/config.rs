//! Pool configuration.

use crate::domain::{AccountId, AssetId, AssetPair};
use crate::error::{PoolError, Result};

/// Configuration for a two-asset pool.
///
/// Carries the pool's own ledger account and the asset pair it trades.
/// Validation happens in [`PoolConfig::new`]; a constructed config is
/// always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pool_account: AccountId,
    pair: AssetPair,
}

impl PoolConfig {
    /// Creates a new pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the two assets are identical.
    pub fn new(pool_account: AccountId, asset0: AssetId, asset1: AssetId) -> Result<Self> {
        let pair = AssetPair::new(asset0, asset1)?;
        Ok(Self { pool_account, pair })
    }

    /// Re-checks internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the pair degenerated. Cannot
    /// happen for configs built through [`PoolConfig::new`].
    pub fn validate(&self) -> Result<()> {
        if self.pair.asset0() == self.pair.asset1() {
            return Err(PoolError::InvalidAsset("pool requires two distinct assets"));
        }
        Ok(())
    }

    /// Returns the pool's ledger account.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }
}
