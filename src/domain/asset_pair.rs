//! Positional pair of distinct assets.

use super::AssetId;
use crate::error::PoolError;

/// The pool's two tradable assets, in **construction order**.
///
/// Unlike exchange designs that sort pairs canonically, the order here is
/// positional and load-bearing: `amount0`/`reserve0` always refer to
/// [`asset0`](Self::asset0) and `amount1`/`reserve1` to
/// [`asset1`](Self::asset1), exactly as the deployer named them. Sorting
/// would silently swap deposit semantics.
///
/// # Examples
///
/// ```
/// use duopool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair`, preserving argument order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if both assets are identical.
    pub fn new(asset0: AssetId, asset1: AssetId) -> Result<Self, PoolError> {
        if asset0 == asset1 {
            return Err(PoolError::InvalidAsset(
                "pool requires two distinct assets",
            ));
        }
        Ok(Self { asset0, asset1 })
    }

    /// Returns the first asset (index 0).
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.asset0
    }

    /// Returns the second asset (index 1).
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, PoolError> {
        if *asset == self.asset0 {
            Ok(self.asset1)
        } else if *asset == self.asset1 {
            Ok(self.asset0)
        } else {
            Err(PoolError::InvalidAsset("asset is not part of this pool"))
        }
    }

    /// Returns `true` if `asset` is [`asset0`](Self::asset0).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if `asset` is not in the pair.
    pub fn is_asset0(&self, asset: &AssetId) -> Result<bool, PoolError> {
        if *asset == self.asset0 {
            Ok(true)
        } else if *asset == self.asset1 {
            Ok(false)
        } else {
            Err(PoolError::InvalidAsset("asset is not part of this pool"))
        }
    }
}
