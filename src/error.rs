//! Unified error types for the duopool library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every failure is detected before any pool state is committed, so a
//! returned error always means "nothing changed".

use thiserror::Error;

/// Unified error enum for all pool operations.
///
/// Arithmetic variants carry a `&'static str` describing the operation that
/// failed; validation variants carry the violated requirement. The enum is
/// `Copy` and `PartialEq` so tests can assert exact variants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A quantity is zero or otherwise nonsensical for the operation.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// An asset identity is not one of the pool's two assets.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A share burn exceeds the provider's balance.
    #[error("insufficient shares: burn exceeds the provider's balance")]
    InsufficientShares,

    /// A swap was quoted against an empty reserve side.
    #[error("insufficient liquidity: both reserves must be positive")]
    InsufficientLiquidity,

    /// The bootstrap deposit is too small to clear the locked minimum.
    #[error(
        "insufficient initial liquidity: bootstrap deposit does not clear the locked minimum shares"
    )]
    InsufficientInitialLiquidity,

    /// A computed amount violates a caller-specified minimum bound.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// The asset ledger rejected a pull or push.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// Arithmetic overflow during calculation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow during calculation.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero during calculation.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;
