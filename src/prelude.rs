//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use duopool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositIntent, DepositReceipt, Shares, SwapIntent,
    SwapReceipt, WithdrawIntent, WithdrawReceipt,
};

// Re-export core traits
pub use crate::traits::{AssetLedger, FromConfig};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export error types
pub use crate::error::{PoolError, Result};

// Re-export the pool engine
pub use crate::pool::{Pool, ReserveLedger, MINIMUM_LOCKED_SHARES};

// Re-export events and the reference ledger
pub use crate::events::PoolEvent;
pub use crate::ledger::InMemoryLedger;
