//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the core value types that model the pool domain:
//! assets, accounts, amounts, shares, and the intent/receipt pairs for the
//! three pool operations. All types use newtypes with validated
//! constructors to enforce invariants.

mod account;
mod amount;
mod asset_id;
mod asset_pair;
mod deposit;
mod shares;
mod swap;
mod withdrawal;

pub use account::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use deposit::{DepositIntent, DepositReceipt};
pub use shares::Shares;
pub use swap::{SwapIntent, SwapReceipt};
pub use withdrawal::{WithdrawIntent, WithdrawReceipt};
