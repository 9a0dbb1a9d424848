//! Behavioral seams of the pool library.
//!
//! [`AssetLedger`] is the custody boundary: the pool computes, the ledger
//! moves assets. [`FromConfig`] is the uniform construction entry point.

mod asset_ledger;
mod from_config;

pub use asset_ledger::AssetLedger;
pub use from_config::FromConfig;
