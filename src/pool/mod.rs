//! The pool engine.
//!
//! Layered bottom-up:
//!
//! - [`reserves`]: the copyable reserve/supply state and its staged
//!   transitions.
//! - [`share_accounting`]: share pricing rules and the per-provider
//!   balance book.
//! - [`swap_engine`]: the constant-product quote.
//! - [`controller`]: [`Pool`], the public orchestrator that validates,
//!   transfers, and commits.

pub mod controller;
pub mod reserves;
pub mod share_accounting;
pub mod swap_engine;

#[cfg(test)]
mod proptest_properties;

pub use controller::Pool;
pub use reserves::ReserveLedger;
pub use share_accounting::{ShareAccounting, MINIMUM_LOCKED_SHARES};
pub use swap_engine::quote_swap;
