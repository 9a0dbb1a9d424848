//! # Duopool
//!
//! A two-asset constant-product liquidity pool: deposit a pair of assets
//! to receive proportional shares, redeem shares for the underlying
//! reserves, and swap one asset for the other at the price implied by
//! `reserve0 * reserve1 = k`.
//!
//! The engine is integer-only. Every division floors in the pool's favor,
//! so the constant product never decreases across a swap and a
//! deposit-withdraw round trip never profits. Intermediate products are
//! computed at 256-bit width, so 18-decimal-scaled reserves never overflow.
//!
//! Asset custody is external: the pool drives an [`AssetLedger`] collaborator
//! for transfers and commits its own state only after both legs of an
//! operation settle. A failed operation has no observable effect.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! duopool = "0.1"
//! ```
//!
//! ## Bootstrap a pool, then swap against it
//!
//! ```rust
//! use duopool::prelude::*;
//!
//! let asset0 = AssetId::from_bytes([1u8; 32]);
//! let asset1 = AssetId::from_bytes([2u8; 32]);
//! let pool_account = AccountId::from_bytes([0xAA; 32]);
//! let alice = AccountId::from_bytes([0x01; 32]);
//! let bob = AccountId::from_bytes([0x02; 32]);
//!
//! // 1. Configure and create the pool
//! let config = PoolConfig::new(pool_account, asset0, asset1).expect("distinct assets");
//! let mut pool = Pool::from_config(&config).expect("valid config");
//!
//! // 2. Give the providers something to deposit
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(asset0, alice, Amount::new(1_000_000)).expect("mint");
//! ledger.mint(asset1, alice, Amount::new(250_000)).expect("mint");
//! ledger.mint(asset0, bob, Amount::new(1_000_000)).expect("mint");
//!
//! // 3. First deposit: sqrt(1_000_000 * 250_000) = 500_000 shares,
//! //    1_000 of which are locked forever.
//! let intent = DepositIntent::new(
//!     Amount::new(1_000_000),
//!     Amount::new(250_000),
//!     Amount::ZERO,
//!     Amount::ZERO,
//! ).expect("non-zero deposit");
//! let receipt = pool.deposit(&mut ledger, alice, &intent).expect("bootstrap");
//! assert_eq!(receipt.shares_issued(), Shares::new(499_000));
//!
//! // 4. Swap: selling 1_000_000 of asset0 doubles that reserve and
//! //    halves the other, paying out 125_000 of asset1.
//! let swap = SwapIntent::new(asset0, Amount::new(1_000_000), Amount::new(125_000))
//!     .expect("non-zero input");
//! let out = pool.swap(&mut ledger, bob, &swap).expect("within slippage");
//! assert_eq!(out.amount_out(), Amount::new(125_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  forms DepositIntent / WithdrawIntent / SwapIntent
//! └──────┬───────┘
//!        │ deposit / withdraw / swap
//!        ▼
//! ┌──────────────┐      pull / push      ┌──────────────┐
//! │     Pool      │ ───────────────────▶ │  AssetLedger  │
//! │ (controller)  │ ◀─────────────────── │  (external)   │
//! └──────┬───────┘      settled?         └──────────────┘
//!        │ stage, then commit
//!        ▼
//! ┌──────────────────────────────────────┐
//! │ ReserveLedger · ShareAccounting ·    │
//! │ swap_engine (constant-product quote) │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), intents and receipts |
//! | [`traits`] | Core abstractions: [`AssetLedger`](traits::AssetLedger), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), the validated pool blueprint |
//! | [`pool`]   | The engine: [`Pool`](pool::Pool), reserve and share accounting, swap quoting |
//! | [`math`]   | 256-bit `mul_div` and integer square root, checked arithmetic |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger), a reference asset ledger |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) notifications for observers |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
