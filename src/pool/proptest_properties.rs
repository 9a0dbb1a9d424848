//! Property checks over the pool engine.
//!
//! These exercise the value-conservation rules across randomized inputs:
//! the constant product never shrinks, share issuance tracks the deposit
//! proportion, a deposit-withdraw round trip never profits, and internal
//! reserves always match the external ledger.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, DepositIntent, SwapIntent, WithdrawIntent};
use crate::ledger::InMemoryLedger;
use crate::math::{full_mul, mul_div};
use crate::pool::swap_engine::quote_swap;
use crate::pool::Pool;
use crate::traits::FromConfig;

const ASSET0: u8 = 10;
const ASSET1: u8 = 11;
const POOL: u8 = 100;
const ALICE: u8 = 1;
const BOB: u8 = 2;

fn asset(byte: u8) -> AssetId {
    AssetId::from_bytes([byte; 32])
}

fn account(byte: u8) -> AccountId {
    AccountId::from_bytes([byte; 32])
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    // Large enough that any bootstrap clears the locked minimum.
    10_000u128..=10_000_000
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000
}

/// Builds a pool bootstrapped at `(r0, r1)` with a matching ledger.
fn funded_pool(r0: u128, r1: u128) -> (Pool, InMemoryLedger) {
    let config = PoolConfig::new(account(POOL), asset(ASSET0), asset(ASSET1))
        .expect("distinct assets");
    let mut pool = Pool::from_config(&config).expect("valid config");
    let mut ledger = InMemoryLedger::new();
    ledger
        .mint(asset(ASSET0), account(ALICE), Amount::new(r0))
        .expect("mint");
    ledger
        .mint(asset(ASSET1), account(ALICE), Amount::new(r1))
        .expect("mint");
    let intent = DepositIntent::new(Amount::new(r0), Amount::new(r1), Amount::ZERO, Amount::ZERO)
        .expect("non-zero deposit");
    pool.deposit(&mut ledger, account(ALICE), &intent)
        .expect("bootstrap clears the locked minimum");
    (pool, ledger)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn swap_never_shrinks_the_product(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let out = quote_swap(Amount::new(r0), Amount::new(r1), Amount::new(amount_in))
            .expect("funded reserves always quote");
        prop_assert!(out.get() < r1);
        prop_assert!(full_mul(r0 + amount_in, r1 - out.get()) >= full_mul(r0, r1));
    }

    #[test]
    fn deposit_issues_proportional_shares(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        d0 in amount_strategy(),
        d1 in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = funded_pool(r0, r1);
        let supply_before = pool.reserves().total_shares();
        ledger.mint(asset(ASSET0), account(BOB), Amount::new(d0)).expect("mint");
        ledger.mint(asset(ASSET1), account(BOB), Amount::new(d1)).expect("mint");
        let intent = DepositIntent::new(
            Amount::new(d0),
            Amount::new(d1),
            Amount::ZERO,
            Amount::ZERO,
        ).expect("non-zero deposit");
        let Ok(receipt) = pool.deposit(&mut ledger, account(BOB), &intent) else {
            // Dust below one share is refused outright.
            return Ok(());
        };
        let by0 = mul_div(receipt.amount0_used().get(), supply_before.get(), r0)
            .expect("fits u128");
        prop_assert!(receipt.shares_issued().get() <= by0);
        prop_assert!(by0 - receipt.shares_issued().get() <= 1);
    }

    #[test]
    fn round_trip_never_profits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        d0 in amount_strategy(),
        d1 in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = funded_pool(r0, r1);
        ledger.mint(asset(ASSET0), account(BOB), Amount::new(d0)).expect("mint");
        ledger.mint(asset(ASSET1), account(BOB), Amount::new(d1)).expect("mint");
        let intent = DepositIntent::new(
            Amount::new(d0),
            Amount::new(d1),
            Amount::ZERO,
            Amount::ZERO,
        ).expect("non-zero deposit");
        let Ok(receipt) = pool.deposit(&mut ledger, account(BOB), &intent) else {
            return Ok(());
        };
        let refund = WithdrawIntent::new(receipt.shares_issued(), Amount::ZERO, Amount::ZERO)
            .expect("non-zero burn");
        let payout = pool
            .withdraw(&mut ledger, account(BOB), &refund)
            .expect("own shares always redeem");
        prop_assert!(payout.amount0_out() <= receipt.amount0_used());
        prop_assert!(payout.amount1_out() <= receipt.amount1_used());
    }

    #[test]
    fn reserves_stay_fully_backed(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in amount_strategy(),
        burn in 1u128..=1_000,
    ) {
        let (mut pool, mut ledger) = funded_pool(r0, r1);
        ledger.mint(asset(ASSET0), account(BOB), Amount::new(amount_in)).expect("mint");
        let swap = SwapIntent::new(asset(ASSET0), Amount::new(amount_in), Amount::ZERO)
            .expect("non-zero input");
        pool.swap(&mut ledger, account(BOB), &swap).expect("quoted swap executes");
        prop_assert!(pool.is_fully_backed(&ledger));
        let refund = WithdrawIntent::new(
            crate::domain::Shares::new(burn),
            Amount::ZERO,
            Amount::ZERO,
        ).expect("non-zero burn");
        pool.withdraw(&mut ledger, account(ALICE), &refund)
            .expect("bootstrap provider holds enough shares");
        prop_assert!(pool.is_fully_backed(&ledger));
    }
}
