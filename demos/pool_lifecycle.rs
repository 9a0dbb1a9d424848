//! Full pool lifecycle walkthrough: bootstrap, follow-on deposit, swap,
//! and withdrawal, with the event log printed at the end.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example pool_lifecycle
//! ```

use duopool::prelude::*;

const WAD: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let asset0 = AssetId::from_bytes([1u8; 32]);
    let asset1 = AssetId::from_bytes([2u8; 32]);
    let pool_account = AccountId::from_bytes([0xAA; 32]);
    let alice = AccountId::from_bytes([0x01; 32]);
    let bob = AccountId::from_bytes([0x02; 32]);
    let carol = AccountId::from_bytes([0x03; 32]);

    println!("=== duopool lifecycle ===\n");

    // 1. Create the pool from a validated config.
    let config = PoolConfig::new(pool_account, asset0, asset1)?;
    let mut pool = Pool::from_config(&config)?;
    println!("pool created for pair ({}, {})", pool.asset0(), pool.asset1());

    // 2. Seed the participants on the external ledger.
    let mut ledger = InMemoryLedger::new();
    ledger.mint(asset0, alice, Amount::new(1_000 * WAD))?;
    ledger.mint(asset1, alice, Amount::new(250 * WAD))?;
    ledger.mint(asset0, bob, Amount::new(500 * WAD))?;
    ledger.mint(asset1, bob, Amount::new(200 * WAD))?;
    ledger.mint(asset0, carol, Amount::new(1_000 * WAD))?;

    // 3. Alice bootstraps the pool: shares priced at the geometric mean,
    //    with the first 1_000 locked forever.
    let intent = DepositIntent::new(
        Amount::new(1_000 * WAD),
        Amount::new(250 * WAD),
        Amount::ZERO,
        Amount::ZERO,
    )?;
    let receipt = pool.deposit(&mut ledger, alice, &intent)?;
    println!(
        "\nalice bootstraps: {} shares issued ({} locked)",
        receipt.shares_issued(),
        pool.locked_shares()
    );

    // 4. Bob joins. His 200e18 of asset1 exceeds the 1000:250 ratio, so
    //    only 125e18 is pulled; the rest stays in his account.
    let intent = DepositIntent::new(
        Amount::new(500 * WAD),
        Amount::new(200 * WAD),
        Amount::new(500 * WAD),
        Amount::new(100 * WAD),
    )?;
    let receipt = pool.deposit(&mut ledger, bob, &intent)?;
    println!(
        "bob deposits: {} shares for ({}, {})",
        receipt.shares_issued(),
        receipt.amount0_used(),
        receipt.amount1_used()
    );

    // 5. Carol swaps asset0 for asset1 at the constant-product price.
    let quoted = pool.quote(asset0, Amount::new(1_000 * WAD))?;
    println!("carol's quote for 1000e18 of asset0: {quoted}");
    let intent = SwapIntent::new(asset0, Amount::new(1_000 * WAD), quoted)?;
    let receipt = pool.swap(&mut ledger, carol, &intent)?;
    println!(
        "carol swaps: {} in, {} out; reserves now ({}, {})",
        receipt.amount_in(),
        receipt.amount_out(),
        pool.reserves().reserve0(),
        pool.reserves().reserve1()
    );

    // 6. Bob exits with his slice of the post-swap reserves.
    let intent = WithdrawIntent::new(
        pool.share_balance_of(bob),
        Amount::ZERO,
        Amount::ZERO,
    )?;
    let receipt = pool.withdraw(&mut ledger, bob, &intent)?;
    println!(
        "bob withdraws: ({}, {}) for his shares",
        receipt.amount0_out(),
        receipt.amount1_out()
    );

    // 7. Every committed operation left an event behind.
    println!("\nevent log:");
    for event in pool.drain_events() {
        println!("  {event:?}");
    }

    println!(
        "\nbacking invariant holds: {}",
        pool.is_fully_backed(&ledger)
    );
    Ok(())
}
