//! Share issuance, redemption, and per-provider balances.
//!
//! The pure pricing rules live as free functions so they can be tested
//! against exact vectors; [`ShareAccounting`] holds the mutable balance
//! book and exposes stage/commit halves so the pool can compute a new
//! balance before running transfers and write it only after they settle.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, Shares};
use crate::error::{PoolError, Result};
use crate::math::{full_mul, integer_sqrt, mul_div, to_u128, CheckedArithmetic};

/// Shares permanently locked at bootstrap.
///
/// The first deposit forfeits this many shares to no one. With the lock in
/// place the supply can never return to zero, so share pricing stays
/// anchored and the bootstrap branch runs exactly once in a pool's life.
pub const MINIMUM_LOCKED_SHARES: u128 = 1_000;

// ---------------------------------------------------------------------------
// Pricing rules
// ---------------------------------------------------------------------------

/// Prices the first deposit: `sqrt(amount0 * amount1)` shares, minus the
/// locked minimum.
///
/// # Errors
///
/// Returns [`PoolError::InsufficientInitialLiquidity`] if the geometric
/// mean does not exceed [`MINIMUM_LOCKED_SHARES`].
pub fn bootstrap_issue(amount0: Amount, amount1: Amount) -> Result<Shares> {
    let raw = to_u128(
        integer_sqrt(full_mul(amount0.get(), amount1.get())),
        "bootstrap share supply exceeds u128",
    )?;
    if raw <= MINIMUM_LOCKED_SHARES {
        return Err(PoolError::InsufficientInitialLiquidity);
    }
    Ok(Shares::new(raw - MINIMUM_LOCKED_SHARES))
}

/// Matches desired deposit amounts against the live reserve ratio.
///
/// Tries the full `desired0` first: if the ratio-matching amount of asset1
/// fits under `desired1`, use it. Otherwise take the full `desired1` and
/// match asset0 down to the ratio. One side is always used in full.
///
/// # Errors
///
/// Propagates arithmetic errors from the ratio computation. Reserves are
/// non-zero in a funded pool, so division by zero cannot occur here.
pub fn matched_amounts(
    amount0_desired: Amount,
    amount1_desired: Amount,
    reserve0: Amount,
    reserve1: Amount,
) -> Result<(Amount, Amount)> {
    let matching1 = mul_div(amount0_desired.get(), reserve1.get(), reserve0.get())?;
    if matching1 <= amount1_desired.get() {
        return Ok((amount0_desired, Amount::new(matching1)));
    }
    let matching0 = mul_div(amount1_desired.get(), reserve0.get(), reserve1.get())?;
    Ok((Amount::new(matching0), amount1_desired))
}

/// Prices a follow-on deposit against current reserves.
///
/// Issues `min(amount0 * supply / reserve0, amount1 * supply / reserve1)`,
/// both quotients floored. Taking the minimum means any dust beyond the
/// reserve ratio buys nothing.
///
/// # Errors
///
/// Returns [`PoolError::InvalidAmount`] if the floored issuance is zero,
/// which happens when a used amount is zero or too small to buy a share.
pub fn issue_for_deposit(
    amount0: Amount,
    amount1: Amount,
    reserve0: Amount,
    reserve1: Amount,
    total_shares: Shares,
) -> Result<Shares> {
    let by0 = mul_div(amount0.get(), total_shares.get(), reserve0.get())?;
    let by1 = mul_div(amount1.get(), total_shares.get(), reserve1.get())?;
    let issued = by0.min(by1);
    if issued == 0 {
        return Err(PoolError::InvalidAmount(
            "deposit too small to issue any shares",
        ));
    }
    Ok(Shares::new(issued))
}

/// Prices a redemption: the burned fraction of each reserve, floored.
///
/// # Errors
///
/// Propagates arithmetic errors. `total_shares` is non-zero in a funded
/// pool, so division by zero cannot occur here.
pub fn redeem(
    shares_burned: Shares,
    reserve0: Amount,
    reserve1: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount)> {
    let amount0 = mul_div(shares_burned.get(), reserve0.get(), total_shares.get())?;
    let amount1 = mul_div(shares_burned.get(), reserve1.get(), total_shares.get())?;
    Ok((Amount::new(amount0), Amount::new(amount1)))
}

// ---------------------------------------------------------------------------
// Balance book
// ---------------------------------------------------------------------------

/// Per-provider share balances plus the locked bootstrap stake.
#[derive(Debug, Default, Clone)]
pub struct ShareAccounting {
    balances: HashMap<AccountId, Shares>,
    locked: Shares,
}

impl ShareAccounting {
    /// Creates an empty balance book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the share balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Shares {
        self.balances.get(&account).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the permanently locked shares.
    #[must_use]
    pub const fn locked(&self) -> Shares {
        self.locked
    }

    /// Records the bootstrap lock. Called once, on the first deposit.
    pub fn lock_minimum(&mut self) {
        self.locked = Shares::new(MINIMUM_LOCKED_SHARES);
    }

    /// Computes the balance `account` would have after a credit, without
    /// writing it.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed `u128`.
    pub fn stage_credit(&self, account: AccountId, shares: Shares) -> Result<Shares> {
        self.balance_of(account).safe_add(shares)
    }

    /// Computes the balance `account` would have after a debit, without
    /// writing it.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientShares`] if `account` holds fewer
    /// shares than the debit.
    pub fn stage_debit(&self, account: AccountId, shares: Shares) -> Result<Shares> {
        self.balance_of(account)
            .checked_sub(&shares)
            .ok_or(PoolError::InsufficientShares)
    }

    /// Writes a previously staged balance.
    pub fn commit_balance(&mut self, account: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const WAD: u128 = 1_000_000_000_000_000_000;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    // -- bootstrap_issue --------------------------------------------------------

    #[test]
    fn bootstrap_takes_geometric_mean_minus_lock() {
        let Ok(issued) = bootstrap_issue(Amount::new(1_000 * WAD), Amount::new(250 * WAD)) else {
            panic!("expected Ok");
        };
        assert_eq!(issued, Shares::new(500 * WAD - 1_000));
    }

    #[test]
    fn bootstrap_at_lock_boundary_rejected() {
        // sqrt(1_000_000) == 1_000 == the locked minimum: nothing left to issue.
        let result = bootstrap_issue(Amount::new(1_000), Amount::new(1_000));
        assert_eq!(result, Err(PoolError::InsufficientInitialLiquidity));
    }

    #[test]
    fn bootstrap_just_above_lock_boundary() {
        // sqrt(1_001 * 1_002) = floor(sqrt(1_003_002)) = 1_001.
        let Ok(issued) = bootstrap_issue(Amount::new(1_001), Amount::new(1_002)) else {
            panic!("expected Ok");
        };
        assert_eq!(issued, Shares::new(1));
    }

    #[test]
    fn bootstrap_with_zero_side_rejected() {
        let result = bootstrap_issue(Amount::new(1_000_000), Amount::ZERO);
        assert_eq!(result, Err(PoolError::InsufficientInitialLiquidity));
    }

    // -- matched_amounts ----------------------------------------------------------

    #[test]
    fn full_asset0_when_ratio_fits() {
        let Ok((used0, used1)) = matched_amounts(
            Amount::new(500 * WAD),
            Amount::new(200 * WAD),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(used0, Amount::new(500 * WAD));
        assert_eq!(used1, Amount::new(125 * WAD));
    }

    #[test]
    fn full_asset1_when_asset0_is_scarce() {
        let Ok((used0, used1)) = matched_amounts(
            Amount::new(100 * WAD),
            Amount::new(100 * WAD),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(used0, Amount::new(100 * WAD));
        assert_eq!(used1, Amount::new(25 * WAD));
    }

    #[test]
    fn asset1_side_binds() {
        let Ok((used0, used1)) = matched_amounts(
            Amount::new(1_000 * WAD),
            Amount::new(100 * WAD),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(used0, Amount::new(400 * WAD));
        assert_eq!(used1, Amount::new(100 * WAD));
    }

    // -- issue_for_deposit ---------------------------------------------------------

    #[test]
    fn proportional_issue() {
        let Ok(issued) = issue_for_deposit(
            Amount::new(500 * WAD),
            Amount::new(125 * WAD),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
            Shares::new(500 * WAD),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(issued, Shares::new(250 * WAD));
    }

    #[test]
    fn issue_takes_the_smaller_side() {
        // Asset1 is over-supplied relative to the ratio; asset0 binds.
        let Ok(issued) = issue_for_deposit(
            Amount::new(100),
            Amount::new(100),
            Amount::new(1_000),
            Amount::new(250),
            Shares::new(500),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(issued, Shares::new(50));
    }

    #[test]
    fn dust_deposit_rejected() {
        // 1 unit of asset0 against huge reserves floors to zero shares.
        let result = issue_for_deposit(
            Amount::new(1),
            Amount::new(1),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
            Shares::new(500),
        );
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    // -- redeem -----------------------------------------------------------------

    #[test]
    fn proportional_redeem() {
        let Ok((out0, out1)) = redeem(
            Shares::new(250 * WAD),
            Amount::new(1_000 * WAD),
            Amount::new(250 * WAD),
            Shares::new(500 * WAD),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out0, Amount::new(500 * WAD));
        assert_eq!(out1, Amount::new(125 * WAD));
    }

    #[test]
    fn redeem_floors_each_side() {
        // 1 of 3 shares over reserves (10, 11): floor to (3, 3).
        let Ok((out0, out1)) = redeem(
            Shares::new(1),
            Amount::new(10),
            Amount::new(11),
            Shares::new(3),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out0, Amount::new(3));
        assert_eq!(out1, Amount::new(3));
    }

    // -- balance book --------------------------------------------------------------

    #[test]
    fn stage_then_commit() {
        let mut book = ShareAccounting::new();
        let Ok(staged) = book.stage_credit(account(1), Shares::new(500)) else {
            panic!("expected Ok");
        };
        // Staging writes nothing.
        assert_eq!(book.balance_of(account(1)), Shares::ZERO);
        book.commit_balance(account(1), staged);
        assert_eq!(book.balance_of(account(1)), Shares::new(500));
    }

    #[test]
    fn debit_beyond_balance_rejected() {
        let mut book = ShareAccounting::new();
        book.commit_balance(account(1), Shares::new(100));
        assert_eq!(
            book.stage_debit(account(1), Shares::new(101)),
            Err(PoolError::InsufficientShares)
        );
        assert_eq!(
            book.stage_debit(account(2), Shares::new(1)),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn full_debit_clears_the_entry() {
        let mut book = ShareAccounting::new();
        book.commit_balance(account(1), Shares::new(100));
        let Ok(staged) = book.stage_debit(account(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        book.commit_balance(account(1), staged);
        assert_eq!(book.balance_of(account(1)), Shares::ZERO);
    }

    #[test]
    fn lock_is_recorded() {
        let mut book = ShareAccounting::new();
        assert_eq!(book.locked(), Shares::ZERO);
        book.lock_minimum();
        assert_eq!(book.locked(), Shares::new(MINIMUM_LOCKED_SHARES));
    }
}
