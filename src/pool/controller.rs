//! The pool controller: validation, transfer orchestration, and commit.
//!
//! [`Pool`] owns the reserve ledger and the share book and funnels every
//! mutation through three operations: [`deposit`](Pool::deposit),
//! [`withdraw`](Pool::withdraw), and [`swap`](Pool::swap). Each operation
//! follows the same shape:
//!
//! 1. validate the intent against current state,
//! 2. stage the next reserve/share state (pure, fallible),
//! 3. run the external transfers through the [`AssetLedger`],
//! 4. commit the staged state and record an event.
//!
//! Nothing is written before step 4, so a failure anywhere leaves the pool
//! exactly as it was. If the second transfer leg of an operation is
//! refused, the first leg is reversed before the error is surfaced.

use tracing::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositIntent, DepositReceipt, Shares, SwapIntent,
    SwapReceipt, WithdrawIntent, WithdrawReceipt,
};
use crate::error::{PoolError, Result};
use crate::events::PoolEvent;
use crate::math::CheckedArithmetic;
use crate::pool::reserves::ReserveLedger;
use crate::pool::share_accounting::{
    bootstrap_issue, issue_for_deposit, matched_amounts, redeem, ShareAccounting,
    MINIMUM_LOCKED_SHARES,
};
use crate::pool::swap_engine::quote_swap;
use crate::traits::{AssetLedger, FromConfig};

/// A two-asset constant-product liquidity pool.
#[derive(Debug, Clone)]
pub struct Pool {
    pair: AssetPair,
    account: AccountId,
    reserves: ReserveLedger,
    shares: ShareAccounting,
    events: Vec<PoolEvent>,
}

impl FromConfig<PoolConfig> for Pool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pair: config.pair(),
            account: config.pool_account(),
            reserves: ReserveLedger::new(),
            shares: ShareAccounting::new(),
            events: Vec::new(),
        })
    }
}

impl Pool {
    // -- accessors ------------------------------------------------------------

    /// Returns the first asset of the pair.
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.pair.asset0()
    }

    /// Returns the second asset of the pair.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.pair.asset1()
    }

    /// Returns the pool's own ledger account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the current reserve state.
    #[must_use]
    pub const fn reserves(&self) -> &ReserveLedger {
        &self.reserves
    }

    /// Returns the share balance of `account`.
    #[must_use]
    pub fn share_balance_of(&self, account: AccountId) -> Shares {
        self.shares.balance_of(account)
    }

    /// Returns the permanently locked bootstrap shares.
    #[must_use]
    pub const fn locked_shares(&self) -> Shares {
        self.shares.locked()
    }

    /// Returns the events recorded since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Removes and returns all recorded events, oldest first.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    /// Checks the backing invariant: each internal reserve equals the
    /// pool account's balance of that asset on the external ledger.
    pub fn is_fully_backed<L: AssetLedger>(&self, ledger: &L) -> bool {
        ledger.balance_of(self.asset0(), self.account) == self.reserves.reserve0()
            && ledger.balance_of(self.asset1(), self.account) == self.reserves.reserve1()
    }

    /// Quotes a swap against current reserves without executing it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`swap`](Pool::swap), minus transfer and
    /// slippage failures.
    pub fn quote(&self, asset_in: AssetId, amount_in: Amount) -> Result<Amount> {
        let asset0_in = self.pair.is_asset0(&asset_in)?;
        let (reserve_in, reserve_out) = self.oriented_reserves(asset0_in);
        quote_swap(reserve_in, reserve_out, amount_in)
    }

    // -- operations ------------------------------------------------------------

    /// Adds liquidity and issues shares to `provider`.
    ///
    /// The first deposit uses both desired amounts in full and prices
    /// shares at the geometric mean of the amounts, permanently locking
    /// [`MINIMUM_LOCKED_SHARES`]. Follow-on deposits are matched to the
    /// live reserve ratio and priced proportionally.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientInitialLiquidity`] if the first deposit
    ///   cannot cover the locked minimum.
    /// - [`PoolError::InvalidAmount`] if the deposit is too small to issue
    ///   any shares.
    /// - [`PoolError::SlippageExceeded`] if a used amount falls below the
    ///   intent's minimum.
    /// - [`PoolError::TransferFailed`] if the ledger refuses a pull.
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        intent: &DepositIntent,
    ) -> Result<DepositReceipt> {
        let (used0, used1, issued, minted) = if self.reserves.is_empty() {
            let issued = bootstrap_issue(intent.amount0_desired(), intent.amount1_desired())?;
            let minted = issued.safe_add(Shares::new(MINIMUM_LOCKED_SHARES))?;
            (
                intent.amount0_desired(),
                intent.amount1_desired(),
                issued,
                minted,
            )
        } else {
            let (used0, used1) = matched_amounts(
                intent.amount0_desired(),
                intent.amount1_desired(),
                self.reserves.reserve0(),
                self.reserves.reserve1(),
            )?;
            let issued = issue_for_deposit(
                used0,
                used1,
                self.reserves.reserve0(),
                self.reserves.reserve1(),
                self.reserves.total_shares(),
            )?;
            (used0, used1, issued, issued)
        };
        if used0 < intent.amount0_min() || used1 < intent.amount1_min() {
            debug!(%provider, %used0, %used1, "deposit below minimum used amounts");
            return Err(PoolError::SlippageExceeded(
                "deposit used amount below minimum",
            ));
        }

        let bootstrapping = self.reserves.is_empty();
        let staged_reserves = self.reserves.with_deposit(used0, used1, minted)?;
        let staged_balance = self.shares.stage_credit(provider, issued)?;

        if !ledger.transfer_in(self.asset0(), provider, self.account, used0) {
            return Err(PoolError::TransferFailed("asset0 pull rejected"));
        }
        if !ledger.transfer_in(self.asset1(), provider, self.account, used1) {
            // Reverse the first leg before surfacing the failure.
            ledger.transfer_out(self.asset0(), self.account, provider, used0);
            return Err(PoolError::TransferFailed("asset1 pull rejected"));
        }

        self.reserves = staged_reserves;
        self.shares.commit_balance(provider, staged_balance);
        if bootstrapping {
            self.shares.lock_minimum();
        }
        self.events.push(PoolEvent::LiquidityProvided {
            provider,
            shares_issued: issued,
            amount0: used0,
            amount1: used1,
        });
        info!(%provider, shares = %issued, %used0, %used1, "liquidity provided");
        Ok(DepositReceipt::new(issued, used0, used1))
    }

    /// Burns shares and pays out the proportional reserves to `provider`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientShares`] if `provider` holds fewer shares
    ///   than the intent burns.
    /// - [`PoolError::SlippageExceeded`] if a payout falls below the
    ///   intent's minimum.
    /// - [`PoolError::TransferFailed`] if the ledger refuses a push.
    pub fn withdraw<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        intent: &WithdrawIntent,
    ) -> Result<WithdrawReceipt> {
        let burned = intent.shares_to_burn();
        let staged_balance = self.shares.stage_debit(provider, burned)?;
        let (out0, out1) = redeem(
            burned,
            self.reserves.reserve0(),
            self.reserves.reserve1(),
            self.reserves.total_shares(),
        )?;
        if out0 < intent.amount0_min() || out1 < intent.amount1_min() {
            debug!(%provider, %out0, %out1, "withdrawal below minimum payouts");
            return Err(PoolError::SlippageExceeded(
                "withdrawal payout below minimum",
            ));
        }
        let staged_reserves = self.reserves.with_withdrawal(out0, out1, burned)?;

        if !ledger.transfer_out(self.asset0(), self.account, provider, out0) {
            return Err(PoolError::TransferFailed("asset0 push rejected"));
        }
        if !ledger.transfer_out(self.asset1(), self.account, provider, out1) {
            ledger.transfer_in(self.asset0(), provider, self.account, out0);
            return Err(PoolError::TransferFailed("asset1 push rejected"));
        }

        self.reserves = staged_reserves;
        self.shares.commit_balance(provider, staged_balance);
        self.events.push(PoolEvent::LiquidityRefunded {
            provider,
            shares_burned: burned,
            amount0: out0,
            amount1: out1,
        });
        info!(%provider, shares = %burned, %out0, %out1, "liquidity refunded");
        Ok(WithdrawReceipt::new(out0, out1))
    }

    /// Exchanges `intent.amount_in` of one pool asset for the other at the
    /// constant-product price.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if the input asset is not in the pair.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is unfunded.
    /// - [`PoolError::SlippageExceeded`] if the quote is below the intent's
    ///   minimum output.
    /// - [`PoolError::TransferFailed`] if the ledger refuses a leg.
    pub fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        intent: &SwapIntent,
    ) -> Result<SwapReceipt> {
        let asset0_in = self.pair.is_asset0(&intent.asset_in())?;
        let asset_out = self.pair.other(&intent.asset_in())?;
        let (reserve_in, reserve_out) = self.oriented_reserves(asset0_in);
        let amount_out = quote_swap(reserve_in, reserve_out, intent.amount_in())?;
        if amount_out < intent.min_amount_out() {
            debug!(%trader, %amount_out, min = %intent.min_amount_out(), "swap quote below minimum");
            return Err(PoolError::SlippageExceeded("swap output below minimum"));
        }
        let staged_reserves = self
            .reserves
            .with_swap(intent.amount_in(), amount_out, asset0_in)?;

        if !ledger.transfer_in(intent.asset_in(), trader, self.account, intent.amount_in()) {
            return Err(PoolError::TransferFailed("input pull rejected"));
        }
        if !ledger.transfer_out(asset_out, self.account, trader, amount_out) {
            ledger.transfer_out(intent.asset_in(), self.account, trader, intent.amount_in());
            return Err(PoolError::TransferFailed("output push rejected"));
        }

        self.reserves = staged_reserves;
        self.events.push(PoolEvent::Swapped {
            trader,
            amount_in: intent.amount_in(),
            amount_out,
        });
        info!(%trader, amount_in = %intent.amount_in(), %amount_out, "swapped");
        Ok(SwapReceipt::new(intent.amount_in(), amount_out))
    }

    fn oriented_reserves(&self, asset0_in: bool) -> (Amount, Amount) {
        if asset0_in {
            (self.reserves.reserve0(), self.reserves.reserve1())
        } else {
            (self.reserves.reserve1(), self.reserves.reserve0())
        }
    }
}
