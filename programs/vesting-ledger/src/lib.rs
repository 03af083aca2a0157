//! Token-distribution vesting ledger.
//!
//! Manages time-released allocations of a fungible token to beneficiaries,
//! grouped into role pools (Advisor, Partner, Mentor) that each receive an
//! immediate TGE carve-out plus a linearly vesting remainder.
//!
//! # Accounts
//!
//! - [`state::LedgerConfig`]: owner, mint, role weights, pools, and the
//!   running committed (`locked`) amount
//! - [`state::VestingSchedule`]: one PDA per schedule, keyed by its
//!   content-derived id
//! - [`state::ScheduleSet`]: global ordered id registry
//! - [`state::HolderIndex`]: per-beneficiary schedule counter
//!
//! # Read surface
//!
//! Clients read accounts directly: the schedule count is
//! `ScheduleSet::count`, the id at a global index is [`state::ScheduleSet::id_at`],
//! a holder's count is `HolderIndex::count`, and ids are recomputable with
//! [`utils::schedule_id::schedule_id`]. The withdrawable amount is
//! `vault.amount - LedgerConfig::locked_amount`.
//!
//! Every mutating instruction validates before it writes and runs inside a
//! single transaction, so state transitions are atomic and serialized.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{RecalcPolicy, Role};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_ledger {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        role_weights: [u8; constants::ROLE_COUNT],
        recalc_policy: RecalcPolicy,
    ) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, role_weights, recalc_policy)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund::fund(ctx, amount)
    }

    pub fn set_tge(
        ctx: Context<SetTge>,
        advisor_pct: u8,
        partner_pct: u8,
        mentor_pct: u8,
    ) -> Result<()> {
        instructions::set_tge::set_tge(ctx, advisor_pct, partner_pct, mentor_pct)
    }

    pub fn calculate_pools(ctx: Context<CalculatePools>) -> Result<()> {
        instructions::calculate_pools::calculate_pools(ctx)
    }

    pub fn create_vesting_schedule(
        ctx: Context<CreateVestingSchedule>,
        id: [u8; 32],
        args: CreateScheduleArgs,
    ) -> Result<()> {
        instructions::create_schedule::create_vesting_schedule(ctx, id, args)
    }

    pub fn release(ctx: Context<Release>, id: [u8; 32], amount: u64) -> Result<()> {
        instructions::release::release(ctx, id, amount)
    }

    pub fn revoke(ctx: Context<Revoke>, id: [u8; 32]) -> Result<()> {
        instructions::revoke::revoke(ctx, id)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn withdraw_from_tge_bank(
        ctx: Context<WithdrawFromTgeBank>,
        role: Role,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw_from_tge_bank::withdraw_from_tge_bank(ctx, role, amount)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, id: [u8; 32]) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, id)
    }

    #[cfg(feature = "mock-clock")]
    pub fn set_current_time(ctx: Context<SetCurrentTime>, now: i64) -> Result<()> {
        instructions::set_current_time::set_current_time(ctx, now)
    }
}
