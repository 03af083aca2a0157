use anchor_lang::prelude::*;

use crate::state::{LedgerConfig, VestingSchedule};
use crate::utils::{clock, vesting};

/// Read-only quote of a schedule's vesting position, surfaced as an event
/// so off-chain monitors can consume it without decoding account state.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, id: [u8; 32]) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let schedule = &ctx.accounts.schedule;

    let now = clock::current_time(ledger)?;
    let releasable = vesting::releasable(schedule, now)?;

    emit!(VestingQuote {
        id,
        beneficiary: schedule.beneficiary,
        now,
        releasable,
        released_amount: schedule.released_amount,
        total_amount: schedule.total_amount,
        revoked: schedule.revoked,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(seeds = [b"schedule", id.as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub now: i64,
    pub releasable: u64,
    pub released_amount: u64,
    pub total_amount: u64,
    pub revoked: bool,
}
