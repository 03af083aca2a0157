use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::LedgerError;
use crate::state::{HolderIndex, LedgerConfig, Role, ScheduleSet, VestingSchedule};
use crate::utils::schedule_id;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct CreateScheduleArgs {
    pub role: Role,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_duration: i64,
    pub total_duration: i64,
    pub slice_period: i64,
    pub revocable: bool,
    pub amount: u64,
}

pub fn create_vesting_schedule(
    ctx: Context<CreateVestingSchedule>,
    id: [u8; 32],
    args: CreateScheduleArgs,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );

    require!(args.beneficiary != Pubkey::default(), LedgerError::InvalidPubkey);
    require!(args.start_time > 0, LedgerError::InvalidTimestamp);
    require!(
        args.total_duration > 0 && args.slice_period >= 1 && args.amount > 0,
        LedgerError::InvalidScheduleParameters
    );
    require!(args.cliff_duration >= 0, LedgerError::InvalidScheduleParameters);

    // The id is content-derived from (beneficiary, next index); the client
    // passes it so it can double as the schedule PDA seed.
    let holder_index = &mut ctx.accounts.holder_index;
    let expected = schedule_id::next_schedule_id(&args.beneficiary, holder_index.count);
    require!(id == expected, LedgerError::ScheduleIdMismatch);

    // Never commit more than the vault holds free of other schedules.
    let withdrawable = ledger.withdrawable_amount(ctx.accounts.vault.amount)?;
    require!(
        args.amount <= withdrawable,
        LedgerError::InsufficientWithdrawableBalance
    );

    let schedule = &mut ctx.accounts.schedule;
    schedule.id = id;
    schedule.beneficiary = args.beneficiary;
    schedule.role = args.role;
    schedule.start_time = args.start_time;
    schedule.cliff_duration = args.cliff_duration;
    schedule.total_duration = args.total_duration;
    schedule.slice_period = args.slice_period;
    schedule.revocable = args.revocable;
    schedule.revoked = false;
    schedule.total_amount = args.amount;
    schedule.released_amount = 0;

    let mut schedule_set = ctx.accounts.schedule_set.load_mut()?;
    schedule_set.push(id)?;
    holder_index.count = holder_index
        .count
        .checked_add(1)
        .ok_or(LedgerError::MathOverflow)?;
    ledger.commit(args.amount)?;

    emit!(ScheduleCreated {
        id,
        beneficiary: args.beneficiary,
        role: args.role,
        start_time: args.start_time,
        cliff_duration: args.cliff_duration,
        total_duration: args.total_duration,
        slice_period: args.slice_period,
        revocable: args.revocable,
        amount: args.amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32], args: CreateScheduleArgs)]
pub struct CreateVestingSchedule<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [b"schedules", ledger.key().as_ref()],
        bump
    )]
    pub schedule_set: AccountLoader<'info, ScheduleSet>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + HolderIndex::SIZE,
        seeds = [b"holder", args.beneficiary.as_ref()],
        bump
    )]
    pub holder_index: Account<'info, HolderIndex>,

    #[account(
        init,
        payer = owner,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"schedule", id.as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        seeds = [b"vault", ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub role: Role,
    pub start_time: i64,
    pub cliff_duration: i64,
    pub total_duration: i64,
    pub slice_period: i64,
    pub revocable: bool,
    pub amount: u64,
}
