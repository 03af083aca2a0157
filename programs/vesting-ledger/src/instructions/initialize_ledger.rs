use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{PERCENT_DENOMINATOR, ROLE_COUNT};
use crate::error::LedgerError;
use crate::state::{LedgerConfig, RecalcPolicy, RolePool, ScheduleSet};

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    role_weights: [u8; ROLE_COUNT],
    recalc_policy: RecalcPolicy,
) -> Result<()> {
    let mut weight_sum: u64 = 0;
    for w in role_weights {
        require!(
            (w as u64) <= PERCENT_DENOMINATOR,
            LedgerError::InvalidPercentage
        );
        weight_sum = weight_sum
            .checked_add(w as u64)
            .ok_or(LedgerError::MathOverflow)?;
    }
    require!(weight_sum <= PERCENT_DENOMINATOR, LedgerError::InvalidPercentage);

    let ledger = &mut ctx.accounts.ledger;
    ledger.owner = ctx.accounts.owner.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.role_weights = role_weights;
    ledger.recalc_policy = recalc_policy;
    ledger.pools_calculated = false;
    ledger.pools = [RolePool::default(); ROLE_COUNT];
    ledger.locked_amount = 0;
    ledger.time_override = 0;

    let mut schedule_set = ctx.accounts.schedule_set.load_init()?;
    schedule_set.count = 0;

    emit!(LedgerInitialized {
        owner: ledger.owner,
        mint: ledger.mint,
        vault: ctx.accounts.vault.key(),
        role_weights,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + LedgerConfig::SIZE,
        seeds = [b"ledger"],
        bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        init,
        payer = owner,
        space = ScheduleSet::space(),
        seeds = [b"schedules", ledger.key().as_ref()],
        bump
    )]
    pub schedule_set: AccountLoader<'info, ScheduleSet>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = ledger,
        seeds = [b"vault", ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub role_weights: [u8; ROLE_COUNT],
}
