use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{LedgerConfig, VestingSchedule};
use crate::utils::clock;

pub fn release(ctx: Context<Release>, id: [u8; 32], amount: u64) -> Result<()> {
    // Capture before taking mutable borrows; the ledger PDA signs the CPI.
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let ledger_bump = ctx.bumps.ledger;

    require!(amount > 0, LedgerError::InvalidAmount);

    let ledger = &mut ctx.accounts.ledger;
    let schedule = &mut ctx.accounts.schedule;
    schedule.check_release_authority(&ctx.accounts.caller.key(), &ledger.owner)?;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        ledger.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        schedule.beneficiary,
        LedgerError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        LedgerError::InsufficientVaultBalance
    );

    let now = clock::current_time(ledger)?;
    schedule.apply_release(amount, now)?;
    ledger.uncommit(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger", &[ledger_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ledger_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensReleased {
        id,
        from: ctx.accounts.vault.key(),
        to: ctx.accounts.beneficiary_token_account.key(),
        amount,
        released_total: schedule.released_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct Release<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(mut, seeds = [b"schedule", id.as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    /// Beneficiary of the schedule or the ledger owner.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Transfer observation emitted on every vault outflow to a beneficiary.
#[event]
pub struct TokensReleased {
    pub id: [u8; 32],
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
