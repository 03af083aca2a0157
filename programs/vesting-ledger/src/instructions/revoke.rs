use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::instructions::release::TokensReleased;
use crate::state::{LedgerConfig, VestingSchedule};
use crate::utils::clock;

/// Revoke a revocable schedule: force-release the vested-but-unreleased
/// remainder to the beneficiary, then stop counting the unvested rest as
/// committed so it becomes withdrawable immediately.
pub fn revoke(ctx: Context<Revoke>, id: [u8; 32]) -> Result<()> {
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let ledger_bump = ctx.bumps.ledger;

    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );

    let schedule = &mut ctx.accounts.schedule;
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

    let now = clock::current_time(ledger)?;
    let unreleased_before = schedule.unreleased()?;
    let payout = schedule.apply_revoke(now)?;

    // Vested part leaves the vault; the unvested remainder is simply freed.
    ledger.uncommit(unreleased_before)?;

    if payout > 0 {
        require!(
            ctx.accounts.vault.amount >= payout,
            LedgerError::InsufficientVaultBalance
        );
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
            payout,
        )?;

        emit!(TokensReleased {
            id,
            from: ctx.accounts.vault.key(),
            to: ctx.accounts.beneficiary_token_account.key(),
            amount: payout,
            released_total: schedule.released_amount,
        });
    }

    emit!(ScheduleRevoked {
        id,
        beneficiary: schedule.beneficiary,
        settled_amount: payout,
        freed_amount: schedule.unreleased()?,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct Revoke<'info> {
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

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleRevoked {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    /// Vested-but-unreleased amount paid out at revocation.
    pub settled_amount: u64,
    /// Unvested remainder returned to the withdrawable pool.
    pub freed_amount: u64,
}
