use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Owner withdrawal, capped at the balance not committed to any active
/// (non-revoked) schedule.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, LedgerError::InvalidAmount);

    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        ledger.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        LedgerError::InvalidTokenAccount
    );

    let withdrawable = ledger.withdrawable_amount(ctx.accounts.vault.amount)?;
    require!(
        amount <= withdrawable,
        LedgerError::InsufficientWithdrawableBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger", &[ctx.bumps.ledger]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(OwnerWithdrawn {
        from: ctx.accounts.vault.key(),
        to: ctx.accounts.owner_token_account.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [b"vault", ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct OwnerWithdrawn {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
