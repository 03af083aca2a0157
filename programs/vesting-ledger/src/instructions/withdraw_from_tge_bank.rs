use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{LedgerConfig, Role};

pub fn withdraw_from_tge_bank(
    ctx: Context<WithdrawFromTgeBank>,
    role: Role,
    amount: u64,
) -> Result<()> {
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let ledger_bump = ctx.bumps.ledger;

    require!(amount > 0, LedgerError::InvalidAmount);

    let ledger = &mut ctx.accounts.ledger;
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
    require!(
        ctx.accounts.vault.amount >= amount,
        LedgerError::InsufficientVaultBalance
    );

    ledger.debit_tge_bank(role, amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"ledger", &[ledger_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ledger_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TgeBankWithdrawn {
        from: ctx.accounts.vault.key(),
        to: ctx.accounts.owner_token_account.key(),
        role,
        amount,
        remaining_bank: ledger.pool(role).tge_bank,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFromTgeBank<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
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
pub struct TgeBankWithdrawn {
    pub from: Pubkey,
    pub to: Pubkey,
    pub role: Role,
    pub amount: u64,
    pub remaining_bank: u64,
}
