use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::LedgerConfig;

pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
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

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(LedgerFunded {
        from: ctx.accounts.owner_token_account.key(),
        to: ctx.accounts.vault.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
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

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct LedgerFunded {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
