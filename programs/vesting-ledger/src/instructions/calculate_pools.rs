use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::ROLE_COUNT;
use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Full recomputation of every role pool from the current vault balance.
///
/// Under `RecalcPolicy::Live` a second call after schedules have consumed
/// part of the balance recomputes over the depleted balance; calling it once
/// after initial funding is the caller's responsibility. `RecalcPolicy::Once`
/// rejects the second call instead.
pub fn calculate_pools(ctx: Context<CalculatePools>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );

    let vault_balance = ctx.accounts.vault.amount;
    ledger.recalculate_pools(vault_balance)?;

    let mut tge_banks = [0u64; ROLE_COUNT];
    let mut total_allocated = [0u64; ROLE_COUNT];
    for (i, pool) in ledger.pools.iter().enumerate() {
        tge_banks[i] = pool.tge_bank;
        total_allocated[i] = pool.total_allocated;
    }

    emit!(PoolsCalculated {
        owner: ledger.owner,
        vault_balance,
        tge_banks,
        total_allocated,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CalculatePools<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        seeds = [b"vault", ledger.key().as_ref()],
        bump,
        constraint = vault.mint == ledger.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,
}

#[event]
pub struct PoolsCalculated {
    pub owner: Pubkey,
    pub vault_balance: u64,
    pub tge_banks: [u64; ROLE_COUNT],
    pub total_allocated: [u64; ROLE_COUNT],
}
