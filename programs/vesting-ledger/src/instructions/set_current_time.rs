use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::LedgerConfig;

/// Deterministic-test clock override. Compiled only under `mock-clock`;
/// production builds have no way to reach this state.
pub fn set_current_time(ctx: Context<SetCurrentTime>, now: i64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );
    require!(now > 0, LedgerError::InvalidTimestamp);

    ledger.time_override = now;

    emit!(ClockOverridden { now });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCurrentTime<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ClockOverridden {
    pub now: i64,
}
