use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::LedgerError;
use crate::state::{LedgerConfig, Role};

pub fn set_tge(
    ctx: Context<SetTge>,
    advisor_pct: u8,
    partner_pct: u8,
    mentor_pct: u8,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ledger.owner,
        LedgerError::Unauthorized
    );
    for pct in [advisor_pct, partner_pct, mentor_pct] {
        require!(
            (pct as u64) <= PERCENT_DENOMINATOR,
            LedgerError::InvalidPercentage
        );
    }

    ledger.pools[Role::Advisor.index()].tge_percentage = advisor_pct;
    ledger.pools[Role::Partner.index()].tge_percentage = partner_pct;
    ledger.pools[Role::Mentor.index()].tge_percentage = mentor_pct;

    emit!(TgePercentagesSet {
        owner: ledger.owner,
        advisor_pct,
        partner_pct,
        mentor_pct,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetTge<'info> {
    #[account(mut, seeds = [b"ledger"], bump)]
    pub ledger: Account<'info, LedgerConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct TgePercentagesSet {
    pub owner: Pubkey,
    pub advisor_pct: u8,
    pub partner_pct: u8,
    pub mentor_pct: u8,
}
