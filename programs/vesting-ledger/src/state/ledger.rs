use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{PERCENT_DENOMINATOR, ROLE_COUNT};
use crate::error::LedgerError;

/// Beneficiary role; selects the pool a schedule draws from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Advisor,
    Partner,
    Mentor,
}

impl Role {
    pub const fn index(self) -> usize {
        match self {
            Role::Advisor => 0,
            Role::Partner => 1,
            Role::Mentor => 2,
        }
    }
}

/// Pool recomputation policy, fixed at construction.
///
/// `Live` recomputes over the current vault balance on every call (the
/// original contract's behavior); `Once` freezes the pools after the first
/// computation from initial funding.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecalcPolicy {
    Live,
    Once,
}

/// Per-role pool: TGE percentage, immediately-spendable bank, and the
/// vesting-locked remainder of the role's allocation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RolePool {
    /// Share of the role's allocation released at TGE, percent [0, 100].
    pub tge_percentage: u8,
    /// Tokens available for immediate owner withdrawal on behalf of the role.
    pub tge_bank: u64,
    /// Role's allocation after the TGE carve-out.
    pub total_allocated: u64,
}

impl RolePool {
    pub const SIZE: usize = 1 + 8 + 8;
}

/// Singleton ledger account (PDA, seeds `[b"ledger"]`).
#[account]
pub struct LedgerConfig {
    /// Administrator authority, set at initialization, immutable.
    pub owner: Pubkey,
    /// Token mint this ledger distributes.
    pub mint: Pubkey,
    /// Percent of the funded balance earmarked per role (Advisor, Partner, Mentor).
    pub role_weights: [u8; ROLE_COUNT],
    /// Pool recomputation policy.
    pub recalc_policy: RecalcPolicy,
    /// Whether `calculate_pools` has run at least once.
    pub pools_calculated: bool,
    /// Role pools, indexed by `Role::index`.
    pub pools: [RolePool; ROLE_COUNT],
    /// Sum of `total_amount - released_amount` over non-revoked schedules.
    pub locked_amount: u64,
    /// Clock override (0 = unset); writable only under the `mock-clock` feature.
    pub time_override: i64,
}

impl LedgerConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        ROLE_COUNT + // role_weights
        1 +  // recalc_policy
        1 +  // pools_calculated
        RolePool::SIZE * ROLE_COUNT +
        8 +  // locked_amount
        8;   // time_override

    pub fn pool(&self, role: Role) -> &RolePool {
        &self.pools[role.index()]
    }

    /// Full overwrite of every pool from the given vault balance.
    pub fn recalculate_pools(&mut self, vault_balance: u64) -> Result<(), LedgerError> {
        if self.recalc_policy == RecalcPolicy::Once && self.pools_calculated {
            return Err(LedgerError::PoolsFrozen);
        }
        for (i, pool) in self.pools.iter_mut().enumerate() {
            let (tge_bank, total_allocated) =
                split_role_allocation(vault_balance, self.role_weights[i], pool.tge_percentage)?;
            pool.tge_bank = tge_bank;
            pool.total_allocated = total_allocated;
        }
        self.pools_calculated = true;
        Ok(())
    }

    /// Debit a role's TGE bank; the caller performs the matching transfer.
    pub fn debit_tge_bank(&mut self, role: Role, amount: u64) -> Result<(), LedgerError> {
        let pool = &mut self.pools[role.index()];
        if amount > pool.tge_bank {
            return Err(LedgerError::InsufficientTGEBank);
        }
        pool.tge_bank = pool
            .tge_bank
            .checked_sub(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Tokens not committed to any active (non-revoked) schedule.
    pub fn withdrawable_amount(&self, vault_balance: u64) -> Result<u64, LedgerError> {
        vault_balance
            .checked_sub(self.locked_amount)
            .ok_or(LedgerError::MathOverflow)
    }

    pub fn commit(&mut self, amount: u64) -> Result<(), LedgerError> {
        self.locked_amount = self
            .locked_amount
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    pub fn uncommit(&mut self, amount: u64) -> Result<(), LedgerError> {
        self.locked_amount = self
            .locked_amount
            .checked_sub(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }
}

/// Split one role's share of the vault balance into (TGE bank, vested allocation).
pub fn split_role_allocation(
    vault_balance: u64,
    weight_pct: u8,
    tge_pct: u8,
) -> Result<(u64, u64), LedgerError> {
    let gross = (vault_balance as u128)
        .checked_mul(weight_pct as u128)
        .ok_or(LedgerError::MathOverflow)?
        / PERCENT_DENOMINATOR as u128;
    let tge_bank = gross
        .checked_mul(tge_pct as u128)
        .ok_or(LedgerError::MathOverflow)?
        / PERCENT_DENOMINATOR as u128;
    let total_allocated = gross
        .checked_sub(tge_bank)
        .ok_or(LedgerError::MathOverflow)?;
    let tge_bank = u64::try_from(tge_bank).map_err(|_| LedgerError::MathOverflow)?;
    let total_allocated =
        u64::try_from(total_allocated).map_err(|_| LedgerError::MathOverflow)?;
    Ok((tge_bank, total_allocated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(weights: [u8; 3], policy: RecalcPolicy) -> LedgerConfig {
        LedgerConfig {
            owner: Pubkey::new_from_array([1u8; 32]),
            mint: Pubkey::new_from_array([2u8; 32]),
            role_weights: weights,
            recalc_policy: policy,
            pools_calculated: false,
            pools: [RolePool::default(); ROLE_COUNT],
            locked_amount: 0,
            time_override: 0,
        }
    }

    #[test]
    fn split_applies_weight_then_tge() {
        // 10% of 100_000_000 = 10_000_000; 5% TGE carve-out = 500_000.
        let (bank, allocated) = split_role_allocation(100_000_000, 10, 5).unwrap();
        assert_eq!(bank, 500_000);
        assert_eq!(allocated, 9_500_000);

        // Zero TGE leaves everything allocated.
        let (bank, allocated) = split_role_allocation(100_000_000, 4, 0).unwrap();
        assert_eq!(bank, 0);
        assert_eq!(allocated, 4_000_000);

        // Integer division truncates.
        let (bank, allocated) = split_role_allocation(999, 33, 50).unwrap();
        assert_eq!(bank, 164); // floor(329 * 50 / 100)
        assert_eq!(allocated, 329 - 164);
    }

    #[test]
    fn recalculate_is_full_overwrite() {
        let mut l = ledger([10, 20, 30], RecalcPolicy::Live);
        l.pools[0].tge_percentage = 5;
        l.pools[2].tge_percentage = 7;

        l.recalculate_pools(100_000_000).unwrap();
        assert_eq!(l.pool(Role::Advisor).tge_bank, 500_000);
        assert_eq!(l.pool(Role::Advisor).total_allocated, 9_500_000);
        assert_eq!(l.pool(Role::Partner).tge_bank, 0);
        assert_eq!(l.pool(Role::Partner).total_allocated, 20_000_000);
        assert_eq!(l.pool(Role::Mentor).tge_bank, 2_100_000);
        assert_eq!(l.pool(Role::Mentor).total_allocated, 27_900_000);
        assert!(l.pools_calculated);

        // Live policy recomputes over the new (depleted) balance wholesale.
        l.recalculate_pools(50_000_000).unwrap();
        assert_eq!(l.pool(Role::Advisor).tge_bank, 250_000);
        assert_eq!(l.pool(Role::Mentor).total_allocated, 13_950_000);
    }

    #[test]
    fn once_policy_freezes_pools() {
        let mut l = ledger([10, 20, 30], RecalcPolicy::Once);
        l.recalculate_pools(1_000_000).unwrap();
        let frozen = l.pools;
        assert!(matches!(
            l.recalculate_pools(500_000),
            Err(LedgerError::PoolsFrozen)
        ));
        assert_eq!(l.pools, frozen);
    }

    #[test]
    fn tge_bank_debit_and_floor() {
        let mut l = ledger([10, 0, 0], RecalcPolicy::Live);
        l.pools[0].tge_percentage = 7;
        l.recalculate_pools(100_000_000).unwrap();
        let before = l.pool(Role::Advisor).tge_bank;
        assert_eq!(before, 700_000);

        l.debit_tge_bank(Role::Advisor, 10_000).unwrap();
        assert_eq!(l.pool(Role::Advisor).tge_bank, before - 10_000);

        assert!(matches!(
            l.debit_tge_bank(Role::Advisor, before),
            Err(LedgerError::InsufficientTGEBank)
        ));
        // Failed debit leaves the bank untouched.
        assert_eq!(l.pool(Role::Advisor).tge_bank, before - 10_000);
    }

    #[test]
    fn withdrawable_tracks_committed_amounts() {
        let mut l = ledger([0, 0, 0], RecalcPolicy::Live);
        assert_eq!(l.withdrawable_amount(1_000).unwrap(), 1_000);

        l.commit(400).unwrap();
        assert_eq!(l.withdrawable_amount(1_000).unwrap(), 600);

        // Releasing 100 moves tokens out of the vault and out of the
        // committed sum; withdrawable is unchanged by a release.
        l.uncommit(100).unwrap();
        assert_eq!(l.withdrawable_amount(900).unwrap(), 600);

        // Revoking frees the remainder without moving tokens.
        l.uncommit(300).unwrap();
        assert_eq!(l.withdrawable_amount(900).unwrap(), 900);
    }
}
