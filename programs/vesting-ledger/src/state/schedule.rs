use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::LedgerError;
use crate::state::Role;
use crate::utils::vesting;

/// A single beneficiary's time-released grant (PDA, seeds `[b"schedule", id]`).
///
/// Immutable after creation except `released_amount` and `revoked`; never
/// closed, so revoked and fully-released schedules stay queryable.
#[account]
pub struct VestingSchedule {
    /// Content-derived id: `blake3(beneficiary || index_le)`.
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub role: Role,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_time: i64,
    /// Duration after `start_time` during which nothing is releasable.
    pub cliff_duration: i64,
    /// Total vesting duration, > 0.
    pub total_duration: i64,
    /// Vesting granularity in seconds, >= 1; partial slices never vest.
    pub slice_period: i64,
    pub revocable: bool,
    pub revoked: bool,
    pub total_amount: u64,
    pub released_amount: u64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // id
        32 + // beneficiary
        1 +  // role
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // total_duration
        8 +  // slice_period
        1 +  // revocable
        1 +  // revoked
        8 +  // total_amount
        8;   // released_amount

    /// Amount still committed to this schedule.
    pub fn unreleased(&self) -> Result<u64, LedgerError> {
        self.total_amount
            .checked_sub(self.released_amount)
            .ok_or(LedgerError::MathOverflow)
    }

    /// Only the beneficiary or the ledger owner may release.
    pub fn check_release_authority(
        &self,
        caller: &Pubkey,
        owner: &Pubkey,
    ) -> Result<(), LedgerError> {
        if *caller != self.beneficiary && caller != owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Credit a release of `amount` at time `now`.
    ///
    /// Validation precedes mutation: on error the schedule is untouched.
    pub fn apply_release(&mut self, amount: u64, now: i64) -> Result<(), LedgerError> {
        let releasable = vesting::releasable(self, now)?;
        if amount > releasable {
            return Err(LedgerError::InsufficientVestedAmount);
        }
        self.released_amount = self
            .released_amount
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Revoke the schedule at time `now`.
    ///
    /// Returns the vested-but-unreleased amount, which the caller must pay
    /// out to the beneficiary; the unvested remainder simply stops being
    /// counted as committed.
    pub fn apply_revoke(&mut self, now: i64) -> Result<u64, LedgerError> {
        if !self.revocable || self.revoked {
            return Err(LedgerError::ScheduleNotRevocable);
        }
        let vested_unreleased = vesting::releasable(self, now)?;
        self.released_amount = self
            .released_amount
            .checked_add(vested_unreleased)
            .ok_or(LedgerError::MathOverflow)?;
        self.revoked = true;
        Ok(vested_unreleased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_649_831_209;

    fn schedule(revocable: bool) -> VestingSchedule {
        VestingSchedule {
            id: [7u8; 32],
            beneficiary: Pubkey::new_from_array([3u8; 32]),
            role: Role::Advisor,
            start_time: START,
            cliff_duration: 60,
            total_duration: 1_000,
            slice_period: 1,
            revocable,
            revoked: false,
            total_amount: 100,
            released_amount: 0,
        }
    }

    #[test]
    fn release_authority_is_beneficiary_or_owner() {
        let s = schedule(true);
        let owner = Pubkey::new_from_array([1u8; 32]);
        let stranger = Pubkey::new_from_array([9u8; 32]);

        assert!(s.check_release_authority(&s.beneficiary, &owner).is_ok());
        assert!(s.check_release_authority(&owner, &owner).is_ok());
        assert!(matches!(
            s.check_release_authority(&stranger, &owner),
            Err(LedgerError::Unauthorized)
        ));
    }

    #[test]
    fn release_bounded_by_vested_amount() {
        let mut s = schedule(true);
        let halfway = START + 500;

        // 50 vested at halfway; 100 is too much, 10 is fine.
        assert!(matches!(
            s.apply_release(100, halfway),
            Err(LedgerError::InsufficientVestedAmount)
        ));
        assert_eq!(s.released_amount, 0);

        s.apply_release(10, halfway).unwrap();
        assert_eq!(s.released_amount, 10);
        assert_eq!(vesting::releasable(&s, halfway).unwrap(), 40);

        // Cumulative releases never exceed the vested total.
        s.apply_release(40, halfway).unwrap();
        assert!(matches!(
            s.apply_release(1, halfway),
            Err(LedgerError::InsufficientVestedAmount)
        ));
    }

    #[test]
    fn full_release_after_vesting_end() {
        let mut s = schedule(true);
        let after_end = START + 1_001;
        s.apply_release(45, after_end).unwrap();
        s.apply_release(45, after_end).unwrap();
        s.apply_release(10, after_end).unwrap();
        assert_eq!(s.released_amount, 100);
        assert_eq!(vesting::releasable(&s, after_end).unwrap(), 0);
        assert!(matches!(
            s.apply_release(1, after_end),
            Err(LedgerError::InsufficientVestedAmount)
        ));
    }

    #[test]
    fn revoke_requires_revocable() {
        let mut s = schedule(false);
        assert!(matches!(
            s.apply_revoke(START + 500),
            Err(LedgerError::ScheduleNotRevocable)
        ));
        assert!(!s.revoked);
    }

    #[test]
    fn revoke_settles_vested_remainder_once() {
        let mut s = schedule(true);
        s.apply_release(10, START + 500).unwrap();

        // 50 vested, 10 already out: revoke pays exactly 40.
        let payout = s.apply_revoke(START + 500).unwrap();
        assert_eq!(payout, 40);
        assert_eq!(s.released_amount, 50);
        assert!(s.revoked);
        assert_eq!(s.unreleased().unwrap(), 50);

        // Terminal: no further vesting, no second revoke.
        assert_eq!(vesting::releasable(&s, START + 10_000).unwrap(), 0);
        assert!(matches!(
            s.apply_revoke(START + 600),
            Err(LedgerError::ScheduleNotRevocable)
        ));
    }
}
