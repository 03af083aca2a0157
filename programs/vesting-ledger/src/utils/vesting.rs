//! Cliff + linear-with-slices vesting curve.
//!
//! - before `start + cliff`: nothing is releasable
//! - at or after `start + duration`: the full unreleased remainder
//! - in between: `total * floor(elapsed / slice) * slice / duration`, minus
//!   what was already released; division truncates, so a partial slice never
//!   yields a fraction
//! - revoked schedules are settled at revoke time and release nothing further

use crate::error::LedgerError;
use crate::state::VestingSchedule;

/// Releasable amount of `schedule` at time `now`. Pure; no side effects.
pub fn releasable(schedule: &VestingSchedule, now: i64) -> Result<u64, LedgerError> {
    if schedule.revoked {
        return Ok(0);
    }
    let cliff_end = schedule
        .start_time
        .checked_add(schedule.cliff_duration)
        .ok_or(LedgerError::MathOverflow)?;
    if now < cliff_end {
        return Ok(0);
    }
    let vesting_end = schedule
        .start_time
        .checked_add(schedule.total_duration)
        .ok_or(LedgerError::MathOverflow)?;
    let unreleased = schedule
        .total_amount
        .checked_sub(schedule.released_amount)
        .ok_or(LedgerError::MathOverflow)?;
    if now >= vesting_end {
        return Ok(unreleased);
    }

    // Linear phase. `now >= cliff_end >= start_time`, so elapsed >= 0.
    let elapsed = now
        .checked_sub(schedule.start_time)
        .ok_or(LedgerError::MathOverflow)?;
    let vested_slices = elapsed / schedule.slice_period * schedule.slice_period;
    let vested = (schedule.total_amount as u128)
        .checked_mul(vested_slices as u128)
        .ok_or(LedgerError::MathOverflow)?
        / schedule.total_duration as u128;
    let vested = u64::try_from(vested).map_err(|_| LedgerError::MathOverflow)?;
    Ok(vested.saturating_sub(schedule.released_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;
    use anchor_lang::prelude::Pubkey;

    const START: i64 = 1_649_831_209;

    fn schedule(cliff: i64, duration: i64, slice: i64, amount: u64) -> VestingSchedule {
        VestingSchedule {
            id: [0u8; 32],
            beneficiary: Pubkey::new_from_array([3u8; 32]),
            role: Role::Advisor,
            start_time: START,
            cliff_duration: cliff,
            total_duration: duration,
            slice_period: slice,
            revocable: true,
            revoked: false,
            total_amount: amount,
            released_amount: 0,
        }
    }

    #[test]
    fn linear_vesting_with_unit_slices() {
        // cliff=60, duration=1000, slice=1, amount=100
        let s = schedule(60, 1_000, 1, 100);

        assert_eq!(releasable(&s, 0).unwrap(), 0);
        assert_eq!(releasable(&s, START).unwrap(), 0);
        assert_eq!(releasable(&s, START + 59).unwrap(), 0);
        // Cliff end: 60 of 1000 elapsed => 6 vested.
        assert_eq!(releasable(&s, START + 60).unwrap(), 6);
        assert_eq!(releasable(&s, START + 500).unwrap(), 50);
        assert_eq!(releasable(&s, START + 999).unwrap(), 99);
        assert_eq!(releasable(&s, START + 1_000).unwrap(), 100);
        assert_eq!(releasable(&s, START + 1_001).unwrap(), 100);
    }

    #[test]
    fn partial_slices_never_vest() {
        let s = schedule(0, 1_000, 10, 100);
        // 505 elapsed floors to 500 slice-seconds.
        assert_eq!(releasable(&s, START + 505).unwrap(), 50);
        assert_eq!(releasable(&s, START + 509).unwrap(), 50);
        assert_eq!(releasable(&s, START + 510).unwrap(), 51);
    }

    #[test]
    fn division_truncates_toward_zero() {
        // 3 tokens over 7 seconds: fractional vesting rounds down.
        let s = schedule(0, 7, 1, 3);
        assert_eq!(releasable(&s, START).unwrap(), 0);
        assert_eq!(releasable(&s, START + 2).unwrap(), 0);
        assert_eq!(releasable(&s, START + 3).unwrap(), 1);
        assert_eq!(releasable(&s, START + 6).unwrap(), 2);
        assert_eq!(releasable(&s, START + 7).unwrap(), 3);
    }

    #[test]
    fn monotone_nondecreasing_until_revoked() {
        let s = schedule(60, 1_000, 7, 1_234_567);
        let mut last = 0u64;
        for t in 0..1_100 {
            let r = releasable(&s, START + t).unwrap();
            assert!(r >= last, "decreased at t={t}: {r} < {last}");
            last = r;
        }
        assert_eq!(last, 1_234_567);
    }

    #[test]
    fn released_amount_is_subtracted() {
        let mut s = schedule(60, 1_000, 1, 100);
        s.released_amount = 10;
        assert_eq!(releasable(&s, START + 500).unwrap(), 40);
        assert_eq!(releasable(&s, START + 1_001).unwrap(), 90);

        // released can run ahead of the curve right after a revoke
        // settlement; releasable floors at zero instead of underflowing.
        s.released_amount = 60;
        assert_eq!(releasable(&s, START + 500).unwrap(), 0);
    }

    #[test]
    fn revoked_schedules_release_nothing() {
        let mut s = schedule(0, 1_000, 1, 100);
        s.revoked = true;
        assert_eq!(releasable(&s, START + 500).unwrap(), 0);
        assert_eq!(releasable(&s, START + 100_000).unwrap(), 0);
    }

    #[test]
    fn cliff_longer_than_duration_defers_to_full_vest() {
        let s = schedule(2_000, 1_000, 1, 100);
        assert_eq!(releasable(&s, START + 1_500).unwrap(), 0);
        assert_eq!(releasable(&s, START + 2_000).unwrap(), 100);
    }

    #[test]
    fn large_amounts_use_wide_intermediate() {
        let s = schedule(0, 1_000, 1, u64::MAX);
        // u64::MAX * 500 overflows u64; the u128 intermediate must not.
        assert_eq!(releasable(&s, START + 500).unwrap(), u64::MAX / 2);
        assert_eq!(releasable(&s, START + 1_000).unwrap(), u64::MAX);
    }
}
