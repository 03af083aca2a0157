use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_SCHEDULES;
use crate::error::LedgerError;

/// Global ordered registry of schedule ids (zero-copy PDA,
/// seeds `[b"schedules", ledger]`).
///
/// Fixed-width so the whole account fits one allocation; ids are appended in
/// creation order and never removed (revoked schedules stay for audit).
#[account(zero_copy)]
#[repr(C)]
pub struct ScheduleSet {
    pub count: u64,
    pub ids: [[u8; 32]; MAX_SCHEDULES],
}

impl ScheduleSet {
    pub const fn space() -> usize {
        8 + core::mem::size_of::<ScheduleSet>()
    }

    pub fn push(&mut self, id: [u8; 32]) -> Result<(), LedgerError> {
        let idx = self.count as usize;
        if idx >= MAX_SCHEDULES {
            return Err(LedgerError::ScheduleListFull);
        }
        self.ids[idx] = id;
        self.count = self
            .count
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Id at global creation index.
    pub fn id_at(&self, index: u64) -> Result<[u8; 32], LedgerError> {
        if index >= self.count {
            return Err(LedgerError::IndexOutOfRange);
        }
        Ok(self.ids[index as usize])
    }

    /// Global creation index of `id`.
    pub fn position_of(&self, id: &[u8; 32]) -> Result<u64, LedgerError> {
        self.ids[..self.count as usize]
            .iter()
            .position(|stored| stored == id)
            .map(|p| p as u64)
            .ok_or(LedgerError::ScheduleNotFound)
    }
}

/// Per-beneficiary schedule counter (PDA, seeds `[b"holder", beneficiary]`).
///
/// The count doubles as the next schedule index for the holder; the ordered
/// per-beneficiary id list is implicit, since the id at index `i` is always
/// `schedule_id(beneficiary, i)`.
#[account]
#[derive(Default)]
pub struct HolderIndex {
    pub count: u64,
}

impl HolderIndex {
    pub const SIZE: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ScheduleSet {
        ScheduleSet {
            count: 0,
            ids: [[0u8; 32]; MAX_SCHEDULES],
        }
    }

    #[test]
    fn push_preserves_creation_order() {
        let mut set = empty();
        let a = [1u8; 32];
        let b = [2u8; 32];
        set.push(a).unwrap();
        set.push(b).unwrap();

        assert_eq!(set.count, 2);
        assert_eq!(set.id_at(0).unwrap(), a);
        assert_eq!(set.id_at(1).unwrap(), b);
        assert_eq!(set.position_of(&b).unwrap(), 1);
    }

    #[test]
    fn lookups_fail_cleanly() {
        let mut set = empty();
        set.push([1u8; 32]).unwrap();

        assert!(matches!(set.id_at(1), Err(LedgerError::IndexOutOfRange)));
        assert!(matches!(
            set.position_of(&[9u8; 32]),
            Err(LedgerError::ScheduleNotFound)
        ));
    }

    #[test]
    fn push_fails_when_full() {
        let mut set = empty();
        for i in 0..MAX_SCHEDULES {
            let mut id = [0u8; 32];
            id[..8].copy_from_slice(&(i as u64).to_le_bytes());
            set.push(id).unwrap();
        }
        assert!(matches!(
            set.push([0xffu8; 32]),
            Err(LedgerError::ScheduleListFull)
        ));
        assert_eq!(set.count as usize, MAX_SCHEDULES);
    }
}
