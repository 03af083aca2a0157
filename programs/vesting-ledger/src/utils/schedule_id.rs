//! Content-derived schedule identifiers.
//!
//! `id = blake3(beneficiary || index_le)`: the same `(holder, index)` pair
//! always maps to the same id, so a schedule can be located without a
//! secondary counter lookup. The id doubles as the schedule PDA seed.

use anchor_lang::prelude::Pubkey;

/// Id for the holder's schedule at sequence `index`.
pub fn schedule_id(beneficiary: &Pubkey, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(beneficiary.as_ref());
    hasher.update(&index.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Id the holder's next schedule will receive, given their current count.
pub fn next_schedule_id(beneficiary: &Pubkey, holder_count: u64) -> [u8; 32] {
    schedule_id(beneficiary, holder_count)
}
