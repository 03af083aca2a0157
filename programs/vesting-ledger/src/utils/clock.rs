//! Clock source for vesting computations.
//!
//! Production reads the cluster clock. Builds with the `mock-clock` feature
//! honor the owner-set override on the ledger account, giving tests a
//! deterministic notion of "now".

use anchor_lang::prelude::*;

use crate::state::LedgerConfig;

pub fn current_time(ledger: &LedgerConfig) -> Result<i64> {
    #[cfg(feature = "mock-clock")]
    if ledger.time_override > 0 {
        return Ok(ledger.time_override);
    }
    #[cfg(not(feature = "mock-clock"))]
    let _ = ledger;
    Ok(Clock::get()?.unix_timestamp)
}
