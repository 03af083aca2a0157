pub mod calculate_pools;
pub mod create_schedule;
pub mod emit_vesting_quote;
pub mod fund;
pub mod initialize_ledger;
pub mod release;
pub mod revoke;
pub mod set_tge;
pub mod withdraw;
pub mod withdraw_from_tge_bank;

#[cfg(feature = "mock-clock")]
pub mod set_current_time;

pub use calculate_pools::*;
pub use create_schedule::*;
pub use emit_vesting_quote::*;
pub use fund::*;
pub use initialize_ledger::*;
pub use release::*;
pub use revoke::*;
pub use set_tge::*;
pub use withdraw::*;
pub use withdraw_from_tge_bank::*;

#[cfg(feature = "mock-clock")]
pub use set_current_time::*;
