pub mod ledger;
pub mod schedule;
pub mod schedule_set;

pub use ledger::*;
pub use schedule::*;
pub use schedule_set::*;
