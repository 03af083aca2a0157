pub mod clock;
pub mod schedule_id;
pub mod vesting;
