//! Program-wide constants.

/// Number of role pools (Advisor, Partner, Mentor).
pub const ROLE_COUNT: usize = 3;

/// Denominator for all percentage arithmetic.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Max schedule ids stored in the global registry PDA.
///
/// Bounded so the account fits in a single system-program allocation.
pub const MAX_SCHEDULES: usize = 300;
