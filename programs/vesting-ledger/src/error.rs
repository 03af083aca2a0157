use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Invalid schedule parameters (duration must be > 0, slice period >= 1, amount > 0)")]
    InvalidScheduleParameters,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid percentage (must be within [0, 100])")]
    InvalidPercentage,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Schedule id does not match the beneficiary and holder index")]
    ScheduleIdMismatch,

    #[msg("Schedule registry is full")]
    ScheduleListFull,

    #[msg("Schedule not found")]
    ScheduleNotFound,

    #[msg("Index out of range")]
    IndexOutOfRange,

    #[msg("Cannot commit tokens: amount exceeds withdrawable balance")]
    InsufficientWithdrawableBalance,

    #[msg("Cannot release tokens: not enough vested tokens")]
    InsufficientVestedAmount,

    #[msg("Schedule is not revocable or already revoked")]
    ScheduleNotRevocable,

    #[msg("Withdrawal exceeds the role's TGE bank")]
    InsufficientTGEBank,

    #[msg("Pools are frozen: recalculation policy allows a single computation")]
    PoolsFrozen,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
