//! Error taxonomy for the lottery core.
//!
//! Every validator fails fast: errors are returned to the caller as soon as
//! the first violation is found and nothing is retried inside the crate.

use thiserror::Error;

/// Errors raised by validation, generation, settlement and the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LottoError {
    /// Input is empty, not numeric, has the wrong cardinality, or repeats a value
    #[error("format error: {0}")]
    Format(String),

    /// A number lies outside [1, 45], or an amount is not positive
    #[error("range error: {0}")]
    Range(String),

    /// The purchase amount is not a multiple of the unit price
    #[error("amount {amount} is not a multiple of {unit}")]
    Divisibility { amount: String, unit: u64 },

    /// The bonus number is already one of the winning numbers
    #[error("bonus number {0} is already a winning number")]
    Duplicate(u8),

    /// The random source broke its contract
    #[error("ticket generation failed: {0}")]
    Generation(String),

    /// Settlement was invoked with a zero purchase amount
    #[error("cannot compute earning rate for a zero purchase amount")]
    DivisionByZero,

    /// Summing payouts overflowed u64
    #[error("total payout overflowed")]
    PayoutOverflow,

    /// A session step was invoked in the wrong state
    #[error("{operation} is not allowed in state {state}")]
    OutOfOrder {
        operation: &'static str,
        state: &'static str,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LottoError>;
