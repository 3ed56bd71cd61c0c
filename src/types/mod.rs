//! Core data types for the lottery engine
//!
//! All types are immutable value objects; constructors validate their
//! invariants so downstream code never re-checks them.
//!
//! ## Types
//!
//! - [`Ticket`]: Six distinct numbers from [1, 45], sorted
//! - [`WinningNumbers`] / [`Draw`]: The winning numbers plus a bonus number
//! - [`PrizeTier`]: Match strength and its fixed payout
//! - [`PurchaseAmount`]: Validated amount spent
//! - [`SettlementReceipt`]: Fixed-size settlement summary

pub mod pool;
mod ticket;
mod draw;
mod tier;
mod amount;
mod receipt;
pub mod rate;

// Re-export all types at module level
pub use ticket::Ticket;
pub use draw::{Draw, WinningNumbers};
pub use tier::PrizeTier;
pub use amount::PurchaseAmount;
pub use receipt::SettlementReceipt;
