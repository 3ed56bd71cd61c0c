//! # Lotto Settle
//!
//! Matching and settlement engine for a 6/45 numbers lottery.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: Ticket, Draw, PrizeTier, PurchaseAmount, SettlementReceipt
//! - **Generator**: Random ticket issuance over a pluggable random source
//! - **Validator**: Raw input lines into domain values
//! - **Engine**: Ticket-vs-draw classification
//! - **Settlement**: Per-tier counts, total payout and earning rate
//! - **Session**: One-way state machine tying the steps together
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Classification and settlement are pure functions
//! 2. **No Floating Point**: The earning rate uses `rust_decimal`
//! 3. **No I/O**: Reading input and printing reports belong to the caller
//! 4. **Fail Fast**: Every validation error is returned immediately

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy
pub mod error;

/// Core data types: Ticket, Draw, PrizeTier, receipts
pub mod types;

/// Ticket generation
pub mod generator;

/// Input validation
pub mod validator;

/// Match engine: ticket classification
pub mod engine;

/// Settlement aggregation
pub mod settlement;

/// Session state machine
pub mod session;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{LottoError, Result};
pub use types::{Draw, PrizeTier, PurchaseAmount, SettlementReceipt, Ticket, WinningNumbers};
pub use generator::{RandomSource, RngSource, TicketGenerator};
pub use engine::{classify, MatchResult};
pub use settlement::{settle, Settlement, TierTally};
pub use session::{Report, Session, SessionState};
