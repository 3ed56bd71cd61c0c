//! One purchase-and-settlement session.
//!
//! ## State Machine
//!
//! ```text
//! AwaitingAmount -> IssuingTickets -> AwaitingWinningNumbers -> AwaitingBonus
//!     -> Settling -> Reported -> Terminated
//! ```
//!
//! Transitions only move forward and only on successful validation. A
//! validation failure terminates the session and returns the error; calling
//! a step in the wrong state returns `OutOfOrder` and leaves the state alone.
//!
//! ## Example
//!
//! ```
//! use lotto_settle::generator::{RngSource, TicketGenerator};
//! use lotto_settle::session::{Session, SessionState};
//!
//! let mut generator = TicketGenerator::new(RngSource::thread());
//! let mut session = Session::new();
//!
//! let tickets = session.submit_amount("3000", &mut generator).unwrap();
//! assert_eq!(tickets.len(), 3);
//!
//! session.submit_winning_numbers("1,2,3,4,5,6").unwrap();
//! session.submit_bonus("7").unwrap();
//! let report = session.settle().unwrap();
//! assert_eq!(report.settlement.ticket_count(), 3);
//!
//! session.finish();
//! assert_eq!(session.state(), SessionState::Terminated);
//! ```

use std::fmt;

use crate::error::{LottoError, Result};
use crate::generator::{RandomSource, TicketGenerator};
use crate::settlement::{settle, Settlement};
use crate::types::{Draw, PurchaseAmount, SettlementReceipt, Ticket, WinningNumbers};
use crate::validator::{parse_bonus_number, parse_winning_numbers, validate_purchase_amount};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    AwaitingAmount,
    IssuingTickets,
    AwaitingWinningNumbers,
    AwaitingBonus,
    Settling,
    Reported,
    Terminated,
}

impl SessionState {
    pub fn name(self) -> &'static str {
        match self {
            SessionState::AwaitingAmount => "AwaitingAmount",
            SessionState::IssuingTickets => "IssuingTickets",
            SessionState::AwaitingWinningNumbers => "AwaitingWinningNumbers",
            SessionState::AwaitingBonus => "AwaitingBonus",
            SessionState::Settling => "Settling",
            SessionState::Reported => "Reported",
            SessionState::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything handed to the report sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Tickets in issue order
    pub tickets: Vec<Ticket>,
    pub draw: Draw,
    pub settlement: Settlement,
    pub receipt: SettlementReceipt,
}

/// A single player's session.
///
/// Owns its tickets, draw and settlement exclusively.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    amount: Option<PurchaseAmount>,
    tickets: Vec<Ticket>,
    winning: Option<WinningNumbers>,
    draw: Option<Draw>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session awaiting the purchase amount
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingAmount,
            amount: None,
            tickets: Vec::new(),
            winning: None,
            draw: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Tickets issued so far, in issue order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn amount(&self) -> Option<PurchaseAmount> {
        self.amount
    }

    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    fn expect_state(&self, expected: SessionState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(LottoError::OutOfOrder {
                operation,
                state: self.state.name(),
            })
        }
    }

    /// Run a validation step; a failure terminates the session
    fn guard<T>(&mut self, step: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        step(self).map_err(|err| {
            self.state = SessionState::Terminated;
            err
        })
    }

    /// Validate the purchase amount and issue the tickets it buys.
    ///
    /// Returns the issued tickets in order.
    pub fn submit_amount<S: RandomSource>(
        &mut self,
        raw: &str,
        generator: &mut TicketGenerator<S>,
    ) -> Result<&[Ticket]> {
        self.expect_state(SessionState::AwaitingAmount, "submit_amount")?;

        self.guard(|session| {
            let amount = validate_purchase_amount(raw)?;
            session.amount = Some(amount);
            session.state = SessionState::IssuingTickets;

            session.tickets = generator.issue_for(amount)?;
            session.state = SessionState::AwaitingWinningNumbers;
            Ok(())
        })?;

        Ok(&self.tickets)
    }

    /// Parse and store the winning numbers
    pub fn submit_winning_numbers(&mut self, raw: &str) -> Result<WinningNumbers> {
        self.expect_state(SessionState::AwaitingWinningNumbers, "submit_winning_numbers")?;

        self.guard(|session| {
            let winning = parse_winning_numbers(raw)?;
            session.winning = Some(winning);
            session.state = SessionState::AwaitingBonus;
            Ok(winning)
        })
    }

    /// Parse the bonus number and fix the draw
    pub fn submit_bonus(&mut self, raw: &str) -> Result<Draw> {
        self.expect_state(SessionState::AwaitingBonus, "submit_bonus")?;

        self.guard(|session| {
            let winning = session.winning.ok_or(LottoError::OutOfOrder {
                operation: "submit_bonus",
                state: SessionState::AwaitingBonus.name(),
            })?;
            let bonus = parse_bonus_number(raw, &winning)?;
            let draw = Draw::new(winning, bonus)?;
            session.draw = Some(draw);
            session.state = SessionState::Settling;
            Ok(draw)
        })
    }

    /// Settle every issued ticket and produce the report
    pub fn settle(&mut self) -> Result<Report> {
        self.expect_state(SessionState::Settling, "settle")?;

        self.guard(|session| {
            let (amount, draw) = match (session.amount, session.draw) {
                (Some(amount), Some(draw)) => (amount, draw),
                _ => {
                    return Err(LottoError::OutOfOrder {
                        operation: "settle",
                        state: SessionState::Settling.name(),
                    })
                }
            };

            let settlement = settle(&session.tickets, &draw, amount.value())?;
            let receipt = settlement.receipt(&session.tickets, &draw)?;
            session.state = SessionState::Reported;

            Ok(Report {
                tickets: session.tickets.clone(),
                draw,
                settlement,
                receipt,
            })
        })
    }

    /// End the session. Valid from any state.
    pub fn finish(&mut self) {
        self.state = SessionState::Terminated;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
