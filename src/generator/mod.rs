//! Ticket generation.
//!
//! ## Random Source
//!
//! Generation draws on a [`RandomSource`] that returns `count` distinct
//! integers sampled uniformly without replacement from `[low, high]`. The
//! default [`RngSource`] wraps any `rand::Rng`, so tests can plug in a seeded
//! generator and get reproducible batches.
//!
//! ## Example
//!
//! ```
//! use lotto_settle::generator::{RngSource, TicketGenerator};
//!
//! let mut generator = TicketGenerator::new(RngSource::thread());
//! let tickets = generator.issue_batch(5).unwrap();
//! assert_eq!(tickets.len(), 5);
//! ```

pub mod source;

pub use source::{RandomSource, RngSource};

use crate::error::{LottoError, Result};
use crate::types::pool::{MAX_TICKETS, NUMBER_MAX, NUMBER_MIN, TICKET_SIZE};
use crate::types::{PurchaseAmount, Ticket};

/// Issues tickets from a random source
#[derive(Debug)]
pub struct TicketGenerator<S: RandomSource> {
    source: S,
}

impl<S: RandomSource> TicketGenerator<S> {
    /// Create a generator over the given source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Issue one ticket.
    ///
    /// # Errors
    ///
    /// * `Generation` - If the source returns fewer than six distinct values,
    ///   or values outside [1, 45]
    pub fn issue(&mut self) -> Result<Ticket> {
        let picked = self
            .source
            .pick_unique_subset(NUMBER_MIN, NUMBER_MAX, TICKET_SIZE);

        Ticket::new(&picked).map_err(|err| {
            LottoError::Generation(format!("source returned {:?}: {}", picked, err))
        })
    }

    /// Issue `count` tickets in order.
    ///
    /// Fails on the first bad ticket; no partial batch is returned.
    ///
    /// # Errors
    ///
    /// * `Range` - If `count` exceeds [`MAX_TICKETS`]
    /// * `Generation` - If the source misbehaves
    pub fn issue_batch(&mut self, count: u64) -> Result<Vec<Ticket>> {
        if count > MAX_TICKETS {
            return Err(LottoError::Range(format!(
                "cannot issue {} tickets, limit is {}",
                count, MAX_TICKETS
            )));
        }

        let mut tickets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            tickets.push(self.issue()?);
        }
        Ok(tickets)
    }

    /// Issue as many tickets as the amount buys
    pub fn issue_for(&mut self, amount: PurchaseAmount) -> Result<Vec<Ticket>> {
        self.issue_batch(amount.ticket_count())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
