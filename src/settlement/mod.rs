//! Settlement: folds ticket classifications into the final statistics.
//!
//! ## Overview
//!
//! Settlement maps every ticket to its tier with the match engine, then
//! reduces the tiers into per-tier counts. Totals and the earning rate are
//! derived once from the finished counts, so a [`Settlement`] is never
//! observed half-built.
//!
//! ## Example
//!
//! ```
//! use lotto_settle::settlement::settle;
//! use lotto_settle::types::{Draw, PrizeTier, Ticket, WinningNumbers};
//!
//! let draw = Draw::new(WinningNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap(), 7).unwrap();
//! let tickets = vec![
//!     Ticket::new(&[1, 2, 3, 40, 41, 42]).unwrap(),
//!     Ticket::new(&[10, 11, 12, 13, 14, 15]).unwrap(),
//! ];
//!
//! let settlement = settle(&tickets, &draw, 2_000).unwrap();
//! assert_eq!(settlement.count(PrizeTier::Fifth), 1);
//! assert_eq!(settlement.total_payout(), 5_000);
//! assert_eq!(settlement.earning_rate().to_string(), "250.0");
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::engine::classify;
use crate::error::{LottoError, Result};
use crate::types::rate::{earning_rate, rate_to_tenths};
use crate::types::{Draw, PrizeTier, Ticket, SettlementReceipt};

/// Payout and number of winners for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTally {
    /// Fixed payout per winning ticket in won
    pub payout: u64,
    /// Winning tickets in this tier
    pub count: u64,
}

impl TierTally {
    /// Payout times count, or `None` on overflow
    pub fn subtotal(&self) -> Option<u64> {
        self.payout.checked_mul(self.count)
    }
}

/// Final statistics of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// One entry per winning tier, weakest first
    tallies: BTreeMap<PrizeTier, TierTally>,

    ticket_count: u64,

    purchase_amount: u64,

    total_payout: u64,

    /// Percent, rounded to one decimal place
    earning_rate: Decimal,
}

impl Settlement {
    /// Tally for a tier (always present for winning tiers)
    pub fn tally(&self, tier: PrizeTier) -> Option<&TierTally> {
        self.tallies.get(&tier)
    }

    /// Winning tickets in a tier (0 for `PrizeTier::None`)
    pub fn count(&self, tier: PrizeTier) -> u64 {
        self.tally(tier).map_or(0, |tally| tally.count)
    }

    /// Tallies in report order (weakest tier first)
    pub fn tallies(&self) -> impl Iterator<Item = (PrizeTier, &TierTally)> {
        self.tallies.iter().map(|(tier, tally)| (*tier, tally))
    }

    #[inline]
    pub fn ticket_count(&self) -> u64 {
        self.ticket_count
    }

    #[inline]
    pub fn purchase_amount(&self) -> u64 {
        self.purchase_amount
    }

    #[inline]
    pub fn total_payout(&self) -> u64 {
        self.total_payout
    }

    #[inline]
    pub fn earning_rate(&self) -> Decimal {
        self.earning_rate
    }

    /// Tickets that won any prize
    pub fn winning_tickets(&self) -> u64 {
        self.tallies.values().map(|tally| tally.count).sum()
    }

    /// Build the fixed-size receipt for these tickets and draw.
    ///
    /// `tickets` should be the same batch that was settled; the digest commits
    /// to them in the given order.
    pub fn receipt(&self, tickets: &[Ticket], draw: &Draw) -> Result<SettlementReceipt> {
        let earning_rate_tenths =
            rate_to_tenths(self.earning_rate).ok_or(LottoError::PayoutOverflow)?;

        Ok(SettlementReceipt {
            ticket_count: self.ticket_count,
            purchase_amount: self.purchase_amount,
            total_payout: self.total_payout,
            earning_rate_tenths,
            fifth_count: self.count(PrizeTier::Fifth),
            fourth_count: self.count(PrizeTier::Fourth),
            third_count: self.count(PrizeTier::Third),
            second_count: self.count(PrizeTier::Second),
            first_count: self.count(PrizeTier::First),
            digest: SettlementReceipt::compute_digest(tickets, draw),
        })
    }
}

/// Settle a batch of tickets against a draw.
///
/// # Arguments
///
/// * `tickets` - Every ticket issued in the session
/// * `draw` - The winning draw
/// * `purchase_amount` - Amount spent in won
///
/// # Errors
///
/// * `DivisionByZero` - If `purchase_amount` is zero
/// * `PayoutOverflow` - If the total payout does not fit in `u64`
pub fn settle(tickets: &[Ticket], draw: &Draw, purchase_amount: u64) -> Result<Settlement> {
    if purchase_amount == 0 {
        return Err(LottoError::DivisionByZero);
    }

    let counts = tickets
        .iter()
        .map(|ticket| classify(ticket, draw))
        .filter_map(PrizeTier::winning_index)
        .fold([0u64; 5], |mut counts, index| {
            counts[index] += 1;
            counts
        });

    let tallies: BTreeMap<PrizeTier, TierTally> = PrizeTier::WINNING
        .iter()
        .zip(counts)
        .map(|(&tier, count)| {
            (
                tier,
                TierTally {
                    payout: tier.payout(),
                    count,
                },
            )
        })
        .collect();

    let total_payout = tallies
        .values()
        .try_fold(0u64, |total, tally| total.checked_add(tally.subtotal()?))
        .ok_or(LottoError::PayoutOverflow)?;

    let earning_rate = earning_rate(total_payout, purchase_amount)?;

    Ok(Settlement {
        tallies,
        ticket_count: tickets.len() as u64,
        purchase_amount,
        total_payout,
        earning_rate,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
