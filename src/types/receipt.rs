//! Settlement receipt handed to the report sink.
//!
//! The receipt is a fixed-size summary of one settled session, including a
//! digest that commits to the issued tickets and the draw.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::{Draw, Ticket};

/// Fixed-size settlement summary.
///
/// ## Digest
///
/// The 32-byte digest is SHA-256 over every ticket's six numbers in issue
/// order, followed by the six winning numbers and the bonus number. Two
/// sessions with the same tickets and draw produce the same digest.
///
/// ## Example
///
/// ```
/// use lotto_settle::types::SettlementReceipt;
///
/// let receipt = SettlementReceipt::default();
/// assert!(receipt.is_empty());
/// assert_eq!(receipt.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SettlementReceipt {
    /// Number of tickets settled
    pub ticket_count: u64,

    /// Amount spent in won
    pub purchase_amount: u64,

    /// Sum of all payouts in won
    pub total_payout: u64,

    /// Earning rate in tenths of a percent (62.5% = 625)
    pub earning_rate_tenths: u64,

    /// Winning counts per tier
    pub fifth_count: u64,
    pub fourth_count: u64,
    pub third_count: u64,
    pub second_count: u64,
    pub first_count: u64,

    /// SHA-256 over tickets and draw
    pub digest: [u8; 32],
}

impl SettlementReceipt {
    /// Compute the digest committing to the tickets and the draw
    pub fn compute_digest(tickets: &[Ticket], draw: &Draw) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for ticket in tickets {
            hasher.update(ticket.numbers());
        }
        hasher.update(draw.winning().numbers());
        hasher.update([draw.bonus()]);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Check if no tickets were settled
    pub fn is_empty(&self) -> bool {
        self.ticket_count == 0
    }

    /// Total number of winning tickets
    pub fn winning_tickets(&self) -> u64 {
        self.fifth_count + self.fourth_count + self.third_count + self.second_count + self.first_count
    }
}
