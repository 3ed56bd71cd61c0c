//! Ticket-vs-draw matching.

use crate::types::{Draw, PrizeTier, Ticket};

/// Full outcome of matching one ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Ticket numbers found among the winning numbers (0..=6)
    pub match_count: u32,

    /// Whether the bonus number was checked and found on the ticket.
    /// Only evaluated at exactly five matches.
    pub bonus_matched: bool,

    /// Resulting tier
    pub tier: PrizeTier,
}

/// Count ticket numbers that are winning numbers
#[inline]
pub fn count_matches(ticket: &Ticket, draw: &Draw) -> u32 {
    (ticket.mask() & draw.winning().mask()).count_ones()
}

/// Match a ticket and report the intermediate values.
///
/// Tiers are tried strongest first. The bonus number is only looked up for a
/// tier that requires it, which means exactly five matches.
pub fn evaluate(ticket: &Ticket, draw: &Draw) -> MatchResult {
    let match_count = count_matches(ticket, draw);

    let tier = PrizeTier::WINNING
        .iter()
        .rev()
        .copied()
        .find(|tier| {
            tier.required_matches() == match_count
                && (!tier.requires_bonus() || ticket.contains(draw.bonus()))
        })
        .unwrap_or(PrizeTier::None);

    MatchResult {
        match_count,
        bonus_matched: tier.requires_bonus(),
        tier,
    }
}

/// Classify a ticket into its prize tier
#[inline]
pub fn classify(ticket: &Ticket, draw: &Draw) -> PrizeTier {
    evaluate(ticket, draw).tier
}

// ============================================================================
// Unit Tests
// ============================================================================
