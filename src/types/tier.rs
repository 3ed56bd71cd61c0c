//! Prize tiers and the fixed payout table.
//!
//! ## Ordering
//!
//! Variants are declared weakest first, so the derived `Ord` ranks tiers by
//! match strength: `None < Fifth < Fourth < Third < Second < First`.
//!
//! | Tier   | Rule                 | Payout (won)  |
//! |--------|----------------------|---------------|
//! | First  | 6 matches            | 2,000,000,000 |
//! | Second | 5 matches + bonus    | 30,000,000    |
//! | Third  | 5 matches            | 1,500,000     |
//! | Fourth | 4 matches            | 50,000        |
//! | Fifth  | 3 matches            | 5,000         |
//! | None   | 0-2 matches          | 0             |

use std::fmt;

/// Prize tier of a single ticket against a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PrizeTier {
    /// Fewer than three matches
    #[default]
    None,
    /// Three matches
    Fifth,
    /// Four matches
    Fourth,
    /// Five matches, bonus not on the ticket
    Third,
    /// Five matches, bonus on the ticket
    Second,
    /// Six matches
    First,
}

impl PrizeTier {
    /// Winning tiers in report order (weakest first)
    pub const WINNING: [PrizeTier; 5] = [
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    /// Fixed payout for this tier in won
    pub const fn payout(self) -> u64 {
        match self {
            PrizeTier::None => 0,
            PrizeTier::Fifth => 5_000,
            PrizeTier::Fourth => 50_000,
            PrizeTier::Third => 1_500_000,
            PrizeTier::Second => 30_000_000,
            PrizeTier::First => 2_000_000_000,
        }
    }

    /// Number of winning-number matches the tier requires
    pub const fn required_matches(self) -> u32 {
        match self {
            PrizeTier::None => 0,
            PrizeTier::Fifth => 3,
            PrizeTier::Fourth => 4,
            PrizeTier::Third | PrizeTier::Second => 5,
            PrizeTier::First => 6,
        }
    }

    /// Whether the tier also requires the bonus number
    pub const fn requires_bonus(self) -> bool {
        matches!(self, PrizeTier::Second)
    }

    #[inline]
    pub fn is_winning(self) -> bool {
        self != PrizeTier::None
    }

    /// Position in [`PrizeTier::WINNING`]
    pub(crate) fn winning_index(self) -> Option<usize> {
        match self {
            PrizeTier::None => None,
            PrizeTier::Fifth => Some(0),
            PrizeTier::Fourth => Some(1),
            PrizeTier::Third => Some(2),
            PrizeTier::Second => Some(3),
            PrizeTier::First => Some(4),
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrizeTier::None => write!(f, "no prize"),
            PrizeTier::Second => write!(f, "5 matches + bonus"),
            tier => write!(f, "{} matches", tier.required_matches()),
        }
    }
}
