//! Match engine: classifies a ticket against a draw.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same ticket and draw always yield the same tier
//! 2. **Purity**: No state, no side effects, no I/O
//! 3. **Bitmask Matching**: Set intersection is one AND plus a popcount
//!
//! ## Tier Rules
//!
//! | Matches | Bonus on ticket | Tier   |
//! |---------|-----------------|--------|
//! | 6       | -               | First  |
//! | 5       | yes             | Second |
//! | 5       | no              | Third  |
//! | 4       | -               | Fourth |
//! | 3       | -               | Fifth  |
//! | 0-2     | -               | None   |
//!
//! The bonus number is only consulted at exactly five matches. Four matches
//! plus the bonus is still Fourth.
//!
//! ## Example
//!
//! ```
//! use lotto_settle::engine::classify;
//! use lotto_settle::types::{Draw, PrizeTier, Ticket, WinningNumbers};
//!
//! let winning = WinningNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap();
//! let draw = Draw::new(winning, 7).unwrap();
//!
//! let ticket = Ticket::new(&[1, 2, 3, 4, 5, 7]).unwrap();
//! assert_eq!(classify(&ticket, &draw), PrizeTier::Second);
//! ```

pub mod matcher;

pub use matcher::{classify, count_matches, evaluate, MatchResult};
