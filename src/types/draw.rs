//! Winning draw: six winning numbers plus one bonus number.

use crate::error::{LottoError, Result};
use crate::types::pool::{in_range, TICKET_SIZE};
use crate::types::ticket::{mask_of, validate_six};

/// The six winning numbers of a draw, sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningNumbers {
    numbers: [u8; TICKET_SIZE],
    mask: u64,
}

impl WinningNumbers {
    /// Validate six winning numbers (same rules as a ticket)
    pub fn new(numbers: &[u8]) -> Result<Self> {
        let widened: Vec<i64> = numbers.iter().map(|&n| n as i64).collect();
        Self::from_raw(&widened)
    }

    /// Validate already-parsed integers that may still be out of range
    pub(crate) fn from_raw(numbers: &[i64]) -> Result<Self> {
        let numbers = validate_six(numbers)?;
        Ok(Self {
            numbers,
            mask: mask_of(&numbers),
        })
    }

    #[inline]
    pub fn numbers(&self) -> &[u8; TICKET_SIZE] {
        &self.numbers
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    #[inline]
    pub fn contains(&self, number: u8) -> bool {
        number < 64 && self.mask & (1u64 << number) != 0
    }
}

/// A complete draw.
///
/// Invariant: the bonus number is in [1, 45] and is not a winning number.
///
/// ## Example
///
/// ```
/// use lotto_settle::types::{Draw, WinningNumbers};
///
/// let winning = WinningNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap();
/// let draw = Draw::new(winning, 7).unwrap();
/// assert_eq!(draw.bonus(), 7);
///
/// assert!(Draw::new(winning, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw {
    winning: WinningNumbers,
    bonus: u8,
}

impl Draw {
    /// Combine winning numbers with a bonus number.
    ///
    /// Fails with `Range` if the bonus is outside [1, 45] and with
    /// `Duplicate` if it is already a winning number.
    pub fn new(winning: WinningNumbers, bonus: u8) -> Result<Self> {
        if !in_range(bonus as i64) {
            return Err(LottoError::Range(format!(
                "bonus {} is outside [1, 45]",
                bonus
            )));
        }
        if winning.contains(bonus) {
            return Err(LottoError::Duplicate(bonus));
        }
        Ok(Self { winning, bonus })
    }

    #[inline]
    pub fn winning(&self) -> &WinningNumbers {
        &self.winning
    }

    #[inline]
    pub fn bonus(&self) -> u8 {
        self.bonus
    }
}
