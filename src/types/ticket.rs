//! Lottery ticket type.
//!
//! A ticket is six distinct numbers from [1, 45], stored sorted ascending.
//! Construction validates the invariant, so every `Ticket` in the crate is
//! well-formed and immutable.

use std::fmt;

use crate::error::{LottoError, Result};
use crate::types::pool::{in_range, TICKET_SIZE};

/// Build a 64-bit membership mask for a set of lottery numbers.
///
/// Bit N is set when number N is present. Numbers are at most 45, so the
/// mask always fits.
#[inline]
pub(crate) fn mask_of(numbers: &[u8]) -> u64 {
    numbers.iter().fold(0u64, |mask, &n| mask | (1u64 << n))
}

/// Validate six raw numbers and return them sorted.
///
/// Shared by [`Ticket`] and the winning-number set of a draw.
///
/// Checks, in order: cardinality (Format), range (Range), distinctness (Format).
pub(crate) fn validate_six(numbers: &[i64]) -> Result<[u8; TICKET_SIZE]> {
    if numbers.len() != TICKET_SIZE {
        return Err(LottoError::Format(format!(
            "expected {} numbers, got {}",
            TICKET_SIZE,
            numbers.len()
        )));
    }

    if let Some(&bad) = numbers.iter().find(|&&n| !in_range(n)) {
        return Err(LottoError::Range(format!("{} is outside [1, 45]", bad)));
    }

    let mut sorted = [0u8; TICKET_SIZE];
    for (slot, &n) in sorted.iter_mut().zip(numbers) {
        *slot = n as u8;
    }
    sorted.sort_unstable();

    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(LottoError::Format(format!(
            "numbers must be distinct: {:?}",
            numbers
        )));
    }

    Ok(sorted)
}

/// A purchased lottery ticket.
///
/// ## Example
///
/// ```
/// use lotto_settle::types::Ticket;
///
/// let ticket = Ticket::new(&[6, 5, 4, 3, 2, 1]).unwrap();
/// assert_eq!(ticket.numbers(), &[1, 2, 3, 4, 5, 6]);
/// assert!(ticket.contains(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    /// Sorted ascending, distinct, each in [1, 45]
    numbers: [u8; TICKET_SIZE],

    /// Membership mask (bit N set for number N)
    mask: u64,
}

impl Ticket {
    /// Create a ticket from six numbers in any order.
    ///
    /// Fails with `Format` on the wrong count or repeated numbers, and with
    /// `Range` when a number is outside [1, 45].
    pub fn new(numbers: &[u8]) -> Result<Self> {
        let widened: Vec<i64> = numbers.iter().map(|&n| n as i64).collect();
        let numbers = validate_six(&widened)?;
        Ok(Self {
            numbers,
            mask: mask_of(&numbers),
        })
    }

    /// The ticket's numbers, sorted ascending
    #[inline]
    pub fn numbers(&self) -> &[u8; TICKET_SIZE] {
        &self.numbers
    }

    /// Membership mask used by the match engine
    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Check whether the ticket holds a number
    #[inline]
    pub fn contains(&self, number: u8) -> bool {
        number < 64 && self.mask & (1u64 << number) != 0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_is_sorted() {
        let ticket = Ticket::new(&[45, 3, 17, 1, 22, 9]).unwrap();
        assert_eq!(ticket.numbers(), &[1, 3, 9, 17, 22, 45]);
    }

    #[test]
    fn test_ticket_mask() {
        let ticket = Ticket::new(&[1, 2, 3, 4, 5, 45]).unwrap();
        assert_eq!(ticket.mask().count_ones(), 6);
        assert!(ticket.contains(45));
        assert!(!ticket.contains(44));
        assert!(!ticket.contains(200));
    }

    #[test]
    fn test_ticket_wrong_count() {
        assert!(matches!(Ticket::new(&[1, 2, 3, 4, 5]), Err(LottoError::Format(_))));
        assert!(matches!(
            Ticket::new(&[1, 2, 3, 4, 5, 6, 7]),
            Err(LottoError::Format(_))
        ));
    }

    #[test]
    fn test_ticket_duplicates() {
        assert!(matches!(
            Ticket::new(&[1, 2, 3, 4, 5, 5]),
            Err(LottoError::Format(_))
        ));
    }

    #[test]
    fn test_ticket_out_of_range() {
        assert!(matches!(
            Ticket::new(&[0, 2, 3, 4, 5, 6]),
            Err(LottoError::Range(_))
        ));
        assert!(matches!(
            Ticket::new(&[1, 2, 3, 4, 5, 46]),
            Err(LottoError::Range(_))
        ));
    }

    #[test]
    fn test_ticket_display() {
        let ticket = Ticket::new(&[8, 21, 23, 41, 42, 43]).unwrap();
        assert_eq!(ticket.to_string(), "[8, 21, 23, 41, 42, 43]");
    }

    #[test]
    fn test_permutations_build_equal_tickets() {
        let a = Ticket::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        let b = Ticket::new(&[6, 4, 2, 5, 3, 1]).unwrap();
        assert_eq!(a, b);
    }
}
