//! Purchase amount in won.

use crate::error::{LottoError, Result};
use crate::types::pool::{MAX_PURCHASE, MAX_TICKETS, UNIT_PRICE};

/// A validated purchase amount: positive and a multiple of [`UNIT_PRICE`].
///
/// ## Example
///
/// ```
/// use lotto_settle::types::PurchaseAmount;
///
/// let amount = PurchaseAmount::new(14_000).unwrap();
/// assert_eq!(amount.ticket_count(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseAmount(u64);

impl PurchaseAmount {
    /// Validate an amount.
    ///
    /// Fails with `Divisibility` if it is not a multiple of 1,000 and with
    /// `Range` if it is zero or buys more than [`MAX_TICKETS`] tickets.
    pub fn new(amount: u64) -> Result<Self> {
        if amount % UNIT_PRICE != 0 {
            return Err(LottoError::Divisibility {
                amount: amount.to_string(),
                unit: UNIT_PRICE,
            });
        }
        if amount == 0 {
            return Err(LottoError::Range(
                "purchase amount must be positive".to_string(),
            ));
        }
        if amount > MAX_PURCHASE {
            return Err(LottoError::Range(format!(
                "purchase amount {} exceeds {} tickets",
                amount, MAX_TICKETS
            )));
        }
        Ok(Self(amount))
    }

    /// Amount in won
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Number of tickets this amount buys
    #[inline]
    pub fn ticket_count(self) -> u64 {
        self.0 / UNIT_PRICE
    }
}
