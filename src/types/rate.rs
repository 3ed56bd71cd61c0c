//! Decimal helpers for amounts and the earning rate.
//!
//! ## Overview
//!
//! The earning rate is `100 * total_payout / purchase_amount`, rounded to one
//! decimal place. All arithmetic goes through `rust_decimal`, so the result
//! is exact up to the final rounding and identical on every platform.
//!
//! ## Examples
//!
//! ```
//! use lotto_settle::types::rate::{earning_rate, format_rate};
//!
//! let rate = earning_rate(5_000, 8_000).unwrap();
//! assert_eq!(format_rate(rate), "62.5");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LottoError, Result};

/// Decimal places kept in the earning rate
pub const RATE_DP: u32 = 1;

/// Check that `s` is a plain decimal literal: an optional sign, one or more
/// ASCII digits, and optionally a `.` followed by one or more digits.
///
/// Digit separators (`1_000`), exponents (`1e3`) and bare dots (`.5`, `5.`)
/// are rejected.
pub fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Parse a decimal string (surrounding whitespace ignored)
///
/// # Returns
///
/// * `Some(Decimal)` - The parsed value
/// * `None` - If the string is not a plain decimal literal (see
///   [`is_decimal_literal`]) or does not fit in a `Decimal`
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if !is_decimal_literal(trimmed) {
        return None;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned).ok()
}

/// Round half-up to [`RATE_DP`] decimal places.
///
/// The result always carries exactly one decimal place, so `250` displays
/// as `250.0`.
pub fn round_rate(rate: Decimal) -> Decimal {
    let mut rounded = rate.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RATE_DP);
    rounded
}

/// Compute the earning rate in percent.
///
/// # Arguments
///
/// * `total_payout` - Sum of all prize payouts in won
/// * `purchase_amount` - Amount spent in won
///
/// # Errors
///
/// * `DivisionByZero` - If `purchase_amount` is zero
///
/// # Example
///
/// ```
/// use lotto_settle::types::rate::earning_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(earning_rate(0, 14_000).unwrap(), Decimal::ZERO);
/// assert!(earning_rate(5_000, 0).is_err());
/// ```
pub fn earning_rate(total_payout: u64, purchase_amount: u64) -> Result<Decimal> {
    if purchase_amount == 0 {
        return Err(LottoError::DivisionByZero);
    }

    let hundred = Decimal::ONE_HUNDRED;
    let rate = Decimal::from(total_payout)
        .checked_mul(hundred)
        .and_then(|scaled| scaled.checked_div(Decimal::from(purchase_amount)))
        .ok_or(LottoError::PayoutOverflow)?;

    Ok(round_rate(rate))
}

/// Earning rate in tenths of a percent (62.5% -> 625)
///
/// Returns `None` for negative values or values that do not fit in `u64`.
pub fn rate_to_tenths(rate: Decimal) -> Option<u64> {
    if rate.is_sign_negative() {
        return None;
    }
    let scaled = rate.checked_mul(Decimal::TEN)?;
    scaled.round_dp(0).to_u64()
}

/// Format a rate with exactly one decimal place
pub fn format_rate(rate: Decimal) -> String {
    format!("{:.1}", round_rate(rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1000"), Some(Decimal::from(1000)));
        assert_eq!(parse_decimal(" 14000 "), Some(Decimal::from(14000)));
        assert_eq!(parse_decimal("1000.0"), Some(Decimal::from(1000)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12a"), None);
        assert_eq!(parse_decimal("+2000"), Some(Decimal::from(2000)));
        assert_eq!(parse_decimal("-2000"), Some(Decimal::from(-2000)));
    }

    #[test]
    fn test_parse_decimal_rejects_separators_and_exponents() {
        for raw in ["1_000", "1__0_0_0", "_1000", "1e3", "1,000", ".5", "5.", "1.0.0", "--1", "+", "-"] {
            assert!(!is_decimal_literal(raw), "accepted {:?}", raw);
            assert_eq!(parse_decimal(raw), None, "parsed {:?}", raw);
        }
    }

    #[test]
    fn test_literal_too_large_for_decimal() {
        let huge = format!("1{}", "0".repeat(35));
        assert!(is_decimal_literal(&huge));
        assert_eq!(parse_decimal(&huge), None);
    }

    #[test]
    fn test_earning_rate_basic() {
        assert_eq!(format_rate(earning_rate(5_000, 8_000).unwrap()), "62.5");
        assert_eq!(format_rate(earning_rate(0, 8_000).unwrap()), "0.0");
        assert_eq!(format_rate(earning_rate(5_000, 5_000).unwrap()), "100.0");
    }

    #[test]
    fn test_earning_rate_rounds_half_up() {
        // 100 * 5000 / 3000 = 166.666...
        assert_eq!(format_rate(earning_rate(5_000, 3_000).unwrap()), "166.7");
        // 100 * 5000 / 16000 = 31.25
        assert_eq!(format_rate(earning_rate(5_000, 16_000).unwrap()), "31.3");
        // 100 * 5000 / 6000 = 83.333...
        assert_eq!(format_rate(earning_rate(5_000, 6_000).unwrap()), "83.3");
    }

    #[test]
    fn test_earning_rate_large_payout() {
        let rate = earning_rate(2_000_000_000, 1_000).unwrap();
        assert_eq!(rate, Decimal::from(200_000_000));
    }

    #[test]
    fn test_earning_rate_zero_amount() {
        assert_eq!(earning_rate(0, 0), Err(LottoError::DivisionByZero));
    }

    #[test]
    fn test_rate_keeps_one_decimal_place() {
        assert_eq!(earning_rate(0, 14_000).unwrap().to_string(), "0.0");
        assert_eq!(earning_rate(5_000, 2_000).unwrap().to_string(), "250.0");
        assert_eq!(earning_rate(5_000, 8_000).unwrap().scale(), RATE_DP);
    }

    #[test]
    fn test_rate_to_tenths() {
        assert_eq!(rate_to_tenths(Decimal::new(625, 1)), Some(625));
        assert_eq!(rate_to_tenths(Decimal::ZERO), Some(0));
        assert_eq!(rate_to_tenths(Decimal::new(-1, 0)), None);
    }
}
