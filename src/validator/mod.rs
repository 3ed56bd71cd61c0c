//! Input validation.
//!
//! Turns raw input lines into domain values. Each function fails fast with
//! the first violation it finds; retry policy belongs to the caller.
//!
//! ## Check Order
//!
//! | Input           | Checks (in order)                                   |
//! |-----------------|-----------------------------------------------------|
//! | Purchase amount | numeric (Format), multiple of 1000 (Divisibility), positive (Range) |
//! | Winning numbers | numeric tokens (Format), six tokens (Format), range (Range), distinct (Format) |
//! | Bonus number    | numeric (Format), range (Range), not a winning number (Duplicate) |

use rust_decimal::prelude::*;

use crate::error::{LottoError, Result};
use crate::types::pool::{in_range, UNIT_PRICE};
use crate::types::rate::{is_decimal_literal, parse_decimal};
use crate::types::{PurchaseAmount, WinningNumbers};

/// Separator between winning numbers
pub const DELIMITER: char = ',';

/// Validate a purchase amount line.
///
/// # Example
///
/// ```
/// use lotto_settle::validator::validate_purchase_amount;
///
/// let amount = validate_purchase_amount("14000").unwrap();
/// assert_eq!(amount.ticket_count(), 14);
///
/// assert!(validate_purchase_amount("1500").is_err());
/// ```
pub fn validate_purchase_amount(raw: &str) -> Result<PurchaseAmount> {
    let trimmed = raw.trim();
    if !is_decimal_literal(trimmed) {
        return Err(LottoError::Format(format!("{:?} is not a number", raw)));
    }

    let amount = match parse_decimal(trimmed) {
        Some(amount) => amount,
        None => return Err(oversized_amount(trimmed)),
    };

    let unit = Decimal::from(UNIT_PRICE);
    if !(amount % unit).is_zero() {
        return Err(LottoError::Divisibility {
            amount: trimmed.to_string(),
            unit: UNIT_PRICE,
        });
    }

    if amount <= Decimal::ZERO {
        return Err(LottoError::Range(format!(
            "purchase amount must be positive, got {}",
            trimmed
        )));
    }

    let amount = amount
        .to_u64()
        .ok_or_else(|| LottoError::Range(format!("purchase amount {} is too large", trimmed)))?;

    PurchaseAmount::new(amount)
}

/// Classify a well-formed literal too long for `Decimal`.
///
/// Divisibility is read off the digits: whole thousands end in `000` and
/// carry an all-zero fraction.
fn oversized_amount(literal: &str) -> LottoError {
    let unsigned = literal.trim_start_matches(['+', '-']);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if !(whole.ends_with("000") && fraction.bytes().all(|b| b == b'0')) {
        return LottoError::Divisibility {
            amount: literal.to_string(),
            unit: UNIT_PRICE,
        };
    }
    if literal.starts_with('-') {
        return LottoError::Range(format!("purchase amount must be positive, got {}", literal));
    }
    LottoError::Range(format!("purchase amount {} is too large", literal))
}

/// Parse one integer token, trimming surrounding whitespace
fn parse_number(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| LottoError::Format(format!("{:?} is not an integer", trimmed)))
}

/// Parse the winning-numbers line, e.g. `"1,2,3,4,5,6"`.
///
/// # Example
///
/// ```
/// use lotto_settle::validator::parse_winning_numbers;
///
/// let winning = parse_winning_numbers("6, 5, 4, 3, 2, 1").unwrap();
/// assert_eq!(winning.numbers(), &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn parse_winning_numbers(raw: &str) -> Result<WinningNumbers> {
    let numbers = raw
        .split(DELIMITER)
        .map(parse_number)
        .collect::<Result<Vec<i64>>>()?;

    WinningNumbers::from_raw(&numbers)
}

/// Parse the bonus number line against the already-parsed winning numbers
pub fn parse_bonus_number(raw: &str, winning: &WinningNumbers) -> Result<u8> {
    let value = parse_number(raw)?;

    if !in_range(value) {
        return Err(LottoError::Range(format!("bonus {} is outside [1, 45]", value)));
    }

    let bonus = value as u8;
    if winning.contains(bonus) {
        return Err(LottoError::Duplicate(bonus));
    }

    Ok(bonus)
}

// ============================================================================
// Unit Tests
// ============================================================================
