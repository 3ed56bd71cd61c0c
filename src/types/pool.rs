//! Number pool constants.
//!
//! The lottery format is fixed: six numbers drawn from [1, 45] plus one bonus
//! number, sold at 1,000 won per ticket.

use std::ops::RangeInclusive;

/// Smallest number that can appear on a ticket or draw
pub const NUMBER_MIN: u8 = 1;

/// Largest number that can appear on a ticket or draw
pub const NUMBER_MAX: u8 = 45;

/// Numbers per ticket (and winning numbers per draw)
pub const TICKET_SIZE: usize = 6;

/// Price of a single ticket in won
pub const UNIT_PRICE: u64 = 1_000;

/// Most tickets a single purchase may issue
pub const MAX_TICKETS: u64 = 1_000_000;

/// Largest accepted purchase amount in won
pub const MAX_PURCHASE: u64 = MAX_TICKETS * UNIT_PRICE;

/// The closed range of valid numbers
#[inline]
pub fn number_range() -> RangeInclusive<u8> {
    NUMBER_MIN..=NUMBER_MAX
}

/// Check whether a raw integer is a valid lottery number
#[inline]
pub fn in_range(value: i64) -> bool {
    u8::try_from(value).map_or(false, |n| number_range().contains(&n))
}
