//! End-to-end tests for the lottery engine.
//!
//! These tests verify:
//! 1. The fixed scenarios (ticket counts, tie-breaks, earning rate)
//! 2. Classification properties over large seeded batches
//! 3. Settlement is reproducible for a given seed
//!
//! ## Running
//!
//! ```bash
//! cargo test --release --test settlement_test -- --nocapture
//! ```

use std::time::Instant;

use lotto_settle::engine::{count_matches, evaluate};
use lotto_settle::validator::{parse_bonus_number, parse_winning_numbers, validate_purchase_amount};
use lotto_settle::{
    classify, settle, Draw, LottoError, PrizeTier, RngSource, Session, SessionState, Ticket,
    TicketGenerator, WinningNumbers,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Tickets in the large-batch tests
const BATCH_SIZE: u64 = 200_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn seeded(seed: u64) -> TicketGenerator<RngSource<ChaCha8Rng>> {
    TicketGenerator::new(RngSource::new(ChaCha8Rng::seed_from_u64(seed)))
}

fn standard_draw() -> Draw {
    Draw::new(WinningNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap(), 7).unwrap()
}

fn ticket(numbers: [u8; 6]) -> Ticket {
    Ticket::new(&numbers).unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn amount_14000_buys_14_tickets() {
    let amount = validate_purchase_amount("14000").unwrap();
    assert_eq!(amount.ticket_count(), 14);

    let tickets = seeded(1).issue_for(amount).unwrap();
    assert_eq!(tickets.len(), 14);
}

#[test]
fn six_matches_is_first() {
    assert_eq!(classify(&ticket([1, 2, 3, 4, 5, 6]), &standard_draw()), PrizeTier::First);
}

#[test]
fn five_matches_with_bonus_is_second() {
    let result = evaluate(&ticket([1, 2, 3, 4, 5, 7]), &standard_draw());
    assert_eq!(result.match_count, 5);
    assert!(result.bonus_matched);
    assert_eq!(result.tier, PrizeTier::Second);
}

#[test]
fn five_matches_without_bonus_is_third() {
    let result = evaluate(&ticket([1, 2, 3, 4, 5, 8]), &standard_draw());
    assert_eq!(result.match_count, 5);
    assert!(!result.bonus_matched);
    assert_eq!(result.tier, PrizeTier::Third);
}

#[test]
fn one_fifth_in_eight_tickets_returns_62_5() {
    let mut tickets = vec![ticket([8, 21, 23, 41, 42, 43]); 7];
    tickets.push(ticket([1, 2, 3, 41, 42, 43]));

    let settlement = settle(&tickets, &standard_draw(), 8_000).unwrap();
    assert_eq!(settlement.count(PrizeTier::Fifth), 1);
    assert_eq!(settlement.total_payout(), 5_000);
    assert_eq!(settlement.earning_rate().to_string(), "62.5");
}

#[test]
fn duplicate_winning_number_is_format_error() {
    assert!(matches!(
        parse_winning_numbers("1,2,3,4,5,5"),
        Err(LottoError::Format(_))
    ));
}

#[test]
fn bonus_in_winning_set_is_duplicate_error() {
    let winning = parse_winning_numbers("1,2,3,4,5,6").unwrap();
    assert_eq!(parse_bonus_number("5", &winning), Err(LottoError::Duplicate(5)));
}

#[test]
fn empty_batch_settles_to_zero() {
    let settlement = settle(&[], &standard_draw(), 1_000).unwrap();
    assert!(PrizeTier::WINNING.iter().all(|&t| settlement.count(t) == 0));
    assert_eq!(settlement.total_payout(), 0);
    assert_eq!(settlement.earning_rate().to_string(), "0.0");
}

// ============================================================================
// PROPERTIES OVER SEEDED BATCHES
// ============================================================================

#[test]
fn classification_is_total_and_consistent() {
    let tickets = seeded(42).issue_batch(BATCH_SIZE).unwrap();
    let draw = standard_draw();

    for t in &tickets {
        let result = evaluate(t, &draw);
        assert!(result.match_count <= 6);
        assert_eq!(result.match_count, count_matches(t, &draw));
        assert_eq!(result.tier, classify(t, &draw));

        let expected = match result.match_count {
            6 => PrizeTier::First,
            5 if t.contains(draw.bonus()) => PrizeTier::Second,
            5 => PrizeTier::Third,
            4 => PrizeTier::Fourth,
            3 => PrizeTier::Fifth,
            _ => PrizeTier::None,
        };
        assert_eq!(result.tier, expected);
    }
}

#[test]
fn generated_tickets_hold_their_invariant() {
    let tickets = seeded(7).issue_batch(10_000).unwrap();
    for t in &tickets {
        let numbers = t.numbers();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "not sorted: {}", t);
        assert!(numbers.iter().all(|&n| (1..=45).contains(&n)));
    }
}

#[test]
fn settlement_is_reproducible_for_a_seed() {
    let draw = Draw::new(WinningNumbers::new(&[3, 9, 17, 28, 33, 41]).unwrap(), 12).unwrap();
    let amount = BATCH_SIZE * 1_000;

    let a = settle(&seeded(99).issue_batch(BATCH_SIZE).unwrap(), &draw, amount).unwrap();
    let b = settle(&seeded(99).issue_batch(BATCH_SIZE).unwrap(), &draw, amount).unwrap();
    assert_eq!(a, b);

    // With 200k tickets, some three-match wins are effectively certain
    assert!(a.count(PrizeTier::Fifth) > 0);

    let recomputed: u64 = a.tallies().map(|(_, tally)| tally.payout * tally.count).sum();
    assert_eq!(a.total_payout(), recomputed);
}

#[test]
fn large_batch_settles_quickly() {
    let tickets = seeded(2024).issue_batch(BATCH_SIZE).unwrap();
    let draw = standard_draw();

    let start = Instant::now();
    let settlement = settle(&tickets, &draw, BATCH_SIZE * 1_000).unwrap();
    let elapsed = start.elapsed();

    println!("Settled {} tickets in {:.2?}", settlement.ticket_count(), elapsed);
    assert_eq!(settlement.ticket_count(), BATCH_SIZE);
}

// ============================================================================
// SESSION
// ============================================================================

#[test]
fn full_session_reports_receipt() {
    let mut generator = seeded(5);
    let mut session = Session::new();

    session.submit_amount("8000", &mut generator).unwrap();
    session.submit_winning_numbers("1, 2, 3, 4, 5, 6").unwrap();
    session.submit_bonus("7").unwrap();
    let report = session.settle().unwrap();

    assert_eq!(session.state(), SessionState::Reported);
    assert_eq!(report.receipt.ticket_count, 8);
    assert_eq!(report.receipt.purchase_amount, 8_000);
    assert_eq!(report.receipt.total_payout, report.settlement.total_payout());
    assert_eq!(report.receipt.digest_hex().len(), 64);
}

#[test]
fn session_stops_at_first_invalid_line() {
    let mut generator = seeded(6);
    let mut session = Session::new();

    session.submit_amount("3000", &mut generator).unwrap();
    assert!(matches!(
        session.submit_winning_numbers("1,2,3,4,5,99"),
        Err(LottoError::Range(_))
    ));
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(session.submit_bonus("7").is_err());
}
