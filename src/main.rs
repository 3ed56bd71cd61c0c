//! Lotto Settle - Binary Entry Point
//!
//! Reads the purchase amount, winning numbers and bonus number from stdin,
//! one per line, and prints the issued tickets and the winning statistics.
//! Any invalid line prints an `[ERROR]` message and exits with status 1.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lotto_settle::types::rate::format_rate;
use lotto_settle::{Report, RngSource, Session, TicketGenerator};

/// Group digits in threes: 30000000 -> "30,000,000"
fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print a prompt and read one line. End of input reads as an empty line.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> io::Result<String> {
    println!("{}", message);
    io::stdout().flush()?;
    lines.next().unwrap_or_else(|| Ok(String::new()))
}

fn print_report(report: &Report) {
    println!();
    println!("Winning statistics");
    println!("---");
    for (tier, tally) in report.settlement.tallies() {
        println!(
            "{} ({} won) - {} tickets",
            tier,
            with_separators(tally.payout),
            tally.count
        );
    }
    println!(
        "Total return rate is {}%.",
        format_rate(report.settlement.earning_rate())
    );
    println!("Receipt: {}", report.receipt.digest_hex());
}

fn run() -> Result<Report, Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut generator = TicketGenerator::new(RngSource::thread());
    let mut session = Session::new();

    let amount = prompt(&mut lines, "Enter the purchase amount.")?;
    let tickets = session.submit_amount(&amount, &mut generator)?;

    println!();
    println!("Purchased {} tickets.", tickets.len());
    for ticket in tickets {
        println!("{}", ticket);
    }
    println!();

    let winning = prompt(&mut lines, "Enter the winning numbers.")?;
    session.submit_winning_numbers(&winning)?;

    println!();
    let bonus = prompt(&mut lines, "Enter the bonus number.")?;
    session.submit_bonus(&bonus)?;

    let report = session.settle()?;
    session.finish();
    Ok(report)
}

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            ExitCode::FAILURE
        }
    }
}
