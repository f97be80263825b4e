mod cli;
mod report;

use std::process::ExitCode;

use byteword::ByteWord;
use byteword::byte_order::ByteOrder;
use clap::Parser;
use log::{debug, error, info};

use cli::DemoCli;
use report::{Failure, OrderReport, OverflowReport, RoundTripReport, check_expected};

fn main() -> ExitCode {
    let cli = DemoCli::parse();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()));
    debug!("{cli:?}");

    let word = match cli.word() {
        Ok(word) => word,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, word) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failures) => {
            for failure in &failures {
                error!("{failure}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Print every report for `word`. Fails with every check that did not pass.
fn run(cli: &DemoCli, word: ByteWord) -> Result<(), Vec<Failure>> {
    println!("Byte-to-i64 conversion methods");
    println!("==============================");
    println!();
    println!("Input bytes: {:?}", word.as_array());
    println!("Hex:         {word}");

    let mut failures = Vec::new();
    for &byte_order in cli.order.byte_orders() {
        let report = OrderReport::new(word, byte_order);
        print_order_report(&report);
        match report.agreed_value() {
            Some(value) => info!("all {byte_order} methods agree on {value}"),
            None => failures.push(Failure::Disagreement(byte_order)),
        }
    }
    if let Err(failure) = check_expected(word, cli.expected_for(word)) {
        failures.push(failure);
    }

    let overflow = OverflowReport::new();
    print_overflow_report(&overflow);
    if !overflow.is_expected() {
        failures.push(Failure::Overflow);
    }

    for &byte_order in cli.order.byte_orders() {
        let round_trip = RoundTripReport::new(word, byte_order);
        print_round_trip_report(&round_trip, byte_order);
        if !round_trip.matches(word) {
            failures.push(Failure::RoundTrip(byte_order));
        }
    }

    if failures.is_empty() { Ok(()) } else { Err(failures) }
}

fn print_order_report(report: &OrderReport) {
    let title = format!("Results ({}):", report.byte_order);
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
    for variant in &report.variants {
        match variant.value {
            Ok(value) => println!("{:<22} {value:>20} (0x{value:016X})", variant.name),
            Err(err) => println!("{:<22} failed: {err}", variant.name),
        }
    }
}

fn print_overflow_report(report: &OverflowReport) {
    println!();
    println!("Arbitrary-precision overflow:");
    println!("-----------------------------");
    println!("{:<22} {}", "value", report.value);
    for (name, result) in [("truncate", &report.truncated), ("exact", &report.exact)] {
        match result {
            Ok(value) => println!("{name:<22} {value:>20}"),
            Err(err) => println!("{name:<22} failed: {err}"),
        }
    }
}

fn print_round_trip_report(report: &RoundTripReport, byte_order: ByteOrder) {
    println!();
    println!("Round trip ({byte_order}):");
    println!("{:<22} {:>20} (0x{:016X})", "value", report.value, report.value);
    println!("{:<22} {}", "encode", report.via_codec);
    match report.via_buffer {
        Ok(word) => println!("{:<22} {word}", "word buffer"),
        Err(err) => println!("{:<22} failed: {err}", "word buffer"),
    }
}
