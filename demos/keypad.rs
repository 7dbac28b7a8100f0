//! Keypad
//!
//! Feeds keypad labels from the command line through a calculator and
//! prints what a renderer would show after each key.
//!
//! Key concepts:
//! - Observers receive an immutable snapshot after every token
//! - History is stored oldest first and rendered newest first
//! - Unknown keys are all reported before anything runs
//!
//! Run with: cargo run --example keypad -- 5 + 3 + 2 =
//! Set RUST_LOG=keycalc=debug to see transition events.

use keycalc::{CalculatorBuilder, Snapshot};
use tracing_subscriber::EnvFilter;

fn render(snapshot: &Snapshot) {
    println!(
        "  {:>12} | {:<20} | {}",
        snapshot.display,
        snapshot.expression,
        snapshot.mode.name()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let keys = if args.is_empty() {
        "1 2 + 7 × 2 = C 8 ÷ 0 =".to_string()
    } else {
        args.join(" ")
    };

    println!("=== Keypad ===\n");
    println!("keys: {keys}\n");

    let mut calc = CalculatorBuilder::new().observer(render).build();

    if let Err(errors) = calc.press_all(&keys) {
        for error in errors.iter() {
            eprintln!("  {error}");
        }
        std::process::exit(1);
    }

    println!("\nHistory (newest first):");
    for entry in calc.history().most_recent_first() {
        println!("  {entry}");
    }
}
