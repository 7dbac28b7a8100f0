//! End-to-end keypad scenarios.

use keycalc::core::{EntryMode, InputToken, Operator};
use keycalc::session::SNAPSHOT_VERSION;
use keycalc::{Calculator, CalculatorBuilder, Snapshot};
use std::sync::{Arc, Mutex};

fn keys(calc: &mut Calculator, sequence: &str) {
    assert!(calc.press_all(sequence).is_ok(), "bad keys: {sequence}");
}

#[test]
fn chained_addition() {
    let mut calc = Calculator::new();
    keys(&mut calc, "5 + 3 + 2 =");

    assert_eq!(calc.display(), "10");
    assert_eq!(
        calc.history().latest().map(|e| e.text()),
        Some("5+3+2=10".to_string())
    );
}

#[test]
fn division_by_zero_still_records() {
    let mut calc = Calculator::new();
    keys(&mut calc, "8 ÷ 0 =");

    assert_eq!(calc.display(), "0");
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.history().entries()[0].result, "0");
}

#[test]
fn multiplication_by_fraction_renders_whole() {
    let mut calc = Calculator::new();
    keys(&mut calc, "4 × 2 . 5 =");
    assert_eq!(calc.display(), "10");
    assert_eq!(calc.history().texts(), vec!["4×2.5=10"]);
}

#[test]
fn fractional_division() {
    let mut calc = Calculator::new();
    keys(&mut calc, "1 ÷ 8 =");
    assert_eq!(calc.display(), "0.125");
}

#[test]
fn subtraction_below_zero() {
    let mut calc = Calculator::new();
    keys(&mut calc, "3 - 1 0 =");
    assert_eq!(calc.display(), "-7");
}

#[test]
fn history_is_chronological_and_survives_clear() {
    let mut calc = Calculator::new();
    keys(&mut calc, "1 + 1 = C 2 × 3 = C 9 - 4 =");

    assert_eq!(calc.history().texts(), vec!["1+1=2", "2×3=6", "9-4=5"]);

    let newest_first: Vec<String> = calc
        .history()
        .most_recent_first()
        .map(|e| e.text())
        .collect();
    assert_eq!(newest_first, vec!["9-4=5", "2×3=6", "1+1=2"]);

    let stamps: Vec<_> = calc
        .history()
        .entries()
        .iter()
        .map(|e| e.completed_at)
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn percent_of_pending_operand() {
    let mut calc = Calculator::new();
    keys(&mut calc, "2 0 0 × 1 5 % =");

    assert_eq!(calc.display(), "30");
    assert_eq!(calc.history().texts(), vec!["200×0.15=30"]);
}

#[test]
fn sign_toggle_then_operator() {
    let mut calc = Calculator::new();
    keys(&mut calc, "6 +/- × 3 =");
    assert_eq!(calc.display(), "-18");
}

#[test]
fn result_feeds_next_calculation() {
    let mut calc = Calculator::new();
    keys(&mut calc, "6 × 7 = ÷ 2 =");

    assert_eq!(calc.display(), "21");
    assert_eq!(calc.history().texts(), vec!["6×7=42", "42÷2=21"]);
}

#[test]
fn typed_tokens_match_labels() {
    let mut typed = Calculator::new();
    for token in [
        InputToken::digit(9).unwrap(),
        InputToken::Operator(Operator::Subtract),
        InputToken::digit(4).unwrap(),
        InputToken::Equals,
    ] {
        typed.handle(token);
    }

    let mut labelled = Calculator::new();
    keys(&mut labelled, "9 - 4 =");

    assert_eq!(typed.display(), labelled.display());
    assert_eq!(typed.history().texts(), labelled.history().texts());
}

#[test]
fn mode_follows_the_keypad() {
    let mut calc = Calculator::new();
    assert_eq!(calc.mode(), EntryMode::Idle);

    calc.handle(InputToken::digit(7).unwrap());
    assert_eq!(calc.mode(), EntryMode::Idle);

    calc.handle(InputToken::Operator(Operator::Multiply));
    assert!(calc.mode().should_reset());
    assert_eq!(calc.mode().pending(), Some((7.0, Operator::Multiply)));

    calc.handle(InputToken::digit(6).unwrap());
    assert!(!calc.mode().should_reset());

    calc.handle(InputToken::Equals);
    assert_eq!(calc.mode(), EntryMode::DisplayReset);

    calc.handle(InputToken::Clear);
    assert_eq!(calc.mode(), EntryMode::Idle);
}

#[test]
fn observer_sees_snapshots_in_order() {
    let seen: Arc<Mutex<Vec<Snapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut calc = CalculatorBuilder::new()
        .observer(move |snapshot| sink.lock().unwrap().push(snapshot.clone()))
        .build();
    keys(&mut calc, "1 2 + 7 =");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 5);
    assert_eq!(seen[2].expression, "12+");
    assert_eq!(seen[2].pending_operator(), Some(Operator::Add));
    assert_eq!(seen[4].display, "19");
    assert_eq!(seen[4].history.texts(), vec!["12+7=19"]);
    assert!(seen.iter().all(|s| s.session_id == calc.session_id()));
}

#[test]
fn snapshot_survives_binary_transport() {
    let mut calc = Calculator::new();
    keys(&mut calc, "3 . 5 × 2 = 1");

    let snapshot = calc.snapshot();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);

    let bytes = snapshot.to_bytes().unwrap();
    let decoded = Snapshot::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.display, "1");
    assert_eq!(decoded.history.texts(), vec!["3.5×2=7"]);
}

#[test]
fn overflow_shows_inf_then_collapses_to_sentinel() {
    let mut calc = Calculator::new();
    keys(&mut calc, "9 9 9 9 9 9 9 9 9 9 × × × × × ×");

    assert_eq!(calc.display(), "inf");
    assert_eq!(
        calc.mode().pending(),
        Some((f64::INFINITY, Operator::Multiply))
    );

    let snapshot = calc.snapshot();
    let from_json = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    let from_bytes = Snapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
    assert_eq!(from_json.mode, calc.mode());
    assert_eq!(from_bytes.mode, calc.mode());

    keys(&mut calc, "+");
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.mode().pending(), Some((0.0, Operator::Add)));

    keys(&mut calc, "5 =");
    assert_eq!(calc.display(), "5");
    assert_eq!(calc.history().len(), 1);
    let latest = calc.history().latest().map(|e| e.text()).unwrap_or_default();
    assert!(latest.ends_with("inf+5=5"), "unexpected entry {latest}");
}
