// Integration tests for the sort entry point

use sortstep::parser::{self, NumberSequence};
use sortstep::sort;
use sortstep::ValidationError;

fn values(trace: &sortstep::snapshot::Trace) -> Vec<Vec<u8>> {
    trace.iter().map(|s| s.values()).collect()
}

#[test]
fn test_seven_spaced_numbers() {
    let trace = sort("9 8 3 2 4 6 1").expect("sort failed");

    assert_eq!(trace.len(), 7);
    assert_eq!(
        values(&trace),
        vec![
            vec![9, 8, 3, 2, 4, 6, 1],
            vec![8, 9, 3, 2, 4, 6, 1],
            vec![3, 8, 9, 2, 4, 6, 1],
            vec![2, 3, 8, 9, 4, 6, 1],
            vec![2, 3, 4, 8, 9, 6, 1],
            vec![2, 3, 4, 6, 8, 9, 1],
            vec![1, 2, 3, 4, 6, 8, 9],
        ]
    );

    let last = trace.last().unwrap();
    assert_eq!(last.settled_count(), 7);
}

#[test]
fn test_unspaced_digits() {
    let trace = sort("931").expect("sort failed");

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.plain_steps(), vec!["9 3 1", "3 9 1", "1 3 9"]);
    assert_eq!(trace.last().unwrap().annotated(), "[1 3 9]");
}

#[test]
fn test_digits_from_other_scripts() {
    let fullwidth = sort("\u{FF13} \u{FF14} \u{FF15}").expect("fullwidth digits");
    assert_eq!(fullwidth.plain_steps(), vec!["3 4 5", "3 4 5", "3 4 5"]);

    let arabic_indic = sort("\u{0669}\u{0663}\u{0661}").expect("Arabic-Indic digits");
    assert_eq!(arabic_indic, sort("931").unwrap());
}

#[test]
fn test_two_numbers_rejected() {
    assert_eq!(sort("5 5"), Err(ValidationError::SizeOutOfRange));
}

#[test]
fn test_out_of_range_value_rejected() {
    assert_eq!(sort("3 4 12"), Err(ValidationError::ValueOutOfRange));
    assert_eq!(sort("3 -1 4"), Err(ValidationError::ValueOutOfRange));
    assert_eq!(sort("3 10 4"), Err(ValidationError::ValueOutOfRange));
}

#[test]
fn test_length_boundaries() {
    assert!(sort("123").is_ok());
    assert_eq!(sort("12"), Err(ValidationError::SizeOutOfRange));
    assert!(sort("12345678").is_ok());
    assert_eq!(sort("123456789"), Err(ValidationError::SizeOutOfRange));
}

#[test]
fn test_empty_and_blank_inputs() {
    assert_eq!(sort(""), Err(ValidationError::SizeOutOfRange));
    assert_eq!(sort("        "), Err(ValidationError::SizeOutOfRange));
}

#[test]
fn test_non_numeric_tokens_dropped() {
    // "x" disappears, leaving two numbers
    assert_eq!(sort("3 x 5"), Err(ValidationError::SizeOutOfRange));

    let trace = sort("3 x 5 1").expect("sort failed");
    assert_eq!(trace.first().unwrap().values(), vec![3, 5, 1]);
}

#[test]
fn test_initial_snapshot_unsettled() {
    let trace = sort("4 2 7 1").expect("sort failed");
    let first = trace.first().unwrap();

    assert_eq!(first.values(), vec![4, 2, 7, 1]);
    assert!(first.cells().iter().all(|c| !c.settled));
}

#[test]
fn test_settled_prefix_grows_each_step() {
    let trace = sort("5 1 4 2 3").expect("sort failed");

    for (i, snapshot) in trace.iter().enumerate() {
        let expected = if i == 0 { 0 } else { i + 1 };
        assert_eq!(snapshot.settled_count(), expected, "step {}", i);
        for p in 0..snapshot.len() {
            assert_eq!(snapshot.is_settled(p), i > 0 && p <= i);
        }
    }
}

#[test]
fn test_parse_matches_sort_input() {
    let seq: NumberSequence = "8 6 7 5 3 0 9".parse().unwrap();
    let trace = sortstep::sort::record(&seq);

    assert_eq!(trace, sort("8 6 7 5 3 0 9").unwrap());
    assert_eq!(parser::parse("867530 9"), Err(ValidationError::SizeOutOfRange));
}
