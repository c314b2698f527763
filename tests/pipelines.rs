// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use outcome::{
    run_catching,
    Caught,
    Outcome,
};

/// A stand-in for a computation that fails by panicking on bad input.
fn parse_and_double(input: &str) -> u32 {
    let parsed: u32 = input
        .parse()
        .unwrap_or_else(|_| panic!("not a number: {}", input));
    parsed * 2
}

#[test]
fn batch_pipeline_catches_each_input_independently() {
    let inputs = ["1", "7", "oops", "21"];
    let outcomes: Vec<Outcome<u32>> = inputs
        .iter()
        .map(|input| run_catching(|| parse_and_double(input)))
        .collect();

    assert_eq!(outcomes[0], Outcome::success(2));
    assert_eq!(outcomes[1], Outcome::success(14));
    assert_eq!(
        outcomes[2].caught().and_then(Caught::message),
        Some("not a number: oops")
    );
    assert_eq!(outcomes[3], Outcome::success(42));
}

#[test]
fn functional_handling_reports_to_the_matching_channel() {
    let mut handled = Vec::new();

    let outcome = run_catching(|| "data".to_uppercase())
        .on_failure(|error| handled.push(format!("error: {}", error)))
        .on_success(|value| handled.push(format!("ok: {}", value)));
    assert!(outcome.is_success());
    assert_eq!(handled, ["ok: DATA"]);

    handled.clear();
    let outcome = run_catching(|| -> String { panic!("boom") })
        .on_failure(|error| handled.push(format!("error: {}", error)))
        .on_success(|value| handled.push(format!("ok: {}", value)));
    assert!(outcome.is_failure());
    assert_eq!(handled, ["error: boom"]);
}

#[test]
fn transform_chain_keeps_the_first_failure() {
    let outcome = run_catching(|| "21")
        .map_catching(parse_and_double)
        .map(|doubled| doubled + 1)
        .map_catching(|total| {
            assert_eq!(total, 43);
            total
        });
    assert_eq!(outcome, Outcome::success(43));

    let outcome = run_catching(|| "oops")
        .map_catching(parse_and_double)
        .map(|doubled| doubled + 1);
    assert_eq!(
        outcome.caught().and_then(Caught::message),
        Some("not a number: oops")
    );
}

#[test]
fn recovery_chain_substitutes_a_fallback_value() {
    let total: u32 = run_catching(|| parse_and_double("oops"))
        .recover_catching(|error| {
            assert_eq!(error.message(), Some("not a number: oops"));
            0
        })
        .get_or_throw();
    assert_eq!(total, 0);
}
