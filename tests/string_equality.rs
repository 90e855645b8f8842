use check_more::string::{check_equal, check_equal_any, check_not_equal};
use check_more_test_harness::prelude::*;


#[test]
pub fn check_equal_passes_for_identical_strings() {
    let mut reporter = FailureAccumulator::new();

    check_equal(&mut reporter, "", "", StringCheckOptions::default());
    check_equal(&mut reporter, "a", "a", StringCheckOptions::default());
    check_equal(&mut reporter, "\tabc", "\tabc", StringCheckOptions::default());
    check_equal(&mut reporter, "hello", "hello", StringCheckOptions::default());

    reporter.assert_no_failures();
}


#[test]
pub fn check_equal_reports_exactly_one_diagnostic_with_both_values() {
    let mut reporter = FailureAccumulator::new();

    check_equal(&mut reporter, "hello", "world", StringCheckOptions::default());

    reporter.assert_single_mismatch_containing(&[
        "hello",
        "world",
        "is not equal to expected value",
    ]);
}


#[test]
pub fn check_not_equal_passes_for_differing_strings() {
    let mut reporter = FailureAccumulator::new();

    check_not_equal(&mut reporter, "", " ", StringCheckOptions::default());
    check_not_equal(&mut reporter, "a", "a\t", StringCheckOptions::default());
    check_not_equal(&mut reporter, "abc", "\tabc", StringCheckOptions::default());

    reporter.assert_no_failures();
}


#[test]
pub fn check_not_equal_fails_when_the_values_are_identical() {
    let mut reporter = FailureAccumulator::new();

    check_not_equal(&mut reporter, "same", "same", StringCheckOptions::default());

    reporter.assert_single_mismatch_containing(&["same", "is not different to expected value"]);
}


#[test]
pub fn every_string_is_equal_to_itself_and_not_unequal_to_itself() {
    for value in ["", "a", "hello", "\tabc", "a\nb", "žluťoučký"] {
        let mut equal_reporter = FailureAccumulator::new();
        check_equal(&mut equal_reporter, value, value, StringCheckOptions::default());
        equal_reporter.assert_no_failures();

        let mut not_equal_reporter = FailureAccumulator::new();
        check_not_equal(&mut not_equal_reporter, value, value, StringCheckOptions::default());
        not_equal_reporter.assert_single_failure();
    }
}


#[test]
pub fn check_equal_any_passes_when_any_candidate_matches() {
    let mut reporter = FailureAccumulator::new();

    check_equal_any(&mut reporter, &["a", "b", "c"], "b", StringCheckOptions::default());
    check_equal_any(&mut reporter, &["a"], "a", StringCheckOptions::default());

    reporter.assert_no_failures();
}


#[test]
pub fn check_equal_any_fails_when_no_candidate_matches() {
    let mut reporter = FailureAccumulator::new();

    check_equal_any(&mut reporter, &["a", "b", "c"], "d", StringCheckOptions::default());

    reporter.assert_single_mismatch_containing(&[
        "is not equal to any of the expected values",
        "'d'",
    ]);
}


#[test]
pub fn check_equal_any_fails_for_an_empty_candidate_list() {
    let mut reporter = FailureAccumulator::new();

    let no_candidates: &[&str] = &[];
    check_equal_any(&mut reporter, no_candidates, "anything", StringCheckOptions::default());

    reporter.assert_single_failure();
}


#[test]
pub fn check_equal_any_lists_every_candidate_in_the_diagnostic() {
    let mut reporter = FailureAccumulator::new();

    check_equal_any(&mut reporter, &["a", "b", "c"], "d", StringCheckOptions::default());

    let failure = reporter.assert_single_failure();
    let rendered = failure.to_string();

    assert!(
        rendered.contains("[\"a\", \"b\", \"c\"]"),
        "diagnostic does not list the candidates:\n\n{}",
        rendered
    );
}


#[test]
pub fn check_equal_any_accepts_owned_candidate_strings() {
    let mut reporter = FailureAccumulator::new();

    let candidates = vec![String::from("left"), String::from("right")];
    check_equal_any(&mut reporter, &candidates, "left", StringCheckOptions::default());

    reporter.assert_no_failures();
}
