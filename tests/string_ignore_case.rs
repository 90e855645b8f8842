use check_more::string::{check_equal_ignore_case, check_not_equal_ignore_case};
use check_more_test_harness::prelude::*;


#[test]
pub fn check_equal_ignore_case_treats_differently_cased_values_as_equal() {
    let mut reporter = FailureAccumulator::new();

    check_equal_ignore_case(&mut reporter, "ABC", "abc", StringCheckOptions::default());
    check_equal_ignore_case(&mut reporter, "abc", "ABC", StringCheckOptions::default());
    check_equal_ignore_case(&mut reporter, "HeLLo", "hEllO", StringCheckOptions::default());

    // Non-ASCII letters fold too.
    check_equal_ignore_case(&mut reporter, "ČAJ", "čaj", StringCheckOptions::default());

    reporter.assert_no_failures();
}


#[test]
pub fn check_equal_ignore_case_still_fails_for_genuinely_different_values() {
    let mut reporter = FailureAccumulator::new();

    check_equal_ignore_case(&mut reporter, "abc", "abd", StringCheckOptions::default());

    reporter.assert_single_mismatch_containing(&[
        "is different, when ignoring case, to expected value",
    ]);
}


#[test]
pub fn check_not_equal_ignore_case_passes_for_genuinely_different_values() {
    let mut reporter = FailureAccumulator::new();

    check_not_equal_ignore_case(&mut reporter, "abc", "abd", StringCheckOptions::default());
    check_not_equal_ignore_case(&mut reporter, "abc", "abc ", StringCheckOptions::default());

    reporter.assert_no_failures();
}


#[test]
pub fn check_not_equal_ignore_case_fails_for_values_equal_up_to_case() {
    let mut reporter = FailureAccumulator::new();

    check_not_equal_ignore_case(&mut reporter, "ABC", "abc", StringCheckOptions::default());

    reporter.assert_single_mismatch_containing(&[
        "is not different, when ignoring case, to expected value",
    ]);
}
