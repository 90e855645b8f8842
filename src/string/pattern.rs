use std::panic::Location;

use regex::Regex;

use super::{report_mismatch, ExpectedValue, StringCheckOptions, SUBJECT_ACTUAL};
use crate::error::CheckFailure;
use crate::report::FailureReporter;


/// Checks that `actual` matches the regular expression given as `pattern`.
///
/// The pattern is compiled on every call with [`regex::Regex::new`].
/// If it does not compile, a distinct
/// [`CheckFailure::InvalidPattern`] diagnostic naming the pattern and the
/// compiler error is reported and the comparison is skipped entirely.
/// Exactly one diagnostic is emitted either way.
#[track_caller]
pub fn check_matches_pattern<R>(
    reporter: &mut R,
    pattern: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    let compiled_pattern = match Regex::new(pattern) {
        Ok(compiled_pattern) => compiled_pattern,
        Err(error) => {
            reporter.report(CheckFailure::InvalidPattern {
                pattern: pattern.to_string(),
                error,
                location,
            });

            return;
        }
    };

    if !compiled_pattern.is_match(actual) {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "does not match the regular expression",
            "",
            ExpectedValue::Single(pattern),
            actual,
            location,
        );
    }
}


/// Checks the two values with a caller-supplied comparison function.
///
/// `compare` receives `(expected, actual)` and returns whether the check
/// passes. `comparison_label` is a short human-readable description of the
/// comparison (e.g. `"length"`), spliced into the failure message as
/// `when compared by {comparison_label}`.
#[track_caller]
pub fn check_compare_with<R, F>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    compare: F,
    comparison_label: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
    F: FnOnce(&str, &str) -> bool,
{
    let location = Location::caller();

    if !compare(expected, actual) {
        let qualifier = format!("when compared by {}", comparison_label);

        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "does not compare equal to expected value",
            &qualifier,
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}
