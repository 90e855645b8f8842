use std::panic::Location;

use super::{report_mismatch, ExpectedValue, StringCheckOptions, SUBJECT_ACTUAL};
use crate::report::FailureReporter;


/// Checks that `actual` is exactly equal to `expected`.
///
/// On mismatch, a single diagnostic containing both values is delivered
/// through `reporter`; on success nothing happens. The check never panics
/// and never returns an error itself: what a failure means for the
/// enclosing test is decided by the reporter.
///
/// The failure is attributed to the caller of this function,
/// not to this crate.
#[track_caller]
pub fn check_equal<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected != actual {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "is not equal to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that `actual` differs from `expected`.
///
/// The inverse of [`check_equal`].
#[track_caller]
pub fn check_not_equal<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected == actual {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "is not different to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that `actual` is exactly equal to at least one of the candidate
/// strings in `expected_any_of`.
///
/// The candidates are tried in order with plain equality; the first match
/// makes the check pass. On failure the diagnostic lists every candidate,
/// always using the multi-line layout.
///
/// An empty candidate slice can never match, so it always fails.
#[track_caller]
pub fn check_equal_any<R, S>(
    reporter: &mut R,
    expected_any_of: &[S],
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
    S: AsRef<str>,
{
    let location = Location::caller();

    let equals_any_candidate = expected_any_of
        .iter()
        .any(|candidate| candidate.as_ref() == actual);

    if !equals_any_candidate {
        let candidates: Vec<&str> = expected_any_of.iter().map(AsRef::as_ref).collect();

        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "is not equal to any of the expected values",
            "",
            ExpectedValue::AnyOf(&candidates),
            actual,
            location,
        );
    }
}
