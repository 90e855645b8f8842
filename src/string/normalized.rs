use std::panic::Location;

use super::{
    chomp,
    report_mismatch,
    ExpectedValue,
    StringCheckOptions,
    SUBJECT_ACTUAL,
    SUBJECT_ACTUAL_CHOMPED,
};
use crate::report::FailureReporter;


/// Checks that `actual`, once chomped, is equal to `expected`.
///
/// Only the actual value is chomped; the expected value is compared as
/// given. At most one trailing line terminator (`\r\n`, `\r` or `\n`)
/// is removed before the comparison; see [`chomp()`] for the exact policy.
#[track_caller]
pub fn check_equal_chomped<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected != chomp(actual) {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL_CHOMPED,
            "is not equal to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that `actual`, once chomped, differs from `expected`.
///
/// The inverse of [`check_equal_chomped`].
#[track_caller]
pub fn check_not_equal_chomped<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected == chomp(actual) {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL_CHOMPED,
            "is not different to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that the two values are equal after trimming leading and trailing
/// whitespace from *both* of them.
#[track_caller]
pub fn check_equal_trimmed<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected.trim() != actual.trim() {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "when trimmed, is different to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that the two values differ after trimming leading and trailing
/// whitespace from both of them.
///
/// The inverse of [`check_equal_trimmed`].
#[track_caller]
pub fn check_not_equal_trimmed<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected.trim() == actual.trim() {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "when trimmed, is not different to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that the two values are equal when differences in letter case
/// are ignored.
///
/// Both sides are lowercased with the full Unicode mapping before the
/// comparison, so e.g. `"ABC"` and `"abc"` compare equal.
#[track_caller]
pub fn check_equal_ignore_case<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected.to_lowercase() != actual.to_lowercase() {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "is different, when ignoring case, to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}


/// Checks that the two values differ even when letter case is ignored.
///
/// The inverse of [`check_equal_ignore_case`].
#[track_caller]
pub fn check_not_equal_ignore_case<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    _options: StringCheckOptions,
) where
    R: FailureReporter + ?Sized,
{
    let location = Location::caller();

    if expected.to_lowercase() == actual.to_lowercase() {
        report_mismatch(
            reporter,
            SUBJECT_ACTUAL,
            "is not different, when ignoring case, to expected value",
            "",
            ExpectedValue::Single(expected),
            actual,
            location,
        );
    }
}
