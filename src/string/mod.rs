//! String comparison checks. Includes chomped, trimmed, case-insensitive,
//! regular-expression and caller-supplied comparison variants.

use std::panic::Location;

mod chomp;
mod equality;
mod message;
mod normalized;
mod pattern;

pub use chomp::chomp;
pub use equality::{check_equal, check_equal_any, check_not_equal};
pub use normalized::{
    check_equal_chomped,
    check_equal_ignore_case,
    check_equal_trimmed,
    check_not_equal_chomped,
    check_not_equal_ignore_case,
    check_not_equal_trimmed,
};
pub use pattern::{check_compare_with, check_matches_pattern};

use crate::error::CheckFailure;
use crate::report::FailureReporter;
use message::{assemble_failure_message, ExpectedValue};


/// Options accepted by every string check.
///
/// No behavioural options are currently defined; the struct exists as a
/// typed, forward-compatible extension point. Construct it with
/// [`Default`]:
///
/// ```
/// use check_more::string::StringCheckOptions;
///
/// let options = StringCheckOptions::default();
/// # let _ = options;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StringCheckOptions {}


/// The subject fragment used by checks that compare the actual value as-is.
const SUBJECT_ACTUAL: &str = "actual value";

/// The subject fragment used by the chomped variants.
const SUBJECT_ACTUAL_CHOMPED: &str = "actual value, when chomped,";


/// Assembles the diagnostic for a failed comparison and delivers it
/// through the reporter. Every failing check funnels through here,
/// so exactly one failure is reported per failing call.
fn report_mismatch<R>(
    reporter: &mut R,
    subject: &str,
    relation: &str,
    qualifier: &str,
    expected: ExpectedValue<'_>,
    actual: &str,
    location: &'static Location<'static>,
) where
    R: FailureReporter + ?Sized,
{
    let message = assemble_failure_message(subject, relation, qualifier, &expected, actual);

    reporter.report(CheckFailure::Mismatch { message, location });
}
