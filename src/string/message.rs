//! Failure-message assembly: layout selection and template rendering.

use std::fmt;


/// The expected side of a comparison, as rendered in a failure message.
///
/// The shape is decided at the call site by the operation that was invoked;
/// no runtime inspection of the expected value takes place.
pub(crate) enum ExpectedValue<'a> {
    /// A single expected string.
    Single(&'a str),

    /// An ordered sequence of candidate strings
    /// (the actual value must equal one of them).
    AnyOf(&'a [&'a str]),
}

impl ExpectedValue<'_> {
    /// Returns `true` if a diagnostic involving this expected value and the
    /// given actual value must use the multi-line layout.
    ///
    /// Single strings stay on one line unless either side embeds a newline.
    /// Every other shape is rendered multi-line, as quoting it inline would
    /// not stay readable.
    fn requires_multiline(&self, actual: &str) -> bool {
        match self {
            Self::Single(expected) => expected.contains('\n') || actual.contains('\n'),
            Self::AnyOf(_) => true,
        }
    }
}

impl fmt::Display for ExpectedValue<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(expected) => formatter.write_str(expected),
            Self::AnyOf(candidates) => write!(formatter, "{:?}", candidates),
        }
    }
}


/// Assembles the diagnostic text for a failed comparison.
///
/// The actual value always renders before the expected value. `qualifier`
/// may be empty; when it is not, the single-line layout separates it from
/// the quoted expected value with a space, while the multi-line layout puts
/// it on the final line.
pub(crate) fn assemble_failure_message(
    subject: &str,
    relation: &str,
    qualifier: &str,
    expected: &ExpectedValue<'_>,
    actual: &str,
) -> String {
    if expected.requires_multiline(actual) {
        format!("{subject}\n\t'{actual}'\n{relation}\n\t'{expected}'\n{qualifier}")
    } else if qualifier.is_empty() {
        format!("{subject} '{actual}' {relation} '{expected}'")
    } else {
        format!("{subject} '{actual}' {relation} '{expected}' {qualifier}")
    }
}
