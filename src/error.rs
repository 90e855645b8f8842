//! Failure values delivered to reporters.
//!
//! A check never returns `Err` and never panics on an ordinary mismatch;
//! everything it has to say arrives as a [`CheckFailure`] through the
//! [`FailureReporter`][crate::report::FailureReporter] it was given.

use std::panic::Location;

use thiserror::Error;


/// A single failed check, as delivered to a
/// [`FailureReporter`][crate::report::FailureReporter].
///
/// There are exactly two kinds of failure: the compared values did not
/// satisfy the selected predicate ([`Mismatch`][Self::Mismatch]), or the
/// pattern given to
/// [`check_matches_pattern`][crate::string::check_matches_pattern]
/// was not a valid regular expression
/// ([`InvalidPattern`][Self::InvalidPattern]).
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum CheckFailure {
    /// The actual value did not satisfy the comparison
    /// against the expected value.
    #[error("{message}")]
    Mismatch {
        /// The fully-assembled diagnostic message, containing the actual
        /// value, the relation phrase and the expected value.
        message: String,

        /// Where the failed check was invoked from.
        ///
        /// This always points at the caller's test code, never into
        /// this crate.
        location: &'static Location<'static>,
    },

    /// The supplied pattern could not be compiled as a regular expression.
    ///
    /// The comparison itself was skipped; this is the only diagnostic
    /// emitted for the offending call.
    #[error("the given pattern {pattern:?} could not be compiled as a regular expression: {error}")]
    InvalidPattern {
        /// The pattern text that failed to compile.
        pattern: String,

        /// Underlying compiler error describing why the pattern is invalid.
        #[source]
        error: regex::Error,

        /// Where the failed check was invoked from.
        location: &'static Location<'static>,
    },
}

impl CheckFailure {
    /// Returns the location of the check call that produced this failure.
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Self::Mismatch { location, .. } => location,
            Self::InvalidPattern { location, .. } => location,
        }
    }

    /// Returns `true` if this failure is an ordinary comparison mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Returns `true` if this failure reports an uncompilable pattern.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }
}
