//! The reporting capability consumed by every check, plus two ready-made
//! implementations.
//!
//! The library itself never decides what a failure *means* for the enclosing
//! test: it hands each [`CheckFailure`] to the reporter the caller supplied
//! and returns normally. [`FailureAccumulator`] records failures and lets
//! the test fail once at the end (fail-and-continue), while
//! [`PanickingReporter`] aborts on the first failure.

use std::fmt::Write;

use crate::error::CheckFailure;


/// A sink for failed checks, supplied by the enclosing test.
///
/// Implementations are expected to record the failure against the current
/// test context without necessarily halting execution. Every failure carries
/// the [`Location`][std::panic::Location] of the offending check call, so an
/// implementation can attribute it to the caller's test line rather than to
/// this crate.
pub trait FailureReporter {
    /// Records a single failed check.
    ///
    /// A check calls this at most once per invocation; a passing check
    /// never calls it.
    fn report(&mut self, failure: CheckFailure);
}


/// A [`FailureReporter`] that collects failures instead of aborting,
/// mirroring the "soft assertion" behaviour of test frameworks that mark a
/// test as failed and keep running.
///
/// Call [`finish`][Self::finish] at the end of the test to fail it (with a
/// summary of everything that was recorded) if any check did not pass.
///
/// # Examples
/// ```
/// use check_more::report::FailureAccumulator;
/// use check_more::string::{check_equal, StringCheckOptions};
///
/// let mut reporter = FailureAccumulator::new();
/// check_equal(&mut reporter, "a", "a", StringCheckOptions::default());
///
/// assert!(reporter.is_empty());
/// reporter.finish();
/// ```
#[derive(Debug, Default)]
pub struct FailureAccumulator {
    failures: Vec<CheckFailure>,
}

impl FailureAccumulator {
    /// Creates an accumulator with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no failure has been recorded so far.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns every failure recorded so far, in reporting order.
    pub fn failures(&self) -> &[CheckFailure] {
        &self.failures
    }

    /// Consumes the accumulator, returning the recorded failures.
    pub fn into_failures(self) -> Vec<CheckFailure> {
        self.failures
    }

    /// Consumes the accumulator and panics if any failure was recorded,
    /// listing each one together with the location it was reported from.
    ///
    /// Does nothing when no check failed.
    ///
    ///
    /// # Panic
    /// Panics if at least one failure was recorded. This is the intended
    /// way of surfacing the collected failures to the test framework.
    #[track_caller]
    pub fn finish(self) {
        if self.failures.is_empty() {
            return;
        }

        let mut rendered_failures = String::new();
        for failure in &self.failures {
            // String formatting does not fail.
            let _ = writeln!(
                rendered_failures,
                "- at {}:\n  {}",
                failure.location(),
                failure
            );
        }

        panic!(
            "{} string check(s) failed:\n{}",
            self.failures.len(),
            rendered_failures
        );
    }
}

impl FailureReporter for FailureAccumulator {
    fn report(&mut self, failure: CheckFailure) {
        self.failures.push(failure);
    }
}


/// A [`FailureReporter`] that panics on the first reported failure,
/// naming the recorded caller location.
///
/// Use this when a failed check should abort the test immediately,
/// like a bare `assert_eq!` would.
///
/// # Examples
/// ```should_panic
/// use check_more::report::PanickingReporter;
/// use check_more::string::{check_equal, StringCheckOptions};
///
/// let mut reporter = PanickingReporter;
/// check_equal(&mut reporter, "expected", "actual", StringCheckOptions::default());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PanickingReporter;

impl FailureReporter for PanickingReporter {
    fn report(&mut self, failure: CheckFailure) {
        panic!("string check failed at {}: {}", failure.location(), failure);
    }
}
