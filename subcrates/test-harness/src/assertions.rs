use assert_matches::assert_matches;
use check_more::error::CheckFailure;
use check_more::report::FailureAccumulator;


/// Assertions over what a [`FailureAccumulator`] recorded.
///
/// All methods panic with the details on failure, attributing the panic
/// to the calling test (they are `#[track_caller]`).
pub trait ReporterAssertions {
    /// Asserts that no failure was reported.
    fn assert_no_failures(&self);

    /// Asserts that exactly one failure was reported, and returns it
    /// for further inspection.
    fn assert_single_failure(&self) -> &CheckFailure;

    /// Asserts that exactly one failure was reported, that it is a
    /// comparison mismatch, and that its message contains every one of
    /// the given fragments.
    fn assert_single_mismatch_containing(&self, expected_fragments: &[&str]);

    /// Asserts that exactly one failure was reported and that it is a
    /// pattern-compilation failure (not a mismatch).
    fn assert_single_invalid_pattern(&self);
}

impl ReporterAssertions for FailureAccumulator {
    #[track_caller]
    fn assert_no_failures(&self) {
        if let Some(first_failure) = self.failures().first() {
            panic!(
                "expected no reported failures, but {} were reported; first:\n\n{}",
                self.failures().len(),
                first_failure
            );
        }
    }

    #[track_caller]
    fn assert_single_failure(&self) -> &CheckFailure {
        match self.failures() {
            [single_failure] => single_failure,
            other_failures => panic!(
                "expected exactly one reported failure, but got {}:\n\n{:?}",
                other_failures.len(),
                other_failures
            ),
        }
    }

    #[track_caller]
    fn assert_single_mismatch_containing(&self, expected_fragments: &[&str]) {
        let failure = self.assert_single_failure();

        let CheckFailure::Mismatch { message, .. } = failure else {
            panic!("expected a comparison mismatch, but got:\n\n{}", failure);
        };

        for expected_fragment in expected_fragments {
            if !message.contains(expected_fragment) {
                panic!(
                    "reported mismatch does not contain {:?}:\n\n{}",
                    expected_fragment, message
                );
            }
        }
    }

    #[track_caller]
    fn assert_single_invalid_pattern(&self) {
        let failure = self.assert_single_failure();

        assert_matches!(failure, CheckFailure::InvalidPattern { .. });
    }
}
