//! Everything a test of `check-more` usually needs, in one import.

pub use assert_matches::assert_matches;
pub use check_more::error::CheckFailure;
pub use check_more::report::{FailureAccumulator, FailureReporter, PanickingReporter};
pub use check_more::string::StringCheckOptions;

pub use crate::assertions::ReporterAssertions;
