//! Convenient string assertion helpers with descriptive failure reporting,
//! built for use inside automated test suites.
//!
//!
//! # Main features
//! - compare an actual string against an expected value with a family of
//!   ready-made predicates (exact, chomped, trimmed, case-insensitive,
//!   regular-expression, membership, caller-supplied), and
//! - on mismatch, deliver a single human-readable diagnostic through an
//!   injected [`FailureReporter`][report::FailureReporter] instead of
//!   panicking or returning `Err`, and
//! - attribute every failure to the *calling* test line, not to this
//!   library (each check captures [`std::panic::Location`]).
//!
//! <br>
//!
//! Visit the [`string`] module for the list of available checks,
//! and the [`report`] module for the provided reporter implementations.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `miette` (*disabled by default*): derives
//!   [`miette::Diagnostic`](https://docs.rs/miette/latest/miette/derive.Diagnostic.html)
//!   on [`CheckFailure`](crate::error::CheckFailure), which lets reporters
//!   forward failures into `miette`-based diagnostic output.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Collecting failures without aborting the test (fail-and-continue):
//! ```
//! use check_more::report::FailureAccumulator;
//! use check_more::string::{check_equal, check_equal_trimmed, StringCheckOptions};
//!
//! let mut reporter = FailureAccumulator::new();
//!
//! check_equal(&mut reporter, "hello", "hello", StringCheckOptions::default());
//! check_equal_trimmed(&mut reporter, "abc", "\tabc", StringCheckOptions::default());
//!
//! assert!(reporter.is_empty());
//!
//! // Panics here, listing every recorded failure, if any check above failed.
//! reporter.finish();
//! ```
//!
//! Failing hard on the first mismatch instead:
//! ```should_panic
//! use check_more::report::PanickingReporter;
//! use check_more::string::{check_equal, StringCheckOptions};
//!
//! let mut reporter = PanickingReporter;
//!
//! // Panics with a diagnostic containing both values and the caller's line.
//! check_equal(&mut reporter, "hello", "world", StringCheckOptions::default());
//! ```

#![warn(missing_docs)]


/// This brings in the README's doctests (and is present only when testing).
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;


pub mod error;
pub mod report;
pub mod string;
