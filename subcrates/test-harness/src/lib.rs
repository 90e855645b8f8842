//! Assertion helpers for `check-more`'s own unit and integration tests.
//!
//! Tests drive the library through a
//! [`FailureAccumulator`][check_more::report::FailureAccumulator] and then
//! assert on what it recorded; the [`assertions`] module provides the
//! `#[track_caller]` assertion methods used for that.

pub mod assertions;
pub mod prelude;
