//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for integrating outcome-rail with the
//! `tracing` ecosystem, emitting events as outcomes flow through a pipeline.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt;

use crate::outcome::Outcome;

/// Extension trait that records an outcome's state as tracing events.
///
/// Both methods pass the outcome through unchanged, so they slot into a
/// combinator chain at any point.
///
/// # Examples
///
/// ```
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<u16, String>::failure("bad port".into())
///     .trace_failure("parse_port")
///     .unwrap_or(0);
/// assert_eq!(outcome, 0);
/// ```
pub trait OutcomeTraceExt<T, E>: Sized {
    /// Emits an error event carrying the failure value in its `Debug` form,
    /// if there is one.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a debug event when the outcome is a success.
    fn trace_success(self, operation: &str) -> Self;
}

impl<T, E> OutcomeTraceExt<T, E> for Outcome<T, E>
where
    E: fmt::Debug,
{
    fn trace_failure(self, operation: &str) -> Self {
        self.inspect_failure(|error| tracing::error!(operation, ?error, "operation failed"))
    }

    fn trace_success(self, operation: &str) -> Self {
        self.inspect(|_| tracing::debug!(operation, "operation succeeded"))
    }
}
