//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the results of existing fallible APIs on the way in,
//! and flatten outcomes back into `Result` when handing values to code that
//! expects the standard type.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let result: Result<i32, &str> = Err("failed");
//! assert!(result.into_outcome().is_failure());
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` to an [`Outcome`].
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok_result: Result<i32, &str> = Ok(42);
/// let outcome = result_to_outcome(ok_result);
/// assert!(outcome.is_success());
///
/// let err_result: Result<i32, &str> = Err("failed");
/// let outcome = result_to_outcome(err_result);
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if outcome is `Success`
/// * `Err(error)` if outcome is `Failure`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let success = Outcome::<i32, &str>::success(42);
/// assert_eq!(outcome_to_result(success), Ok(42));
///
/// let failure = Outcome::<i32, &str>::failure("error");
/// assert_eq!(outcome_to_result(failure), Err("error"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Extension trait for converting standard results into outcomes with method
/// syntax.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::IntoOutcome;
///
/// let outcome = "8000".parse::<u16>().into_outcome();
/// assert_eq!(outcome.unwrap_or(0), 8000);
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
