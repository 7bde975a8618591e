//! Ergonomic macros for capturing panicking expressions.
//!
//! - [`macro@crate::capture`] - Wraps an expression or block and converts a
//!   panic inside it into a [`Failure`](crate::Outcome::Failure) via
//!   [`capture()`](crate::capture::capture).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::capture;
//!
//! let parsed = capture!("8000".parse::<u16>().unwrap());
//! assert_eq!(parsed.unwrap_or(0), 8000);
//! ```

/// Wraps an expression or block, converting a panic inside it into a
/// [`Failure`](crate::Outcome::Failure).
///
/// This macro provides a shorthand for calling [`capture()`](crate::capture::capture)
/// with a closure around the expression. It accepts either a single expression
/// or a block of code.
///
/// # Syntax
///
/// - `capture!(expr)` - Wraps a single expression
/// - `capture!({ ... })` - Wraps a block of statements
///
/// # Returns
///
/// A [`Captured<T>`](crate::capture::Captured) holding the expression's value
/// or the intercepted panic payload.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::capture;
///
/// // Simple expression
/// let outcome = capture!("true".parse::<bool>().unwrap());
/// assert_eq!(outcome.unwrap(), true);
///
/// // Block syntax with multiple statements
/// let outcome = capture!({
///     let raw = "localhost:8000";
///     let (_, port) = raw.split_once(':').unwrap();
///     port.parse::<u16>().unwrap()
/// });
/// assert_eq!(outcome.unwrap(), 8000);
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! capture {
    ($expr:expr $(,)?) => {
        $crate::capture::capture(move || $expr)
    };
}
