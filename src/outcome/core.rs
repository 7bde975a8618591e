use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::unwrap::{unwrap_failed, UnwrapError};

/// Railway-style result that is exactly one of a success or a failure.
///
/// `Outcome<T, E>` holds either a success payload of type `T` or a failure
/// payload of type `E`, never both and never neither. Every combinator consumes
/// the container and produces a new one (or a plain value for terminal
/// accessors), so a value can flow through a chain of transformation steps with
/// the first failure short-circuiting the rest.
///
/// Unlike [`Result`], which participates in `?`-based early return, `Outcome`
/// is designed for explicit pipelines: build the chain with [`map`](Self::map)
/// and [`and_then`](Self::and_then), then consume it with a terminal accessor
/// such as [`map_or_else`](Self::map_or_else). Conversion in both directions is
/// cheap, see [`from_result`](Self::from_result) and
/// [`into_result`](Self::into_result).
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Variants
///
/// * `Success(T)` - The operation produced a value
/// * `Failure(E)` - The operation failed with a payload describing why
///
/// Both variants are public so that callers can pattern match exhaustively;
/// the compiler rules out any third state.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let success = Outcome::<i32, &str>::success(42);
/// assert!(success.is_success());
///
/// let failure = Outcome::<i32, &str>::failure("nope");
/// assert!(failure.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Arguments
    ///
    /// * `error` - The failure payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a success payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("nope");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success payload using the provided function.
    ///
    /// A failure passes through unchanged and `f` is never invoked for it.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success payload from `T` to `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21);
    /// assert_eq!(o.map(|x| x * 2).into_success(), Some(42));
    ///
    /// let o = Outcome::<i32, &str>::failure("nope");
    /// assert_eq!(o.map(|x| x * 2).into_failure(), Some("nope"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload while preserving the success branch.
    ///
    /// Symmetric to [`map`](Self::map): a success passes through unchanged and
    /// `f` is never invoked for it.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the failure payload from `E` to `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("timeout");
    /// let mapped = o.map_failure(|e| format!("io: {}", e));
    /// assert_eq!(mapped.into_failure(), Some("io: timeout".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// Invokes `f` only when the current outcome is a success; a failure
    /// short-circuits, so in a pipeline of `and_then` calls the steps after the
    /// first failure are never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step's outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// let o = Outcome::<i32, &str>::success(42).and_then(halve);
    /// assert_eq!(o.into_success(), Some(21));
    ///
    /// let o = Outcome::<i32, &str>::failure("earlier").and_then(halve);
    /// assert_eq!(o.into_failure(), Some("earlier"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a recovery computation on the failure branch.
    ///
    /// Invokes `f` only when the current outcome is a failure; a success passes
    /// through unchanged. Symmetric to [`and_then`](Self::and_then).
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the recovery outcome from the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("miss");
    /// let recovered = o.or_else(|_| Outcome::<i32, String>::success(0));
    /// assert_eq!(recovered.into_success(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the success payload, or `default` for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).unwrap_or(0), 42);
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").unwrap_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes a fallback from the failure
    /// payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::failure("broken");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 6);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Maps the success payload, or returns `default` for a failure.
    ///
    /// # Arguments
    ///
    /// * `default` - The value to return for a failure
    /// * `f` - A function applied to the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).map_or(0, |x| x + 1), 43);
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").map_or(0, |x| x + 1), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => default,
        }
    }

    /// Reduces the outcome to a single value by running exactly one of the two
    /// callbacks, the one matching the current variant.
    ///
    /// This is the terminal operation for branching on the outcome without
    /// panicking. Note the argument order: the success handler comes first,
    /// unlike [`Result::map_or_else`].
    ///
    /// # Arguments
    ///
    /// * `on_success` - Callback for the success payload
    /// * `on_failure` - Callback for the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// let msg = o.map_or_else(
    ///     |v| format!("got {}", v),
    ///     |e| format!("failed: {}", e),
    /// );
    /// assert_eq!(msg, "got 42");
    /// ```
    #[inline]
    pub fn map_or_else<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Calls `f` with a reference to the success payload, passing the outcome
    /// through unchanged.
    ///
    /// Useful for logging or debugging in the middle of a chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::success(42).inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the failure payload, passing the outcome
    /// through unchanged.
    ///
    /// Placed at the end of a chain this observes whichever failure
    /// short-circuited it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::failure("nope").inspect_failure(|e| seen = Some(*e));
    /// assert_eq!(seen, Some("nope"));
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Extracts the success payload, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_success(), Some(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").into_success(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").into_failure(), Some("nope"));
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Wraps a [`Result`], mapping `Ok` to `Success` and `Err` to `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert!(Outcome::from_result(result).is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a [`Result`], mapping `Success` to `Ok` and `Failure` to
    /// `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).into_result(), Ok(42));
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").into_result(), Err("nope"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the success payload without panicking, or an [`UnwrapError`]
    /// carrying the failure payload that was actually present.
    ///
    /// This is the total counterpart of [`unwrap`](Self::unwrap): the failure
    /// payload comes back unchanged inside the error, so nothing is lost by
    /// asking for the wrong variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("nope");
    /// let err = o.try_unwrap().unwrap_err();
    /// assert_eq!(err.into_payload(), "nope");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::new(
                "called `Outcome::try_unwrap()` on a `Failure` value",
                error,
            )),
        }
    }

    /// Returns the failure payload without panicking, or an [`UnwrapError`]
    /// carrying the success payload that was actually present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// let err = o.try_unwrap_failure().unwrap_err();
    /// assert_eq!(err.into_payload(), 42);
    /// ```
    #[inline]
    pub fn try_unwrap_failure(self) -> Result<E, UnwrapError<T>> {
        match self {
            Self::Success(value) => Err(UnwrapError::new(
                "called `Outcome::try_unwrap_failure()` on a `Success` value",
                value,
            )),
            Self::Failure(error) => Ok(error),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with a message carrying the failure
    /// payload's `Debug` rendering. Prefer [`try_unwrap`](Self::try_unwrap) or
    /// [`map_or_else`](Self::map_or_else) outside of tests and prototypes.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::failure("boom").unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Returns the success payload, panicking with `msg` on a failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with `msg` followed by the failure
    /// payload's `Debug` rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.expect("checked above"), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => unwrap_failed(msg, &error),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success, with a message carrying the success
    /// payload's `Debug` rendering. Symmetric to [`unwrap`](Self::unwrap).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("nope").unwrap_failure(), "nope");
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::success(42).unwrap_failure(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(value) => unwrap_failed(
                "called `Outcome::unwrap_failure()` on a `Success` value",
                &value,
            ),
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload, panicking with `msg` on a success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success, with `msg` followed by the success
    /// payload's `Debug` rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("nope");
    /// assert_eq!(o.expect_failure("should have failed"), "nope");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Self::Success(value) => unwrap_failed(msg, &value),
            Self::Failure(error) => error,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
