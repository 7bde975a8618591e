use core::fmt;

/// Error produced when an accessor asks for the variant that is not present.
///
/// The payload of the variant that *was* present travels inside the error
/// unchanged, so diagnostic context survives the failed access. The panicking
/// accessors ([`Outcome::unwrap`](crate::Outcome::unwrap) and friends) panic
/// with exactly the [`Display`](fmt::Display) rendering of the corresponding
/// `UnwrapError`, keeping the two access styles consistent.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let err = Outcome::<i32, &str>::failure("nope").try_unwrap().unwrap_err();
/// assert_eq!(err.payload(), &"nope");
/// assert!(err.message().contains("try_unwrap"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnwrapError<P> {
    message: &'static str,
    payload: P,
}

impl<P> UnwrapError<P> {
    pub(crate) fn new(message: &'static str, payload: P) -> Self {
        Self { message, payload }
    }

    /// The static description of the accessor that failed.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Borrows the payload of the variant that was actually present.
    #[must_use]
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Recovers the payload of the variant that was actually present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let err = Outcome::<i32, &str>::success(7).try_unwrap_failure().unwrap_err();
    /// assert_eq!(err.into_payload(), 7);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: fmt::Debug> fmt::Display for UnwrapError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.message, self.payload)
    }
}

#[cfg(feature = "std")]
impl<P: fmt::Debug> std::error::Error for UnwrapError<P> {}

/// Panic entry point shared by the unchecked accessors.
///
/// Kept out of line so the accessors stay trivially inlinable; the message
/// format matches [`UnwrapError`]'s `Display` impl.
#[cold]
#[track_caller]
pub(crate) fn unwrap_failed(message: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{}: {:?}", message, payload)
}
