use core::any::Any;
use core::fmt;

/// The failure payload produced when a captured callable panics.
///
/// The panic payload is stored verbatim, exactly as the panic machinery
/// delivered it; nothing is wrapped or stringified on the way in.
/// String payloads (the common case, from `panic!("...")`) are reachable
/// through [`message`](Self::message); anything raised with
/// [`std::panic::panic_any`] is reachable through the downcast accessors with
/// its fields intact.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture;
///
/// let failure = capture(|| panic!("boom")).into_failure().unwrap();
/// assert_eq!(failure.message(), Some("boom"));
/// ```
pub struct CapturedPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CapturedPanic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message, if the payload is one of the two string
    /// shapes `panic!` produces (`&'static str` when the message folds to a
    /// constant, `String` when it is formatted at runtime).
    ///
    /// Payloads raised via [`std::panic::panic_any`] with any other type
    /// return `None`; use [`downcast_ref`](Self::downcast_ref) for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::capture;
    ///
    /// let plain = capture(|| panic!("plain")).into_failure().unwrap();
    /// assert_eq!(plain.message(), Some("plain"));
    ///
    /// let port = 8000;
    /// let formatted = capture(|| panic!("port {}", port)).into_failure().unwrap();
    /// assert_eq!(formatted.message(), Some("port 8000"));
    /// ```
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(&s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Borrows the raw panic payload.
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        self.payload.as_ref()
    }

    /// Recovers the raw panic payload, for example to re-raise it with
    /// [`std::panic::resume_unwind`].
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Returns `true` if the payload is of type `P`.
    #[must_use]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.as_ref().is::<P>()
    }

    /// Borrows the payload as type `P`, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::panic::panic_any;
    /// use outcome_rail::capture;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow(u32);
    ///
    /// let failure = capture(|| panic_any(Overflow(17))).into_failure().unwrap();
    /// assert_eq!(failure.downcast_ref::<Overflow>(), Some(&Overflow(17)));
    /// ```
    #[must_use]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Recovers the payload as type `P`, or hands the capture back unchanged
    /// if it is something else.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }
}

impl fmt::Debug for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {}", message),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for CapturedPanic {}
