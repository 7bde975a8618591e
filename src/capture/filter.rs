use core::any::{Any, TypeId};

use smallvec::{smallvec, SmallVec};

/// Selects which panic payload types [`capture_with`](crate::capture::capture_with)
/// intercepts.
///
/// The default filter intercepts every payload. A filter built with
/// [`only`](Self::only) intercepts nothing but the listed payload types,
/// matched exactly by [`TypeId`]; a panic whose payload is not listed unwinds
/// onward as if the capture boundary were not there.
///
/// A `panic!` message the compiler can fold to a constant (a plain literal,
/// or formatting with only literal arguments) carries a `&'static str`
/// payload; formatting with runtime values carries a `String`. A filter for
/// typed payloads raised through [`std::panic::panic_any`] lets both kinds
/// of message panic propagate.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::PanicFilter;
///
/// struct Overflow;
/// struct Timeout;
///
/// let filter = PanicFilter::only::<Overflow>().or::<Timeout>();
/// assert!(filter.intercepts(&Overflow));
/// assert!(filter.intercepts(&Timeout));
/// assert!(!filter.intercepts(&"plain message"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PanicFilter {
    /// `None` intercepts every payload type.
    kinds: Option<SmallVec<[TypeId; 2]>>,
}

impl PanicFilter {
    /// Creates a filter that intercepts every panic payload.
    ///
    /// This is the default: [`capture`](crate::capture::capture) behaves as if
    /// built with this filter.
    #[must_use]
    pub fn all() -> Self {
        Self { kinds: None }
    }

    /// Creates a filter that intercepts only payloads of type `P`.
    #[must_use]
    pub fn only<P: Any>() -> Self {
        Self {
            kinds: Some(smallvec![TypeId::of::<P>()]),
        }
    }

    /// Extends the filter to also intercept payloads of type `P`.
    ///
    /// On a filter that already intercepts everything this is a no-op.
    #[must_use]
    pub fn or<P: Any>(mut self) -> Self {
        if let Some(kinds) = &mut self.kinds {
            let id = TypeId::of::<P>();
            if !kinds.contains(&id) {
                kinds.push(id);
            }
        }
        self
    }

    /// Returns `true` if the filter intercepts every payload type.
    #[must_use]
    pub fn intercepts_all(&self) -> bool {
        self.kinds.is_none()
    }

    /// Returns `true` if a panic carrying `payload` would be intercepted.
    #[must_use]
    pub fn intercepts(&self, payload: &(dyn Any + Send)) -> bool {
        match &self.kinds {
            None => true,
            Some(kinds) => kinds.contains(&payload.type_id()),
        }
    }
}
