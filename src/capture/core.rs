use std::panic::{self, AssertUnwindSafe};

use crate::capture::filter::PanicFilter;
use crate::capture::panic::CapturedPanic;
use crate::outcome::Outcome;

/// The outcome of a captured callable.
pub type Captured<T> = Outcome<T, CapturedPanic>;

/// Runs `f`, converting a panic into a [`Failure`](Outcome::Failure) carrying
/// the panic payload.
///
/// The callable runs exactly once and its side effects stand regardless of
/// how it ends. A panic that crosses the boundary is intercepted whatever its
/// payload type; use [`capture_with`] to intercept selectively.
///
/// The closure runs under [`AssertUnwindSafe`], so a caught panic can leave
/// data reachable from outside the closure in a half-updated state, the same
/// exposure [`std::panic::catch_unwind`] documents. The global panic hook
/// still runs before the payload is captured, and under `panic = "abort"`
/// there is no unwind to intercept.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture;
///
/// let parsed = capture(|| "8000".parse::<u16>().unwrap());
/// assert_eq!(parsed.unwrap(), 8000);
///
/// let overflow = capture(|| i32::MAX.checked_add(1).unwrap());
/// assert!(overflow.is_failure());
/// ```
pub fn capture<T, F>(f: F) -> Captured<T>
where
    F: FnOnce() -> T,
{
    capture_with(&PanicFilter::all(), f)
}

/// Runs `f`, converting a panic into a [`Failure`](Outcome::Failure) when the
/// filter intercepts its payload type.
///
/// A panic whose payload the filter does not intercept resumes unwinding with
/// the original payload box, untouched, as if the boundary were not there.
///
/// # Examples
///
/// ```
/// use std::panic::panic_any;
/// use outcome_rail::capture::{capture_with, PanicFilter};
///
/// #[derive(Debug)]
/// struct Overflow;
///
/// let filter = PanicFilter::only::<Overflow>();
/// let outcome = capture_with(&filter, || -> u32 { panic_any(Overflow) });
/// assert!(outcome.into_failure().unwrap().is::<Overflow>());
/// ```
pub fn capture_with<T, F>(filter: &PanicFilter, f: F) -> Captured<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            if filter.intercepts(payload.as_ref()) {
                Outcome::Failure(CapturedPanic::new(payload))
            } else {
                panic::resume_unwind(payload)
            }
        }
    }
}

/// Wraps a unary function so that it returns a [`Captured`] outcome instead
/// of panicking.
///
/// The wrapped function keeps its argument as-is and holds no state between
/// calls; each call is an independent [`capture`]. Functions of other arities
/// adapt through a closure over the extra arguments.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::lift;
///
/// fn parse_port(raw: &str) -> u16 {
///     raw.parse().unwrap()
/// }
///
/// let safe_parse = lift(parse_port);
/// assert_eq!(safe_parse("8000").unwrap(), 8000);
/// assert!(safe_parse("not a port").is_failure());
/// ```
pub fn lift<A, T, F>(f: F) -> impl Fn(A) -> Captured<T>
where
    F: Fn(A) -> T,
{
    move |arg| capture(|| f(arg))
}

/// Wraps a unary function like [`lift`], intercepting only the panic payload
/// types the filter selects.
///
/// # Examples
///
/// ```
/// use std::panic::panic_any;
/// use outcome_rail::capture::{lift_with, PanicFilter};
///
/// #[derive(Debug, PartialEq)]
/// struct BadDigit(char);
///
/// fn digit_value(c: char) -> u32 {
///     match c.to_digit(10) {
///         Some(value) => value,
///         None => panic_any(BadDigit(c)),
///     }
/// }
///
/// let safe_digit = lift_with(PanicFilter::only::<BadDigit>(), digit_value);
/// assert_eq!(safe_digit('7').unwrap(), 7);
///
/// let failure = safe_digit('x').into_failure().unwrap();
/// assert_eq!(failure.downcast_ref::<BadDigit>(), Some(&BadDigit('x')));
/// ```
pub fn lift_with<A, T, F>(filter: PanicFilter, f: F) -> impl Fn(A) -> Captured<T>
where
    F: Fn(A) -> T,
{
    move |arg| capture_with(&filter, || f(arg))
}
