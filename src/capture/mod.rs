//! Adapters that convert panicking callables into [`Outcome`]-returning ones.
//!
//! This module is the only place where a panic becomes a value. Everything on
//! the success side of the boundary works with plain [`Outcome`] values; the
//! panic payload crosses over inside a [`CapturedPanic`], verbatim.
//!
//! ## Key Components
//!
//! - [`capture()`] / [`capture_with()`]: run a closure once, returning
//!   `Success` with its value or `Failure` with the panic payload.
//! - [`lift()`] / [`lift_with()`]: wrap a unary function into one that
//!   returns [`Captured`] outcomes instead of panicking.
//! - [`PanicFilter`]: selects which payload types are intercepted; everything
//!   else keeps unwinding.
//! - [`CapturedPanic`]: the failure payload, with string and typed accessors.
//!
//! ## Examples
//!
//! ```
//! use outcome_rail::capture;
//!
//! let outcome = capture(|| "true".parse::<bool>().unwrap());
//! assert_eq!(outcome.unwrap(), true);
//!
//! let failure = capture(|| -> bool { panic!("bad flag") }).into_failure().unwrap();
//! assert_eq!(failure.message(), Some("bad flag"));
//! ```
//!
//! [`Outcome`]: crate::Outcome

pub mod core;
pub mod filter;
pub mod panic;

pub use self::core::{capture, capture_with, lift, lift_with, Captured};
pub use self::filter::PanicFilter;
pub use self::panic::CapturedPanic;
