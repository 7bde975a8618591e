//! Railway-style handling for operations that either succeed or fail.
//!
//! An [`Outcome`] keeps the two sides of a computation on explicit rails: it
//! is either `Success` or `Failure`, and its combinators route values along
//! the success rail while failures ride through untouched. The capture
//! boundary brings panicking callables onto the rails without touching their
//! implementations.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Combinator Chain
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let port = Outcome::<&str, String>::success("8000")
//!     .and_then(|raw| match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(e) => Outcome::failure(e.to_string()),
//!     })
//!     .map(|port| port + 1);
//!
//! assert_eq!(port.unwrap(), 8001);
//! ```
//!
//! ## Capturing a Panicking Callable
//!
//! ```
//! use outcome_rail::capture;
//!
//! fn parse_port(raw: &str) -> u16 {
//!     raw.parse().unwrap()
//! }
//!
//! let outcome = capture(|| parse_port("8000"));
//! assert_eq!(outcome.unwrap(), 8000);
//!
//! let failed = capture(|| parse_port("not a port"));
//! assert!(failed.is_failure());
//! ```
//!
//! ## Selective Capture
//!
//! ```
//! use std::panic::panic_any;
//! use outcome_rail::capture::{lift_with, PanicFilter};
//!
//! #[derive(Debug)]
//! struct BadInput(&'static str);
//!
//! let checked_parse = lift_with(PanicFilter::only::<BadInput>(), |raw: &str| {
//!     match raw.parse::<u16>() {
//!         Ok(port) => port,
//!         Err(_) => panic_any(BadInput("port")),
//!     }
//! });
//!
//! let failure = checked_parse("no").into_failure().unwrap();
//! assert!(failure.is::<BadInput>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Panic capture, converting panicking callables into outcomes
#[cfg(feature = "std")]
pub mod capture;
/// Conversions between Result and Outcome
pub mod convert;
/// Macros for capturing panicking expressions
pub mod macros;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export the common surface at the root, but encourage using the prelude
// for anything beyond quick starts.
pub use convert::{outcome_to_result, result_to_outcome, IntoOutcome};
pub use outcome::{Outcome, UnwrapError};

#[cfg(feature = "std")]
pub use capture::{capture, capture_with, lift, lift_with, Captured, CapturedPanic, PanicFilter};
