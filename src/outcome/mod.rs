//! The [`Outcome`] container and its combinators.
//!
//! This module provides the [`Outcome`] type, an exclusively-one-of container
//! holding either a success payload or a failure payload. Values flow through
//! chains of combinators ([`map`](Outcome::map), [`and_then`](Outcome::and_then),
//! [`or_else`](Outcome::or_else), ...) with the first failure short-circuiting
//! the rest, and are consumed by terminal accessors such as
//! [`map_or_else`](Outcome::map_or_else).
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type representing either a success or a failure
//! - [`UnwrapError`] - Variant-access error carrying the payload that was
//!   actually present
//! - Iterator adapters over the success payload
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed = Outcome::<&str, String>::success("8000")
//!     .and_then(|s| match s.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(e) => Outcome::failure(e.to_string()),
//!     });
//! assert_eq!(parsed.into_success(), Some(8000));
//! ```
pub mod core;
pub mod iter;
pub mod unwrap;

pub use self::core::*;
pub use self::iter::*;
pub use self::unwrap::UnwrapError;
