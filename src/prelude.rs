//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`capture!`]
//! - **Types**: [`Outcome`], [`UnwrapError`], [`Captured`], [`CapturedPanic`], [`PanicFilter`]
//! - **Traits**: [`IntoOutcome`]
//! - **Functions**: [`capture()`], [`capture_with()`], [`lift()`], [`lift_with()`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     capture(|| raw.parse::<u16>().unwrap())
//!         .map_failure(|panic| format!("bad port: {}", panic))
//! }
//!
//! assert_eq!(parse_port("8000").unwrap_or(0), 8000);
//! assert!(parse_port("not a port").is_failure());
//! ```
//!
//! ## Adopting Existing Results
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_flag(raw: &str) -> Outcome<bool, String> {
//!     raw.parse::<bool>()
//!         .into_outcome()
//!         .map_failure(|e| format!("bad flag: {}", e))
//! }
//!
//! assert!(parse_flag("true").unwrap());
//! ```

// Core types
pub use crate::outcome::{Outcome, UnwrapError};

// Traits
pub use crate::convert::IntoOutcome;

// Panic capture; a plain-path import, so the `capture` function and macro
// come along with the module.
#[cfg(feature = "std")]
pub use crate::capture;
#[cfg(feature = "std")]
pub use crate::capture::{capture_with, lift, lift_with, Captured, CapturedPanic, PanicFilter};
