//! # plinth-core
//!
//! Core numeric traits and helpers for the plinth foundation crates.
//!
//! This crate is the root of the plinth workspace and has no internal
//! dependencies. It provides:
//!
//! - [`Scalar`], [`Float`] - compile-time predicates for legal numeric
//!   element types, with per-type constants (Pi, tolerance tiers) and
//!   widening casts
//! - [`math`] - ordering, clamping and tolerance-comparison helpers
//! - [`LogSink`], [`DebugLogSink`] - minimal stream-wrapping message
//!   sinks
//! - [`Error`], [`Result`] - the crate error type
//!
//! ## Crate Structure
//!
//! ```text
//! plinth-core (this crate)
//!    ^
//!    |
//!    +-- plinth-math  (vectors, lengths)
//!    +-- plinth-color (RGBA color, HSV)
//! ```
//!
//! ## Design Philosophy
//!
//! Everything here is a stateless helper or a single-owner value type.
//! There is no shared mutable state, no locking and no allocation beyond
//! stack values; instances are freely usable from multiple threads as
//! long as no single instance is shared mutably.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod log;
pub mod math;
pub mod scalar;

pub use error::{Error, Result};
pub use log::{DebugLogSink, LogSink};
pub use scalar::{Float, Scalar};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use plinth_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::log::{DebugLogSink, LogSink};
    pub use crate::math::{clamp, clamp_checked, lerp, min_max, nearly_equal, nearly_equal_tol};
    pub use crate::scalar::{Float, Scalar};
}
