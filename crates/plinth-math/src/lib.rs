//! # plinth-math
//!
//! Generic vector math and unit-tagged lengths for graphics and game
//! code.
//!
//! This crate provides the geometric value types of the plinth
//! workspace:
//!
//! - [`Vec2`], [`Vec3`] - fixed-arity vectors over any
//!   [`Scalar`](plinth_core::Scalar) component type
//! - [`Length`] - floating-point magnitudes tagged with a compile-time
//!   [`LengthUnit`] ratio, with automatic rescaling across units
//! - [`VecFormat`] - configurable diagnostic formatting for vectors
//!
//! # Design
//!
//! Everything is a plain value type: operations return new instances,
//! the `_mut` variants mutate in place, and nothing allocates beyond
//! stack values (except `format`, which produces a `String`). Illegal
//! component types (`bool`, references, non-arithmetic types) are
//! rejected at compile time by the `Scalar` bound.
//!
//! # Usage
//!
//! ```
//! use plinth_math::{Kilometers, Meters, Vec3};
//!
//! let v = Vec3::new(1.0_f32, 2.0, 2.0);
//! assert_eq!(v.length(), 3.0);
//!
//! let d = Meters::new(250.0) + Kilometers::new(1.0);
//! assert_eq!(d.value, 1250.0);
//! ```
//!
//! # Dependencies
//!
//! - [`plinth_core`] - scalar traits and tolerance helpers
//! - [`glam`] - interop conversions for the `f32` vector types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod format;
pub mod length;
mod vec2;
mod vec3;

pub use format::{Labels, VecFormat, Wrap};
pub use length::{
    Centimeters, Decameters, Decimeters, Gigameters, Hectometers, Kilometers, Length, LengthUnit,
    Lightyears, Megameters, Meters, Micrometers, Miles, Millimeters, Nanometers, Yards,
};
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use plinth_math::prelude::*;
/// ```
pub mod prelude {
    pub use crate::format::{Labels, VecFormat, Wrap};
    pub use crate::length::{Length, LengthUnit};
    pub use crate::vec2::Vec2;
    pub use crate::vec3::Vec3;
}
