//! # plinth-color
//!
//! RGBA color values for graphics and game code.
//!
//! This crate provides the color types of the plinth workspace:
//!
//! - [`Channel`] - channel data types with a per-type mapped maximum
//!   (`u8`, `u16`, [`half::f16`], `f32`, `f64`)
//! - [`Rgba`] - four-channel color with packed-u32 construction, depth
//!   conversion, averaging and blending
//! - [`hsv_to_rgb`], [`rgb_to_hsv`] - HSV conversions
//!
//! # Design
//!
//! All cross-depth math rides a normalized `f32` transport, so a blend
//! of `u8` colors and a blend of `f32` colors are the same computation
//! with a rounding step at the end. Two averaging algorithms are
//! offered: the plain per-channel mean and a root-mean-square mean that
//! tracks perceived brightness better.
//!
//! # Usage
//!
//! ```
//! use plinth_color::Rgba;
//!
//! let sky: Rgba<u8> = Rgba::from_hsv(210.0, 0.6, 0.9);
//! let haze = Rgba::from_rgb(220u8, 220, 210);
//! let horizon = sky.blend(0.3, &[haze]);
//! assert_eq!(horizon.a, 255);
//! ```
//!
//! # Dependencies
//!
//! - [`plinth_core`] - interpolation helper
//! - [`half`] - `f16` channel support

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod channel;
mod hsv;
mod rgba;

pub use channel::Channel;
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use rgba::Rgba;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use plinth_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
    pub use crate::rgba::Rgba;
}
