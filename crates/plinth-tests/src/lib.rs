//! Integration tests for the plinth crates.
//!
//! This crate contains end-to-end tests for the properties that span
//! crate boundaries: geometric identities built on the core tolerance
//! tiers, unit conversions, and the color pipeline from HSV through
//! blending.
