//! Error type for plinth-core operations.
//!
//! The plinth value types are pure math and have no runtime failure
//! modes: illegal scalar types are rejected at compile time by the trait
//! bounds in [`crate::scalar`], and out-of-range component indexing is a
//! contract violation that panics in every build. The only fallible
//! surface is the logging sink, which performs real I/O.
//!
//! # Usage
//!
//! ```no_run
//! use plinth_core::log::LogSink;
//! use plinth_core::Result;
//!
//! fn announce(sink: &mut LogSink<std::io::Stderr>) -> Result<()> {
//!     sink.push("starting up\n", true)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plinth-core.
#[derive(Debug, Error)]
pub enum Error {
    /// The logging sink's underlying stream failed to write or flush.
    #[error("log stream error: {0}")]
    Io(#[from] std::io::Error),
}
