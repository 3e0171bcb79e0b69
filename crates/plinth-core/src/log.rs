//! Minimal stream-wrapping logging sinks.
//!
//! Two sinks over any [`std::io::Write`] stream:
//!
//! - [`LogSink`] - pushes messages to an optional stream; an absent
//!   stream silently discards every write and is never an error
//! - [`DebugLogSink`] - same, plus a `"[ DEBUG ]: "`-prefixed channel
//!   gated by an explicit flag threaded through construction
//!
//! # Design
//!
//! The debug channel's on/off state is a constructor argument rather
//! than a compile-time switch, so both behaviors are testable in any
//! build. [`DebugLogSink::new`] defaults the flag to
//! `cfg!(debug_assertions)`, which gives release builds a no-op debug
//! channel without further wiring.
//!
//! # Usage
//!
//! ```
//! use plinth_core::log::LogSink;
//!
//! let mut sink = LogSink::new(Vec::new());
//! sink.push("hello", true).unwrap();
//! assert_eq!(sink.stream(), Some(&b"hello"[..].to_vec()));
//!
//! // Disconnected sinks swallow everything.
//! let mut quiet: LogSink<std::io::Stderr> = LogSink::disconnected();
//! quiet.push("nobody hears this", true).unwrap();
//! ```

use std::io::Write;

use crate::error::Result;

/// Prefix written ahead of every debug-channel message.
const DEBUG_PREFIX: &str = "[ DEBUG ]: ";

/// A message sink over an optional output stream.
///
/// When constructed [`disconnected`](LogSink::disconnected), every push
/// and flush succeeds without doing anything. When connected, write and
/// flush failures of the underlying stream surface as
/// [`Error::Io`](crate::Error::Io).
#[derive(Debug, Default)]
pub struct LogSink<W> {
    output: Option<W>,
}

impl<W: Write> LogSink<W> {
    /// Creates a sink writing to `output`.
    pub fn new(output: W) -> Self {
        Self {
            output: Some(output),
        }
    }

    /// Creates a sink with no output stream; all writes are discarded.
    pub fn disconnected() -> Self {
        Self { output: None }
    }

    /// Whether a stream is attached.
    pub fn is_connected(&self) -> bool {
        self.output.is_some()
    }

    /// The attached stream, if any.
    pub fn stream(&self) -> Option<&W> {
        self.output.as_ref()
    }

    /// Writes `message` to the stream, flushing afterwards if `flush`.
    pub fn push(&mut self, message: &str, flush: bool) -> Result<()> {
        if let Some(out) = self.output.as_mut() {
            out.write_all(message.as_bytes())?;
            if flush {
                out.flush()?;
            }
        }
        Ok(())
    }

    /// Flushes the stream.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(out) = self.output.as_mut() {
            out.flush()?;
        }
        Ok(())
    }
}

/// A [`LogSink`] with an additional debug-only channel.
///
/// [`push_debug`](DebugLogSink::push_debug) prefixes messages with
/// `"[ DEBUG ]: "` when the debug channel is enabled and does nothing at
/// all otherwise. The regular [`push`](DebugLogSink::push) channel is
/// unaffected by the flag.
#[derive(Debug)]
pub struct DebugLogSink<W> {
    inner: LogSink<W>,
    enabled: bool,
}

impl<W: Write> DebugLogSink<W> {
    /// Creates a debug sink writing to `output`.
    ///
    /// The debug channel follows the build: enabled when
    /// `debug_assertions` are on, disabled otherwise. Use
    /// [`with_mode`](DebugLogSink::with_mode) to choose explicitly.
    pub fn new(output: W) -> Self {
        Self::with_mode(output, cfg!(debug_assertions))
    }

    /// Creates a debug sink with the debug channel set explicitly.
    pub fn with_mode(output: W, enabled: bool) -> Self {
        Self {
            inner: LogSink::new(output),
            enabled,
        }
    }

    /// Creates a disconnected debug sink; all writes are discarded.
    pub fn disconnected() -> Self {
        Self {
            inner: LogSink::disconnected(),
            enabled: cfg!(debug_assertions),
        }
    }

    /// Whether the debug channel is enabled.
    pub fn is_debug_enabled(&self) -> bool {
        self.enabled
    }

    /// The attached stream, if any.
    pub fn stream(&self) -> Option<&W> {
        self.inner.stream()
    }

    /// Writes `message` unconditionally, like [`LogSink::push`].
    pub fn push(&mut self, message: &str, flush: bool) -> Result<()> {
        self.inner.push(message, flush)
    }

    /// Writes `message` behind the `"[ DEBUG ]: "` prefix.
    ///
    /// A no-op when the debug channel is disabled.
    pub fn push_debug(&mut self, message: &str, flush: bool) -> Result<()> {
        if self.enabled {
            self.inner.push(DEBUG_PREFIX, false)?;
            self.inner.push(message, flush)?;
        }
        Ok(())
    }

    /// Flushes the stream.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_writes_message() {
        let mut sink = LogSink::new(Vec::new());
        sink.push("alpha ", false).unwrap();
        sink.push("beta", true).unwrap();
        assert_eq!(sink.stream().unwrap(), b"alpha beta");
    }

    #[test]
    fn test_disconnected_discards() {
        let mut sink: LogSink<Vec<u8>> = LogSink::disconnected();
        sink.push("into the void", true).unwrap();
        sink.flush().unwrap();
        assert!(!sink.is_connected());
    }

    #[test]
    fn test_debug_prefix_when_enabled() {
        let mut sink = DebugLogSink::with_mode(Vec::new(), true);
        sink.push_debug("watch out", true).unwrap();
        assert_eq!(sink.stream().unwrap(), b"[ DEBUG ]: watch out");
    }

    #[test]
    fn test_debug_noop_when_disabled() {
        let mut sink = DebugLogSink::with_mode(Vec::new(), false);
        sink.push_debug("invisible", true).unwrap();
        assert_eq!(sink.stream().unwrap(), b"");
    }

    #[test]
    fn test_regular_channel_ignores_mode() {
        let mut sink = DebugLogSink::with_mode(Vec::new(), false);
        sink.push("always", true).unwrap();
        assert_eq!(sink.stream().unwrap(), b"always");
    }

    #[test]
    fn test_push_surfaces_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("pipe gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = LogSink::new(Broken);
        assert!(sink.push("boom", false).is_err());
    }
}
