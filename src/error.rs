//! # Error Types
//!
//! This module defines the faults the stream reader reports through its error
//! handler. None of them stop ingestion: the reader keeps consuming input after
//! reporting any of these.

/// Represents all faults the [`NmeaReader`](crate::NmeaReader) can report.
///
/// Errors are delivered to the optional [`ErrorHandler`](crate::ErrorHandler)
/// together with a view of the bytes involved. When no error handler is
/// installed they are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A complete frame was delimited but its checksum was corrupt or incorrect.
    ///
    /// The frame is consumed and lost. The data passed along with this error is
    /// the untrusted sentence body, talker prefix stripped.
    #[error("checksum mismatch: computed {expected:02X}, declared {found:02X?}")]
    Checksum {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum declared after `*`, or [`None`] if it was not valid hex
        found: Option<u8>,
    },

    /// The input buffer was full when a new byte arrived.
    ///
    /// The oldest buffered byte was evicted to make room for the new one. The
    /// data passed along with this error is the raw ring buffer storage, in
    /// storage order rather than arrival order.
    #[error("input buffer overflow, oldest byte evicted")]
    BufferOverflow,

    /// A frame was delimited but its body does not fit the message buffer.
    ///
    /// The frame is consumed and never delivered as a message. The data passed
    /// along with this error is the truncated body, talker prefix stripped.
    #[error("sentence body of {length} bytes exceeds the message buffer")]
    MessageTooLong {
        /// Length of the full body between `$` and `*`
        length: usize,
    },
}
