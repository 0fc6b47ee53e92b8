//! # NMEA 0183 Stream Reader
//!
//! This module delimits NMEA 0183 sentences in a byte stream:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! Bytes are pushed one at a time into a fixed-capacity ring buffer. Each scan
//! looks for a `$` start marker followed by a `*` end marker and the two
//! checksum digits, checks the XOR checksum, and hands the sentence body, with
//! the two-character talker ID stripped, to a [`MessageHandler`].
//!
//! The reader never allocates or blocks on the byte path. When the buffer is
//! full the oldest byte is evicted and an error is reported, so a stream that
//! never completes a sentence cannot grow memory.

use std::io;

use tracing::{debug, trace};

use crate::{StreamError, checksum::decode_checksum};

/// Maximum length of a single NMEA 0183 sentence.
pub const MESSAGE_MAX_LENGTH: usize = 82;

/// Default ring buffer capacity, enough for two maximal sentences.
pub const BUFFER_CAPACITY: usize = MESSAGE_MAX_LENGTH * 2;

/// Number of talker ID characters stripped from the front of every body.
pub const TALKER_ID_LENGTH: usize = 2;

const START_MARKER: u8 = b'$';
const END_MARKER: u8 = b'*';

/// Receives checksum-validated sentence bodies.
///
/// Implemented for every `FnMut(&[u8])`, so a closure can be used directly.
/// The slice borrows the reader's message buffer and is only valid for the
/// duration of the call.
pub trait MessageHandler {
    /// Called with the sentence body, talker ID stripped, e.g. `RMC,001031.00,A,...`.
    fn on_message(&mut self, message: &[u8]);
}

impl<F> MessageHandler for F
where
    F: FnMut(&[u8]),
{
    fn on_message(&mut self, message: &[u8]) {
        self(message)
    }
}

/// Receives the faults the reader runs into.
///
/// Implemented for every `FnMut(StreamError, &[u8])`. See [`StreamError`] for
/// what the data slice holds for each error.
pub trait ErrorHandler {
    /// Called once per fault, before the triggering call returns.
    fn on_error(&mut self, error: StreamError, data: &[u8]);
}

impl<F> ErrorHandler for F
where
    F: FnMut(StreamError, &[u8]),
{
    fn on_error(&mut self, error: StreamError, data: &[u8]) {
        self(error, data)
    }
}

/// A streaming NMEA 0183 sentence reader.
///
/// `CAPACITY` is the ring buffer size and must be even and non-zero. `MESSAGE`
/// is the longest sentence body the reader can deliver.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::NmeaReader;
///
/// let mut messages = Vec::new();
/// let mut reader = NmeaReader::new(|message: &[u8]| messages.push(message.to_vec()));
///
/// for &byte in b"$GPGGA,123456,data*41\r\n" {
///     reader.process_char(byte);
/// }
///
/// drop(reader);
/// assert_eq!(messages, [b"GGA,123456,data".to_vec()]);
/// ```
pub struct NmeaReader<
    'a,
    M,
    const CAPACITY: usize = BUFFER_CAPACITY,
    const MESSAGE: usize = MESSAGE_MAX_LENGTH,
> {
    buffer: [u8; CAPACITY],
    message: heapless::Vec<u8, MESSAGE>,
    length: usize,
    head: usize,
    tail: usize,
    dirty: bool,
    message_handler: M,
    error_handler: Option<Box<dyn ErrorHandler + 'a>>,
}

impl<M> NmeaReader<'_, M>
where
    M: MessageHandler,
{
    /// Creates an empty reader with the default capacities and no error
    /// handler.
    ///
    /// Use [`ReaderBuilder::build_with_capacity`] for other capacities.
    pub fn new(message_handler: M) -> Self {
        Self::empty(message_handler)
    }
}

impl<'a, M, const CAPACITY: usize, const MESSAGE: usize> NmeaReader<'a, M, CAPACITY, MESSAGE>
where
    M: MessageHandler,
{
    const VALID_CAPACITY: () = assert!(
        CAPACITY > 0 && CAPACITY % 2 == 0,
        "buffer capacity must be even and non-zero"
    );

    fn empty(message_handler: M) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CAPACITY;

        Self {
            buffer: [0; CAPACITY],
            message: heapless::Vec::new(),
            length: 0,
            head: 0,
            tail: 0,
            dirty: false,
            message_handler,
            error_handler: None,
        }
    }

    /// Installs the error handler, replacing any previous one.
    pub fn set_error_handler(&mut self, error_handler: impl ErrorHandler + 'a) {
        self.error_handler = Some(Box::new(error_handler));
    }

    /// Removes the error handler; errors are silently dropped afterwards.
    pub fn clear_error_handler(&mut self) {
        self.error_handler = None;
    }

    /// Appends one byte to the ring buffer without scanning for sentences.
    ///
    /// If the buffer is full, the oldest byte is evicted and
    /// [`StreamError::BufferOverflow`] is reported with the raw buffer storage.
    pub fn add_char(&mut self, byte: u8) {
        self.buffer[self.head] = byte;
        self.head = (self.head + 1) % CAPACITY;
        self.dirty = true;

        if self.length < CAPACITY {
            self.length += 1;
            return;
        }

        self.tail = (self.tail + 1) % CAPACITY;
        debug!(capacity = CAPACITY, "input buffer full, evicting oldest byte");

        if let Some(error_handler) = self.error_handler.as_mut() {
            error_handler.on_error(StreamError::BufferOverflow, &self.buffer);
        }
    }

    /// Scans the buffered bytes for one complete sentence.
    ///
    /// Does nothing unless bytes were added since the last scan. Calls at most
    /// one handler. If more bytes remain buffered after a sentence, the next
    /// call scans again.
    pub fn process(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let Some(start) = (0..self.length).find(|&offset| self.at(offset) == START_MARKER) else {
            return;
        };

        // The two checksum digits after `*` must be buffered as well.
        let Some(end) = (start + 1..self.length).find(|&offset| self.at(offset) == END_MARKER)
        else {
            return;
        };
        if end + 2 >= self.length {
            return;
        }

        let mut computed = 0u8;
        let mut truncated = false;
        self.message.clear();
        for offset in start + 1..end {
            let byte = self.at(offset);
            computed ^= byte;
            truncated |= self.message.push(byte).is_err();
        }
        let declared = decode_checksum(self.at(end + 1), self.at(end + 2));

        let consumed = end + 3;
        self.tail = (self.tail + consumed) % CAPACITY;
        self.length -= consumed;
        self.dirty = self.length > 0;

        let body = self.message.get(TALKER_ID_LENGTH..).unwrap_or_default();

        if truncated {
            let length = end - start - 1;
            debug!(length, limit = MESSAGE, "sentence too long for message buffer");

            if let Some(error_handler) = self.error_handler.as_mut() {
                error_handler.on_error(StreamError::MessageTooLong { length }, body);
            }
            return;
        }

        if declared != Some(computed) {
            debug!(expected = computed, found = ?declared, "checksum mismatch");

            if let Some(error_handler) = self.error_handler.as_mut() {
                error_handler.on_error(
                    StreamError::Checksum {
                        expected: computed,
                        found: declared,
                    },
                    body,
                );
            }
            return;
        }

        trace!(length = body.len(), "sentence delivered");
        self.message_handler.on_message(body);
    }

    /// Appends one byte and scans for a sentence.
    ///
    /// Shorthand for [`add_char`](Self::add_char) followed by
    /// [`process`](Self::process).
    pub fn process_char(&mut self, byte: u8) {
        self.add_char(byte);
        self.process();
    }

    /// Processes every byte of `bytes` in order, as if passed one at a time to
    /// [`process_char`](Self::process_char).
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.process_char(byte);
        }
    }

    /// Drops all buffered bytes. Handlers are kept.
    pub fn clear(&mut self) {
        self.length = 0;
        self.head = 0;
        self.tail = 0;
        self.dirty = false;
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the next byte will evict the oldest one.
    pub fn is_full(&self) -> bool {
        self.length == CAPACITY
    }

    /// Ring buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Borrows the message handler.
    pub fn message_handler(&self) -> &M {
        &self.message_handler
    }

    /// Mutably borrows the message handler.
    pub fn message_handler_mut(&mut self) -> &mut M {
        &mut self.message_handler
    }

    /// Consumes the reader and returns the message handler.
    pub fn into_message_handler(self) -> M {
        self.message_handler
    }

    /// Byte at `offset` positions after the tail.
    fn at(&self, offset: usize) -> u8 {
        self.buffer[(self.tail + offset) % CAPACITY]
    }
}

/// Feeds written bytes through the reader, so it can be the target of
/// [`io::copy`].
///
/// ```rust
/// use std::io;
/// use nmea0183_stream::NmeaReader;
///
/// let mut count = 0;
/// let mut reader = NmeaReader::new(|_: &[u8]| count += 1);
///
/// let mut input: &[u8] = b"$GPGGA,data*6A\r\n$GPGGA,data*6A\r\n";
/// io::copy(&mut input, &mut reader).unwrap();
///
/// drop(reader);
/// assert_eq!(count, 2);
/// ```
impl<M, const CAPACITY: usize, const MESSAGE: usize> io::Write
    for NmeaReader<'_, M, CAPACITY, MESSAGE>
where
    M: MessageHandler,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a configured [`NmeaReader`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{ReaderBuilder, StreamError};
///
/// let mut errors = Vec::new();
/// let mut reader = ReaderBuilder::new()
///     .error_handler(|error: StreamError, _: &[u8]| errors.push(error))
///     .build(|_: &[u8]| {});
///
/// reader.feed(b"$GPGGA,data*00\r\n");
///
/// drop(reader);
/// assert_eq!(
///     errors,
///     [StreamError::Checksum { expected: 0x6A, found: Some(0x00) }]
/// );
/// ```
#[must_use]
#[derive(Default)]
pub struct ReaderBuilder<'a> {
    /// Error handler installed on the built reader.
    error_handler: Option<Box<dyn ErrorHandler + 'a>>,
}

impl<'a> ReaderBuilder<'a> {
    /// Creates a builder with no error handler.
    pub fn new() -> Self {
        ReaderBuilder {
            error_handler: None,
        }
    }

    /// Sets the error handler.
    pub fn error_handler(mut self, error_handler: impl ErrorHandler + 'a) -> Self {
        self.error_handler = Some(Box::new(error_handler));
        self
    }

    /// Builds a reader with the default capacities.
    pub fn build<M>(self, message_handler: M) -> NmeaReader<'a, M>
    where
        M: MessageHandler,
    {
        self.build_with_capacity(message_handler)
    }

    /// Builds a reader with explicit ring buffer and message capacities.
    ///
    /// ```rust
    /// use nmea0183_stream::{NmeaReader, ReaderBuilder};
    ///
    /// let reader: NmeaReader<'_, _, 256, 128> =
    ///     ReaderBuilder::new().build_with_capacity(|_: &[u8]| {});
    /// assert_eq!(reader.capacity(), 256);
    /// ```
    pub fn build_with_capacity<M, const CAPACITY: usize, const MESSAGE: usize>(
        self,
        message_handler: M,
    ) -> NmeaReader<'a, M, CAPACITY, MESSAGE>
    where
        M: MessageHandler,
    {
        let mut reader = NmeaReader::empty(message_handler);
        reader.error_handler = self.error_handler;
        reader
    }
}
