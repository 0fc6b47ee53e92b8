//! # NMEA 0183 Stream Reader
//!
//! This library reads NMEA 0183 sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` out of a raw byte stream, such as the serial
//! output of a GPS receiver.
//!
//! It is made of two pieces:
//! - [`NmeaReader`], a fixed-memory ring buffer that delimits sentences,
//!   verifies their checksum and hands the sentence body, talker ID stripped,
//!   to a [`MessageHandler`]
//! - [`FieldCursor`], a tokenizer that reads comma-separated fields out of a
//!   sentence body as integers, floats, characters, strings, coordinates,
//!   dates and times, tolerating empty fields
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_stream::{FieldCursor, NmeaReader};
//!
//! let mut latitude = None;
//! let mut reader = NmeaReader::new(|message: &[u8]| {
//!     let mut cursor = FieldCursor::new(message);
//!     if cursor.read_string::<3>() == "GLL" {
//!         latitude = cursor.read_latitude();
//!     }
//! });
//!
//! reader.feed(b"$GNGLL,4404.14012,N,12118.85993,W,001037.00,A,A*67\r\n");
//!
//! drop(reader);
//! assert_eq!(latitude.map(|l| l.degrees), Some(44));
//! ```
//!
//! ## Features
//!
//! - `derive`: `#[derive(ReadFields)]` for field records
//! - `fix`: a position fix accumulator for GGA, RMC, GLL and VTG sentences
//! - `serde`: `Serialize`/`Deserialize` for the value types
//! - `time`: conversions into [`time`](https://docs.rs/time) dates and times

mod checksum;
pub mod convert;
pub mod error;
mod fields;
#[cfg(feature = "fix")]
pub mod fix;
mod parse;
mod reader;

pub use checksum::{checksum, format_checksum, hex_value};
#[cfg(feature = "time")]
pub use convert::ConversionError;
pub use error::StreamError;
pub use fields::{Coordinate, Date, FieldCursor, Time};
#[cfg(feature = "derive")]
pub use nmea0183_stream_derive::ReadFields;
pub use parse::{FieldValue, ReadField, ReadFields, latitude, longitude};
pub use reader::{
    BUFFER_CAPACITY, ErrorHandler, MESSAGE_MAX_LENGTH, MessageHandler, NmeaReader, ReaderBuilder,
    TALKER_ID_LENGTH,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
