//! # Field Tokenizer
//!
//! A cursor-based reader over a sentence payload. Fields are separated by `,`
//! and the payload ends at `*` or at the end of the slice.
//!
//! Every read advances the cursor past exactly one field, whether or not the
//! field held a usable value. A handler can therefore read a fixed sequence of
//! fields and an empty or malformed field never shifts the ones after it.
//!
//! ```rust
//! use nmea0183_stream::FieldCursor;
//!
//! let mut cursor = FieldCursor::new(b"GGA,001043.00,4404.14036,N,,W");
//!
//! let sentence_id = cursor.read_string::<3>();
//! let time = cursor.read_time().unwrap();
//! let latitude = cursor.read_latitude().unwrap();
//! let north_south = cursor.read_char();
//! let longitude = cursor.read_longitude();
//! let east_west = cursor.read_char();
//!
//! assert_eq!(sentence_id, "GGA");
//! assert_eq!((time.hours, time.minutes), (0, 10));
//! assert_eq!(latitude.degrees, 44);
//! assert_eq!(north_south, Some('N'));
//! assert_eq!(longitude, None);
//! assert_eq!(east_west, Some('W'));
//! ```

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::digit0,
    combinator::{all_consuming, map_parser},
    number::complete::{double, float},
};

type NomResult<'a, O> = nom::IResult<&'a [u8], O, nom::error::Error<&'a [u8]>>;

/// A coordinate in DMM format (degrees and decimal minutes).
///
/// This is the native wire format of NMEA 0183 positions, e.g. `4404.14036`
/// is 44 degrees and 4.14036 minutes. See the [`convert`](crate::convert)
/// module for decimal degrees and DMS.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Whole degrees, 0-180
    pub degrees: u8,
    /// Decimal minutes, 0-60
    pub decimal_minutes: f64,
}

/// A calendar date with a two-digit year (e.g. 2017 is `17`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Two-digit year, 0-99
    pub year: u8,
}

/// A UTC time of day. Seconds may carry a fractional part.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Time {
    /// Hours, 0-24
    pub hours: u8,
    /// Minutes, 0-60
    pub minutes: u8,
    /// Seconds, 0-60
    pub seconds: f32,
}

/// A read position inside a sentence payload.
///
/// The cursor borrows the payload and owns its offset. It is `Copy`, so a
/// handler can save a position and come back to it.
///
/// Reads return [`None`] for an empty field (`,,`). In that case the cursor
/// moves by one byte, over the delimiter. Reading past the end of the payload
/// keeps returning empty fields; the position stops one byte past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCursor<'a> {
    message: &'a [u8],
    position: usize,
}

fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b',' | b'*')
}

impl<'a> FieldCursor<'a> {
    /// Creates a cursor at the start of `message`.
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            message,
            position: 0,
        }
    }

    /// The current offset into the payload.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unread part of the payload, starting at the current field.
    pub fn remaining(&self) -> &'a [u8] {
        self.message.get(self.position..).unwrap_or_default()
    }

    /// Returns `true` once the last field has been read.
    pub fn is_exhausted(&self) -> bool {
        self.position > self.message.len()
    }

    /// Reads the raw bytes of the current field and moves past its delimiter.
    ///
    /// ```rust
    /// use nmea0183_stream::FieldCursor;
    ///
    /// let mut cursor = FieldCursor::new(b"VTG,220.86,T,,M");
    /// assert_eq!(cursor.read_field(), b"VTG");
    /// assert_eq!(cursor.read_field(), b"220.86");
    /// assert_eq!(cursor.read_field(), b"T");
    /// assert_eq!(cursor.read_field(), b"");
    /// assert_eq!(cursor.read_field(), b"M");
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn read_field(&mut self) -> &'a [u8] {
        let start = self.position.min(self.message.len());
        let rest = &self.message[start..];
        let length = rest
            .iter()
            .position(|&byte| is_delimiter(byte))
            .unwrap_or(rest.len());

        self.position = start + length + 1;
        &rest[..length]
    }

    /// Skips the current field.
    pub fn skip_field(&mut self) {
        self.read_field();
    }

    /// Skips `count` fields.
    pub fn skip_fields(&mut self, count: usize) {
        for _ in 0..count {
            self.skip_field();
        }
    }

    fn read_present(&mut self) -> Option<&'a [u8]> {
        let field = self.read_field();
        (!field.is_empty()).then_some(field)
    }

    /// Reads an unsigned 8-bit integer.
    ///
    /// Leading digits are parsed and anything after them is ignored; a field
    /// without leading digits reads as `0`. Values too large for the type
    /// saturate at its maximum.
    pub fn read_u8(&mut self) -> Option<u8> {
        self.read_present()
            .map(|field| u8::try_from(leading_integer(field)).unwrap_or(u8::MAX))
    }

    /// Reads an unsigned 16-bit integer. See [`read_u8`](Self::read_u8).
    pub fn read_u16(&mut self) -> Option<u16> {
        self.read_present()
            .map(|field| u16::try_from(leading_integer(field)).unwrap_or(u16::MAX))
    }

    /// Reads an unsigned 32-bit integer. See [`read_u8`](Self::read_u8).
    ///
    /// ```rust
    /// use nmea0183_stream::FieldCursor;
    ///
    /// let mut cursor = FieldCursor::new(b"100117,,12abc,99999999999");
    /// assert_eq!(cursor.read_u32(), Some(100117));
    /// assert_eq!(cursor.read_u32(), None);
    /// assert_eq!(cursor.read_u32(), Some(12));
    /// assert_eq!(cursor.read_u32(), Some(u32::MAX));
    /// ```
    pub fn read_u32(&mut self) -> Option<u32> {
        self.read_present().map(leading_integer)
    }

    /// Reads a signed single-precision decimal number.
    ///
    /// A non-empty field that does not start with a number reads as `0.0`.
    pub fn read_float(&mut self) -> Option<f32> {
        self.read_present()
            .map(|field| float::<_, nom::error::Error<_>>(field).map_or(0.0, |(_, value)| value))
    }

    /// Reads a signed double-precision decimal number.
    /// See [`read_float`](Self::read_float).
    pub fn read_double(&mut self) -> Option<f64> {
        self.read_present().map(leading_double)
    }

    /// Reads the first character of the field.
    pub fn read_char(&mut self) -> Option<char> {
        self.read_present()
            .and_then(|field| field.first())
            .map(|&byte| char::from(byte))
    }

    /// Reads up to `N` bytes of the field as a string.
    ///
    /// This read never fails: an empty field gives an empty string. The rest of
    /// a field longer than `N` is dropped, as is anything from the first
    /// invalid UTF-8 sequence on.
    ///
    /// ```rust
    /// use nmea0183_stream::FieldCursor;
    ///
    /// let mut cursor = FieldCursor::new(b"RMC,,ABCDEF");
    /// assert_eq!(cursor.read_string::<3>(), "RMC");
    /// assert_eq!(cursor.read_string::<3>(), "");
    /// assert_eq!(cursor.read_string::<3>(), "ABC");
    /// ```
    pub fn read_string<const N: usize>(&mut self) -> heapless::String<N> {
        let field = self.read_field();
        let text = match core::str::from_utf8(field) {
            Ok(text) => text,
            Err(error) => core::str::from_utf8(&field[..error.valid_up_to()]).unwrap_or_default(),
        };

        let mut string = heapless::String::new();
        for c in text.chars() {
            if string.push(c).is_err() {
                break;
            }
        }
        string
    }

    /// Reads a coordinate in `ddmm.mm` (`deg_3_digits == false`) or
    /// `dddmm.mm` (`deg_3_digits == true`) format.
    ///
    /// The field must hold at least 3 bytes and start with the fixed-width
    /// degree digits; the rest is read as decimal minutes.
    pub fn read_coordinate(&mut self, deg_3_digits: bool) -> Option<Coordinate> {
        let field = self.read_field();
        if field.len() < 3 {
            return None;
        }

        let width = if deg_3_digits { 3 } else { 2 };
        let (minutes, degrees) = fixed_digits(field, width).ok()?;

        Some(Coordinate {
            degrees,
            decimal_minutes: leading_double(minutes),
        })
    }

    /// Reads a latitude in `ddmm.mm` format.
    ///
    /// ```rust
    /// use nmea0183_stream::FieldCursor;
    ///
    /// let mut cursor = FieldCursor::new(b"4404.14036,N");
    /// let latitude = cursor.read_latitude().unwrap();
    /// assert_eq!(latitude.degrees, 44);
    /// assert!((latitude.decimal_minutes - 4.14036).abs() < 1e-9);
    /// ```
    pub fn read_latitude(&mut self) -> Option<Coordinate> {
        self.read_coordinate(false)
    }

    /// Reads a longitude in `dddmm.mm` format.
    pub fn read_longitude(&mut self) -> Option<Coordinate> {
        self.read_coordinate(true)
    }

    /// Reads a date in `ddmmyy` format.
    pub fn read_date(&mut self) -> Option<Date> {
        let field = self.read_field();
        if field.len() < 6 {
            return None;
        }

        let (_, (day, month, year)) = (two_digits, two_digits, two_digits).parse(field).ok()?;
        Some(Date { day, month, year })
    }

    /// Reads a time in `hhmmss.ss` format.
    ///
    /// Hours and minutes must be digits. Unreadable seconds read as `0.0`,
    /// like [`read_float`](Self::read_float).
    pub fn read_time(&mut self) -> Option<Time> {
        let field = self.read_field();
        if field.len() < 6 {
            return None;
        }

        let (seconds, (hours, minutes)) = (two_digits, two_digits).parse(field).ok()?;
        let seconds = float::<_, nom::error::Error<_>>(seconds).map_or(0.0, |(_, value)| value);
        Some(Time {
            hours,
            minutes,
            seconds,
        })
    }
}

fn leading_integer(field: &[u8]) -> u32 {
    let digits = digit0::<_, nom::error::Error<_>>(field).map_or(&[][..], |(_, digits)| digits);

    digits.iter().fold(0u32, |value, &digit| {
        value
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    })
}

fn leading_double(field: &[u8]) -> f64 {
    double::<_, nom::error::Error<_>>(field).map_or(0.0, |(_, value)| value)
}

fn fixed_digits(input: &[u8], width: usize) -> NomResult<'_, u8> {
    map_parser(take(width), all_consuming(nom::character::complete::u8)).parse(input)
}

fn two_digits(input: &[u8]) -> NomResult<'_, u8> {
    fixed_digits(input, 2)
}
