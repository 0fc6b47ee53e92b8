//! # Field Records
//!
//! Traits for reading typed values out of a [`FieldCursor`]: [`ReadField`] for
//! a single field and [`ReadFields`] for a run of fields forming a record.

use crate::{Coordinate, Date, FieldCursor, Time};

/// Trait for values that occupy a single, possibly empty, field.
///
/// Every implementation reads exactly one field from the cursor. Implement it
/// for your own types to use them inside [`ReadFields`] records.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{FieldCursor, ReadField};
///
/// let mut cursor = FieldCursor::new(b"12,,A");
///
/// assert_eq!(Option::<u8>::read_field(&mut cursor), Some(12));
/// assert_eq!(Option::<u8>::read_field(&mut cursor), None);
/// assert_eq!(Option::<char>::read_field(&mut cursor), Some('A'));
/// ```
pub trait ReadField: Sized {
    /// Reads one field and advances the cursor past it.
    fn read_field(cursor: &mut FieldCursor<'_>) -> Self;
}

/// Trait for the values the tokenizer can extract from a non-empty field.
///
/// `Option<T>` implements [`ReadField`] for every `T: FieldValue`, giving
/// [`None`] for empty or unreadable fields.
pub trait FieldValue: Sized {
    /// Reads one field, returning [`None`] if it was empty or unreadable.
    fn read_value(cursor: &mut FieldCursor<'_>) -> Option<Self>;
}

macro_rules! impl_field_value {
    ($($t:ty => $read:ident),* $(,)?) => ($(
        impl FieldValue for $t {
            fn read_value(cursor: &mut FieldCursor<'_>) -> Option<Self> {
                cursor.$read()
            }
        }
    )*)
}

impl_field_value!(
    u8 => read_u8,
    u16 => read_u16,
    u32 => read_u32,
    f32 => read_float,
    f64 => read_double,
    char => read_char,
    Date => read_date,
    Time => read_time,
);

impl<T: FieldValue> ReadField for Option<T> {
    fn read_field(cursor: &mut FieldCursor<'_>) -> Self {
        T::read_value(cursor)
    }
}

impl<const N: usize> ReadField for heapless::String<N> {
    fn read_field(cursor: &mut FieldCursor<'_>) -> Self {
        cursor.read_string::<N>()
    }
}

/// Skips one field.
impl ReadField for () {
    fn read_field(cursor: &mut FieldCursor<'_>) {
        cursor.skip_field();
    }
}

/// Trait for records read as a fixed sequence of fields.
///
/// This is the shape of a sentence handler: read field after field, keep what
/// is needed, skip the rest. With the `derive` feature the implementation can
/// be generated with `#[derive(ReadFields)]`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Coordinate, FieldCursor, ReadField, ReadFields};
///
/// struct Position {
///     latitude: Option<Coordinate>,
///     north_south: Option<char>,
/// }
///
/// impl ReadFields for Position {
///     fn read_fields(cursor: &mut FieldCursor<'_>) -> Self {
///         let latitude = cursor.read_latitude();
///         let north_south = ReadField::read_field(cursor);
///
///         Position { latitude, north_south }
///     }
/// }
///
/// let position = Position::from_message(b"4404.14012,N,12118.85993,W");
/// assert_eq!(position.latitude.map(|c| c.degrees), Some(44));
/// assert_eq!(position.north_south, Some('N'));
/// ```
pub trait ReadFields: Sized {
    /// Reads the record starting at the cursor's current field.
    fn read_fields(cursor: &mut FieldCursor<'_>) -> Self;

    /// Reads the record from the start of `message`.
    fn from_message(message: &[u8]) -> Self {
        Self::read_fields(&mut FieldCursor::new(message))
    }
}

/// Reads a latitude field, for use as a record field reader.
pub fn latitude(cursor: &mut FieldCursor<'_>) -> Option<Coordinate> {
    cursor.read_latitude()
}

/// Reads a longitude field, for use as a record field reader.
pub fn longitude(cursor: &mut FieldCursor<'_>) -> Option<Coordinate> {
    cursor.read_longitude()
}
