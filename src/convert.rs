//! # Unit Conversions
//!
//! Conversions from the wire formats produced by the tokenizer.
//!
//! Coordinates have three common notations:
//! - Decimal degrees (DD): `41.40338, 2.17403`
//! - Degrees, minutes and seconds (DMS): `41°24'12.2"N 2°10'26.5"E`
//! - Degrees and decimal minutes (DMM): `41 24.2028, 2 10.4418`

use crate::{Coordinate, Time};

impl Coordinate {
    /// Converts to decimal degrees.
    ///
    /// ```rust
    /// use nmea0183_stream::Coordinate;
    ///
    /// let coordinate = Coordinate { degrees: 41, decimal_minutes: 24.2028 };
    /// assert!((coordinate.to_decimal_degrees() - 41.40338).abs() < 1e-9);
    /// ```
    pub fn to_decimal_degrees(self) -> f64 {
        f64::from(self.degrees) + self.decimal_minutes / 60.0
    }

    /// Converts to decimal degrees, negated for the southern and western
    /// hemispheres (`'S'` and `'W'`).
    pub fn to_signed_degrees(self, hemisphere: char) -> f64 {
        let degrees = self.to_decimal_degrees();
        match hemisphere {
            'S' | 'W' => -degrees,
            _ => degrees,
        }
    }

    /// Converts to degrees, whole minutes and seconds.
    pub fn to_dms(self) -> (u8, u8, f64) {
        let minutes = self.decimal_minutes.trunc();
        let seconds = (self.decimal_minutes - minutes) * 60.0;

        (self.degrees, minutes as u8, seconds)
    }

    /// Returns the degrees and decimal minutes as a pair.
    pub fn to_dmm(self) -> (u8, f64) {
        (self.degrees, self.decimal_minutes)
    }
}

impl Time {
    /// Milliseconds elapsed since the start of the day.
    ///
    /// ```rust
    /// use nmea0183_stream::Time;
    ///
    /// let time = Time { hours: 0, minutes: 10, seconds: 43.25 };
    /// assert_eq!(time.to_millis(), 643_250);
    /// ```
    pub fn to_millis(self) -> u32 {
        let whole_minutes = u32::from(self.hours) * 60 + u32::from(self.minutes);
        let seconds_millis = (f64::from(self.seconds) * 1000.0).round() as u32;

        (whole_minutes * 60_000).saturating_add(seconds_millis)
    }
}

/// Errors converting tokenizer values into [`time`] crate types.
#[cfg(feature = "time")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The month is outside 1-12.
    #[error("invalid month {0}")]
    InvalidMonth(u8),

    /// The components do not form a valid date or time.
    #[error("component out of range: {0}")]
    OutOfRange(#[from] time::error::ComponentRange),
}

#[cfg(feature = "time")]
impl TryFrom<crate::Date> for time::Date {
    type Error = ConversionError;

    /// Two-digit years 83-99 map to 1983-1999, everything else to 2000-2082.
    fn try_from(date: crate::Date) -> Result<Self, Self::Error> {
        let month =
            time::Month::try_from(date.month).map_err(|_| ConversionError::InvalidMonth(date.month))?;

        let year = match date.year {
            83..=99 => i32::from(date.year) + 1900,
            _ => i32::from(date.year) + 2000,
        };

        Ok(time::Date::from_calendar_date(year, month, date.day)?)
    }
}

#[cfg(feature = "time")]
impl TryFrom<Time> for time::Time {
    type Error = ConversionError;

    fn try_from(value: Time) -> Result<Self, Self::Error> {
        let total = (f64::from(value.seconds) * 1000.0).round() as u32;
        let second = u8::try_from(total / 1000).unwrap_or(u8::MAX);

        Ok(time::Time::from_hms_milli(
            value.hours,
            value.minutes,
            second,
            (total % 1000) as u16,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_degrees() {
        let longitude = Coordinate {
            degrees: 121,
            decimal_minutes: 18.86023,
        };

        let east = longitude.to_signed_degrees('E');
        let west = longitude.to_signed_degrees('W');

        assert!((east - 121.3143371).abs() < 1e-6);
        assert_eq!(west, -east);
    }

    #[test]
    fn test_dms() {
        let latitude = Coordinate {
            degrees: 41,
            decimal_minutes: 24.2028,
        };

        let (degrees, minutes, seconds) = latitude.to_dms();
        assert_eq!((degrees, minutes), (41, 24));
        assert!((seconds - 12.168).abs() < 1e-6);
        assert_eq!(latitude.to_dmm(), (41, 24.2028));
    }

    #[test]
    fn test_millis_of_day() {
        let time = Time {
            hours: 23,
            minutes: 59,
            seconds: 59.5,
        };

        assert_eq!(time.to_millis(), 86_399_500);
        assert_eq!(Time::default().to_millis(), 0);
    }

    #[test]
    fn test_millis_of_day_saturates() {
        let time = crate::FieldCursor::new(b"99591e30").read_time().unwrap();

        assert_eq!(time.to_millis(), u32::MAX);
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_time_crate_conversions() {
        let date = crate::Date {
            day: 10,
            month: 1,
            year: 17,
        };
        let date = time::Date::try_from(date).unwrap();
        assert_eq!(date.year(), 2017);
        assert_eq!(date.month(), time::Month::January);

        let old = crate::Date {
            day: 31,
            month: 12,
            year: 99,
        };
        assert_eq!(time::Date::try_from(old).unwrap().year(), 1999);

        let bad = crate::Date {
            day: 1,
            month: 13,
            year: 20,
        };
        assert_eq!(
            time::Date::try_from(bad),
            Err(ConversionError::InvalidMonth(13))
        );

        let time = Time {
            hours: 0,
            minutes: 10,
            seconds: 43.5,
        };
        let time = time::Time::try_from(time).unwrap();
        assert_eq!(time.second(), 43);
        assert_eq!(time.millisecond(), 500);
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_time_crate_milliseconds_are_rounded() {
        let mut cursor = crate::FieldCursor::new(b"001043.10,001043.99,235959.9999,001099.0");

        let time = cursor.read_time().unwrap();
        let converted = time::Time::try_from(time).unwrap();
        assert_eq!((converted.second(), converted.millisecond()), (43, 100));
        assert_eq!(time.to_millis(), 643_100);

        let converted = time::Time::try_from(cursor.read_time().unwrap()).unwrap();
        assert_eq!((converted.second(), converted.millisecond()), (43, 990));

        assert!(time::Time::try_from(cursor.read_time().unwrap()).is_err());
        assert!(time::Time::try_from(cursor.read_time().unwrap()).is_err());
    }
}
