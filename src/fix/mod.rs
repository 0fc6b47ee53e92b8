//! # Position Fix Accumulator
//!
//! Typed records for the GGA, RMC, GLL and VTG sentences and a [`Fix`] that
//! keeps the latest value of every field they carry.
//!
//! ```rust
//! use nmea0183_stream::{NmeaReader, fix::Fix};
//!
//! let mut fix = Fix::default();
//! let mut reader = NmeaReader::new(|message: &[u8]| {
//!     let _ = fix.update(message);
//! });
//!
//! reader.feed(b"$GNGLL,4404.14012,N,12118.85993,W,001037.00,A,A*67\r\n");
//! reader.feed(b"$GPVTG,220.86,T,,M,2.550,N,4.724,K,A*34\r\n");
//!
//! drop(reader);
//! assert_eq!(fix.latitude.map(|l| l.degrees), Some(44));
//! assert_eq!(fix.speed_over_ground_kph, Some(4.724));
//! ```

use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Date, FieldCursor, ReadFields, Time};

mod sentences;

pub use sentences::{GGA, GLL, RMC, VTG};

/// Errors reading a sentence body into a [`Sentence`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    /// The sentence type is not one of GGA, RMC, GLL or VTG.
    #[error("unrecognized sentence type {0:?}")]
    UnrecognizedSentence(String),
}

/// One of the sentences a [`Fix`] is built from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Track made good and Ground speed
    VTG(VTG),
}

impl Sentence {
    /// Reads a sentence body, talker ID already stripped, e.g.
    /// `GLL,4404.14012,N,12118.85993,W,001037.00,A,A`.
    ///
    /// The first field selects the record type and must match exactly.
    pub fn parse(message: &[u8]) -> Result<Self, FixError> {
        let mut cursor = FieldCursor::new(message);

        let sentence = match cursor.read_field() {
            b"GGA" => Sentence::GGA(GGA::read_fields(&mut cursor)),
            b"RMC" => Sentence::RMC(RMC::read_fields(&mut cursor)),
            b"GLL" => Sentence::GLL(GLL::read_fields(&mut cursor)),
            b"VTG" => Sentence::VTG(VTG::read_fields(&mut cursor)),
            other => {
                return Err(FixError::UnrecognizedSentence(
                    String::from_utf8_lossy(other).into_owned(),
                ));
            }
        };

        Ok(sentence)
    }
}

/// The latest known navigation state.
///
/// Every field starts as [`None`] and is overwritten whenever a sentence
/// carrying it has a value. An empty field in a sentence leaves the stored
/// value untouched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fix {
    /// Time of the last fix in UTC
    pub time: Option<Time>,
    /// Date of the last fix
    pub date: Option<Date>,
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// `N` or `S`
    pub north_south: Option<char>,
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// `E` or `W`
    pub east_west: Option<char>,
    /// GPS Quality Indicator
    pub fix_quality: Option<u8>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Altitude above mean sea level in meters
    pub altitude: Option<f32>,
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kph: Option<f32>,
    /// Track angle in degrees true
    pub course_over_ground: Option<f32>,
    /// Status of the last RMC or GLL sentence, `A` when valid
    pub status: Option<char>,
}

fn merge<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl Fix {
    /// Reads a sentence body and applies it.
    ///
    /// Returns the sentence that was read, or an error if its type is not
    /// supported, in which case the fix is unchanged.
    pub fn update(&mut self, message: &[u8]) -> Result<Sentence, FixError> {
        let sentence = Sentence::parse(message)?;
        self.apply(&sentence);

        Ok(sentence)
    }

    /// Applies the values present in `sentence`.
    pub fn apply(&mut self, sentence: &Sentence) {
        trace!(?sentence, "applying sentence");

        match sentence {
            Sentence::GGA(gga) => {
                self.set_position(gga.latitude, gga.north_south, gga.longitude, gga.east_west);
                merge(&mut self.time, gga.fix_time);
                merge(&mut self.fix_quality, gga.fix_quality);
                merge(&mut self.satellite_count, gga.satellite_count);
                merge(&mut self.altitude, gga.altitude);
            }
            Sentence::RMC(rmc) => {
                self.set_position(rmc.latitude, rmc.north_south, rmc.longitude, rmc.east_west);
                merge(&mut self.time, rmc.fix_time);
                merge(&mut self.status, rmc.status);
                merge(&mut self.speed_over_ground_knots, rmc.speed_over_ground);
                merge(&mut self.course_over_ground, rmc.course_over_ground);
                merge(&mut self.date, rmc.fix_date);
            }
            Sentence::GLL(gll) => {
                self.set_position(gll.latitude, gll.north_south, gll.longitude, gll.east_west);
                merge(&mut self.time, gll.fix_time);
                merge(&mut self.status, gll.status);
            }
            Sentence::VTG(vtg) => {
                merge(&mut self.speed_over_ground_knots, vtg.speed_over_ground_knots);
                merge(&mut self.speed_over_ground_kph, vtg.speed_over_ground_kph);
            }
        }
    }

    fn set_position(
        &mut self,
        latitude: Option<Coordinate>,
        north_south: Option<char>,
        longitude: Option<Coordinate>,
        east_west: Option<char>,
    ) {
        merge(&mut self.latitude, latitude);
        merge(&mut self.north_south, north_south);
        merge(&mut self.longitude, longitude);
        merge(&mut self.east_west, east_west);
    }

    /// Latitude in signed decimal degrees, negative in the southern hemisphere.
    pub fn latitude_degrees(&self) -> Option<f64> {
        let latitude = self.latitude?;
        Some(latitude.to_signed_degrees(self.north_south.unwrap_or('N')))
    }

    /// Longitude in signed decimal degrees, negative in the western hemisphere.
    pub fn longitude_degrees(&self) -> Option<f64> {
        let longitude = self.longitude?;
        Some(longitude.to_signed_degrees(self.east_west.unwrap_or('E')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RMC: &[u8] = b"RMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A";
    const GGA: &[u8] = b"GGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M";
    const GLL: &[u8] = b"GLL,4404.14012,N,12118.85993,W,001037.00,A,A";
    const VTG: &[u8] = b"VTG,220.86,T,,M,2.550,N,4.724,K,A";

    #[test]
    fn test_sentence_dispatch() {
        assert!(matches!(Sentence::parse(RMC), Ok(Sentence::RMC(_))));
        assert!(matches!(Sentence::parse(GGA), Ok(Sentence::GGA(_))));
        assert!(matches!(Sentence::parse(GLL), Ok(Sentence::GLL(_))));
        assert!(matches!(Sentence::parse(VTG), Ok(Sentence::VTG(_))));

        assert_eq!(
            Sentence::parse(b"GSV,3,2,12"),
            Err(FixError::UnrecognizedSentence("GSV".to_string()))
        );
        assert_eq!(
            Sentence::parse(b"GGAX,1"),
            Err(FixError::UnrecognizedSentence("GGAX".to_string()))
        );
        assert_eq!(
            Sentence::parse(b""),
            Err(FixError::UnrecognizedSentence(String::new()))
        );
    }

    #[test]
    fn test_fix_keeps_latest_values() {
        let mut fix = Fix::default();

        for message in [RMC, GGA, GLL, VTG] {
            fix.update(message).unwrap();
        }

        let latitude = fix.latitude.unwrap();
        assert_eq!(latitude.degrees, 44);
        assert!((latitude.decimal_minutes - 4.14012).abs() < 1e-9);
        assert_eq!(fix.north_south, Some('N'));

        let longitude = fix.longitude.unwrap();
        assert_eq!(longitude.degrees, 121);
        assert!((longitude.decimal_minutes - 18.85993).abs() < 1e-9);
        assert_eq!(fix.east_west, Some('W'));

        assert_eq!(
            fix.date,
            Some(Date {
                day: 10,
                month: 1,
                year: 17
            })
        );

        let time = fix.time.unwrap();
        assert_eq!((time.hours, time.minutes), (0, 10));
        assert_eq!(time.seconds, 37.0);

        assert_eq!(fix.fix_quality, Some(1));
        assert_eq!(fix.satellite_count, Some(12));
        assert_eq!(fix.altitude, Some(1113.0));
        assert_eq!(fix.speed_over_ground_knots, Some(2.55));
        assert_eq!(fix.speed_over_ground_kph, Some(4.724));
        assert_eq!(fix.course_over_ground, None);
        assert_eq!(fix.status, Some('A'));
    }

    #[test]
    fn test_empty_fields_do_not_erase() {
        let mut fix = Fix::default();
        fix.update(GLL).unwrap();
        fix.update(b"GLL,,,,,,V").unwrap();

        assert_eq!(fix.latitude.map(|l| l.degrees), Some(44));
        assert_eq!(fix.status, Some('V'));
    }

    #[test]
    fn test_unrecognized_sentence_leaves_fix_unchanged() {
        let mut fix = Fix::default();
        fix.update(GLL).unwrap();
        let before = fix.clone();

        assert!(fix.update(b"ZDA,001037.00,10,01,2017,,").is_err());
        assert_eq!(fix, before);
    }

    #[test]
    fn test_signed_degrees() {
        let mut fix = Fix::default();
        assert_eq!(fix.latitude_degrees(), None);

        fix.update(GLL).unwrap();
        assert!(fix.latitude_degrees().unwrap() > 44.0);
        assert!(fix.longitude_degrees().unwrap() < -121.0);
    }
}
