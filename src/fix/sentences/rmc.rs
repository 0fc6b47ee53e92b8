#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_stream, Coordinate, Date, ReadFields, Time};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, ReadFields)]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// `A` when the data is valid, `V` for a navigation receiver warning
    pub status: Option<char>,
    #[nmea(reader = nmea0183_stream::latitude)]
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// `N` or `S`
    pub north_south: Option<char>,
    #[nmea(reader = nmea0183_stream::longitude)]
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// `E` or `W`
    pub east_west: Option<char>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Track made good in degrees true
    pub course_over_ground: Option<f32>,
    /// Fix date
    pub fix_date: Option<Date>,
    /// Magnetic variation in degrees
    pub magnetic_variation: Option<f32>,
    /// `E` or `W`
    pub variation_direction: Option<char>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<char>,
}

impl RMC {
    /// Returns `true` if the receiver flagged the data as valid.
    pub fn is_valid(&self) -> bool {
        self.status == Some('A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmc_reading() {
        let rmc = RMC::from_message(b"001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A");

        assert!(rmc.is_valid());
        assert_eq!(rmc.fix_time.map(|t| (t.hours, t.minutes)), Some((0, 10)));
        assert_eq!(rmc.latitude.map(|c| c.degrees), Some(44));
        assert_eq!(rmc.east_west, Some('W'));
        assert_eq!(rmc.speed_over_ground, Some(0.146));
        assert_eq!(rmc.course_over_ground, None);
        assert_eq!(
            rmc.fix_date,
            Some(Date {
                day: 10,
                month: 1,
                year: 17
            })
        );
        assert_eq!(rmc.magnetic_variation, None);
        assert_eq!(rmc.variation_direction, None);
        assert_eq!(rmc.faa_mode, Some('A'));
    }

    #[test]
    fn test_rmc_void() {
        let rmc = RMC::from_message(b",V,,,,,,,,,,N");

        assert!(!rmc.is_valid());
        assert_eq!(rmc.latitude, None);
        assert_eq!(rmc.faa_mode, Some('N'));
    }
}
