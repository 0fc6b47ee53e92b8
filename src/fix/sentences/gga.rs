#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_stream, Coordinate, ReadFields, Time};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, ReadFields)]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<Time>,
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
    /// GPS Quality Indicator, 0 when the fix is not available
    pub fix_quality: Option<u8>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    #[nmea(skip_after = 1)]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    #[nmea(skip_after = 1)]
    /// Geoidal separation in meters
    pub geoidal_separation: Option<f32>,
    /// Age of Differential GPS data in seconds
    pub age_of_dgps: Option<f32>,
    /// Differential reference station ID
    pub ref_station_id: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gga_reading() {
        let gga = GGA::from_message(
            b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,,",
        );

        assert_eq!(gga.fix_time.map(|t| (t.hours, t.minutes)), Some((0, 10)));
        assert_eq!(gga.latitude.map(|c| c.degrees), Some(44));
        assert_eq!(gga.north_south, Some('N'));
        assert_eq!(gga.longitude.map(|c| c.degrees), Some(121));
        assert_eq!(gga.east_west, Some('W'));
        assert_eq!(gga.fix_quality, Some(1));
        assert_eq!(gga.satellite_count, Some(12));
        assert_eq!(gga.hdop, Some(0.98));
        assert_eq!(gga.altitude, Some(1113.0));
        assert_eq!(gga.geoidal_separation, Some(-21.3));
        assert_eq!(gga.age_of_dgps, None);
        assert_eq!(gga.ref_station_id, None);
    }

    #[test]
    fn test_gga_without_fix() {
        let gga = GGA::from_message(b",,,,,0,00,99.99,,,,,,");

        assert_eq!(gga.fix_time, None);
        assert_eq!(gga.latitude, None);
        assert_eq!(gga.fix_quality, Some(0));
        assert_eq!(gga.satellite_count, Some(0));
        assert_eq!(gga.altitude, None);
    }
}
