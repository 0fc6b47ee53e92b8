#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_stream, Coordinate, ReadFields, Time};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, ReadFields)]
pub struct GLL {
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
    /// Fix time in UTC
    pub fix_time: Option<Time>,
    /// `A` when the data is valid
    pub status: Option<char>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<char>,
}
