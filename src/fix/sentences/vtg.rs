#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_stream, ReadFields};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit fields (`T`, `M`, `N`, `K`) are fixed and skipped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, ReadFields)]
pub struct VTG {
    #[nmea(skip_after = 1)]
    /// Course over ground in degrees true
    pub course_over_ground: Option<f32>,
    #[nmea(skip_after = 1)]
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Option<f32>,
    #[nmea(skip_after = 1)]
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    #[nmea(skip_after = 1)]
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kph: Option<f32>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtg_reading() {
        let vtg = VTG::from_message(b"220.86,T,,M,2.550,N,4.724,K,A");

        assert_eq!(vtg.course_over_ground, Some(220.86));
        assert_eq!(vtg.course_over_ground_magnetic, None);
        assert_eq!(vtg.speed_over_ground_knots, Some(2.55));
        assert_eq!(vtg.speed_over_ground_kph, Some(4.724));
        assert_eq!(vtg.faa_mode, Some('A'));
    }
}
