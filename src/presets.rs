//! Symbology used by the incident dashboard.

use lazy_static::lazy_static;
use rgb::{RGB8, RGBA8};
use crate::{categorical::{ColorMap, WHITE}, ramp::LinearRamp};

/// Start of the seatbelt pie chart ramp (dark maroon).
pub const SEATBELT_START: RGB8 = RGB8 { r: 0x7a, g: 0x00, b: 0x19 };
/// End of the seatbelt pie chart ramp (gold).
pub const SEATBELT_END: RGB8 = RGB8 { r: 0xff, g: 0xcc, b: 0x33 };

lazy_static! {
    /// Local Moran's I cluster quadrants of the city map: `HH` and
    /// `LL` hot and cold spots, `HL` and `LH` outliers, `NS` not
    /// significant.
    pub static ref LMI_QUADRANTS: ColorMap = ColorMap::new(
        [("LL", RGBA8::new(0, 0, 255, 200)),
         ("HH", RGBA8::new(255, 0, 0, 200)),
         ("LH", RGBA8::new(30, 144, 255, 200)),
         ("HL", RGBA8::new(240, 128, 128, 200)),
         ("NS", RGBA8::new(111, 111, 111, 200))],
        WHITE);

    /// Crash severity of the incident map points.
    pub static ref INCIDENT_TYPES: ColorMap = ColorMap::new(
        [("Injury", RGBA8::new(252, 196, 25, 175)),
         ("Fatal", RGBA8::new(199, 15, 15, 225))],
        WHITE);

    /// Ramp of the seatbelt pie chart: the largest segment is maroon,
    /// the smallest gold.
    pub static ref SEATBELT_RAMP: LinearRamp =
        LinearRamp::from_rgb(SEATBELT_START, SEATBELT_END);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::parse_hex;

    #[test]
    fn lmi_quadrants() {
        assert_eq!(LMI_QUADRANTS.resolve("HH"), RGBA8::new(255, 0, 0, 200));
        assert_eq!(LMI_QUADRANTS.resolve("ZZ"), RGBA8::new(255, 255, 255, 255));
        assert_eq!(LMI_QUADRANTS.len(), 5);
    }

    #[test]
    fn incident_types() {
        assert_eq!(INCIDENT_TYPES.resolve("Fatal"), RGBA8::new(199, 15, 15, 225));
        assert_eq!(INCIDENT_TYPES.resolve("Injury"),
                   RGBA8::new(252, 196, 25, 175));
        assert_eq!(INCIDENT_TYPES.resolve("Property damage"),
                   RGBA8::new(255, 255, 255, 255));
    }

    #[test]
    fn seatbelt_endpoints_match_hex() {
        assert_eq!(parse_hex("#7a0019").unwrap(), SEATBELT_START);
        assert_eq!(parse_hex("#ffcc33").unwrap(), SEATBELT_END);
        assert_eq!(SEATBELT_RAMP.start(), SEATBELT_START);
        assert_eq!(SEATBELT_RAMP.end(), SEATBELT_END);
    }
}
