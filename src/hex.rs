//! Hex decoding and CSS formatting of colors.

use rgb::{RGB8, RGBA8};
use crate::error::{Error, Result};

/// Decode a `#RRGGBB` string (the leading `#` is optional).
///
/// The six digits are read as one base-16 integer and the channels
/// are extracted by shifting and masking.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use incident_symbology::hex::parse_hex;
/// assert_eq!(parse_hex("#7a0019").unwrap(), RGB8::new(122, 0, 25));
/// ```
pub fn parse_hex(s: &str) -> Result<RGB8> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(Error::InvalidHex { input: s.to_string(),
                                       reason: "expected 6 hex digits" })
    }
    // `from_str_radix` accepts a leading sign, which is not a digit here.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex { input: s.to_string(),
                                       reason: "non-hexadecimal digit" })
    }
    let v = u32::from_str_radix(digits, 16)
        .map_err(|_| Error::InvalidHex { input: s.to_string(),
                                         reason: "non-hexadecimal digit" })?;
    Ok(RGB8 { r: ((v >> 16) & 255) as u8,
              g: ((v >> 8) & 255) as u8,
              b: (v & 255) as u8 })
}

/// `#rrggbb` representation of `c`.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// `rgb(r,g,b)` representation of `c`, as chart libraries expect it.
pub fn to_css(c: RGB8) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

/// `rgba(r,g,b,a)` representation of `c` with the alpha rescaled to
/// \[0, 1\].
pub fn to_css_rgba(c: RGBA8) -> String {
    let a = (c.a as f64 / 255. * 1000.).round() / 1000.;
    format!("rgba({},{},{},{})", c.r, c.g, c.b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_endpoints() {
        assert_eq!(parse_hex("#7a0019").unwrap(), RGB8::new(122, 0, 25));
        assert_eq!(parse_hex("#ffcc33").unwrap(), RGB8::new(255, 204, 51));
        assert_eq!(parse_hex("FFCC33").unwrap(), RGB8::new(255, 204, 51));
        assert_eq!(parse_hex("#000000").unwrap(), RGB8::new(0, 0, 0));
    }

    #[test]
    fn malformed() {
        for s in ["", "#", "#fff", "#ffcc3", "#ffcc333", "#gggggg",
                  "#+fffff", "# fffff", "#ffé000"] {
            assert!(matches!(parse_hex(s), Err(Error::InvalidHex { .. })),
                    "{s:?} should be rejected");
        }
    }

    #[test]
    fn formatting() {
        let c = RGB8::new(189, 102, 38);
        assert_eq!(to_hex(c), "#bd6626");
        assert_eq!(to_css(c), "rgb(189,102,38)");
        assert_eq!(parse_hex(&to_hex(c)).unwrap(), c);
        assert_eq!(to_css_rgba(RGBA8::new(255, 0, 0, 255)), "rgba(255,0,0,1)");
        assert_eq!(to_css_rgba(RGBA8::new(0, 0, 255, 0)), "rgba(0,0,255,0)");
        assert_eq!(to_css_rgba(RGBA8::new(1, 2, 3, 200)),
                   "rgba(1,2,3,0.784)");
    }
}
