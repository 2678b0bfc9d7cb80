//! Linear color ramps between two endpoints.

use rgb::{RGBA, RGB8};
use tracing::debug;
use crate::{ColorRange, RGBColor,
            error::{Error, Result},
            hex::{parse_hex, to_css}};

/// Largest number of colors [`LinearRamp::try_colors`] and
/// [`generate_ramp`] accept.  Series colored in practice have a few
/// dozen entries at most.
pub const MAX_COLORS: usize = 1 << 20;

/// Colors linearly interpolated, channel by channel, between a start
/// and an end color.
///
/// Created by [`LinearRamp::new`], [`LinearRamp::from_rgb`] or
/// [`RGBColor::ramp`].  See the [`ColorRange`] trait for sampling
/// methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRamp {
    c0: RGBA<f64>, // start color
    dc: RGBA<f64>, // end - start color
}

impl LinearRamp {
    /// Ramp between two `#RRGGBB` colors.  Malformed endpoints are
    /// reported here, never when sampling.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use incident_symbology::LinearRamp;
    /// let ramp = LinearRamp::new("#7a0019", "#ffcc33").unwrap();
    /// assert_eq!(ramp.colors::<RGB8>(3),
    ///            [RGB8::new(122, 0, 25), RGB8::new(189, 102, 38),
    ///             RGB8::new(255, 204, 51)]);
    /// ```
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let c0 = parse_hex(start)?;
        let c1 = parse_hex(end)?;
        debug!(start, end, "linear ramp configured");
        Ok(Self::from_rgb(c0, c1))
    }

    /// Ramp between two decoded colors.
    pub fn from_rgb(start: RGB8, end: RGB8) -> Self {
        Self::from_rgba(start.to_rgba(), end.to_rgba())
    }

    pub(crate) fn from_rgba(c0: RGBA<f64>, c1: RGBA<f64>) -> Self {
        LinearRamp { c0,
                     dc: RGBA { r: c1.r - c0.r, g: c1.g - c0.g,
                                b: c1.b - c0.b, a: c1.a - c0.a } }
    }

    /// The color at `t = 0`.
    pub fn start(&self) -> RGB8 { self.rgb(0.) }

    /// The color at `t = 1`.
    pub fn end(&self) -> RGB8 { self.rgb(1.) }

    /// Return exactly `n` colors evenly spread over the ramp: the
    /// first one is the start color and, when `n ≥ 2`, the last one
    /// is the end color.  `n == 1` yields the start color alone.
    pub fn colors<Color: RGBColor>(&self, n: usize) -> Vec<Color> {
        ColorRange::<Color>::samples(*self, n).collect()
    }

    /// Same as [`LinearRamp::colors`] for a count coming from an
    /// untrusted or signed source.  A negative `count`, or one above
    /// [`MAX_COLORS`], is a contract violation.
    pub fn try_colors(&self, count: i64) -> Result<Vec<RGB8>> {
        let invalid = |reason| Error::InvalidArgument {
            name: "count", value: count.to_string(), reason };
        if count < 0 {
            return Err(invalid("a ramp cannot have a negative number of colors"))
        }
        match usize::try_from(count) {
            Ok(n) if n <= MAX_COLORS => Ok(self.colors(n)),
            _ => Err(invalid("more colors than a ramp can hold (see MAX_COLORS)")),
        }
    }

    /// The `n` colors of [`LinearRamp::colors`] formatted as
    /// `rgb(r,g,b)` strings.
    pub fn css_colors(&self, n: usize) -> Vec<String> {
        self.colors::<RGB8>(n).into_iter().map(to_css).collect()
    }
}

impl<Color> ColorRange<Color> for LinearRamp
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the start color and `t == 1.` the end one.
    fn rgb(&self, t: f64) -> Color {
        let t = t.clamp(0., 1.);
        Color::from_rgba(RGBA { r: self.c0.r + self.dc.r * t,
                                g: self.c0.g + self.dc.g * t,
                                b: self.c0.b + self.dc.b * t,
                                a: self.c0.a + self.dc.a * t })
    }
}

/// Return `count` colors interpolated from `start` to `end` (both
/// `#RRGGBB`).
///
/// Fails if an endpoint is not a valid hex color or if `count` is
/// negative or above [`MAX_COLORS`].  Callers coloring a series
/// repeatedly should build a [`LinearRamp`] once instead.
pub fn generate_ramp(start: &str, end: &str, count: i64) -> Result<Vec<RGB8>> {
    LinearRamp::new(start, end)?.try_colors(count)
}
