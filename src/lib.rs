//! Color symbology for traffic incident maps and charts.
//!
//! - [`ColorMap`]: categorical codes (cluster quadrants, crash
//!   severities,…) resolved to RGBA colors, with a fallback for codes
//!   that were not configured.
//! - [`LinearRamp`]: colors linearly interpolated between two
//!   endpoints, used to color magnitude sorted series
//!   (see [`color_series`]).
//!
//! The symbology of the incident dashboard is available in
//! [`presets`]: [`struct@presets::LMI_QUADRANTS`],
//! [`struct@presets::INCIDENT_TYPES`] and
//! [`struct@presets::SEATBELT_RAMP`].  A JSON [`SymbologyConfig`] can
//! be used instead.

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

pub mod categorical;
pub mod config;
pub mod error;
pub mod hex;
pub mod presets;
pub mod ramp;
pub mod series;

pub use categorical::{ColorMap, ColorMapBuilder};
pub use config::{RampConfig, Symbology, SymbologyConfig};
pub use error::{Error, Result};
pub use ramp::{generate_ramp, LinearRamp, MAX_COLORS};
pub use series::{color_series, sort_descending, ColoredEntry, SeriesEntry};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` colors evenly spaced on the
    /// range, both ends included.  When `n == 1`, the only color is
    /// the one at `t = 0`; when `n == 0`, the iterator is empty.
    fn samples(self, n: usize) -> Samples<Self, Color>
    where Self: Sized {
        Samples { range: self, color: PhantomData,
                  last: n.saturating_sub(1), i: 0, end: n }
    }
}

/// An iterator over evenly spaced colors of a [`ColorRange`].
///
/// Created by [`ColorRange::samples`].
pub struct Samples<R, Color> {
    range: R,
    color: PhantomData<Color>,
    last: usize, // index of the color at `t = 1`
    i: usize, // first position to be consumed
    end: usize, // position after the last one to be consumed
}

impl<R, Color> Samples<R, Color> where R: ColorRange<Color> {
    /// Color of position `k ≤ self.last`.  Position 0 is checked
    /// first so that a single sample never divides by zero.
    fn rgb(&self, k: usize) -> Color {
        if k == 0 { R::rgb(&self.range, 0.) }
        else if k == self.last { R::rgb(&self.range, 1.) }
        else { R::rgb(&self.range, k as f64 / self.last as f64) }
    }
}

impl<R, Color> Iterator for Samples<R, Color>
where R: ColorRange<Color> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.i >= self.end { return None }
        let c = self.rgb(self.i);
        self.i += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.i;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Samples<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Samples<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Color> {
        if self.i >= self.end { return None }
        self.end -= 1;
        Some(self.rgb(self.end))
    }
}

/// Round `x` to the nearest integer and clamp it to \[0, 255\].
#[inline]
fn channel(x: f64) -> f64 { x.round().clamp(0., 255.) }

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    /// Integer encodings round to the nearest value and clamp, so
    /// floating-point noise never yields 256 or -1.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a linear ramp from color `self` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use incident_symbology::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let ramp = red.ramp(&blue);
    /// let rgb: RGB8 = ramp.rgb(0.5);
    /// assert_eq!(rgb, RGB8::new(128, 0, 128));
    /// ```
    fn ramp(&self, c1: &Self) -> LinearRamp {
        LinearRamp::from_rgba(self.to_rgba(), c1.to_rgba())
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r) as u8,  g: channel(c.g) as u8,
               b: channel(c.b) as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: channel(c.r) as u8,  g: channel(c.g) as u8,
                b: channel(c.b) as u8,  a: channel(c.a) as u8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_samples() {
        let ramp = RGB8::new(0, 0, 0).ramp(&RGB8::new(250, 250, 250));
        let s: Samples<_, RGB8> = ramp.samples(11);
        for (i, c) in s.enumerate() {
            let v = 25 * i as u8;
            assert_eq!(c, RGB8::new(v, v, v));
        }
    }

    #[test]
    fn sample_counts() {
        let ramp = RGB8::new(1, 2, 3).ramp(&RGB8::new(4, 5, 6));
        let s: Samples<_, RGB8> = ramp.samples(0);
        assert_eq!(s.len(), 0);
        assert_eq!(s.count(), 0);
        let mut s: Samples<_, RGB8> = ramp.samples(1);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next(), Some(RGB8::new(1, 2, 3)));
        assert_eq!(s.next(), None);
        let s: Samples<_, RGB8> = ramp.samples(5);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn samples_reversed() {
        let ramp = RGB8::new(0, 0, 0).ramp(&RGB8::new(255, 255, 255));
        let s: Samples<_, RGB8> = ramp.samples(7);
        let fwd: Vec<_> = s.collect();
        let s: Samples<_, RGB8> = ramp.samples(7);
        let mut bwd: Vec<_> = s.rev().collect();
        bwd.reverse();
        assert_eq!(fwd, bwd);
        let mut s: Samples<_, RGB8> = ramp.samples(3);
        assert_eq!(s.next_back(), Some(RGB8::new(255, 255, 255)));
        assert_eq!(s.len(), 2);
        assert_eq!(s.next(), Some(RGB8::new(0, 0, 0)));
        assert_eq!(s.next_back(), Some(RGB8::new(128, 128, 128)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn from_rgba_rounds_and_clamps() {
        let c = RGB8::from_rgba(RGBA { r: 255.4, g: -0.4, b: 188.5, a: 0. });
        assert_eq!(c, RGB8::new(255, 0, 189));
        let c = RGBA8::from_rgba(RGBA { r: 256., g: -1., b: 0.49, a: 199.5 });
        assert_eq!(c, RGBA8::new(255, 0, 0, 200));
    }
}
