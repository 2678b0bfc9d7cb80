//! Categorical symbology: fixed codes mapped to colors.

use std::collections::HashMap;
use rgb::{RGB8, RGBA8};
use tracing::{debug, trace, warn};

/// Opaque white, used when no fallback is configured.
pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// An immutable table from category codes to colors, plus a fallback
/// color for codes absent from the table.
///
/// Lookups are total: [`ColorMap::resolve`] always returns a color so
/// that feature data carrying labels outside the configured taxonomy
/// still renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMap {
    colors: HashMap<String, RGBA8>,
    fallback: RGB8,
}

impl ColorMap {
    /// Create a map from `(code, color)` pairs.  When a code appears
    /// several times, the last color wins.
    pub fn new<I, S>(entries: I, fallback: RGB8) -> Self
    where I: IntoIterator<Item = (S, RGBA8)>,
          S: Into<String> {
        entries.into_iter()
            .fold(Self::builder().fallback(fallback),
                  |b, (code, c)| b.insert(code, c))
            .build()
    }

    /// Start building a map.  The fallback defaults to [`WHITE`].
    pub fn builder() -> ColorMapBuilder {
        ColorMapBuilder { colors: HashMap::new(), fallback: WHITE }
    }

    /// Return the color of `code`, or the fallback (made fully
    /// opaque) if `code` is unknown.  Matching is exact and case
    /// sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use incident_symbology::presets::LMI_QUADRANTS;
    /// assert_eq!(LMI_QUADRANTS.resolve("HH"), RGBA8::new(255, 0, 0, 200));
    /// assert_eq!(LMI_QUADRANTS.resolve("ZZ"), RGBA8::new(255, 255, 255, 255));
    /// ```
    pub fn resolve(&self, code: &str) -> RGBA8 {
        match self.colors.get(code) {
            Some(&c) => c,
            None => {
                trace!(code, "unknown category, using fallback color");
                let RGB8 { r, g, b } = self.fallback;
                RGBA8 { r, g, b, a: 255 }
            }
        }
    }

    /// Return the configured color of `code`, if any.
    pub fn get(&self, code: &str) -> Option<RGBA8> {
        self.colors.get(code).copied()
    }

    /// Says whether `code` has a configured color.
    pub fn contains(&self, code: &str) -> bool {
        self.colors.contains_key(code)
    }

    /// The fallback color as configured (without alpha).
    pub fn fallback_rgb(&self) -> RGB8 { self.fallback }

    /// The configured codes, sorted (e.g. to draw a legend).
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.colors.keys().map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Number of configured codes.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

/// Builder for [`ColorMap`].
///
/// Created by [`ColorMap::builder`].
#[derive(Clone, Debug)]
pub struct ColorMapBuilder {
    colors: HashMap<String, RGBA8>,
    fallback: RGB8,
}

impl ColorMapBuilder {
    /// Assign `color` to `code`, replacing any previous assignment.
    pub fn insert(mut self, code: impl Into<String>, color: RGBA8) -> Self {
        let code = code.into();
        if let Some(old) = self.colors.insert(code.clone(), color) {
            warn!(code = %code, ?old, new = ?color, "category color assigned twice");
        }
        self
    }

    /// Set the color returned for unknown codes.
    pub fn fallback(mut self, color: RGB8) -> Self {
        self.fallback = color;
        self
    }

    pub fn build(self) -> ColorMap {
        debug!(codes = self.colors.len(), fallback = ?self.fallback,
               "color map configured");
        ColorMap { colors: self.colors, fallback: self.fallback }
    }
}
