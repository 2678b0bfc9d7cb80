//! Symbology loaded from a JSON document.
//!
//! ```json
//! {
//!   "categories": { "Injury": [252, 196, 25, 175], "Fatal": [199, 15, 15, 225] },
//!   "fallback": "#ffffff",
//!   "ramp": { "start": "#7a0019", "end": "#ffcc33" }
//! }
//! ```
//!
//! `fallback` and `ramp` may be omitted.  Every color is decoded when
//! the configuration is built, so a bad document is rejected up front
//! rather than while rendering.

use std::collections::BTreeMap;
use rgb::{RGB8, RGBA8};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::{categorical::{ColorMap, WHITE},
            error::Result,
            hex::{parse_hex, to_hex},
            presets::{SEATBELT_END, SEATBELT_START},
            ramp::LinearRamp};

/// Endpoints of a ramp, as `#RRGGBB` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampConfig {
    pub start: String,
    pub end: String,
}

impl Default for RampConfig {
    fn default() -> Self {
        RampConfig { start: to_hex(SEATBELT_START), end: to_hex(SEATBELT_END) }
    }
}

/// Undecoded symbology, as read from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbologyConfig {
    /// Category code → `[r, g, b, a]`.
    #[serde(default)]
    pub categories: BTreeMap<String, [u8; 4]>,
    /// Color of unknown categories, white if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(default)]
    pub ramp: RampConfig,
}

/// Decoded symbology: a categorical map and a ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbology {
    pub colors: ColorMap,
    pub ramp: LinearRamp,
}

impl SymbologyConfig {
    /// Parse a JSON document.  Channels outside \[0, 255\] are
    /// rejected here.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize back to (pretty) JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode every color.
    pub fn build(&self) -> Result<Symbology> {
        let fallback: RGB8 = match &self.fallback {
            Some(hex) => parse_hex(hex)?,
            None => WHITE,
        };
        let ramp = LinearRamp::new(&self.ramp.start, &self.ramp.end)?;
        let colors = ColorMap::new(
            self.categories.iter()
                .map(|(code, &[r, g, b, a])| (code.as_str(), RGBA8 { r, g, b, a })),
            fallback);
        debug!(categories = colors.len(), "symbology loaded");
        Ok(Symbology { colors, ramp })
    }
}

impl Symbology {
    /// Shorthand for [`SymbologyConfig::from_json`] followed by
    /// [`SymbologyConfig::build`].
    pub fn from_json(s: &str) -> Result<Self> {
        SymbologyConfig::from_json(s)?.build()
    }
}
