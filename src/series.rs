//! Coloring of `(name, value)` series such as pie chart segments.

use std::cmp::Ordering;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::ramp::LinearRamp;

/// One named magnitude, as returned by the metrics endpoints.
///
/// Deserializes from `{"name": …, "value": …}` objects as well as from
/// the `["name", value]` rows the metrics endpoints emit.  A `null`
/// name (an SQL `NULL` group) is rejected rather than turned into an
/// empty label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub name: String,
    pub value: f64,
}

impl SeriesEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

/// A series entry with the color it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct ColoredEntry {
    pub entry: SeriesEntry,
    pub color: RGB8,
}

/// Largest first; NaN goes last.
fn descending(a: &SeriesEntry, b: &SeriesEntry) -> Ordering {
    match (a.value.is_nan(), b.value.is_nan()) {
        (false, false) => b.value.total_cmp(&a.value),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}

/// Sort `entries` by value, largest first.  Entries with a NaN value
/// are put at the end.  Equal values may end up in any order.
pub fn sort_descending(entries: &mut [SeriesEntry]) {
    entries.sort_unstable_by(descending);
}

/// Sort a copy of `entries` by decreasing value and color it
/// positionally with `ramp`: the largest value gets the start color,
/// the smallest the end color.
///
/// The number of colors is taken from `entries` on each call, so the
/// series may change length between calls.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use incident_symbology::{color_series, SeriesEntry, presets::SEATBELT_RAMP};
/// let pie = [SeriesEntry::new("Not used", 12.),
///            SeriesEntry::new("Used", 230.),
///            SeriesEntry::new("Unknown", 40.)];
/// let colored = color_series(&pie, &SEATBELT_RAMP);
/// assert_eq!(colored[0].entry.name, "Used");
/// assert_eq!(colored[0].color, RGB8::new(122, 0, 25));
/// assert_eq!(colored[2].color, RGB8::new(255, 204, 51));
/// ```
pub fn color_series(entries: &[SeriesEntry], ramp: &LinearRamp)
                    -> Vec<ColoredEntry> {
    let mut sorted = entries.to_vec();
    sort_descending(&mut sorted);
    let colors = ramp.colors::<RGB8>(sorted.len());
    sorted.into_iter().zip(colors)
        .map(|(entry, color)| ColoredEntry { entry, color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[SeriesEntry]) -> Vec<f64> {
        entries.iter().map(|e| e.value).collect()
    }

    #[test]
    fn sorts_largest_first() {
        let mut s = vec![SeriesEntry::new("a", 3.), SeriesEntry::new("b", 10.),
                         SeriesEntry::new("c", -1.), SeriesEntry::new("d", 0.)];
        sort_descending(&mut s);
        assert_eq!(values(&s), [10., 3., 0., -1.]);
    }

    #[test]
    fn nan_sorts_last() {
        let mut s = vec![SeriesEntry::new("nan", f64::NAN),
                         SeriesEntry::new("a", 1.), SeriesEntry::new("b", 2.)];
        sort_descending(&mut s);
        assert_eq!(s[0].name, "b");
        assert_eq!(s[1].name, "a");
        assert!(s[2].value.is_nan());
    }

    #[test]
    fn colors_follow_rank() {
        let ramp = LinearRamp::new("#000000", "#ffffff").unwrap();
        let s = [SeriesEntry::new("small", 1.), SeriesEntry::new("big", 9.),
                 SeriesEntry::new("mid", 5.)];
        let c = color_series(&s, &ramp);
        let names: Vec<&str> = c.iter().map(|e| e.entry.name.as_str()).collect();
        assert_eq!(names, ["big", "mid", "small"]);
        assert_eq!(c[0].color, RGB8::new(0, 0, 0));
        assert_eq!(c[1].color, RGB8::new(128, 128, 128));
        assert_eq!(c[2].color, RGB8::new(255, 255, 255));
    }

    #[test]
    fn length_changes_between_calls() {
        let ramp = LinearRamp::new("#7a0019", "#ffcc33").unwrap();
        assert!(color_series(&[], &ramp).is_empty());
        let one = color_series(&[SeriesEntry::new("only", 4.)], &ramp);
        assert_eq!(one[0].color, RGB8::new(122, 0, 25));
        let mut s: Vec<_> = (0..5).map(|i| SeriesEntry::new(i.to_string(), i as f64))
            .collect();
        assert_eq!(color_series(&s, &ramp).len(), 5);
        s.truncate(2);
        let two = color_series(&s, &ramp);
        assert_eq!(two[1].color, RGB8::new(255, 204, 51));
    }

    #[test]
    fn deserializes_metrics_payload() {
        let s: Vec<SeriesEntry> = serde_json::from_str(
            r#"[{"name": "Drinking", "value": 17}, {"name": "Sober", "value": 301.5}]"#)
            .unwrap();
        assert_eq!(s[0], SeriesEntry::new("Drinking", 17.));
        assert_eq!(s[1].value, 301.5);
    }

    #[test]
    fn deserializes_metrics_rows() {
        let s: Vec<SeriesEntry> = serde_json::from_str(
            r#"[["Yes", 4310], ["No", 512], ["Unknown", 77.5]]"#).unwrap();
        assert_eq!(s, [SeriesEntry::new("Yes", 4310.), SeriesEntry::new("No", 512.),
                       SeriesEntry::new("Unknown", 77.5)]);
        let null_group = serde_json::from_str::<Vec<SeriesEntry>>(
            r#"[["Yes", 4310], [null, 12]]"#);
        assert!(null_group.is_err());
    }
}
