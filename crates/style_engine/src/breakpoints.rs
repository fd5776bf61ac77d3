//! Conditional style fragments: orientation and min/max size thresholds.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::style::Style;

/// Threshold tables keyed by pixel value, one per axis.
///
/// Authored as `{"width": {"600": {...}}, "height": {"400": {...}}}` under a
/// style's `min` or `max` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub width: BTreeMap<u32, Style>,
    pub height: BTreeMap<u32, Style>,
}

impl Thresholds {
    pub fn axis(&self, axis: Axis) -> &BTreeMap<u32, Style> {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape only when strictly wider than tall.
    pub fn of(viewport_width: f32, viewport_height: f32) -> Self {
        if viewport_width > viewport_height { Self::Landscape } else { Self::Portrait }
    }
}

/// Smallest `max` threshold the viewport still fits under.
pub fn max_fragment(table: &BTreeMap<u32, Style>, viewport: f32) -> Option<&Style> {
    table
        .iter()
        .find(|(threshold, _)| viewport <= **threshold as f32)
        .map(|(_, fragment)| fragment)
}

/// Largest `min` threshold the viewport reaches.
pub fn min_fragment(table: &BTreeMap<u32, Style>, viewport: f32) -> Option<&Style> {
    table
        .iter()
        .rev()
        .find(|(threshold, _)| viewport >= **threshold as f32)
        .map(|(_, fragment)| fragment)
}

/// The single threshold fragment that applies on `axis`, if any.
///
/// A `max` match takes precedence over a `min` match on the same axis.
pub fn threshold_fragment<'style>(
    min: Option<&'style Thresholds>,
    max: Option<&'style Thresholds>,
    axis: Axis,
    viewport: f32,
) -> Option<&'style Style> {
    max.and_then(|table| max_fragment(table.axis(axis), viewport))
        .or_else(|| min.and_then(|table| min_fragment(table.axis(axis), viewport)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed_style::SizeSpecified;

    fn fragment(width: f32) -> Style {
        Style { width: Some(SizeSpecified::Px(width)), ..Style::default() }
    }

    fn table() -> BTreeMap<u32, Style> {
        BTreeMap::from([(400, fragment(1.0)), (800, fragment(2.0))])
    }

    #[test]
    fn max_picks_tightest_threshold() {
        let table = table();
        assert_eq!(max_fragment(&table, 300.0), Some(&fragment(1.0)));
        assert_eq!(max_fragment(&table, 400.0), Some(&fragment(1.0)));
        assert_eq!(max_fragment(&table, 500.0), Some(&fragment(2.0)));
        assert_eq!(max_fragment(&table, 900.0), None);
    }

    #[test]
    fn min_picks_largest_reached_threshold() {
        let table = table();
        assert_eq!(min_fragment(&table, 300.0), None);
        assert_eq!(min_fragment(&table, 500.0), Some(&fragment(1.0)));
        assert_eq!(min_fragment(&table, 800.0), Some(&fragment(2.0)));
    }

    #[test]
    fn max_wins_over_min_on_one_axis() {
        let min = Thresholds { width: BTreeMap::from([(100, fragment(10.0))]), ..Thresholds::default() };
        let max = Thresholds { width: BTreeMap::from([(600, fragment(20.0))]), ..Thresholds::default() };
        let chosen = threshold_fragment(Some(&min), Some(&max), Axis::Width, 500.0);
        assert_eq!(chosen, Some(&fragment(20.0)));
        let chosen = threshold_fragment(Some(&min), Some(&max), Axis::Width, 700.0);
        assert_eq!(chosen, Some(&fragment(10.0)));
        assert_eq!(threshold_fragment(Some(&min), Some(&max), Axis::Height, 500.0), None);
    }

    #[test]
    fn square_viewport_is_portrait() {
        assert_eq!(Orientation::of(500.0, 500.0), Orientation::Portrait);
        assert_eq!(Orientation::of(501.0, 500.0), Orientation::Landscape);
    }
}
