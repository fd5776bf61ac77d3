//! Composition of declared, global and conditional styles into one record.

use log::trace;

use crate::breakpoints::{Axis, Orientation, threshold_fragment};
use crate::style::Style;

/// Resolve the style a node lays out with for the given viewport.
///
/// `own` wins over `global` field by field. The orientation fragment is layered
/// next, then the height threshold fragment and finally the width threshold
/// fragment, so width wins where both set a field. Conditional fragments are
/// consumed: the result never carries any. Percentages are left untouched.
pub fn resolve_style(own: &Style, global: Option<&Style>, viewport_width: f32, viewport_height: f32) -> Style {
    let mut resolved = global.map_or_else(|| own.clone(), |base| base.merged_with(own));
    if !resolved.has_conditions() {
        return resolved;
    }
    let conditions = resolved.take_conditions();

    let orientation = match Orientation::of(viewport_width, viewport_height) {
        Orientation::Landscape => conditions.landscape.as_deref(),
        Orientation::Portrait => conditions.portrait.as_deref(),
    };
    if let Some(fragment) = orientation {
        trace!("applying orientation fragment for {viewport_width}x{viewport_height}");
        resolved.apply(fragment);
    }

    let min = conditions.min.as_deref();
    let max = conditions.max.as_deref();
    for (axis, viewport) in [(Axis::Height, viewport_height), (Axis::Width, viewport_width)] {
        if let Some(fragment) = threshold_fragment(min, max, axis, viewport) {
            trace!("applying {axis:?} threshold fragment at {viewport}");
            resolved.apply(fragment);
        }
    }

    // Fragments may carry their own nested conditions; those are not evaluated.
    drop(resolved.take_conditions());
    resolved
}
