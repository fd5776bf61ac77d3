//! Style records and their resolution for the scene layouter.
//!
//! A node's declared [`Style`] is combined with an optional id-keyed override
//! from a [`GlobalStyles`] table and with the conditional fragments it carries
//! (`portrait`/`landscape`, `min`/`max` thresholds) by [`resolve_style`]. The
//! result is flattened into [`UsedValues`] against the parent box by
//! [`resolve_used_values`]. Both steps are pure functions of their inputs.

mod breakpoints;
mod computed_style;
mod global;
mod resolver;
mod style;
mod used_values;

pub use breakpoints::{Axis, Orientation, Thresholds, max_fragment, min_fragment, threshold_fragment};
pub use computed_style::{
    Display, Edges, FlexDirection, FlexWrap, JustifyContent, Keyword, Overflow, Position, SizeSpecified,
    TextAlign, VerticalAlign,
};
pub use global::GlobalStyles;
pub use resolver::resolve_style;
pub use style::Style;
pub use used_values::{TextStyle, UsedValues, UsedValuesContext, resolve_used_values};
