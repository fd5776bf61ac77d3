//! Declared style records as authored by the host.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Deserializer};

use crate::breakpoints::Thresholds;
use crate::computed_style::{
    Display, FlexDirection, FlexWrap, JustifyContent, Keyword, Overflow, Position, SizeSpecified,
    TextAlign, VerticalAlign,
};

/// A flat record of optional style fields.
///
/// Deserializes from the camelCase object a host script would write
/// (`{"width": "50%", "flexDirection": "row"}`); unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub width: Option<SizeSpecified>,
    pub height: Option<SizeSpecified>,
    pub min_width: Option<SizeSpecified>,
    pub min_height: Option<SizeSpecified>,
    pub max_width: Option<SizeSpecified>,
    pub max_height: Option<SizeSpecified>,

    pub padding: Option<SizeSpecified>,
    pub padding_top: Option<SizeSpecified>,
    pub padding_right: Option<SizeSpecified>,
    pub padding_bottom: Option<SizeSpecified>,
    pub padding_left: Option<SizeSpecified>,

    pub margin: Option<SizeSpecified>,
    pub margin_top: Option<SizeSpecified>,
    pub margin_right: Option<SizeSpecified>,
    pub margin_bottom: Option<SizeSpecified>,
    pub margin_left: Option<SizeSpecified>,

    pub display: Option<Keyword<Display>>,
    pub position: Option<Keyword<Position>>,
    /// Sets both anchors; `anchor_x` / `anchor_y` override it.
    pub anchor: Option<f32>,
    pub anchor_x: Option<f32>,
    pub anchor_y: Option<f32>,
    /// Sets both scale axes; `scale_x` / `scale_y` override it.
    pub scale: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,

    pub flex_direction: Option<Keyword<FlexDirection>>,
    pub flex_wrap: Option<Keyword<FlexWrap>>,
    pub justify_content: Option<Keyword<JustifyContent>>,
    pub overflow: Option<Keyword<Overflow>>,
    pub z_index: Option<i32>,
    pub visible: Option<bool>,

    // Forwarded untouched to the renderer.
    #[serde(deserialize_with = "string_or_number")]
    pub background: Option<String>,
    pub border_radius: Option<f32>,

    // Forwarded to text leaves.
    #[serde(deserialize_with = "string_or_number")]
    pub color: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub font_weight: Option<String>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub word_wrap: Option<bool>,
    pub text_align: Option<Keyword<TextAlign>>,
    pub vertical_align: Option<Keyword<VerticalAlign>>,

    // Conditional fragments, consumed by the resolver.
    pub portrait: Option<Box<Style>>,
    pub landscape: Option<Box<Style>>,
    pub min: Option<Box<Thresholds>>,
    pub max: Option<Box<Thresholds>>,
}

/// Copies every field that is set on `$over` onto `$base`.
macro_rules! overlay_fields {
    ($base:ident, $over:ident; $($field:ident),+ $(,)?) => {
        $(
            if $over.$field.is_some() {
                $base.$field.clone_from(&$over.$field);
            }
        )+
    };
}

impl Style {
    /// Parse a style object from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("parsing style object")
    }

    /// Field-level overlay: every field set on `over` replaces the one on `self`.
    ///
    /// The merge is one level deep; conditional fragments are replaced whole,
    /// never merged into each other.
    pub fn apply(&mut self, over: &Self) {
        overlay_fields!(self, over;
            width, height, min_width, min_height, max_width, max_height,
            padding, padding_top, padding_right, padding_bottom, padding_left,
            margin, margin_top, margin_right, margin_bottom, margin_left,
            display, position, anchor, anchor_x, anchor_y, scale, scale_x, scale_y,
            flex_direction, flex_wrap, justify_content, overflow, z_index, visible,
            background, border_radius,
            color, font_size, font_family, font_weight, line_height, letter_spacing,
            word_wrap, text_align, vertical_align,
            portrait, landscape, min, max,
        );
    }

    /// `self` overlaid with `over`, leaving both inputs untouched.
    #[must_use]
    pub fn merged_with(&self, over: &Self) -> Self {
        let mut merged = self.clone();
        merged.apply(over);
        merged
    }

    pub fn has_conditions(&self) -> bool {
        self.portrait.is_some() || self.landscape.is_some() || self.min.is_some() || self.max.is_some()
    }

    /// Detach the conditional fragments so the record holds only plain fields.
    pub(crate) fn take_conditions(&mut self) -> Conditions {
        Conditions {
            portrait: self.portrait.take(),
            landscape: self.landscape.take(),
            min: self.min.take(),
            max: self.max.take(),
        }
    }
}

/// Conditional fragments detached from a style record.
#[derive(Debug, Default)]
pub(crate) struct Conditions {
    pub portrait: Option<Box<Style>>,
    pub landscape: Option<Box<Style>>,
    pub min: Option<Box<Thresholds>>,
    pub max: Option<Box<Thresholds>>,
}

/// Accepts `"bold"` as well as `700` for opaque renderer fields.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    }))
}
