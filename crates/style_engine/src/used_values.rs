//! Used values: a resolved style flattened to numbers and enums.
//!
//! Produced once per resize pass from the output of [`crate::resolve_style`].
//! Padding, margins and min/max limits are resolved against the parent box
//! here; `width`/`height` stay declared because `auto` needs layout context.

use crate::computed_style::{
    Display, Edges, FlexDirection, FlexWrap, JustifyContent, Keyword, Overflow, Position, SizeSpecified,
    TextAlign, VerticalAlign,
};
use crate::style::Style;

/// The box a style resolves against.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsedValuesContext {
    pub parent_width: f32,
    pub parent_height: f32,
}

/// Text fields handed to text leaves untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub word_wrap: Option<bool>,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsedValues {
    pub width: SizeSpecified,
    pub height: SizeSpecified,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub padding: Edges,
    pub margin: Edges,
    pub display: Display,
    pub position: Option<Position>,
    pub anchor_x: Option<f32>,
    pub anchor_y: Option<f32>,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Kept as written: an unrecognized direction fails the flex pass instead of defaulting.
    pub flex_direction: Keyword<FlexDirection>,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub overflow: Overflow,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub z_index: i32,
    pub visible: bool,
    pub text: TextStyle,
}

impl Default for UsedValues {
    fn default() -> Self {
        Self {
            width: SizeSpecified::Auto,
            height: SizeSpecified::Auto,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            display: Display::default(),
            position: None,
            anchor_x: None,
            anchor_y: None,
            scale_x: 1.0,
            scale_y: 1.0,
            flex_direction: Keyword::Known(FlexDirection::Row),
            flex_wrap: FlexWrap::default(),
            justify_content: JustifyContent::default(),
            overflow: Overflow::default(),
            text_align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            z_index: 0,
            visible: true,
            text: TextStyle::default(),
        }
    }
}

/// Flatten a resolved style against the parent box.
///
/// Unknown keywords degrade to a default with a warning; `auto` in a
/// padding, margin or limit resolves to nothing.
pub fn resolve_used_values(style: &Style, context: &UsedValuesContext) -> UsedValues {
    let horizontal = |spec: Option<SizeSpecified>| spec.and_then(|value| value.resolve(context.parent_width));
    let vertical = |spec: Option<SizeSpecified>| spec.and_then(|value| value.resolve(context.parent_height));
    let edges = |shorthand: Option<SizeSpecified>, top, right, bottom, left| {
        let side = |longhand: Option<SizeSpecified>, basis: f32| {
            longhand.or(shorthand).map_or(0.0, |value| value.resolve_or_zero(basis))
        };
        Edges {
            top: side(top, context.parent_height),
            right: side(right, context.parent_width),
            bottom: side(bottom, context.parent_height),
            left: side(left, context.parent_width),
        }
    };

    let text_align = keyword_or_default(style.text_align.as_ref(), "text-align");
    UsedValues {
        width: style.width.unwrap_or_default(),
        height: style.height.unwrap_or_default(),
        min_width: horizontal(style.min_width),
        min_height: vertical(style.min_height),
        max_width: horizontal(style.max_width),
        max_height: vertical(style.max_height),
        padding: edges(
            style.padding,
            style.padding_top,
            style.padding_right,
            style.padding_bottom,
            style.padding_left,
        )
        .clamped_non_negative(),
        margin: edges(style.margin, style.margin_top, style.margin_right, style.margin_bottom, style.margin_left),
        // An unknown display keyword lays out as block flow, not as the inline-block default.
        display: style
            .display
            .as_ref()
            .map_or_else(Display::default, |kw| kw.known_or_warn("display").unwrap_or(Display::Block)),
        position: style.position.as_ref().and_then(|kw| kw.known_or_warn("position")),
        anchor_x: style.anchor_x.or(style.anchor),
        anchor_y: style.anchor_y.or(style.anchor),
        scale_x: style.scale_x.or(style.scale).unwrap_or(1.0),
        scale_y: style.scale_y.or(style.scale).unwrap_or(1.0),
        flex_direction: style.flex_direction.clone().unwrap_or(Keyword::Known(FlexDirection::Row)),
        flex_wrap: keyword_or_default(style.flex_wrap.as_ref(), "flex-wrap"),
        justify_content: keyword_or_default(style.justify_content.as_ref(), "justify-content"),
        overflow: keyword_or_default(style.overflow.as_ref(), "overflow"),
        text_align,
        vertical_align: keyword_or_default(style.vertical_align.as_ref(), "vertical-align"),
        z_index: style.z_index.unwrap_or(0),
        visible: style.visible.unwrap_or(true),
        text: TextStyle {
            color: style.color.clone(),
            font_size: style.font_size,
            font_family: style.font_family.clone(),
            font_weight: style.font_weight.clone(),
            line_height: style.line_height,
            letter_spacing: style.letter_spacing,
            word_wrap: style.word_wrap,
            text_align,
        },
    }
}

fn keyword_or_default<T: Copy + Default>(value: Option<&Keyword<T>>, property: &str) -> T {
    value.and_then(|kw| kw.known_or_warn(property)).unwrap_or_default()
}

impl Edges {
    fn clamped_non_negative(self) -> Self {
        Self {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }
}
