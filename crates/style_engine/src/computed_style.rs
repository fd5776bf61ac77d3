//! Keyword and length values shared by declared styles and used values.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use log::warn;
use serde::{Deserialize, Deserializer};

/// Declares a keyword enum together with its `FromStr` token table.
///
/// Every variant lists the tokens it accepts; the first one is the canonical
/// spelling returned by `as_str`. Both CSS (`row-reverse`) and camelCase
/// (`rowReverse`) spellings are listed where hosts commonly use either.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $($token:literal)|+ ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Canonical keyword spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => keyword_enum!(@first $($token)|+), )+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token.trim() {
                    $( $($token)|+ => Ok(Self::$variant), )+
                    other => Err(anyhow!("unknown {} keyword `{other}`", stringify!($name))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(self.as_str())
            }
        }
    };
    (@first $first:literal $(| $rest:literal)*) => { $first };
}

keyword_enum! {
    /// Outer display type of a node inside its parent's flow.
    #[derive(Default)]
    pub enum Display {
        Block => "block",
        Inline => "inline",
        #[default]
        InlineBlock => "inline-block" | "inlineBlock",
        Flex => "flex",
        /// Accepted so the switch surface stays complete; children are not arranged.
        Grid => "grid",
    }
}

keyword_enum! {
    /// Anchored placement relative to the parent box. Unset means normal flow.
    pub enum Position {
        TopLeft => "topLeft" | "leftTop",
        TopRight => "topRight" | "rightTop",
        BottomLeft => "bottomLeft" | "leftBottom",
        BottomRight => "bottomRight" | "rightBottom",
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Center => "center",
        CenterTop => "centerTop" | "topCenter",
        CenterBottom => "centerBottom" | "bottomCenter",
        CenterLeft => "centerLeft" | "leftCenter",
        CenterRight => "centerRight" | "rightCenter",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum FlexDirection {
        #[default]
        Row => "row",
        RowReverse => "row-reverse" | "rowReverse",
        Column => "column",
        ColumnReverse => "column-reverse" | "columnReverse",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum FlexWrap {
        #[default]
        NoWrap => "nowrap" | "noWrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse" | "wrapReverse",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum JustifyContent {
        #[default]
        FlexStart => "flex-start" | "flexStart" | "start",
        FlexEnd => "flex-end" | "flexEnd" | "end",
        Center => "center",
        SpaceBetween => "space-between" | "spaceBetween",
        SpaceAround => "space-around" | "spaceAround",
        SpaceEvenly => "space-evenly" | "spaceEvenly",
        /// Reserved: parsed, laid out as `flex-start`.
        Stretch => "stretch",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum Overflow {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum TextAlign {
        #[default]
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum VerticalAlign {
        #[default]
        Top => "top",
        Middle => "middle" | "center",
        Bottom => "bottom",
    }
}

/// A keyword as written by the host: either recognized or kept verbatim.
///
/// Unrecognized tokens are not parse errors. Most properties degrade them to
/// their default while resolving; `flex-direction` keeps them so the flex pass
/// can refuse to guess a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> Keyword<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }

    /// Recognized value, or `None` with a warning naming the property.
    pub fn known_or_warn(&self, property: &str) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(token) => {
                warn!("ignoring unknown {property} keyword `{token}`");
                None
            }
        }
    }
}

impl<T> From<T> for Keyword<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Keyword<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(match token.parse::<T>() {
            Ok(value) => Self::Known(value),
            Err(_) => Self::Unrecognized(token),
        })
    }
}

/// Declared length: pixels, a percentage of the parent's matching dimension, or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeSpecified {
    #[default]
    Auto,
    Px(f32),
    /// Percentage in `0..=100` (not a fraction).
    Percent(f32),
}

impl SizeSpecified {
    /// Parse a size token, degrading anything unreadable to `0px`.
    ///
    /// Accepts `auto`, `<n>px`, `<n>%` and bare numbers.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Self::Auto;
        }
        let (number, percent) = if let Some(stripped) = trimmed.strip_suffix('%') {
            (stripped, true)
        } else if let Some(stripped) = trimmed.strip_suffix("px") {
            (stripped, false)
        } else {
            (trimmed, false)
        };
        match number.trim().parse::<f32>() {
            Ok(value) if value.is_finite() && percent => Self::Percent(value),
            Ok(value) if value.is_finite() => Self::Px(value),
            _ => {
                warn!("malformed size token `{token}`; using 0");
                Self::Px(0.0)
            }
        }
    }

    /// Resolve against `basis`; percentages floor to whole pixels. `None` for `auto`.
    pub fn resolve(self, basis: f32) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Px(pixels) => Some(pixels),
            Self::Percent(percent) => Some((percent * basis / 100.0).floor()),
        }
    }

    /// Like [`SizeSpecified::resolve`] for properties where `auto` means nothing (padding, margin).
    pub fn resolve_or_zero(self, basis: f32) -> f32 {
        self.resolve(basis).unwrap_or(0.0)
    }

    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Declared as exactly zero pixels.
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Px(pixels) if pixels == 0.0)
    }
}

impl From<f32> for SizeSpecified {
    fn from(pixels: f32) -> Self {
        Self::Px(pixels)
    }
}

impl<'de> Deserialize<'de> for SizeSpecified {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSize {
            Number(f64),
            Text(String),
        }
        Ok(match RawSize::deserialize(deserializer)? {
            RawSize::Number(pixels) => Self::Px(pixels as f32),
            RawSize::Text(token) => Self::parse(&token),
        })
    }
}

/// Resolved box edges in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    pub const fn uniform(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}
