//! Flexbox property model
//!
//! Every field is a closed enum whose text form is the CSS keyword, so a
//! `FlexboxProperties` value can never hold an unknown keyword.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Declares a CSS keyword enum with its canonical text, serde names and parser.
macro_rules! css_keyword {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($field:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $css:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $css)] $variant, )+
        }

        impl $name {
            /// All keywords in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_css(self) -> &'static str {
                match self {
                    $( $name::$variant => $css, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $css => Ok($name::$variant), )+
                    other => Err(ParseError::InvalidKeyword {
                        field: $field,
                        value: other.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_css())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

css_keyword! {
    /// `display`
    pub enum DisplayMode ("display", default = Flex) {
        Flex => "flex",
        Block => "block",
    }
}

css_keyword! {
    /// `flex-direction`
    pub enum FlexDirection ("flexDirection", default = Row) {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

css_keyword! {
    /// `flex-wrap`
    pub enum FlexWrap ("flexWrap", default = NoWrap) {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

css_keyword! {
    /// `justify-content`
    pub enum JustifyContent ("justifyContent", default = FlexStart) {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

css_keyword! {
    /// `align-items`
    pub enum AlignItems ("alignItems", default = Stretch) {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

css_keyword! {
    /// `align-content`
    pub enum AlignContent ("alignContent", default = Stretch) {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
}

impl FlexDirection {
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }
}

/// Names one field of [`FlexboxProperties`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    AlignContent,
    Gap,
}

impl PropertyKey {
    /// Field order of the model
    pub const ALL: [PropertyKey; 7] = [
        PropertyKey::Display,
        PropertyKey::FlexDirection,
        PropertyKey::FlexWrap,
        PropertyKey::JustifyContent,
        PropertyKey::AlignItems,
        PropertyKey::AlignContent,
        PropertyKey::Gap,
    ];

    /// Model key (`flexDirection`)
    pub const fn key(self) -> &'static str {
        match self {
            PropertyKey::Display => "display",
            PropertyKey::FlexDirection => "flexDirection",
            PropertyKey::FlexWrap => "flexWrap",
            PropertyKey::JustifyContent => "justifyContent",
            PropertyKey::AlignItems => "alignItems",
            PropertyKey::AlignContent => "alignContent",
            PropertyKey::Gap => "gap",
        }
    }

    /// Stylesheet property name (`flex-direction`)
    pub const fn css_name(self) -> &'static str {
        match self {
            PropertyKey::Display => "display",
            PropertyKey::FlexDirection => "flex-direction",
            PropertyKey::FlexWrap => "flex-wrap",
            PropertyKey::JustifyContent => "justify-content",
            PropertyKey::AlignItems => "align-items",
            PropertyKey::AlignContent => "align-content",
            PropertyKey::Gap => "gap",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PropertyKey {
    type Err = ParseError;

    /// Accepts either the model key or the stylesheet name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PropertyKey::ALL
            .into_iter()
            .find(|key| key.key() == s || key.css_name() == s)
            .ok_or_else(|| ParseError::UnknownProperty(s.to_string()))
    }
}

/// A new value for exactly one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    Display(DisplayMode),
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    JustifyContent(JustifyContent),
    AlignItems(AlignItems),
    AlignContent(AlignContent),
    Gap(u32),
}

impl PropertyValue {
    pub fn key(&self) -> PropertyKey {
        match self {
            PropertyValue::Display(_) => PropertyKey::Display,
            PropertyValue::FlexDirection(_) => PropertyKey::FlexDirection,
            PropertyValue::FlexWrap(_) => PropertyKey::FlexWrap,
            PropertyValue::JustifyContent(_) => PropertyKey::JustifyContent,
            PropertyValue::AlignItems(_) => PropertyKey::AlignItems,
            PropertyValue::AlignContent(_) => PropertyKey::AlignContent,
            PropertyValue::Gap(_) => PropertyKey::Gap,
        }
    }

    /// Parse the text form of a value for `key`
    pub fn parse(key: PropertyKey, text: &str) -> Result<Self, ParseError> {
        Ok(match key {
            PropertyKey::Display => PropertyValue::Display(text.parse()?),
            PropertyKey::FlexDirection => PropertyValue::FlexDirection(text.parse()?),
            PropertyKey::FlexWrap => PropertyValue::FlexWrap(text.parse()?),
            PropertyKey::JustifyContent => PropertyValue::JustifyContent(text.parse()?),
            PropertyKey::AlignItems => PropertyValue::AlignItems(text.parse()?),
            PropertyKey::AlignContent => PropertyValue::AlignContent(text.parse()?),
            PropertyKey::Gap => {
                let raw = text.trim();
                let digits = raw.strip_suffix("px").unwrap_or(raw);
                let gap = digits
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidGap(raw.to_string()))?;
                PropertyValue::Gap(gap)
            }
        })
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Display(v) => fmt::Display::fmt(v, f),
            PropertyValue::FlexDirection(v) => fmt::Display::fmt(v, f),
            PropertyValue::FlexWrap(v) => fmt::Display::fmt(v, f),
            PropertyValue::JustifyContent(v) => fmt::Display::fmt(v, f),
            PropertyValue::AlignItems(v) => fmt::Display::fmt(v, f),
            PropertyValue::AlignContent(v) => fmt::Display::fmt(v, f),
            PropertyValue::Gap(px) => write!(f, "{px}"),
        }
    }
}

impl FromStr for PropertyValue {
    type Err = ParseError;

    /// Parses `key=value`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| ParseError::MissingValue(s.to_string()))?;
        PropertyValue::parse(key.parse()?, value)
    }
}

/// Flexbox container configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexboxProperties {
    pub display: DisplayMode,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Pixels; the gap slider keeps this within 0..=50
    pub gap: u32,
}

impl FlexboxProperties {
    pub const DEFAULT: FlexboxProperties = FlexboxProperties {
        display: DisplayMode::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::NoWrap,
        justify_content: JustifyContent::FlexStart,
        align_items: AlignItems::Stretch,
        align_content: AlignContent::Stretch,
        gap: 10,
    };

    pub fn get(&self, key: PropertyKey) -> PropertyValue {
        match key {
            PropertyKey::Display => PropertyValue::Display(self.display),
            PropertyKey::FlexDirection => PropertyValue::FlexDirection(self.flex_direction),
            PropertyKey::FlexWrap => PropertyValue::FlexWrap(self.flex_wrap),
            PropertyKey::JustifyContent => PropertyValue::JustifyContent(self.justify_content),
            PropertyKey::AlignItems => PropertyValue::AlignItems(self.align_items),
            PropertyKey::AlignContent => PropertyValue::AlignContent(self.align_content),
            PropertyKey::Gap => PropertyValue::Gap(self.gap),
        }
    }

    /// Replace one field. Returns false when the field already held `value`.
    pub fn set(&mut self, value: PropertyValue) -> bool {
        if self.get(value.key()) == value {
            return false;
        }
        match value {
            PropertyValue::Display(v) => self.display = v,
            PropertyValue::FlexDirection(v) => self.flex_direction = v,
            PropertyValue::FlexWrap(v) => self.flex_wrap = v,
            PropertyValue::JustifyContent(v) => self.justify_content = v,
            PropertyValue::AlignItems(v) => self.align_items = v,
            PropertyValue::AlignContent(v) => self.align_content = v,
            PropertyValue::Gap(v) => self.gap = v,
        }
        true
    }

    /// Every field as a value, in declaration order
    pub fn values(&self) -> [PropertyValue; 7] {
        PropertyKey::ALL.map(|key| self.get(key))
    }

    /// `property: value;` lines for a stylesheet rule, gap in pixels
    pub fn css_declarations(&self) -> Vec<String> {
        self.values()
            .iter()
            .map(|value| match value {
                PropertyValue::Gap(px) => format!("gap: {px}px;"),
                other => format!("{}: {other};", other.key().css_name()),
            })
            .collect()
    }
}

impl Default for FlexboxProperties {
    fn default() -> Self {
        Self::DEFAULT
    }
}
