//! Layout model: flexbox properties, items and the preset catalog

pub mod items;
pub mod presets;
pub mod properties;

pub use items::{ItemLimits, ItemSequence, LayoutItem};
pub use presets::LayoutPreset;
pub use properties::{
    AlignContent, AlignItems, DisplayMode, FlexDirection, FlexWrap, FlexboxProperties,
    JustifyContent, PropertyKey, PropertyValue,
};
