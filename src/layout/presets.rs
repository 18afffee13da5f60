//! Built-in layout presets shown in the gallery

use super::properties::{
    AlignContent, AlignItems, DisplayMode, FlexDirection, FlexWrap, FlexboxProperties,
    JustifyContent,
};

/// Read-only template bundling a property set and an item count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub item_count: usize,
    pub properties: FlexboxProperties,
    /// (item index, CSS property, value) applied to freshly created items
    pub item_styles: &'static [(usize, &'static str, &'static str)],
}

const fn flex(
    flex_direction: FlexDirection,
    flex_wrap: FlexWrap,
    justify_content: JustifyContent,
    align_items: AlignItems,
    align_content: AlignContent,
    gap: u32,
) -> FlexboxProperties {
    FlexboxProperties {
        display: DisplayMode::Flex,
        flex_direction,
        flex_wrap,
        justify_content,
        align_items,
        align_content,
        gap,
    }
}

static PRESETS: [LayoutPreset; 9] = [
    LayoutPreset {
        id: "basic-row",
        name: "Basic Row",
        description: "Items side by side in a single row",
        icon: "▭▭▭",
        item_count: 3,
        properties: FlexboxProperties::DEFAULT,
        item_styles: &[],
    },
    LayoutPreset {
        id: "perfect-center",
        name: "Perfect Center",
        description: "One item centered on both axes",
        icon: "⊡",
        item_count: 1,
        properties: flex(
            FlexDirection::Row,
            FlexWrap::NoWrap,
            JustifyContent::Center,
            AlignItems::Center,
            AlignContent::Center,
            10,
        ),
        item_styles: &[],
    },
    LayoutPreset {
        id: "navbar",
        name: "Navigation Bar",
        description: "Brand on one end, links on the other",
        icon: "≡",
        item_count: 4,
        properties: flex(
            FlexDirection::Row,
            FlexWrap::NoWrap,
            JustifyContent::SpaceBetween,
            AlignItems::Center,
            AlignContent::Stretch,
            16,
        ),
        item_styles: &[],
    },
    LayoutPreset {
        id: "vertical-stack",
        name: "Vertical Stack",
        description: "Items stacked top to bottom at full width",
        icon: "☰",
        item_count: 4,
        properties: flex(
            FlexDirection::Column,
            FlexWrap::NoWrap,
            JustifyContent::FlexStart,
            AlignItems::Stretch,
            AlignContent::Stretch,
            12,
        ),
        item_styles: &[],
    },
    LayoutPreset {
        id: "card-grid",
        name: "Card Grid",
        description: "Wrapping rows of evenly spaced cards",
        icon: "▦",
        item_count: 8,
        properties: flex(
            FlexDirection::Row,
            FlexWrap::Wrap,
            JustifyContent::SpaceEvenly,
            AlignItems::FlexStart,
            AlignContent::FlexStart,
            20,
        ),
        item_styles: &[],
    },
    LayoutPreset {
        id: "stretch-middle",
        name: "Stretch Middle",
        description: "Fixed ends with a middle item that grows",
        icon: "◧",
        item_count: 3,
        properties: flex(
            FlexDirection::Row,
            FlexWrap::NoWrap,
            JustifyContent::SpaceBetween,
            AlignItems::Stretch,
            AlignContent::Stretch,
            8,
        ),
        item_styles: &[(1, "flex-grow", "1")],
    },
    LayoutPreset {
        id: "sidebar",
        name: "Sidebar",
        description: "Narrow side column next to the main area",
        icon: "▯▭",
        item_count: 2,
        properties: flex(
            FlexDirection::Row,
            FlexWrap::NoWrap,
            JustifyContent::FlexStart,
            AlignItems::Stretch,
            AlignContent::Stretch,
            24,
        ),
        item_styles: &[(1, "flex-grow", "1")],
    },
    LayoutPreset {
        id: "sticky-footer",
        name: "Sticky Footer",
        description: "Content column with the last item pushed to the bottom",
        icon: "▁",
        item_count: 3,
        properties: flex(
            FlexDirection::Column,
            FlexWrap::NoWrap,
            JustifyContent::SpaceBetween,
            AlignItems::Stretch,
            AlignContent::Stretch,
            0,
        ),
        item_styles: &[],
    },
    LayoutPreset {
        id: "reverse-row",
        name: "Reverse Row",
        description: "Row laid out from the opposite edge",
        icon: "⇠",
        item_count: 4,
        properties: flex(
            FlexDirection::RowReverse,
            FlexWrap::NoWrap,
            JustifyContent::FlexStart,
            AlignItems::Center,
            AlignContent::Stretch,
            10,
        ),
        item_styles: &[],
    },
];

/// Every preset, in gallery order
pub fn catalog() -> &'static [LayoutPreset] {
    &PRESETS
}

/// First entry of the catalog
pub fn default_preset() -> &'static LayoutPreset {
    &PRESETS[0]
}

pub fn find(id: &str) -> Option<&'static LayoutPreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find() {
        let preset = find("card-grid").expect("card-grid preset");
        assert_eq!(preset.name, "Card Grid");
        assert_eq!(preset.properties.flex_wrap, FlexWrap::Wrap);
        assert!(find("masonry").is_none());
    }

    #[test]
    fn test_default_preset_uses_default_properties() {
        let preset = default_preset();
        assert_eq!(preset.properties, FlexboxProperties::default());
        assert_eq!(preset.item_count, 3);
    }

    #[test]
    fn test_item_styles_target_existing_items() {
        for preset in catalog() {
            for (index, _, _) in preset.item_styles {
                assert!(*index < preset.item_count, "{} styles item {}", preset.id, index);
            }
        }
    }
}
