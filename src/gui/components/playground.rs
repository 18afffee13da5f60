//! Live flex container
//!
//! The property set is handed to egui's layout engine as an [`egui::Layout`];
//! egui does the actual box placement.

use eframe::egui;

use crate::gui::constants::*;
use crate::layout::{
    AlignItems, DisplayMode, FlexDirection, FlexWrap, FlexboxProperties, JustifyContent,
    LayoutItem,
};

/// Closest egui layout for a flexbox property set
///
/// egui has no space distribution or baseline alignment, so the `space-*`
/// justifications center the run and `baseline` aligns to the start.
/// `wrap-reverse` wraps in the normal order.
pub fn host_layout(props: &FlexboxProperties) -> egui::Layout {
    if props.display == DisplayMode::Block {
        return egui::Layout::top_down(egui::Align::Min).with_cross_justify(true);
    }

    let cross_align = match props.align_items {
        AlignItems::FlexStart | AlignItems::Baseline | AlignItems::Stretch => egui::Align::Min,
        AlignItems::FlexEnd => egui::Align::Max,
        AlignItems::Center => egui::Align::Center,
    };

    let layout = match props.flex_direction {
        FlexDirection::Row => egui::Layout::left_to_right(cross_align),
        FlexDirection::RowReverse => egui::Layout::right_to_left(cross_align),
        FlexDirection::Column => egui::Layout::top_down(cross_align),
        FlexDirection::ColumnReverse => egui::Layout::bottom_up(cross_align),
    };

    // Reversed directions start at the far edge
    let (start, end) = match props.flex_direction {
        FlexDirection::Row | FlexDirection::Column => (egui::Align::Min, egui::Align::Max),
        FlexDirection::RowReverse | FlexDirection::ColumnReverse => (egui::Align::Max, egui::Align::Min),
    };
    let main_align = match props.justify_content {
        JustifyContent::FlexStart => start,
        JustifyContent::FlexEnd => end,
        JustifyContent::Center
        | JustifyContent::SpaceBetween
        | JustifyContent::SpaceAround
        | JustifyContent::SpaceEvenly => egui::Align::Center,
    };

    layout
        .with_main_wrap(props.flex_wrap != FlexWrap::NoWrap)
        .with_main_align(main_align)
        .with_cross_justify(props.align_items == AlignItems::Stretch)
}

/// Fill color for the item at `index`: hsl(220 + 30i, 70%, 50 + 10i % 30)
pub fn item_color(index: usize) -> egui::Color32 {
    let hue = (220 + (index * 30) % 360) % 360;
    let lightness = 50 + (index * 10) % 30;
    let [r, g, b] = hsl_to_rgb(hue as f32, 0.7, lightness as f32 / 100.0);
    egui::Color32::from_rgb(r, g, b)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r, g, b].map(|channel| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8)
}

/// Whether the item carries a `flex-grow` override
pub fn grows(item: &LayoutItem) -> bool {
    item.custom_styles
        .as_ref()
        .is_some_and(|styles| styles.contains_key("flex-grow"))
}

pub fn ui(ui: &mut egui::Ui, props: &FlexboxProperties, items: &[LayoutItem]) {
    egui::Frame::new()
        .fill(PLAYGROUND_BG)
        .corner_radius(egui::CornerRadius::same(CORNER_RADIUS))
        .inner_margin(egui::Margin::same(CONTAINER_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Flexbox Container")
                    .heading()
                    .strong()
                    .color(ITEM_TEXT),
            );
            ui.label(
                egui::RichText::new("Adjust the properties to see how flexbox works")
                    .color(egui::Color32::from_white_alpha(204)),
            );
            ui.add_space(SECTION_SPACING);

            container(ui, props, items);

            ui.add_space(SECTION_SPACING);
            current_css(ui, props);
        });
}

fn container(ui: &mut egui::Ui, props: &FlexboxProperties, items: &[LayoutItem]) {
    egui::Frame::new()
        .fill(CONTAINER_BG)
        .stroke(egui::Stroke::new(2.0, CONTAINER_BORDER))
        .corner_radius(egui::CornerRadius::same(CORNER_RADIUS))
        .inner_margin(egui::Margin::same(CONTAINER_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(CONTAINER_MIN_HEIGHT);

            let gap = props.gap as f32;
            ui.spacing_mut().item_spacing = egui::vec2(gap, gap);

            let column = props.display == DisplayMode::Flex && props.flex_direction.is_column();
            ui.with_layout(host_layout(props), |ui| {
                for (index, item) in items.iter().enumerate() {
                    item_box(ui, item, index, column);
                }
            });
        });
}

fn item_box(ui: &mut egui::Ui, item: &LayoutItem, index: usize, column: bool) {
    egui::Frame::new()
        .fill(item_color(index))
        .corner_radius(egui::CornerRadius::same(CORNER_RADIUS))
        .inner_margin(egui::Margin::same(ITEM_PADDING))
        .show(ui, |ui| {
            let inner = ITEM_MIN_SIZE - 2.0 * ITEM_PADDING as f32;
            let mut size = egui::vec2(inner, inner);
            if grows(item) {
                if column {
                    size.y = ITEM_GROW_SIZE;
                } else {
                    size.x = ITEM_GROW_SIZE;
                }
            }
            ui.set_min_size(size);
            ui.label(
                egui::RichText::new(&item.label)
                    .strong()
                    .size(ITEM_LABEL_SIZE)
                    .color(ITEM_TEXT),
            );
        });
}

fn current_css(ui: &mut egui::Ui, props: &FlexboxProperties) {
    egui::Frame::new()
        .fill(egui::Color32::from_white_alpha(25))
        .corner_radius(egui::CornerRadius::same(CORNER_RADIUS))
        .inner_margin(egui::Margin::same(ITEM_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Current CSS:").strong().color(ITEM_TEXT));
            for declaration in props.css_declarations() {
                ui.label(
                    egui::RichText::new(declaration)
                        .monospace()
                        .color(egui::Color32::from_white_alpha(230)),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_properties_lay_out_left_to_right() {
        let layout = host_layout(&FlexboxProperties::default());
        assert_eq!(layout.main_dir, egui::Direction::LeftToRight);
        assert!(!layout.main_wrap);
        assert_eq!(layout.main_align, egui::Align::Min);
        assert!(layout.cross_justify);
    }

    #[test]
    fn test_column_reverse_with_wrap() {
        let props = FlexboxProperties {
            flex_direction: FlexDirection::ColumnReverse,
            flex_wrap: FlexWrap::WrapReverse,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Center,
            ..FlexboxProperties::default()
        };
        let layout = host_layout(&props);
        assert_eq!(layout.main_dir, egui::Direction::BottomUp);
        assert!(layout.main_wrap);
        assert_eq!(layout.main_align, egui::Align::Max);
        assert_eq!(layout.cross_align, egui::Align::Center);
        assert!(!layout.cross_justify);
    }

    #[test]
    fn test_space_distribution_centers() {
        let props = FlexboxProperties {
            justify_content: JustifyContent::SpaceBetween,
            ..FlexboxProperties::default()
        };
        assert_eq!(host_layout(&props).main_align, egui::Align::Center);
    }

    #[test]
    fn test_block_display_stacks() {
        let props = FlexboxProperties {
            display: DisplayMode::Block,
            flex_direction: FlexDirection::Row,
            ..FlexboxProperties::default()
        };
        let layout = host_layout(&props);
        assert_eq!(layout.main_dir, egui::Direction::TopDown);
        assert!(layout.cross_justify);
    }

    #[test]
    fn test_item_colors() {
        assert_eq!(item_color(0), egui::Color32::from_rgb(38, 98, 217));
        assert_eq!(item_color(3), egui::Color32::from_rgb(217, 38, 187));
        // hue wraps and lightness cycles
        assert_eq!(item_color(12), item_color(0));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
    }

    #[test]
    fn test_grows() {
        let mut item = LayoutItem::numbered(1, 1);
        assert!(!grows(&item));
        item.set_style("flex-grow", "1");
        assert!(grows(&item));
    }
}
