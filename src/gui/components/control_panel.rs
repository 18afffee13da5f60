//! Flexbox property controls

use eframe::egui;
use std::fmt;

use crate::constants::gap::{MAX_PX, MIN_PX};
use crate::gui::constants::*;
use crate::layout::{
    AlignContent, AlignItems, DisplayMode, FlexDirection, FlexWrap, FlexboxProperties,
    JustifyContent, PropertyValue,
};

/// Renders the controls and returns the property the user changed this frame
pub fn ui(ui: &mut egui::Ui, props: &FlexboxProperties) -> Option<PropertyValue> {
    let mut change = None;

    ui.add_space(PADDING);
    ui.heading("Flexbox Controls");
    ui.label(
        egui::RichText::new(
            "Adjust these properties to see how flexbox behavior changes in real-time.",
        )
        .small()
        .weak(),
    );
    ui.add_space(SECTION_SPACING);

    ui.label(egui::RichText::new("Display").strong());
    let mut is_flex = props.display == DisplayMode::Flex;
    if ui.checkbox(&mut is_flex, props.display.as_css()).changed() {
        let display = if is_flex { DisplayMode::Flex } else { DisplayMode::Block };
        change = Some(PropertyValue::Display(display));
    }
    ui.add_space(ITEM_SPACING);

    if let Some(v) = keyword_combo(ui, "Flex Direction", props.flex_direction, FlexDirection::ALL) {
        change = Some(PropertyValue::FlexDirection(v));
    }
    if let Some(v) = keyword_combo(ui, "Flex Wrap", props.flex_wrap, FlexWrap::ALL) {
        change = Some(PropertyValue::FlexWrap(v));
    }
    if let Some(v) = keyword_combo(ui, "Justify Content", props.justify_content, JustifyContent::ALL) {
        change = Some(PropertyValue::JustifyContent(v));
    }
    if let Some(v) = keyword_combo(ui, "Align Items", props.align_items, AlignItems::ALL) {
        change = Some(PropertyValue::AlignItems(v));
    }
    if let Some(v) = keyword_combo(ui, "Align Content", props.align_content, AlignContent::ALL) {
        change = Some(PropertyValue::AlignContent(v));
    }

    ui.label(egui::RichText::new(format!("Gap: {}px", props.gap)).strong());
    let mut gap = props.gap;
    if ui
        .add(egui::Slider::new(&mut gap, MIN_PX..=MAX_PX).suffix("px"))
        .changed()
        && gap != props.gap
    {
        change = Some(PropertyValue::Gap(gap));
    }

    change
}

fn keyword_combo<T>(ui: &mut egui::Ui, label: &str, current: T, options: &[T]) -> Option<T>
where
    T: Copy + PartialEq + fmt::Display,
{
    let mut selected = current;

    ui.label(egui::RichText::new(label).strong());
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.to_string())
        .width(PANEL_WIDTH - 2.0 * SECTION_SPACING)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut selected, *option, option.to_string());
            }
        });
    ui.add_space(ITEM_SPACING);

    (selected != current).then_some(selected)
}
