use eframe::egui;

use crate::editor::Editor;
use crate::gui::components::playground::item_color;
use crate::gui::constants::*;

/// Actions triggered from the item panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    None,
    Add,
    Remove,
    ShowCode,
}

pub fn ui(ui: &mut egui::Ui, editor: &Editor) -> ItemAction {
    let mut action = ItemAction::None;
    let count = editor.items().len();
    let limits = editor.limits();

    ui.add_space(PADDING);
    ui.horizontal(|ui| {
        ui.heading("Flex Items");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{count} items")).strong().color(ACTIVE_RING));
        });
    });
    ui.add_space(SECTION_SPACING);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if ui
                .add_enabled(editor.can_add_item(), egui::Button::new("➕ Add Item"))
                .clicked()
            {
                action = ItemAction::Add;
            }
            if ui
                .add_enabled(editor.can_remove_item(), egui::Button::new("➖ Remove Item"))
                .clicked()
            {
                action = ItemAction::Remove;
            }
        });
        ui.label(
            egui::RichText::new(format!("Items: {}-{} • Current: {count}", limits.min, limits.max))
                .small()
                .weak(),
        );
    });

    ui.add_space(SECTION_SPACING);
    if ui.button("📋 Get Code").clicked() {
        action = ItemAction::ShowCode;
    }
    ui.add_space(SECTION_SPACING);

    ui.label(egui::RichText::new("Current Items").strong());
    ui.add_space(ITEM_SPACING);
    let chip_width =
        (ui.available_width() - ITEM_SPACING * (ITEM_GRID_COLUMNS as f32 - 1.0)) / ITEM_GRID_COLUMNS as f32;
    egui::Grid::new("current_items")
        .num_columns(ITEM_GRID_COLUMNS)
        .spacing([ITEM_SPACING, ITEM_SPACING])
        .show(ui, |ui| {
            for (index, item) in editor.items().iter().enumerate() {
                chip(ui, &item.label, index, chip_width);
                if (index + 1) % ITEM_GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    action
}

fn chip(ui: &mut egui::Ui, label: &str, index: usize, width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width.max(ITEM_CHIP_MIN_HEIGHT), ITEM_CHIP_MIN_HEIGHT), egui::Sense::hover());
    ui.painter().rect_filled(rect, CORNER_RADIUS, item_color(index));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        ITEM_TEXT,
    );
}
