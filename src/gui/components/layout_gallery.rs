//! Preset gallery with a mini preview per card

use eframe::egui;

use crate::constants::preview::{MINI_GAP_MAX, MINI_ITEM_COUNT};
use crate::gui::components::playground::host_layout;
use crate::gui::constants::*;
use crate::layout::{presets, LayoutPreset};

/// Renders every preset card and returns the one the user clicked
///
/// Clicking the active card returns it too, so it can be reapplied as a reset.
pub fn ui(ui: &mut egui::Ui, selected: &LayoutPreset) -> Option<&'static LayoutPreset> {
    let mut chosen = None;

    ui.add_space(PADDING);
    ui.heading("Layout Gallery");
    ui.label(
        egui::RichText::new("Click a layout to load it into the playground.")
            .small()
            .weak(),
    );
    ui.add_space(SECTION_SPACING);

    for preset in presets::catalog() {
        let active = preset.id == selected.id;
        if card(ui, preset, active).clicked() {
            chosen = Some(preset);
        }
        ui.add_space(ITEM_SPACING);
    }

    chosen
}

fn card(ui: &mut egui::Ui, preset: &LayoutPreset, active: bool) -> egui::Response {
    let mut frame = egui::Frame::group(ui.style()).corner_radius(egui::CornerRadius::same(CORNER_RADIUS));
    if active {
        frame = frame
            .fill(ACTIVE_FILL)
            .stroke(egui::Stroke::new(2.0, ACTIVE_RING));
    }

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(preset.icon).size(ITEM_LABEL_SIZE));
            ui.vertical(|ui| {
                let name = egui::RichText::new(preset.name).strong();
                ui.label(if active { name.color(ACTIVE_RING) } else { name });
                ui.label(egui::RichText::new(preset.description).small());
            });
        });
        ui.add_space(ITEM_SPACING);
        mini_preview(ui, preset);
        ui.add_space(ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{} items", preset.item_count)).small().weak());
            if active {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("Active").small().strong().color(ACTIVE_RING));
                });
            }
        });
    });

    ui.interact(inner.response.rect, card_id(preset), egui::Sense::click())
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn card_id(preset: &LayoutPreset) -> egui::Id {
    egui::Id::new(("layout_card", preset.id))
}

/// Numbers drawn in the mini preview, one per shown item
fn mini_labels(preset: &LayoutPreset) -> Vec<String> {
    (1..=preset.item_count.min(MINI_ITEM_COUNT))
        .map(|n| n.to_string())
        .collect()
}

fn mini_preview(ui: &mut egui::Ui, preset: &LayoutPreset) {
    let props = &preset.properties;
    let column = props.flex_direction.is_column();

    egui::Frame::new()
        .fill(egui::Color32::from_black_alpha(12))
        .corner_radius(egui::CornerRadius::same(CORNER_RADIUS / 2))
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(MINI_PREVIEW_MIN_HEIGHT);

            let gap = props.gap.min(MINI_GAP_MAX) as f32;
            ui.spacing_mut().item_spacing = egui::vec2(gap, gap);

            ui.with_layout(host_layout(props), |ui| {
                for (index, label) in mini_labels(preset).into_iter().enumerate() {
                    let mut size = if column {
                        egui::vec2(MINI_ITEM_SIZE, MINI_ITEM_COLUMN_HEIGHT)
                    } else {
                        egui::vec2(MINI_ITEM_SIZE, MINI_ITEM_SIZE)
                    };
                    if grows(preset, index) {
                        size.x = MINI_ITEM_GROW_SIZE;
                    }
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, MINI_ITEM_FILL);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        label,
                        egui::FontId::proportional(MINI_ITEM_LABEL_SIZE),
                        ACTIVE_RING,
                    );
                }
            });
        });
}

/// Whether the preset gives the item at `index` a `flex-grow` override
fn grows(preset: &LayoutPreset, index: usize) -> bool {
    preset
        .item_styles
        .iter()
        .any(|&(styled, property, _)| styled == index && property == "flex-grow")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_follows_item_styles() {
        let preset = presets::find("stretch-middle").unwrap();
        assert!(!grows(preset, 0));
        assert!(grows(preset, 1));
        assert!(!grows(preset, 2));
        assert!(!grows(presets::default_preset(), 0));
    }

    #[test]
    fn test_mini_labels_number_shown_items() {
        assert_eq!(mini_labels(presets::find("perfect-center").unwrap()), ["1"]);
        assert_eq!(mini_labels(presets::default_preset()), ["1", "2", "3"]);
        // card-grid has 8 items, the preview caps at 4
        assert_eq!(mini_labels(presets::find("card-grid").unwrap()), ["1", "2", "3", "4"]);
    }

    fn run_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        selected: &LayoutPreset,
    ) -> Option<&'static LayoutPreset> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 2400.0))),
            events,
            ..Default::default()
        };
        let mut chosen = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                chosen = super::ui(ui, selected);
            });
        });
        chosen
    }

    #[test]
    fn test_clicking_active_card_reselects_it() {
        let ctx = egui::Context::default();
        let active = presets::default_preset();

        assert_eq!(run_frame(&ctx, Vec::new(), active), None);
        let rect = ctx.read_response(card_id(active)).unwrap().rect;
        let pos = rect.center();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };

        run_frame(&ctx, vec![egui::Event::PointerMoved(pos), button(true)], active);
        let chosen = run_frame(&ctx, vec![button(false)], active);
        assert_eq!(chosen.map(|preset| preset.id), Some(active.id));
    }
}
