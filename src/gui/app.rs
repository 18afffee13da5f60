//! Editor window: panels around the live playground plus the export dialog

use std::time::Duration;

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::info;

use super::clipboard::SystemClipboard;
use super::components::{
    control_panel, item_controls, layout_gallery, playground, CodeModal, ItemAction,
};
use super::constants::*;
use crate::config::AppConfig;
use crate::editor::Editor;
use crate::layout::LayoutPreset;

struct FlexboxLabsApp {
    editor: Editor,
    code_modal: CodeModal,
}

impl FlexboxLabsApp {
    fn new(_cc: &CreationContext<'_>, config: &AppConfig, preset: &'static LayoutPreset) -> Self {
        info!(preset = %preset.id, "Initializing flexbox editor");
        Self {
            editor: Editor::new(preset, config.item_limits()),
            code_modal: CodeModal::new(
                Duration::from_millis(config.copy_feedback_ms),
                Box::new(SystemClipboard::default()),
            ),
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Flexbox Labs");
                    ui.label(
                        egui::RichText::new("Learn flexbox by playing with a live container")
                            .small()
                            .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("📋 Get Code").clicked() {
                        self.code_modal.open(&mut self.editor);
                    }
                });
            });
            ui.add_space(PADDING);
        });
    }

    fn footer(ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(PADDING);
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
                ui.add_space(PADDING);
            });
        });
    }
}

impl eframe::App for FlexboxLabsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.header(ctx);
        Self::footer(ctx);

        egui::SidePanel::left("layout_gallery")
            .default_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(preset) = layout_gallery::ui(ui, self.editor.selected_preset()) {
                        self.editor.select_preset(preset);
                    }
                });
            });

        egui::SidePanel::left("flexbox_controls")
            .default_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(value) = control_panel::ui(ui, self.editor.properties()) {
                        self.editor.set_property(value);
                    }
                });
            });

        egui::SidePanel::right("item_controls")
            .default_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                match item_controls::ui(ui, &self.editor) {
                    ItemAction::Add => {
                        self.editor.add_item();
                    }
                    ItemAction::Remove => {
                        self.editor.remove_item();
                    }
                    ItemAction::ShowCode => self.code_modal.open(&mut self.editor),
                    ItemAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                playground::ui(ui, self.editor.properties(), self.editor.items());
            });
        });

        self.code_modal.ui(ctx, &mut self.editor);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.code_modal.is_open() {
            self.code_modal.close(&mut self.editor);
        }
        info!("Editor exiting");
    }
}

pub fn run_gui(config: &AppConfig, preset: &'static LayoutPreset) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([f32::from(config.window_width), f32::from(config.window_height)])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Flexbox Labs"),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        "Flexbox Labs",
        options,
        Box::new(move |cc| Ok(Box::new(FlexboxLabsApp::new(cc, &config, preset)))),
    )
    .map_err(|err| anyhow!("Failed to launch editor window: {err}"))
}
