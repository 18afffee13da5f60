//! Export dialog
//!
//! Generated text is cached per tab and regenerated after any editor event
//! while the dialog is open.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{debug, info};

use crate::codegen::Dialect;
use crate::editor::{Editor, SubscriptionId};
use crate::gui::clipboard::{ClipboardSink, CopyFeedback};
use crate::gui::constants::*;
use crate::layout::PropertyKey;

pub struct CodeModal {
    open: bool,
    tab: Dialect,
    feedback: CopyFeedback,
    clipboard: Box<dyn ClipboardSink>,
    outputs: HashMap<Dialect, String>,
    stale: Rc<Cell<bool>>,
    subscription: Option<SubscriptionId>,
}

impl CodeModal {
    pub fn new(feedback_window: Duration, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            open: false,
            tab: Dialect::Html,
            feedback: CopyFeedback::new(feedback_window),
            clipboard,
            outputs: HashMap::new(),
            stale: Rc::new(Cell::new(true)),
            subscription: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, editor: &mut Editor) {
        if self.open {
            return;
        }
        let stale = Rc::clone(&self.stale);
        self.subscription = Some(editor.subscribe(move |_| stale.set(true)));
        self.stale.set(true);
        self.open = true;
        info!(layout = %editor.layout_name(), "Export dialog opened");
    }

    pub fn close(&mut self, editor: &mut Editor) {
        if let Some(id) = self.subscription.take() {
            editor.unsubscribe(id);
        }
        self.open = false;
        debug!("Export dialog closed");
    }

    fn output(&mut self, editor: &Editor, dialect: Dialect) -> &str {
        if self.stale.replace(false) {
            self.outputs.clear();
        }
        self.outputs
            .entry(dialect)
            .or_insert_with(|| editor.snapshot().render(dialect))
    }

    pub fn ui(&mut self, ctx: &egui::Context, editor: &mut Editor) {
        if !self.open {
            return;
        }

        let mut open = true;
        let mut close_clicked = false;
        let now = Instant::now();

        egui::Window::new(format!("Export Code - {}", editor.layout_name()))
            .id(egui::Id::new("export_code_modal"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([CODE_MODAL_WIDTH, CODE_MODAL_HEIGHT])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} items", editor.items().len()))
                            .strong()
                            .color(ACTIVE_RING),
                    );
                });
                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    for dialect in Dialect::ALL {
                        ui.selectable_value(&mut self.tab, dialect, dialect.label());
                    }
                });
                ui.separator();

                let tab = self.tab;
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(tab.heading()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.feedback.is_copied(tab, now) {
                            ui.label(egui::RichText::new("✔ Copied!").color(COPIED_TEXT));
                        } else if ui.button("📋 Copy").clicked() {
                            let text = self.output(editor, tab).to_string();
                            self.feedback.copy(self.clipboard.as_mut(), tab, &text, now);
                        }
                    });
                });
                ui.add_space(ITEM_SPACING);

                egui::ScrollArea::vertical()
                    .max_height(CODE_MODAL_HEIGHT - 160.0)
                    .show(ui, |ui| {
                        if tab == Dialect::Properties {
                            property_grid(ui, editor);
                        } else {
                            let mut text = self.output(editor, tab).to_string();
                            ui.add(
                                egui::TextEdit::multiline(&mut text)
                                    .code_editor()
                                    .interactive(false)
                                    .desired_width(f32::INFINITY),
                            );
                        }
                    });

                ui.add_space(ITEM_SPACING);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.close(editor);
        }

        if let Some(remaining) = self.feedback.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn property_grid(ui: &mut egui::Ui, editor: &Editor) {
    let props = editor.properties();
    egui::Grid::new("export_properties")
        .num_columns(2)
        .striped(true)
        .spacing([SECTION_SPACING, ITEM_SPACING])
        .show(ui, |ui| {
            for key in PropertyKey::ALL {
                ui.label(egui::RichText::new(key.key()).monospace().strong());
                ui.label(egui::RichText::new(props.get(key).to_string()).monospace());
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{presets, ItemLimits, JustifyContent, PropertyValue};

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn modal() -> CodeModal {
        CodeModal::new(Duration::from_millis(2000), Box::new(NullClipboard))
    }

    #[test]
    fn test_output_follows_editor_while_open() {
        let mut editor = Editor::new(presets::default_preset(), ItemLimits::default());
        let mut modal = modal();
        modal.open(&mut editor);
        assert!(modal.is_open());

        let before = modal.output(&editor, Dialect::Css).to_string();
        editor.set_property(PropertyValue::JustifyContent(JustifyContent::Center));
        let after = modal.output(&editor, Dialect::Css).to_string();
        assert_ne!(before, after);
        assert!(after.contains("flex-wrap: nowrap;\n  justify-content: center;"));
    }

    #[test]
    fn test_close_unsubscribes() {
        let mut editor = Editor::new(presets::default_preset(), ItemLimits::default());
        let mut modal = modal();
        modal.open(&mut editor);
        modal.output(&editor, Dialect::Html);
        modal.close(&mut editor);
        assert!(!modal.is_open());

        editor.add_item();
        assert!(!modal.stale.get());
    }
}
