//! GUI-specific constants for layout, colors and sizes

use egui;

use crate::constants::window;

/// Editor window dimensions
pub const WINDOW_MIN_WIDTH: f32 = window::MIN_WIDTH as f32;
pub const WINDOW_MIN_HEIGHT: f32 = window::MIN_HEIGHT as f32;

/// Side panels (gallery, controls, items)
pub const PANEL_WIDTH: f32 = 320.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const PADDING: f32 = 6.0;

/// Playground
pub const CONTAINER_MIN_HEIGHT: f32 = 400.0;
pub const CONTAINER_PADDING: i8 = 24;
pub const ITEM_PADDING: i8 = 16;
pub const ITEM_MIN_SIZE: f32 = 80.0;
/// Extra main-axis size given to items with a `flex-grow` override
pub const ITEM_GROW_SIZE: f32 = 200.0;
pub const ITEM_LABEL_SIZE: f32 = 20.0;
pub const CORNER_RADIUS: u8 = 8;

/// Gallery mini preview
pub const MINI_ITEM_SIZE: f32 = 16.0;
pub const MINI_ITEM_COLUMN_HEIGHT: f32 = 12.0;
pub const MINI_ITEM_GROW_SIZE: f32 = 48.0;
pub const MINI_PREVIEW_MIN_HEIGHT: f32 = 24.0;
pub const MINI_ITEM_LABEL_SIZE: f32 = 9.0;

/// Current-items grid in the item controls
pub const ITEM_GRID_COLUMNS: usize = 4;
pub const ITEM_CHIP_MIN_HEIGHT: f32 = 32.0;

/// Export dialog
pub const CODE_MODAL_WIDTH: f32 = 860.0;
pub const CODE_MODAL_HEIGHT: f32 = 600.0;

/// Colors
pub const PLAYGROUND_BG: egui::Color32 = egui::Color32::from_rgb(49, 46, 129);
pub const CONTAINER_BG: egui::Color32 = egui::Color32::from_rgb(67, 56, 202);
pub const CONTAINER_BORDER: egui::Color32 = egui::Color32::from_rgba_premultiplied(51, 51, 51, 51);
pub const ITEM_TEXT: egui::Color32 = egui::Color32::WHITE;
pub const ACTIVE_FILL: egui::Color32 = egui::Color32::from_rgb(224, 231, 255);
pub const ACTIVE_RING: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
pub const MINI_ITEM_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 36, 115, 51);
pub const COPIED_TEXT: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
