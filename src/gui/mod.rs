//! Interactive editor implemented with egui/eframe

mod app;
mod clipboard;
mod components;
mod constants;

pub use app::run_gui;
