//! Editor panels
//!
//! Each panel reads editor state and reports what the user asked for; only
//! the app applies changes to the editor.

pub mod code_modal;
pub mod control_panel;
pub mod item_controls;
pub mod layout_gallery;
pub mod playground;

pub use code_modal::CodeModal;
pub use item_controls::ItemAction;
