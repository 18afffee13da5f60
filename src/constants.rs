//! Shared limits and defaults for Flexbox Labs

/// Layout item count bounds
pub mod items {
    /// Fewest items the item controls allow
    pub const MIN_ITEMS: usize = 1;

    /// Most items the item controls allow
    pub const MAX_ITEMS: usize = 12;

    /// Hard ceiling accepted from the settings file
    pub const MAX_ITEMS_LIMIT: usize = 64;

    /// Prefix for generated item identifiers
    pub const ID_PREFIX: &str = "item-";
}

/// Gap control and utility spacing scale
pub mod gap {
    /// Smallest gap offered by the slider (pixels)
    pub const MIN_PX: u32 = 0;

    /// Largest gap offered by the slider (pixels)
    pub const MAX_PX: u32 = 50;

    /// Pixels per step of the utility framework's spacing scale
    pub const SPACING_SCALE_PX: u32 = 4;
}

/// Export dialog clipboard acknowledgement
pub mod clipboard {
    /// How long "Copied!" stays visible after a successful copy
    pub const FEEDBACK_MS: u64 = 2000;
}

/// Gallery mini preview
pub mod preview {
    /// Items drawn in a preset's mini preview
    pub const MINI_ITEM_COUNT: usize = 4;

    /// Spacing cap for the mini preview (pixels)
    pub const MINI_GAP_MAX: u32 = 4;
}

/// Editor window bounds (logical pixels)
pub mod window {
    /// Narrowest window the panels fit in
    pub const MIN_WIDTH: u16 = 1100;

    /// Shortest window the panels fit in
    pub const MIN_HEIGHT: u16 = 700;
}

/// Settings file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "flexbox-labs";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}

/// Logging defaults
pub mod logging {
    /// Environment variable consulted for the log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    /// Level used when nothing else is configured
    pub const DEFAULT_LEVEL: &str = "info";
}
