//! Application-level configuration constants.

// Timer defaults
pub const DEFAULT_DURATION_SECS: f64 = 30.0;
pub const PRESETS_JSON: &str = include_str!("presets.json");

// Progress ring geometry (SVG user units)
pub const RING_RADIUS: f64 = 98.0;
pub const RING_VIEWBOX: u32 = 220;
pub const RING_STROKE_WIDTH: u32 = 12;

// Persistence
pub const THEME_STORAGE_KEY: &str = "timerhub_theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

// CSS class names
pub const FINISHED_CLASS: &str = "finished";
pub const ACTIVE_PRESET_CLASS: &str = "is-active";

// Control labels
pub const LABEL_START: &str = "Start";
pub const LABEL_PAUSE: &str = "Pause";
pub const LABEL_RESET: &str = "Reset";
