//! Core of the TimerHub countdown widget.
//!
//! Everything in this crate except the Yew shell in `main.rs` is plain Rust:
//! the countdown state machine, time formatting, ring geometry and the preset
//! table. Browser access goes through the `FrameScheduler` implementation in
//! [`scheduler`] and the theme helpers in [`theme`].

use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod hotkeys;
pub mod panel;
pub mod presets;
pub mod scheduler;
pub mod theme;
pub mod timer;
pub mod utils;

pub use hotkeys::{hotkey_for, Hotkey, HotkeySignal};
pub use panel::PanelState;
pub use presets::{PresetOption, PresetTable, Tab};
pub use scheduler::{FrameScheduler, ManualScheduler, RafScheduler};
pub use theme::Theme;
pub use timer::{ControlLabel, CountdownTimer, TimerDisplay, TimerPhase, TimerView};

use config::RING_RADIUS;

/// Errors raised at the boundary with the host page.
///
/// The countdown core itself never fails; these cover the browser services it
/// leans on and the embedded preset table.
#[derive(Debug)]
pub enum TimerHubError {
    /// No `window` object (not running in a browser main thread).
    NoWindow,
    /// `requestAnimationFrame` rejected the callback.
    FrameRequest(String),
    /// `localStorage` is missing or threw.
    Storage(String),
    /// A DOM call failed.
    Dom(String),
    /// The preset table could not be parsed.
    PresetConfig(String),
    /// A preset entry carries an unusable duration.
    InvalidPreset { label: String, seconds: f64 },
}

impl fmt::Display for TimerHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerHubError::NoWindow => write!(f, "No browser window is available"),
            TimerHubError::FrameRequest(msg) => {
                write!(f, "Animation frame request failed: {}", msg)
            }
            TimerHubError::Storage(msg) => write!(f, "Local storage unavailable: {}", msg),
            TimerHubError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
            TimerHubError::PresetConfig(msg) => write!(f, "Invalid preset table: {}", msg),
            TimerHubError::InvalidPreset { label, seconds } => write!(
                f,
                "Preset '{}' has an invalid duration of {} seconds (must be positive)",
                label, seconds
            ),
        }
    }
}

impl std::error::Error for TimerHubError {}

/// Map any non-finite or negative duration to zero.
#[inline]
pub fn sanitize_seconds(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        0.0
    }
}

/// Format seconds as `MM:SS.CC` (minutes, seconds, centiseconds).
///
/// Negative and NaN input is clamped to zero. Minutes are not wrapped, so
/// durations of 100 minutes or more print three digits.
///
/// # Examples
/// ```
/// use timerhub::format_countdown;
/// assert_eq!(format_countdown(0.0), "00:00.00");
/// assert_eq!(format_countdown(90.5), "01:30.50");
/// ```
pub fn format_countdown(secs: f64) -> String {
    let s = secs.max(0.0);
    let minutes = (s / 60.0).floor() as u64;
    let seconds = (s % 60.0).floor() as u64;
    let centis = ((s % 1.0) * 100.0).floor() as u64;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

/// Length of the progress ring's track.
#[inline]
pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// SVG `stroke-dashoffset` that leaves `fraction` of the ring visible.
pub fn ring_dash_offset(fraction: f64) -> f64 {
    let f = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    ring_circumference() * (1.0 - f)
}

/// JS entry point so a host page can format durations the same way the
/// widget does.
#[wasm_bindgen(js_name = formatCountdown)]
pub fn format_countdown_js(seconds: f64) -> String {
    format_countdown(seconds)
}
