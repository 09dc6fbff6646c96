//! State behind one tab's panel: the countdown plus the tab's inputs.
//!
//! Preset tabs remember which preset button is active; the General tab keeps
//! the raw text of its minutes/seconds fields, which are the source of truth
//! for its duration.

use crate::hotkeys::Hotkey;
use crate::presets::{PresetOption, Tab};
use crate::scheduler::FrameScheduler;
use crate::timer::{CountdownTimer, TimerDisplay};
use crate::utils::{manual_total_seconds, split_minutes_seconds};
use log::debug;

pub struct PanelState<S: FrameScheduler> {
    tab: Tab,
    timer: CountdownTimer<S>,
    selected_preset: Option<usize>,
    minutes: String,
    seconds: String,
}

impl<S: FrameScheduler> PanelState<S> {
    pub fn new(tab: Tab, scheduler: S, default_secs: f64) -> Self {
        let (minutes, seconds) = split_minutes_seconds(default_secs);
        // the General timer starts from what its fields show
        let total = if tab.has_manual_input() {
            manual_total_seconds(&minutes, &seconds)
        } else {
            default_secs
        };
        Self {
            tab,
            timer: CountdownTimer::new(scheduler, TimerDisplay::default(), total),
            selected_preset: None,
            minutes,
            seconds,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn timer(&self) -> &CountdownTimer<S> {
        &self.timer
    }

    pub fn display(&self) -> &TimerDisplay {
        self.timer.view()
    }

    pub fn selected_preset(&self) -> Option<usize> {
        self.selected_preset
    }

    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    pub fn toggle(&mut self) {
        self.timer.toggle();
    }

    pub fn tick(&mut self, timestamp_ms: f64) {
        self.timer.tick(timestamp_ms);
    }

    /// Reset the countdown. On the General tab the fields are re-read.
    pub fn reset(&mut self) {
        if self.tab.has_manual_input() {
            self.sync_manual();
        } else {
            self.timer.reset();
        }
    }

    /// Load preset `idx` and mark it as the active button. Returns `false`
    /// when the index is out of range.
    pub fn select_preset(&mut self, presets: &[PresetOption], idx: usize) -> bool {
        let Some(preset) = presets.get(idx) else {
            debug!("No preset #{} on the {} tab", idx, self.tab.key());
            return false;
        };
        self.timer.reconfigure(preset.seconds);
        self.selected_preset = Some(idx);
        true
    }

    pub fn set_minutes(&mut self, text: String) {
        self.minutes = text;
        self.sync_manual();
    }

    pub fn set_seconds(&mut self, text: String) {
        self.seconds = text;
        self.sync_manual();
    }

    pub fn apply_hotkey(&mut self, hotkey: Hotkey) {
        match hotkey {
            Hotkey::ToggleRun => self.toggle(),
            Hotkey::Reset => self.reset(),
        }
    }

    fn sync_manual(&mut self) {
        self.timer
            .reconfigure(manual_total_seconds(&self.minutes, &self.seconds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::timer::TimerPhase;
    use pretty_assertions::assert_eq;

    fn presets() -> Vec<PresetOption> {
        vec![
            PresetOption {
                label: "Tea".to_string(),
                seconds: 180.0,
            },
            PresetOption {
                label: "Pasta".to_string(),
                seconds: 540.0,
            },
        ]
    }

    fn run_for(panel: &mut PanelState<ManualScheduler>, clock: &ManualScheduler, ms: f64) {
        panel.toggle();
        if let Some(ts) = clock.take_frame() {
            panel.tick(ts);
        }
        clock.advance_ms(ms);
        if let Some(ts) = clock.take_frame() {
            panel.tick(ts);
        }
    }

    #[test]
    fn test_general_reset_rereads_fields() {
        let clock = ManualScheduler::new();
        let mut panel = PanelState::new(Tab::General, clock.clone(), 30.0);
        assert_eq!((panel.minutes(), panel.seconds()), ("0", "30"));

        panel.set_minutes("2".to_string());
        panel.set_seconds("15".to_string());
        assert_eq!(panel.timer().total_secs(), 135.0);

        run_for(&mut panel, &clock, 5_000.0);
        assert!(panel.timer().is_running());

        panel.reset();
        assert!(!panel.timer().is_running());
        assert_eq!(panel.timer().total_secs(), 135.0);
        assert_eq!(panel.timer().remaining_secs(), 135.0);
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn test_general_input_reconfigures_while_running() {
        let clock = ManualScheduler::new();
        let mut panel = PanelState::new(Tab::General, clock.clone(), 30.0);
        run_for(&mut panel, &clock, 1_000.0);

        panel.set_seconds("".to_string());
        assert!(!panel.timer().is_running());
        assert_eq!(panel.timer().total_secs(), 0.0);
        assert_eq!(panel.display().ring_fraction, 0.0);
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn test_general_fractional_default_matches_fields() {
        let clock = ManualScheduler::new();
        let mut panel = PanelState::new(Tab::General, clock, 30.5);
        let initial = panel.timer().total_secs();
        assert_eq!(initial, 30.0);
        panel.reset();
        assert_eq!(panel.timer().total_secs(), initial);
    }

    #[test]
    fn test_select_preset_stops_run_and_marks_one() {
        let clock = ManualScheduler::new();
        let presets = presets();
        let mut panel = PanelState::new(Tab::Cook, clock.clone(), 30.0);
        assert!(panel.select_preset(&presets, 0));
        run_for(&mut panel, &clock, 2_000.0);
        assert!(panel.timer().is_running());

        assert!(panel.select_preset(&presets, 1));
        assert!(!panel.timer().is_running());
        assert_eq!(clock.outstanding(), 0);
        assert_eq!(panel.selected_preset(), Some(1));
        assert_eq!(panel.timer().total_secs(), 540.0);
        assert_eq!(panel.timer().phase(), TimerPhase::Idle);

        assert!(!panel.select_preset(&presets, 7));
        assert_eq!(panel.selected_preset(), Some(1));
    }

    #[test]
    fn test_preset_reset_keeps_preset_total() {
        let clock = ManualScheduler::new();
        let presets = presets();
        let mut panel = PanelState::new(Tab::Study, clock.clone(), 30.0);
        panel.select_preset(&presets, 0);
        run_for(&mut panel, &clock, 4_000.0);
        assert_eq!(panel.timer().remaining_secs(), 176.0);

        panel.apply_hotkey(Hotkey::Reset);
        assert_eq!(panel.timer().total_secs(), 180.0);
        assert_eq!(panel.timer().remaining_secs(), 180.0);
        assert_eq!(panel.selected_preset(), Some(0));
        assert_eq!(panel.display().text, "03:00.00");
    }

    #[test]
    fn test_toggle_hotkey() {
        let clock = ManualScheduler::new();
        let mut panel = PanelState::new(Tab::Sport, clock.clone(), 30.0);
        panel.apply_hotkey(Hotkey::ToggleRun);
        assert!(panel.timer().is_running());
        panel.apply_hotkey(Hotkey::ToggleRun);
        assert!(!panel.timer().is_running());
        assert_eq!(clock.outstanding(), 0);
    }
}
