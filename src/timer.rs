//! Per-tab countdown state machine.
//!
//! A [`CountdownTimer`] counts `remaining_secs` down from `total_secs` using
//! the deltas between animation-frame timestamps. Every state change is pushed
//! to a [`TimerView`]; frame callbacks are requested from an injected
//! [`FrameScheduler`] and at most one registration is outstanding at a time.
//!
//! # States
//! - `Idle`: remaining equals total, not running
//! - `Running`: a frame is registered and remaining > 0
//! - `Paused`: stopped part way through
//! - `Finished`: remaining reached zero; only `reset`/`reconfigure` leave it

use crate::config::{LABEL_PAUSE, LABEL_START};
use crate::scheduler::FrameScheduler;
use crate::{format_countdown, sanitize_seconds};
use log::{debug, info, warn};

/// State of the primary control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLabel {
    Start,
    Pause,
}

impl ControlLabel {
    pub fn text(self) -> &'static str {
        match self {
            ControlLabel::Start => LABEL_START,
            ControlLabel::Pause => LABEL_PAUSE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

impl TimerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Finished => "finished",
        }
    }
}

/// Render sinks a countdown writes to.
pub trait TimerView {
    fn show_time(&mut self, text: &str);
    /// `fraction` is in `[0, 1]`.
    fn show_ring(&mut self, fraction: f64);
    fn show_control(&mut self, label: ControlLabel);
    fn show_finished(&mut self, finished: bool);
}

/// Last values written to each sink. The Yew panel renders straight from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerDisplay {
    pub text: String,
    pub ring_fraction: f64,
    pub control: ControlLabel,
    pub finished: bool,
}

impl Default for TimerDisplay {
    fn default() -> Self {
        Self {
            text: format_countdown(0.0),
            ring_fraction: 1.0,
            control: ControlLabel::Start,
            finished: false,
        }
    }
}

impl TimerView for TimerDisplay {
    fn show_time(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn show_ring(&mut self, fraction: f64) {
        self.ring_fraction = fraction;
    }

    fn show_control(&mut self, label: ControlLabel) {
        self.control = label;
    }

    fn show_finished(&mut self, finished: bool) {
        self.finished = finished;
    }
}

pub struct CountdownTimer<S: FrameScheduler, V: TimerView = TimerDisplay> {
    total_secs: f64,
    remaining_secs: f64,
    running: bool,
    last_tick_ms: Option<f64>,
    pending_frame: Option<S::Handle>,
    scheduler: S,
    view: V,
}

impl<S: FrameScheduler, V: TimerView> CountdownTimer<S, V> {
    /// Create an idle countdown and render its initial state.
    pub fn new(scheduler: S, view: V, total_secs: f64) -> Self {
        let total_secs = sanitize_seconds(total_secs);
        let mut timer = Self {
            total_secs,
            remaining_secs: total_secs,
            running: false,
            last_tick_ms: None,
            pending_frame: None,
            scheduler,
            view,
        };
        timer.view.show_control(ControlLabel::Start);
        timer.render_idle();
        timer
    }

    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_secs <= 0.0 {
            TimerPhase::Finished
        } else if self.remaining_secs >= self.total_secs {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Remaining share of the configured duration; 0 when the duration is 0.
    pub fn ring_fraction(&self) -> f64 {
        if self.total_secs > 0.0 {
            (self.remaining_secs / self.total_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Stop any run and load a new duration.
    pub fn reconfigure(&mut self, total_secs: f64) {
        self.halt();
        self.total_secs = sanitize_seconds(total_secs);
        self.remaining_secs = self.total_secs;
        self.render_idle();
        info!("Countdown set to {}", format_countdown(self.total_secs));
    }

    pub fn start(&mut self) {
        if self.running || self.remaining_secs <= 0.0 {
            return;
        }
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(err) => {
                warn!("Countdown not started: {}", err);
                return;
            }
        }
        self.running = true;
        self.last_tick_ms = None;
        self.view.show_finished(false);
        self.view.show_control(ControlLabel::Pause);
        debug!(
            "Countdown started with {} left",
            format_countdown(self.remaining_secs)
        );
    }

    pub fn pause(&mut self) {
        self.halt();
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.halt();
        self.remaining_secs = self.total_secs;
        self.render_idle();
    }

    /// Advance the countdown to the frame timestamp `timestamp_ms`.
    ///
    /// The first frame after `start` only records the baseline. Frames that
    /// arrive after the run was stopped are ignored.
    pub fn tick(&mut self, timestamp_ms: f64) {
        if !self.running || self.pending_frame.take().is_none() {
            debug!("Ignoring stale frame at {:.1}ms", timestamp_ms);
            return;
        }

        let Some(last) = self.last_tick_ms.replace(timestamp_ms) else {
            self.render_running();
            self.schedule_next();
            return;
        };

        let dt = ((timestamp_ms - last) / 1000.0).max(0.0);
        self.remaining_secs -= dt;
        if self.remaining_secs <= 0.0 {
            self.finish();
            return;
        }

        self.render_running();
        self.schedule_next();
    }

    fn schedule_next(&mut self) {
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(err) => {
                warn!("Countdown stopped, next frame unavailable: {}", err);
                self.halt();
            }
        }
    }

    /// Shared exit path: clears the running flag and cancels the pending frame.
    fn halt(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.view.show_control(ControlLabel::Start);
    }

    fn finish(&mut self) {
        self.remaining_secs = 0.0;
        self.halt();
        self.view.show_time(&format_countdown(0.0));
        self.view.show_ring(0.0);
        self.view.show_finished(true);
        info!("Countdown of {} finished", format_countdown(self.total_secs));
    }

    fn render_idle(&mut self) {
        self.view.show_time(&format_countdown(self.remaining_secs));
        self.view
            .show_ring(if self.total_secs > 0.0 { 1.0 } else { 0.0 });
        self.view.show_finished(false);
    }

    fn render_running(&mut self) {
        self.view.show_time(&format_countdown(self.remaining_secs));
        self.view.show_ring(self.ring_fraction());
    }
}

impl<S: FrameScheduler, V: TimerView> Drop for CountdownTimer<S, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
