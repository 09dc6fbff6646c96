//! Frame scheduling seam between a countdown and its host.
//!
//! The countdown never calls browser APIs directly. It asks a
//! [`FrameScheduler`] for "one callback before the next repaint" and keeps the
//! returned handle so it can cancel it. The host routes the frame timestamp
//! back into [`CountdownTimer::tick`](crate::CountdownTimer::tick).

use crate::TimerHubError;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Registers one-shot frame callbacks and cancels them.
pub trait FrameScheduler {
    /// Token for one outstanding registration.
    type Handle;

    /// Ask for a single frame. The timestamp (milliseconds, monotonic) is
    /// delivered to the host's frame callback.
    fn request_frame(&mut self) -> Result<Self::Handle, TimerHubError>;

    /// Withdraw a registration that has not fired yet.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

// ──────────────────────────────────────────────────────────────────────────────
// Browser

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    on_frame: Rc<dyn Fn(f64)>,
}

impl RafScheduler {
    pub fn new(on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            on_frame: Rc::new(on_frame),
        }
    }
}

/// A pending animation frame. Owns the JS closure so it stays alive until the
/// frame fires or is cancelled.
pub struct AnimationFrame {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler for RafScheduler {
    type Handle = AnimationFrame;

    fn request_frame(&mut self) -> Result<AnimationFrame, TimerHubError> {
        let window = web_sys::window().ok_or(TimerHubError::NoWindow)?;
        let on_frame = Rc::clone(&self.on_frame);
        let closure: Closure<dyn FnMut(f64)> = Closure::once(move |ts: f64| on_frame(ts));
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| TimerHubError::FrameRequest(format!("{:?}", e)))?;
        Ok(AnimationFrame {
            id,
            _closure: closure,
        })
    }

    fn cancel_frame(&mut self, handle: AnimationFrame) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.cancel_animation_frame(handle.id) {
            warn!("cancelAnimationFrame({}) failed: {:?}", handle.id, e);
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Manual clock

/// Identifier of a registration made with [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(u64);

#[derive(Debug, Default)]
struct ManualFrames {
    now_ms: f64,
    next_id: u64,
    outstanding: Vec<FrameId>,
    requested: usize,
    cancelled: usize,
    refuse: bool,
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Clones share the same clock and registration list, so a host (or test) can
/// keep one clone while the timer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    frames: Rc<RefCell<ManualFrames>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler whose clock starts at `now_ms` instead of zero.
    pub fn starting_at(now_ms: f64) -> Self {
        let scheduler = Self::default();
        scheduler.frames.borrow_mut().now_ms = now_ms;
        scheduler
    }

    pub fn now_ms(&self) -> f64 {
        self.frames.borrow().now_ms
    }

    pub fn advance_ms(&self, ms: f64) {
        self.frames.borrow_mut().now_ms += ms;
    }

    /// Fire the oldest outstanding registration, returning the timestamp the
    /// host should pass to `tick`. `None` when nothing is registered.
    pub fn take_frame(&self) -> Option<f64> {
        let mut frames = self.frames.borrow_mut();
        if frames.outstanding.is_empty() {
            return None;
        }
        frames.outstanding.remove(0);
        Some(frames.now_ms)
    }

    /// Registrations that have neither fired nor been cancelled.
    pub fn outstanding(&self) -> usize {
        self.frames.borrow().outstanding.len()
    }

    pub fn requested(&self) -> usize {
        self.frames.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.frames.borrow().cancelled
    }

    /// Make subsequent `request_frame` calls fail.
    pub fn set_refuse(&self, refuse: bool) {
        self.frames.borrow_mut().refuse = refuse;
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameId;

    fn request_frame(&mut self) -> Result<FrameId, TimerHubError> {
        let mut frames = self.frames.borrow_mut();
        if frames.refuse {
            return Err(TimerHubError::FrameRequest("refused by scheduler".to_string()));
        }
        let id = FrameId(frames.next_id);
        frames.next_id += 1;
        frames.requested += 1;
        frames.outstanding.push(id);
        Ok(id)
    }

    fn cancel_frame(&mut self, handle: FrameId) {
        let mut frames = self.frames.borrow_mut();
        if let Some(pos) = frames.outstanding.iter().position(|&id| id == handle) {
            frames.outstanding.remove(pos);
            frames.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_request_and_fire() {
        let mut sched = ManualScheduler::starting_at(1_000.0);
        assert_eq!(sched.take_frame(), None);

        sched.request_frame().unwrap();
        assert_eq!(sched.outstanding(), 1);

        sched.advance_ms(16.0);
        assert_eq!(sched.take_frame(), Some(1_016.0));
        assert_eq!(sched.outstanding(), 0);
        assert_eq!(sched.requested(), 1);
    }

    #[test]
    fn test_manual_cancel() {
        let mut sched = ManualScheduler::new();
        let id = sched.request_frame().unwrap();
        sched.cancel_frame(id);
        assert_eq!(sched.outstanding(), 0);
        assert_eq!(sched.cancelled(), 1);
        assert_eq!(sched.take_frame(), None);

        // cancelling twice has no further effect
        sched.cancel_frame(id);
        assert_eq!(sched.cancelled(), 1);
    }

    #[test]
    fn test_manual_clones_share_clock() {
        let observer = ManualScheduler::new();
        let mut owned = observer.clone();
        owned.request_frame().unwrap();
        observer.advance_ms(250.0);
        assert_eq!(owned.now_ms(), 250.0);
        assert_eq!(observer.outstanding(), 1);
    }

    #[test]
    fn test_manual_refuse() {
        let mut sched = ManualScheduler::new();
        sched.set_refuse(true);
        assert!(matches!(
            sched.request_frame(),
            Err(TimerHubError::FrameRequest(_))
        ));
        assert_eq!(sched.outstanding(), 0);
    }
}
