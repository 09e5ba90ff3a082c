//! Per-display count-up engine.
//!
//! LIFECYCLE
//! =========
//! `new` -> `mount` (arms the trigger) -> `on_visibility` (starts once) ->
//! `tick` per animation frame until [`Tick::Finished`] -> `unmount`.
//!
//! The engine never schedules anything itself. `on_visibility` returning
//! `true` and `tick` returning [`Tick::Continue`] are the host's cue to request
//! another frame; `unmount` returning `true` means a frame may still be queued
//! and the host should cancel it.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use crate::consts::START_VALUE;
use crate::easing::{ease_out_cubic, interpolate, progress};
use crate::request::CountUpRequest;
use crate::trigger::{Trigger, TriggerState};

/// Outcome of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Tick {
    /// Value advanced; request another frame.
    Continue,
    /// Value snapped to the target; stop requesting frames.
    Finished,
    /// Nothing running (not started, already finished, or unmounted).
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Waiting,
    Running { started_at_ms: f64 },
    Finished,
    Unmounted,
}

/// Value of the animation `elapsed_ms` after start.
///
/// Returns exactly `target` once `elapsed_ms >= duration_ms`.
#[must_use]
pub fn value_at(target: f64, duration_ms: f64, elapsed_ms: f64) -> f64 {
    let p = progress(elapsed_ms, duration_ms);
    if p >= 1.0 {
        return target;
    }
    interpolate(START_VALUE, target, ease_out_cubic(p))
}

#[derive(Clone, Debug)]
pub struct CountUp {
    request: CountUpRequest,
    trigger: Trigger,
    phase: Phase,
    value: f64,
}

impl CountUp {
    #[must_use]
    pub fn new(request: CountUpRequest) -> Self {
        Self { request, trigger: Trigger::new(), phase: Phase::Waiting, value: START_VALUE }
    }

    #[must_use]
    pub fn request(&self) -> &CountUpRequest {
        &self.request
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.phase == Phase::Unmounted
    }

    /// Arm the visibility trigger. Call once the display region exists.
    pub fn mount(&mut self) {
        if self.phase != Phase::Unmounted {
            self.trigger.arm();
        }
    }

    /// Report how much of the display region is visible. Returns `true` when
    /// this report starts the animation.
    pub fn on_visibility(&mut self, visible_ratio: f64, now_ms: f64) -> bool {
        if self.phase != Phase::Waiting || !self.trigger.observe(visible_ratio) {
            return false;
        }
        self.phase = Phase::Running { started_at_ms: now_ms };
        true
    }

    /// Advance to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let Phase::Running { started_at_ms } = self.phase else {
            return Tick::Idle;
        };
        let elapsed_ms = now_ms - started_at_ms;
        if progress(elapsed_ms, self.request.duration_ms) >= 1.0 {
            self.value = self.request.target;
            self.phase = Phase::Finished;
            return Tick::Finished;
        }
        self.value = value_at(self.request.target, self.request.duration_ms, elapsed_ms);
        Tick::Continue
    }

    /// Jump straight to the target, skipping the animation. Used when the
    /// host cannot observe visibility at all.
    pub fn complete(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.trigger.disarm();
        self.value = self.request.target;
        self.phase = Phase::Finished;
    }

    /// Formatted current value, including prefix and suffix.
    #[must_use]
    pub fn display(&self) -> String {
        self.request.format(self.value)
    }

    /// Tear down. Returns `true` if an animation was still in flight.
    pub fn unmount(&mut self) -> bool {
        let was_running = self.is_running();
        self.trigger.disarm();
        self.phase = Phase::Unmounted;
        was_running
    }
}
