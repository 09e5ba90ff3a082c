//! One-shot visibility latch.
//!
//! ```text
//!   mount          first ratio >= threshold
//! Unarmed ──arm──▶ Armed ──────observe──────▶ Fired
//!    ▲                                          │
//!    └────────────────disarm (unmount)──────────┘
//! ```
//!
//! Observations while `Unarmed` or `Fired` are ignored, so a display that
//! scrolls in and out repeatedly still starts its animation exactly once.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use crate::consts::{VISIBILITY_EPSILON, VISIBILITY_THRESHOLD};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Unarmed,
    Armed,
    Fired,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    state: TriggerState,
    threshold: f64,
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(VISIBILITY_THRESHOLD)
    }

    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { state: TriggerState::Unarmed, threshold }
    }

    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// `Unarmed -> Armed`. No effect in any other state.
    pub fn arm(&mut self) {
        if self.state == TriggerState::Unarmed {
            self.state = TriggerState::Armed;
        }
    }

    /// Feed one visibility report. Returns `true` only on the transition into
    /// `Fired`. Ratios within [`VISIBILITY_EPSILON`] of the threshold count.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.state != TriggerState::Armed || visible_ratio + VISIBILITY_EPSILON < self.threshold {
            return false;
        }
        self.state = TriggerState::Fired;
        true
    }

    /// Return to `Unarmed`; called when the owning display unmounts.
    pub fn disarm(&mut self) {
        self.state = TriggerState::Unarmed;
    }
}
