//! Pointer activation constraint.
//!
//! A press only becomes a drag once it has been held for `delay_ms` without
//! wandering more than `tolerance_px` from where it went down. Moving further
//! before the delay expires aborts the press so the host can treat it as a
//! click or scroll instead.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationConstraint {
    pub delay_ms: u64,
    pub tolerance_px: f64,
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            tolerance_px: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pending,
    Activated,
    Aborted,
}

/// A pointer sample: position in px and a monotonic timestamp in ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub at_ms: u64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, at_ms: u64) -> Self {
        Self { x, y, at_ms }
    }

    fn distance(&self, other: &PointerSample) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    constraint: ActivationConstraint,
    origin: Option<PointerSample>,
    state: Activation,
}

impl PointerTracker {
    pub fn new(constraint: ActivationConstraint) -> Self {
        Self {
            constraint,
            origin: None,
            state: Activation::Pending,
        }
    }

    pub fn state(&self) -> Activation {
        self.state
    }

    /// Pointer went down. A zero delay activates on the spot.
    pub fn press(&mut self, sample: PointerSample) -> Activation {
        self.origin = Some(sample);
        self.state = if self.constraint.delay_ms == 0 {
            Activation::Activated
        } else {
            Activation::Pending
        };
        self.state
    }

    /// Pointer moved (or a timer tick re-reported the last position).
    ///
    /// Activated and aborted presses stay that way until the next `press`.
    pub fn update(&mut self, sample: PointerSample) -> Activation {
        let Some(origin) = self.origin else {
            return self.state;
        };
        if self.state != Activation::Pending {
            return self.state;
        }

        let moved = sample.distance(&origin);
        let held = sample.at_ms.saturating_sub(origin.at_ms);
        if moved > self.constraint.tolerance_px {
            trace!(moved, held, "pointer moved past tolerance before activation");
            self.state = Activation::Aborted;
        } else if held >= self.constraint.delay_ms {
            self.state = Activation::Activated;
        }
        self.state
    }

    /// Feed a recorded press: the first sample goes down, the rest are moves.
    pub fn replay(&mut self, samples: &[PointerSample]) -> Activation {
        let Some((first, rest)) = samples.split_first() else {
            return self.state;
        };
        self.press(*first);
        for sample in rest {
            self.update(*sample);
        }
        self.state
    }

    /// Pointer went up; the tracker is ready for the next press.
    pub fn release(&mut self) {
        self.origin = None;
        self.state = Activation::Pending;
    }
}
