// SPDX-License-Identifier: GPL-3.0-only

//! Pulse throttling
//!
//! Depth frames can arrive much faster than a physical pulse is useful.
//! The gate drops events that land inside the cooldown window; suppressed
//! events are never queued or replayed.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_PULSE_COOLDOWN_MS;

/// Throttle deciding whether a classified tier may fire a physical pulse
#[derive(Debug)]
pub struct CooldownGate {
    min_interval: Duration,
    last_pass: Option<Instant>,
}

impl CooldownGate {
    /// Create a gate with the given minimum interval between pulses
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_pass: None,
        }
    }

    /// Create a gate with the default pulse cooldown
    pub fn with_default_interval() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PULSE_COOLDOWN_MS))
    }

    /// Decide whether an event happening now may fire
    pub fn try_pass(&mut self) -> bool {
        self.try_pass_at(Instant::now())
    }

    /// Decide whether an event at `now` may fire
    ///
    /// Returns `true` and records `now` as the last trigger when the
    /// elapsed time since the previous trigger is at least the minimum
    /// interval (the first event always fires). Taking the instant as a
    /// parameter keeps tests free of real sleeps.
    pub fn try_pass_at(&mut self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_pass = Some(now);
                true
            }
        }
    }

    /// Forget the last trigger so the next event fires unconditionally
    pub fn reset(&mut self) {
        self.last_pass = None;
    }
}
