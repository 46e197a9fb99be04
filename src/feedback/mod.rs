// SPDX-License-Identifier: GPL-3.0-only

//! Feedback derivation: tier classification, haptic dispatch, and pulse
//! throttling

mod cooldown;
mod haptics;
mod tier;

pub use cooldown::CooldownGate;
pub use haptics::{HapticSink, LoggingHaptics};
pub use tier::{FeedbackTier, classify_tier};
