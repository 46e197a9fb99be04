// SPDX-License-Identifier: GPL-3.0-only

//! Haptic output boundary

use tracing::info;

use super::tier::FeedbackTier;

/// Boundary to whatever produces physical pulses
///
/// The pipeline only supplies the tier decision; mapping a tier to an
/// actual motor waveform lives behind this trait. Implementations are
/// called for actionable tiers that already cleared the cooldown gate.
pub trait HapticSink {
    /// Emit one pulse for `tier`
    fn pulse(&mut self, tier: FeedbackTier);
}

/// Haptic sink that logs pulses instead of driving hardware
///
/// Used by the CLI replay mode and anywhere no actuator is attached.
#[derive(Debug, Default)]
pub struct LoggingHaptics;

impl HapticSink for LoggingHaptics {
    fn pulse(&mut self, tier: FeedbackTier) {
        info!(tier = %tier, intensity = tier.pulse_intensity(), "Haptic pulse");
    }
}

impl<H: HapticSink + ?Sized> HapticSink for Box<H> {
    fn pulse(&mut self, tier: FeedbackTier) {
        (**self).pulse(tier);
    }
}
