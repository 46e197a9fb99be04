// SPDX-License-Identifier: GPL-3.0-only

//! Feedback tier classification
//!
//! Maps an averaged center distance onto a discrete feedback intensity.
//! Every frame classifies independently; there is no tier history or
//! hysteresis.

use serde::{Deserialize, Serialize};

use crate::constants::{TIER_HEAVY_MIN_M, TIER_LIGHT_MAX_M, TIER_LIGHT_MIN_M, TIER_MEDIUM_MIN_M};

/// Discrete feedback intensity derived from obstacle distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FeedbackTier {
    /// No actionable obstacle (missing reading, or beyond the feedback range)
    #[default]
    None,
    /// Obstacle between 0.6 m and 1.0 m
    Light,
    /// Obstacle between 0.3 m and 0.6 m
    Medium,
    /// Obstacle closer than 0.3 m
    Heavy,
}

impl FeedbackTier {
    /// All tier variants, ordered from weakest to strongest feedback
    pub const ALL: [FeedbackTier; 4] = [
        FeedbackTier::None,
        FeedbackTier::Light,
        FeedbackTier::Medium,
        FeedbackTier::Heavy,
    ];

    /// Get display name for the tier
    pub fn display_name(&self) -> &'static str {
        match self {
            FeedbackTier::None => "None",
            FeedbackTier::Light => "Light",
            FeedbackTier::Medium => "Medium",
            FeedbackTier::Heavy => "Heavy",
        }
    }

    /// Relative strength of the haptic pulse for this tier (0.0 = no pulse)
    ///
    /// Consumed by [`HapticSink`](super::HapticSink) implementations that
    /// drive variable-intensity hardware.
    pub fn pulse_intensity(&self) -> f32 {
        match self {
            FeedbackTier::None => 0.0,
            FeedbackTier::Light => 0.4,
            FeedbackTier::Medium => 0.7,
            FeedbackTier::Heavy => 1.0,
        }
    }

    /// Whether this tier should produce any feedback at all
    pub fn is_actionable(&self) -> bool {
        !matches!(self, FeedbackTier::None)
    }
}

impl std::fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify an averaged center distance into a feedback tier
///
/// Bands are checked top-down and the first match wins:
///
/// - `[0.6, 1.0]` meters → Light (both ends inclusive; 0.6 belongs to
///   Light, not Medium)
/// - `[0.3, 0.6)` meters → Medium
/// - `[0.0, 0.3)` meters → Heavy
/// - anything else (no reading, negative, NaN, beyond 1.0) → None
///
/// Distances past 1.0 m are deliberately silent: a distant obstacle is not
/// actionable and constant feedback for it would only create false urgency.
/// Total and deterministic; every input maps to exactly one tier.
pub fn classify_tier(distance_m: Option<f32>) -> FeedbackTier {
    let Some(d) = distance_m else {
        return FeedbackTier::None;
    };

    if (TIER_LIGHT_MIN_M..=TIER_LIGHT_MAX_M).contains(&d) {
        FeedbackTier::Light
    } else if (TIER_MEDIUM_MIN_M..TIER_LIGHT_MIN_M).contains(&d) {
        FeedbackTier::Medium
    } else if (TIER_HEAVY_MIN_M..TIER_MEDIUM_MIN_M).contains(&d) {
        FeedbackTier::Heavy
    } else {
        FeedbackTier::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_increases_with_tier() {
        let mut prev = -1.0f32;
        for tier in FeedbackTier::ALL {
            let intensity = tier.pulse_intensity();
            assert!(
                intensity > prev,
                "Tiers should be ordered from weakest to strongest"
            );
            prev = intensity;
        }
    }

    #[test]
    fn test_only_none_is_silent() {
        for tier in FeedbackTier::ALL {
            assert_eq!(tier.is_actionable(), tier != FeedbackTier::None);
            assert_eq!(tier.pulse_intensity() > 0.0, tier.is_actionable());
        }
    }

    #[test]
    fn test_display_names() {
        for tier in FeedbackTier::ALL {
            assert!(!tier.display_name().is_empty());
        }
    }

    #[test]
    fn test_nan_and_infinite_are_silent() {
        assert_eq!(classify_tier(Some(f32::NAN)), FeedbackTier::None);
        assert_eq!(classify_tier(Some(f32::INFINITY)), FeedbackTier::None);
        assert_eq!(classify_tier(Some(f32::NEG_INFINITY)), FeedbackTier::None);
    }
}
