// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PULSE_COOLDOWN_MS, DEPTH_RANGE_MAX_M, DEPTH_RANGE_MIN_M};

/// Settings for the false-color renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSettings {
    /// Near end of the normalized depth range (meters)
    pub min_m: f32,
    /// Far end of the normalized depth range (meters)
    pub max_m: f32,
    /// Quantize the gradient into discrete bands
    pub quantize: bool,
    /// Render grayscale (bright=near) instead of the color gradient
    pub grayscale: bool,
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            min_m: DEPTH_RANGE_MIN_M,
            max_m: DEPTH_RANGE_MAX_M,
            quantize: false,
            grayscale: false,
        }
    }
}

/// Runtime feedback configuration
///
/// Replaces process-wide toggles with explicit state: the pipeline receives
/// a `Config` by value and persistence goes through an injected
/// [`ConfigStore`](crate::storage::ConfigStore), so nothing here is global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Whether classified tiers may trigger haptic pulses
    pub haptics_enabled: bool,
    /// Whether an object-classification stage is requested
    ///
    /// Carried as configuration only; attaching an actual classifier is up
    /// to the embedding application.
    pub object_detection_enabled: bool,
    /// Minimum interval between physical pulses (milliseconds)
    pub pulse_cooldown_ms: u64,
    /// False-color renderer settings
    pub visualization: VisualizationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            haptics_enabled: true, // Haptic feedback on by default
            object_detection_enabled: false, // Opt-in, needs a classifier attached
            pulse_cooldown_ms: DEFAULT_PULSE_COOLDOWN_MS,
            visualization: VisualizationSettings::default(),
        }
    }
}

impl Config {
    /// Pulse cooldown as a `Duration`
    pub fn pulse_cooldown(&self) -> Duration {
        Duration::from_millis(self.pulse_cooldown_ms)
    }
}
