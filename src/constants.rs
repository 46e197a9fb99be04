// SPDX-License-Identifier: GPL-3.0-only

//! Depth sampling and feedback constants - Single source of truth
//!
//! Tier boundaries, sampling region geometry, and visualization defaults
//! live here. These values are used across the feedback pipeline.

/// Fraction of each frame dimension covered by the center sampling region
///
/// The sampler averages the middle 20%-by-20% sub-rectangle of the frame,
/// treating it as the representative obstacle area straight ahead.
pub const CENTER_REGION_FRACTION: f32 = 0.2;

/// Tier boundaries (meters)
///
/// Smaller distance means a closer obstacle and stronger feedback. Distances
/// beyond `TIER_LIGHT_MAX_M` are not actionable and produce no feedback.
/// The 0.6 m boundary belongs to Light, not Medium (the Light band is
/// checked first with an inclusive lower bound).
pub const TIER_LIGHT_MAX_M: f32 = 1.0;
pub const TIER_LIGHT_MIN_M: f32 = 0.6;
pub const TIER_MEDIUM_MIN_M: f32 = 0.3;
pub const TIER_HEAVY_MIN_M: f32 = 0.0;

/// Minimum interval between physical haptic pulses (milliseconds)
pub const DEFAULT_PULSE_COOLDOWN_MS: u64 = 500;

/// Default visualization range (meters)
///
/// Depth values are normalized over this range before mapping onto the
/// color gradient; readings past the far end clamp to the last color.
pub const DEPTH_RANGE_MIN_M: f32 = 0.0;
pub const DEPTH_RANGE_MAX_M: f32 = 5.0;

/// Number of quantization bands for depth colormap visualization
pub const DEPTH_COLORMAP_BANDS: f32 = 32.0;
