// SPDX-License-Identifier: GPL-3.0-only

//! Per-frame feedback pipeline
//!
//! One synchronous handler per incoming frame: sample the center region,
//! classify the distance, and - when the tier is actionable, haptics are
//! enabled, and the cooldown gate is open - fire one pulse. Frames are
//! independent; a frame with no valid samples simply produces no feedback.

use tracing::{debug, trace};

use crate::config::Config;
use crate::depth::{DepthFrame, average_center_depth};
use crate::feedback::{CooldownGate, FeedbackTier, HapticSink, classify_tier};

/// Outcome of processing one frame
///
/// Later frames supersede earlier reports; nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Averaged center distance, if any valid sample existed
    pub distance_m: Option<f32>,
    /// Tier the distance classified into
    pub tier: FeedbackTier,
    /// Whether a haptic pulse was actually emitted for this frame
    pub pulsed: bool,
}

/// Synchronous sample → classify → throttle → pulse handler
///
/// Holds the only per-stream state in the system: the cooldown timestamp.
/// Classification itself is stateless.
pub struct FeedbackPipeline<H: HapticSink> {
    config: Config,
    cooldown: CooldownGate,
    haptics: H,
}

impl<H: HapticSink> FeedbackPipeline<H> {
    /// Create a pipeline with the given configuration and haptic sink
    pub fn new(config: Config, haptics: H) -> Self {
        if config.object_detection_enabled {
            debug!("Object detection enabled in configuration, but no classifier is attached");
        }
        let cooldown = CooldownGate::new(config.pulse_cooldown());
        Self {
            config,
            cooldown,
            haptics,
        }
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the pipeline, returning the haptic sink
    pub fn into_haptics(self) -> H {
        self.haptics
    }

    /// Process one frame and report what happened
    pub fn process(&mut self, frame: &DepthFrame<'_>) -> FrameReport {
        let distance_m = average_center_depth(frame);
        let tier = classify_tier(distance_m);
        trace!(distance_m = ?distance_m, tier = %tier, "Classified frame");

        let mut pulsed = false;
        if tier.is_actionable() && self.config.haptics_enabled && self.cooldown.try_pass() {
            self.haptics.pulse(tier);
            pulsed = true;
        }

        FrameReport {
            distance_m,
            tier,
            pulsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthFrame;

    /// Sink that records every pulse it receives
    #[derive(Default)]
    struct RecordingHaptics {
        pulses: Vec<FeedbackTier>,
    }

    impl HapticSink for RecordingHaptics {
        fn pulse(&mut self, tier: FeedbackTier) {
            self.pulses.push(tier);
        }
    }

    fn uniform_frame(depth: f32) -> Vec<f32> {
        vec![depth; 10 * 10]
    }

    fn no_cooldown_config() -> Config {
        Config {
            pulse_cooldown_ms: 0,
            ..Config::default()
        }
    }

    #[test]
    fn test_actionable_frame_pulses() {
        let mut pipeline = FeedbackPipeline::new(no_cooldown_config(), RecordingHaptics::default());
        let samples = uniform_frame(0.25);
        let frame = DepthFrame::from_samples(&samples, 10, 10).unwrap();

        let report = pipeline.process(&frame);
        assert_eq!(report.tier, FeedbackTier::Heavy);
        assert!(report.pulsed);
        assert_eq!(pipeline.into_haptics().pulses, vec![FeedbackTier::Heavy]);
    }

    #[test]
    fn test_disabled_haptics_never_pulse() {
        let config = Config {
            haptics_enabled: false,
            ..no_cooldown_config()
        };
        let mut pipeline = FeedbackPipeline::new(config, RecordingHaptics::default());
        let samples = uniform_frame(0.25);
        let frame = DepthFrame::from_samples(&samples, 10, 10).unwrap();

        let report = pipeline.process(&frame);
        assert_eq!(report.tier, FeedbackTier::Heavy);
        assert!(!report.pulsed);
        assert!(pipeline.into_haptics().pulses.is_empty());
    }

    #[test]
    fn test_distant_scene_is_silent() {
        let mut pipeline = FeedbackPipeline::new(no_cooldown_config(), RecordingHaptics::default());
        let samples = uniform_frame(3.0);
        let frame = DepthFrame::from_samples(&samples, 10, 10).unwrap();

        let report = pipeline.process(&frame);
        assert_eq!(report.distance_m, Some(3.0));
        assert_eq!(report.tier, FeedbackTier::None);
        assert!(!report.pulsed);
    }

    #[test]
    fn test_dropout_frame_skips_feedback() {
        let mut pipeline = FeedbackPipeline::new(no_cooldown_config(), RecordingHaptics::default());
        let samples = uniform_frame(0.0);
        let frame = DepthFrame::from_samples(&samples, 10, 10).unwrap();

        let report = pipeline.process(&frame);
        assert_eq!(report.distance_m, None);
        assert_eq!(report.tier, FeedbackTier::None);
        assert!(!report.pulsed);
    }

    #[test]
    fn test_cooldown_suppresses_back_to_back_pulses() {
        // A long cooldown lets at most the first frame pulse
        let config = Config {
            pulse_cooldown_ms: 60_000,
            ..Config::default()
        };
        let mut pipeline = FeedbackPipeline::new(config, RecordingHaptics::default());
        let samples = uniform_frame(0.25);
        let frame = DepthFrame::from_samples(&samples, 10, 10).unwrap();

        assert!(pipeline.process(&frame).pulsed);
        assert!(!pipeline.process(&frame).pulsed);
        assert!(!pipeline.process(&frame).pulsed);
        assert_eq!(pipeline.into_haptics().pulses.len(), 1);
    }
}
