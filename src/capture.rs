// SPDX-License-Identifier: GPL-3.0-only
//! Thread lifecycle management for the live feedback loop
//!
//! Frames arrive from a producer asynchronously relative to the rest of
//! the application; this module owns the thread that drains a source into
//! the pipeline. There is no queue and no backpressure - each report
//! simply supersedes the previous one at the observer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::depth::OwnedDepthFrame;
use crate::feedback::HapticSink;
use crate::pipeline::{FeedbackPipeline, FrameReport};

/// Producer of depth frames (a capture session, file replay, test vector)
///
/// Frames are delivered serially; `next_frame` blocks until one is
/// available and returns `None` when the stream ends.
pub trait DepthSource: Send {
    fn next_frame(&mut self) -> Option<OwnedDepthFrame>;
}

/// Action returned by the report observer to control the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Keep consuming frames
    Continue,
    /// Stop the loop gracefully
    Stop,
}

/// Runs a [`DepthSource`] through a [`FeedbackPipeline`] on its own thread
///
/// Each frame is sampled, classified, and dispatched to the haptic sink by
/// the pipeline; the resulting [`FrameReport`] is handed to the observer
/// closure (typically a renderer or a printout). Dropping the loop stops
/// it and joins the thread.
pub struct FrameLoop {
    /// Thread handle for joining
    thread_handle: Option<JoinHandle<()>>,
    /// Signal to stop the loop
    stop_signal: Arc<AtomicBool>,
    /// Name for logging
    name: String,
}

impl FrameLoop {
    /// Spawn the loop thread
    ///
    /// # Arguments
    ///
    /// * `name` - A descriptive name for the loop (used in logging)
    /// * `source` - Where frames come from
    /// * `pipeline` - The per-frame handler
    /// * `on_report` - Observer called with each frame's report
    pub fn spawn<S, H, F>(
        name: &str,
        mut source: S,
        mut pipeline: FeedbackPipeline<H>,
        mut on_report: F,
    ) -> Self
    where
        S: DepthSource + 'static,
        H: HapticSink + Send + 'static,
        F: FnMut(FrameReport) -> LoopAction + Send + 'static,
    {
        let stop_signal = Arc::new(AtomicBool::new(false));
        let stop_signal_clone = Arc::clone(&stop_signal);
        let name_clone = name.to_string();

        info!(name = %name, "Starting feedback loop");

        let thread_handle = thread::spawn(move || {
            debug!(name = %name_clone, "Feedback loop thread started");

            loop {
                if stop_signal_clone.load(Ordering::SeqCst) {
                    debug!(name = %name_clone, "Stop signal received");
                    break;
                }

                let Some(frame) = source.next_frame() else {
                    debug!(name = %name_clone, "Frame source exhausted");
                    break;
                };

                let report = pipeline.process(&frame.view());
                match on_report(report) {
                    LoopAction::Continue => {}
                    LoopAction::Stop => {
                        debug!(name = %name_clone, "Observer requested stop");
                        break;
                    }
                }
            }

            info!(name = %name_clone, "Feedback loop thread exiting");
        });

        Self {
            thread_handle: Some(thread_handle),
            stop_signal,
            name: name.to_string(),
        }
    }

    /// Check if the loop is still running
    pub fn is_running(&self) -> bool {
        self.thread_handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Signal the loop to stop (non-blocking)
    pub fn request_stop(&self) {
        debug!(name = %self.name, "Requesting feedback loop stop");
        self.stop_signal.store(true, Ordering::SeqCst);
    }

    /// Stop the loop and wait for the thread to finish
    pub fn stop(&mut self) {
        self.request_stop();
        self.join();
    }

    /// Wait for the thread to finish without sending a stop signal
    ///
    /// Useful when the source ends the stream itself.
    pub fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take()
            && let Err(e) = handle.join()
        {
            warn!(name = %self.name, "Feedback loop thread panicked: {:?}", e);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if self.thread_handle.is_some() {
            debug!(name = %self.name, "FrameLoop dropped, stopping loop");
            self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feedback::{FeedbackTier, LoggingHaptics};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Source that replays a fixed set of frames, then ends the stream
    struct VecSource {
        frames: std::vec::IntoIter<OwnedDepthFrame>,
    }

    impl VecSource {
        fn uniform(depths: &[f32]) -> Self {
            let frames = depths
                .iter()
                .map(|&d| OwnedDepthFrame::from_samples(&vec![d; 100], 10, 10).unwrap())
                .collect::<Vec<_>>();
            Self {
                frames: frames.into_iter(),
            }
        }
    }

    impl DepthSource for VecSource {
        fn next_frame(&mut self) -> Option<OwnedDepthFrame> {
            self.frames.next()
        }
    }

    /// Source that never runs dry
    struct EndlessSource;

    impl DepthSource for EndlessSource {
        fn next_frame(&mut self) -> Option<OwnedDepthFrame> {
            thread::sleep(Duration::from_millis(5));
            Some(OwnedDepthFrame::from_samples(&vec![2.0f32; 100], 10, 10).unwrap())
        }
    }

    #[test]
    fn test_loop_drains_source_and_exits() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let reports_clone = Arc::clone(&reports);

        let source = VecSource::uniform(&[0.25, 0.45, 0.8, 2.0]);
        let pipeline = FeedbackPipeline::new(
            Config {
                haptics_enabled: false,
                ..Config::default()
            },
            LoggingHaptics,
        );

        let mut frame_loop = FrameLoop::spawn("test-loop", source, pipeline, move |report| {
            reports_clone.lock().unwrap().push(report.tier);
            LoopAction::Continue
        });
        frame_loop.join();

        assert_eq!(
            *reports.lock().unwrap(),
            vec![
                FeedbackTier::Heavy,
                FeedbackTier::Medium,
                FeedbackTier::Light,
                FeedbackTier::None,
            ]
        );
    }

    #[test]
    fn test_observer_can_stop_loop() {
        let source = VecSource::uniform(&[1.0; 50]);
        let pipeline = FeedbackPipeline::new(
            Config {
                haptics_enabled: false,
                ..Config::default()
            },
            LoggingHaptics,
        );

        let mut seen = 0u32;
        let mut frame_loop = FrameLoop::spawn("test-stop", source, pipeline, move |_| {
            seen += 1;
            if seen >= 3 {
                LoopAction::Stop
            } else {
                LoopAction::Continue
            }
        });
        frame_loop.join();
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_stop_signal_ends_endless_source() {
        let pipeline = FeedbackPipeline::new(
            Config {
                haptics_enabled: false,
                ..Config::default()
            },
            LoggingHaptics,
        );

        let mut frame_loop = FrameLoop::spawn("test-signal", EndlessSource, pipeline, |_| {
            LoopAction::Continue
        });
        assert!(frame_loop.is_running());
        frame_loop.stop();
        assert!(!frame_loop.is_running());
    }
}
