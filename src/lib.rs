// SPDX-License-Identifier: GPL-3.0-only

//! Depthsense - proximity feedback derived from dense depth frames
//!
//! This library turns depth-sensor frames (row-major 32-bit float meters,
//! with a possible row stride) into discrete obstacle feedback:
//!
//! - [`depth`]: borrowed frame views and center-region depth sampling
//! - [`feedback`]: tier classification, haptic dispatch, pulse throttling
//! - [`visualize`]: false-color rendering of raw depth buffers
//! - [`pipeline`]: the per-frame sample → classify → pulse handler
//! - [`capture`]: thread lifecycle for driving a frame source live
//! - [`config`] / [`storage`]: explicit runtime configuration and its
//!   injected persistence collaborator
//!
//! # Example
//!
//! ```
//! use depthsense::{average_center_depth, classify_tier, DepthFrame, FeedbackTier};
//!
//! let samples = vec![0.45f32; 100 * 100];
//! let frame = DepthFrame::from_samples(&samples, 100, 100).unwrap();
//! let distance = average_center_depth(&frame);
//! assert_eq!(classify_tier(distance), FeedbackTier::Medium);
//! ```

pub mod capture;
pub mod config;
pub mod constants;
pub mod depth;
pub mod errors;
pub mod feedback;
pub mod pipeline;
pub mod storage;
pub mod visualize;

// Re-export commonly used types
pub use config::Config;
pub use depth::{CenterRegion, DepthFrame, OwnedDepthFrame, average_center_depth};
pub use feedback::{CooldownGate, FeedbackTier, HapticSink, classify_tier};
pub use pipeline::{FeedbackPipeline, FrameReport};
