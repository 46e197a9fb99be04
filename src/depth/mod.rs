// SPDX-License-Identifier: GPL-3.0-only

//! Depth frame handling
//!
//! Frames are row-major 32-bit float buffers in meters, delivered by a
//! capture subsystem with a possible row stride (alignment padding). The
//! types here validate the buffer geometry once at construction; sampling
//! and rendering can then index without per-pixel bounds checks.

mod frame;
mod sampler;

pub use frame::{BYTES_PER_SAMPLE, DepthFrame, OwnedDepthFrame};
pub use sampler::{CenterRegion, average_center_depth};
