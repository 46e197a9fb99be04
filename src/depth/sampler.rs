// SPDX-License-Identifier: GPL-3.0-only

//! Center-region depth sampling
//!
//! A single scalar summarizes each frame: the arithmetic mean of the valid
//! depth readings in the middle 20%-by-20% sub-rectangle. Sensor dropouts
//! (zero, negative, NaN, infinity) are excluded from the average.

use super::frame::DepthFrame;
use crate::constants::CENTER_REGION_FRACTION;

/// The middle 20%-by-20% sub-rectangle of a frame
///
/// Derived fresh per frame from the frame dimensions, never stored across
/// frames. For a 100x100 frame this is the 20x20 block at (40, 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterRegion {
    /// Left edge of the region (inclusive)
    pub start_x: u32,
    /// Top edge of the region (inclusive)
    pub start_y: u32,
    /// Region width in pixels
    pub width: u32,
    /// Region height in pixels
    pub height: u32,
}

impl CenterRegion {
    /// Compute the center region for a frame of the given dimensions
    ///
    /// Region extents truncate (`floor(dim * 0.2)`) and the start offsets
    /// use truncating division, so odd leftovers bias one pixel toward the
    /// top-left.
    pub fn of(frame_width: u32, frame_height: u32) -> Self {
        let width = (frame_width as f32 * CENTER_REGION_FRACTION) as u32;
        let height = (frame_height as f32 * CENTER_REGION_FRACTION) as u32;
        Self {
            start_x: (frame_width - width) / 2,
            start_y: (frame_height - height) / 2,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn end_x(&self) -> u32 {
        self.start_x + self.width
    }

    /// Exclusive bottom edge
    pub fn end_y(&self) -> u32 {
        self.start_y + self.height
    }
}

/// Average the valid depth readings in the center region of `frame`
///
/// Only finite, strictly positive samples contribute; everything else is a
/// sensor dropout sentinel. Returns `None` when the region holds no valid
/// sample at all - an expected outcome (noise, out-of-range scene), not an
/// error. Pure function of the buffer; no side effects, no blocking.
pub fn average_center_depth(frame: &DepthFrame<'_>) -> Option<f32> {
    let region = CenterRegion::of(frame.width(), frame.height());

    let mut sum = 0.0f32;
    let mut count = 0u32;
    for y in region.start_y..region.end_y() {
        for x in region.start_x..region.end_x() {
            let depth = frame.sample(x, y);
            if depth.is_finite() && depth > 0.0 {
                sum += depth;
                count += 1;
            }
        }
    }

    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}
