// SPDX-License-Identifier: GPL-3.0-only

//! Depth visualization helpers
//!
//! Provides functions for converting depth buffers to viewable formats:
//! - Proximity gradient (red=near, through yellow and green, blue=far)
//! - Grayscale (bright=near, dark=far)
//!
//! The colorizer consumes the raw depth buffer, not the feedback tier, so
//! the rendered image keeps its full dynamic range even when the obstacle
//! classifier reports nothing actionable.

use crate::config::VisualizationSettings;
use crate::constants::DEPTH_COLORMAP_BANDS;
use crate::depth::DepthFrame;

/// Proximity gradient: red (near) → yellow → green → blue (far)
///
/// Piecewise-linear blend between the four stops. Near obstacles glow in
/// warning colors while distant structure fades to cool ones.
#[inline]
fn proximity_gradient(t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    let (r, g, b) = if t < 1.0 / 3.0 {
        // red → yellow
        (1.0, t * 3.0, 0.0)
    } else if t < 2.0 / 3.0 {
        // yellow → green
        (1.0 - (t - 1.0 / 3.0) * 3.0, 1.0, 0.0)
    } else {
        // green → blue
        let k = (t - 2.0 / 3.0) * 3.0;
        (0.0, 1.0 - k, k)
    };
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8, 255]
}

/// Convert a depth frame (meters) to RGBA visualization
///
/// Invalid samples (zero, negative, non-finite) render black. Valid depths
/// are normalized over the configured range, clamped, optionally quantized
/// into bands, then mapped through the gradient (or a near-bright grayscale
/// ramp). Row padding in the source buffer is skipped; the output is always
/// tightly packed at 4 bytes per pixel.
pub fn depth_to_rgba(frame: &DepthFrame<'_>, settings: &VisualizationSettings) -> Vec<u8> {
    let pixel_count = frame.width() as usize * frame.height() as usize;
    let mut rgba = Vec::with_capacity(pixel_count * 4);

    let range = settings.max_m - settings.min_m;
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let depth = frame.sample(x, y);
            if !depth.is_finite() || depth <= 0.0 {
                // Invalid depth - black
                rgba.extend_from_slice(&[0, 0, 0, 255]);
                continue;
            }

            // Normalize to 0.0-1.0 (near=0.0, far=1.0)
            let mut t = ((depth - settings.min_m) / range).clamp(0.0, 1.0);

            // Quantize to bands for smoother visualization
            if settings.quantize {
                t = (t * DEPTH_COLORMAP_BANDS).floor() / DEPTH_COLORMAP_BANDS;
            }

            if settings.grayscale {
                // Grayscale: near=bright, far=dark (invert t)
                let gray = ((1.0 - t) * 255.0) as u8;
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            } else {
                rgba.extend_from_slice(&proximity_gradient(t));
            }
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::BYTES_PER_SAMPLE;

    fn settings() -> VisualizationSettings {
        VisualizationSettings::default()
    }

    #[test]
    fn test_invalid_depth_renders_black() {
        let samples = vec![0.0f32, -1.0, f32::NAN, f32::INFINITY];
        let frame = DepthFrame::from_samples(&samples, 2, 2).unwrap();
        let rgba = depth_to_rgba(&frame, &settings());
        for chunk in rgba.chunks(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_near_is_red_far_is_blue() {
        let samples = vec![0.1f32, 4.9];
        let frame = DepthFrame::from_samples(&samples, 2, 1).unwrap();
        let rgba = depth_to_rgba(&frame, &settings());
        // Near pixel: dominated by red
        assert!(rgba[0] > 200 && rgba[2] < 50);
        // Far pixel: dominated by blue
        assert!(rgba[4 + 2] > 200 && rgba[4] < 50);
    }

    #[test]
    fn test_grayscale_near_is_bright() {
        let mut s = settings();
        s.grayscale = true;
        let samples = vec![0.2f32, 4.8];
        let frame = DepthFrame::from_samples(&samples, 2, 1).unwrap();
        let rgba = depth_to_rgba(&frame, &s);
        assert!(rgba[0] > 200, "near should be bright");
        assert!(rgba[4] < 50, "far should be dark");
    }

    #[test]
    fn test_row_padding_does_not_change_output() {
        let samples = vec![0.5f32, 1.0, 1.5, 2.0];
        let packed = DepthFrame::from_samples(&samples, 2, 2).unwrap();

        // Same logical content with 8 bytes of garbage padding per row
        let mut padded = Vec::new();
        for row in samples.chunks(2) {
            padded.extend_from_slice(bytemuck::cast_slice(row));
            padded.extend_from_slice(&[0xEE; 8]);
        }
        let stride = 2 * BYTES_PER_SAMPLE + 8;
        let strided = DepthFrame::new(&padded, 2, 2, stride).unwrap();

        assert_eq!(
            depth_to_rgba(&packed, &settings()),
            depth_to_rgba(&strided, &settings())
        );
    }
}
