// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for depth dump analysis
//!
//! This module provides command-line functionality for:
//! - Classifying the center distance of a single dump
//! - Rendering dumps to false-color PNGs
//! - Replaying a directory of dumps through the live feedback loop

use chrono::Local;
use depthsense::capture::{DepthSource, FrameLoop, LoopAction};
use depthsense::depth::{CenterRegion, OwnedDepthFrame, average_center_depth};
use depthsense::feedback::{LoggingHaptics, classify_tier};
use depthsense::pipeline::FeedbackPipeline;
use depthsense::storage::JsonConfigStore;
use depthsense::visualize::depth_to_rgba;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Classify a single depth dump and print the result
pub fn analyze(
    input: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = load_depth_dump(&input, width, height, stride)?;
    let view = frame.view();

    let region = CenterRegion::of(view.width(), view.height());
    let distance = average_center_depth(&view);
    let tier = classify_tier(distance);

    println!(
        "Frame: {}x{} ({} bytes per row)",
        view.width(),
        view.height(),
        view.row_stride_bytes()
    );
    println!(
        "Center region: {}x{} at ({}, {})",
        region.width, region.height, region.start_x, region.start_y
    );
    match distance {
        Some(d) => println!("Center distance: {:.3} m", d),
        None => println!("Center distance: no valid samples"),
    }
    println!("Feedback tier: {}", tier.display_name());

    Ok(())
}

/// Render a depth dump to a false-color PNG
pub fn colorize(
    input: PathBuf,
    output: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<usize>,
    grayscale: bool,
    quantize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = JsonConfigStore::at_default_location()?.load_or_default();
    let mut settings = config.visualization;
    if grayscale {
        settings.grayscale = true;
    }
    if quantize {
        settings.quantize = true;
    }

    let frame = load_depth_dump(&input, width, height, stride)?;
    let view = frame.view();
    let rgba = depth_to_rgba(&view, &settings);

    let output_path = output.unwrap_or_else(|| {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("depth_{}.png", timestamp))
    });

    let image = image::RgbaImage::from_raw(view.width(), view.height(), rgba)
        .ok_or("RGBA buffer does not match frame dimensions")?;
    image.save(&output_path)?;

    println!("Saved: {}", output_path.display());
    Ok(())
}

/// Replay a directory of depth dumps through the live feedback loop
pub fn stream(
    dir: PathBuf,
    fps: u32,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    if fps == 0 {
        return Err("fps must be at least 1".into());
    }

    let config = JsonConfigStore::at_default_location()?.load_or_default();
    let source = DirectorySource::new(&dir, fps, width, height, stride)?;
    let pipeline = FeedbackPipeline::new(config, LoggingHaptics);

    println!("Replaying {} at {} fps (Ctrl+C to abort)", dir.display(), fps);

    let mut frame_loop = FrameLoop::spawn("depth-replay", source, pipeline, |report| {
        let distance = report
            .distance_m
            .map(|d| format!("{:.3} m", d))
            .unwrap_or_else(|| "   -   ".to_string());
        let pulse_marker = if report.pulsed { "  *pulse*" } else { "" };
        println!(
            "distance: {:>8}  tier: {:<6}{}",
            distance, report.tier, pulse_marker
        );
        LoopAction::Continue
    });

    // The source ends the stream after the last file
    frame_loop.join();
    Ok(())
}

/// Frame source replaying dump files from a directory in filename order
struct DirectorySource {
    paths: std::vec::IntoIter<PathBuf>,
    frame_interval: Duration,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<usize>,
}

impl DirectorySource {
    fn new(
        dir: &Path,
        fps: u32,
        width: Option<u32>,
        height: Option<u32>,
        stride: Option<usize>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        if paths.is_empty() {
            return Err(format!("No depth dumps found in {}", dir.display()).into());
        }

        // Sort by filename for consistent ordering
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            paths: paths.into_iter(),
            frame_interval: Duration::from_secs(1) / fps,
            width,
            height,
            stride,
        })
    }
}

impl DepthSource for DirectorySource {
    fn next_frame(&mut self) -> Option<OwnedDepthFrame> {
        // Skip unreadable files rather than ending the stream
        loop {
            let path = self.paths.next()?;
            std::thread::sleep(self.frame_interval);
            match load_depth_dump(&path, self.width, self.height, self.stride) {
                Ok(frame) => return Some(frame),
                Err(e) => {
                    warn!(path = ?path, error = %e, "Skipping unreadable depth dump");
                }
            }
        }
    }
}

/// Load a depth dump into an owned frame
///
/// PNG inputs are read as 16-bit grayscale millimeters (zero = dropout)
/// and converted to meters; anything else is treated as a raw little-endian
/// f32 dump, which needs explicit dimensions.
fn load_depth_dump(
    path: &Path,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<usize>,
) -> Result<OwnedDepthFrame, Box<dyn std::error::Error>> {
    let is_png = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png {
        let img = image::open(path)?;
        let luma = img.to_luma16();
        let (w, h) = luma.dimensions();
        let samples: Vec<f32> = luma
            .into_raw()
            .iter()
            .map(|&mm| mm as f32 / 1000.0)
            .collect();
        return Ok(OwnedDepthFrame::from_samples(&samples, w, h)?);
    }

    let (Some(width), Some(height)) = (width, height) else {
        return Err("--width and --height are required for raw depth dumps".into());
    };
    let bytes = std::fs::read(path)?;
    let row_stride_bytes = stride.unwrap_or(width as usize * 4);
    Ok(OwnedDepthFrame::new(
        Arc::from(bytes.into_boxed_slice()),
        width,
        height,
        row_stride_bytes,
    )?)
}
