// SPDX-License-Identifier: GPL-3.0-only
// Depth frame views over raw capture buffers

use std::sync::Arc;

use crate::errors::FrameError;

/// Size of one depth sample (32-bit float) in bytes
pub const BYTES_PER_SAMPLE: usize = size_of::<f32>();

/// Borrowed, immutable view over one captured depth frame
///
/// The underlying byte buffer is interpreted as row-major 32-bit float
/// depth samples in meters. `row_stride_bytes` may exceed `width * 4` when
/// the capture subsystem pads rows for alignment. The view only reads the
/// buffer and never retains it past the borrow.
///
/// Geometry is validated by [`DepthFrame::new`]; a frame that exists is a
/// frame whose every in-range `(x, y)` read is in bounds.
#[derive(Clone, Copy)]
pub struct DepthFrame<'a> {
    width: u32,
    height: u32,
    row_stride_bytes: usize,
    data: &'a [u8],
}

impl<'a> DepthFrame<'a> {
    /// Create a view over a raw capture buffer
    ///
    /// Fails fast with a [`FrameError`] when the dimensions, stride, and
    /// buffer length don't agree, instead of deferring to out-of-bounds
    /// reads during sampling.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        row_stride_bytes: usize,
    ) -> Result<Self, FrameError> {
        validate_geometry(data.len(), width, height, row_stride_bytes)?;
        Ok(Self {
            width,
            height,
            row_stride_bytes,
            data,
        })
    }

    /// Create a view over a tightly packed sample slice (no row padding)
    pub fn from_samples(samples: &'a [f32], width: u32, height: u32) -> Result<Self, FrameError> {
        Self::new(
            bytemuck::cast_slice(samples),
            width,
            height,
            width as usize * BYTES_PER_SAMPLE,
        )
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, including any alignment padding
    pub fn row_stride_bytes(&self) -> usize {
        self.row_stride_bytes
    }

    /// The raw byte buffer backing this frame
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Read the depth sample at `(x, y)` in meters
    ///
    /// Coordinates must be in range; geometry was validated at construction
    /// so in-range reads cannot go out of bounds. The read tolerates
    /// unaligned buffers (capture buffers carry no alignment guarantee).
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        let offset = y as usize * self.row_stride_bytes + x as usize * BYTES_PER_SAMPLE;
        bytemuck::pod_read_unaligned(&self.data[offset..offset + BYTES_PER_SAMPLE])
    }
}

impl std::fmt::Debug for DepthFrame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DepthFrame({}x{}, stride {} bytes)",
            self.width, self.height, self.row_stride_bytes
        )
    }
}

/// Owned depth frame for handing across threads
///
/// Frame sources produce these; processing borrows a [`DepthFrame`] view
/// via [`OwnedDepthFrame::view`]. The pixel data is reference-counted so
/// clones are cheap.
#[derive(Clone)]
pub struct OwnedDepthFrame {
    width: u32,
    height: u32,
    row_stride_bytes: usize,
    data: Arc<[u8]>,
}

impl OwnedDepthFrame {
    /// Take ownership of a raw capture buffer, validating its geometry
    pub fn new(
        data: Arc<[u8]>,
        width: u32,
        height: u32,
        row_stride_bytes: usize,
    ) -> Result<Self, FrameError> {
        validate_geometry(data.len(), width, height, row_stride_bytes)?;
        Ok(Self {
            width,
            height,
            row_stride_bytes,
            data,
        })
    }

    /// Build an owned frame from tightly packed samples (no row padding)
    pub fn from_samples(samples: &[f32], width: u32, height: u32) -> Result<Self, FrameError> {
        let bytes: &[u8] = bytemuck::cast_slice(samples);
        Self::new(
            Arc::from(bytes.to_vec().into_boxed_slice()),
            width,
            height,
            width as usize * BYTES_PER_SAMPLE,
        )
    }

    /// Borrow a validated view for sampling or rendering
    pub fn view(&self) -> DepthFrame<'_> {
        // Geometry was checked in the constructor
        DepthFrame {
            width: self.width,
            height: self.height,
            row_stride_bytes: self.row_stride_bytes,
            data: &self.data,
        }
    }
}

impl std::fmt::Debug for OwnedDepthFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OwnedDepthFrame({}x{}, stride {} bytes, {} bytes total)",
            self.width,
            self.height,
            self.row_stride_bytes,
            self.data.len()
        )
    }
}

fn validate_geometry(
    buffer_len: usize,
    width: u32,
    height: u32,
    row_stride_bytes: usize,
) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroDimension { width, height });
    }
    if row_stride_bytes < width as usize * BYTES_PER_SAMPLE {
        return Err(FrameError::StrideTooNarrow {
            row_stride_bytes,
            width,
        });
    }
    if row_stride_bytes % BYTES_PER_SAMPLE != 0 {
        return Err(FrameError::StrideMisaligned { row_stride_bytes });
    }
    let required = row_stride_bytes * height as usize;
    if buffer_len < required {
        return Err(FrameError::BufferTooSmall {
            required,
            actual: buffer_len,
        });
    }
    Ok(())
}
