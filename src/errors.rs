// SPDX-License-Identifier: MPL-2.0

//! Error types for depth frame handling and configuration

use std::fmt;

/// Frame geometry contract violations
///
/// Raised when a depth buffer is constructed with dimensions, stride, or
/// length that would allow out-of-bounds reads. Detected up front so the
/// sampler and colorizer can index without per-pixel bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero
    ZeroDimension { width: u32, height: u32 },
    /// Row stride is smaller than one row of samples
    StrideTooNarrow { row_stride_bytes: usize, width: u32 },
    /// Row stride is not a whole number of 32-bit samples
    StrideMisaligned { row_stride_bytes: usize },
    /// Buffer is shorter than `row_stride_bytes * height`
    BufferTooSmall { required: usize, actual: usize },
}

/// Configuration persistence errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// No user configuration directory available on this system
    NoConfigDir,
    /// Filesystem error while reading or writing the config file
    Io(String),
    /// Config file exists but could not be parsed
    Parse(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ZeroDimension { width, height } => {
                write!(f, "Frame dimensions must be non-zero (got {}x{})", width, height)
            }
            FrameError::StrideTooNarrow { row_stride_bytes, width } => write!(
                f,
                "Row stride of {} bytes cannot hold {} samples per row",
                row_stride_bytes, width
            ),
            FrameError::StrideMisaligned { row_stride_bytes } => write!(
                f,
                "Row stride of {} bytes is not a multiple of the 4-byte sample size",
                row_stride_bytes
            ),
            FrameError::BufferTooSmall { required, actual } => write!(
                f,
                "Depth buffer holds {} bytes but the frame geometry requires {}",
                actual, required
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No user configuration directory available"),
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}
impl std::error::Error for ConfigError {}

// Conversions for I/O and JSON errors
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
