//! Depth map storage and raw file handling
//!
//! A [`DepthBuffer`] is a row-major grid of 32-bit float disparity or depth
//! samples. Raw depth files are the same samples serialized as headerless
//! little-endian f32, row by row.

mod error;
mod normalization;

// Re-export public API
pub use error::{DepthError, ProcessError};
pub use normalization::{find_min_max, normalize, try_normalize, MAX_SEED, MIN_SEED};

use crate::types::Dimensions;
use anyhow::{Context, Result};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Row-major `width x height` grid of f32 samples
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    dimensions: Dimensions,
    samples: Vec<f32>,
    locked: bool,
}

impl DepthBuffer {
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `samples` does not hold
    /// exactly `width * height` values
    pub fn new(width: u32, height: u32, samples: Vec<f32>) -> Result<Self, DepthError> {
        let dimensions = Dimensions::new(width, height);
        if !dimensions.is_valid() {
            return Err(DepthError::EmptyDimensions(dimensions));
        }

        let expected = dimensions.pixel_count();
        if samples.len() != expected {
            return Err(DepthError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            dimensions,
            samples,
            locked: false,
        })
    }

    /// Decode headerless little-endian f32 samples
    ///
    /// # Errors
    ///
    /// Returns an error if the byte length is not a whole number of samples or
    /// does not match `dimensions`
    pub fn from_le_bytes(dimensions: Dimensions, bytes: &[u8]) -> Result<Self, DepthError> {
        if !dimensions.is_valid() {
            return Err(DepthError::EmptyDimensions(dimensions));
        }

        if !bytes.len().is_multiple_of(4) {
            return Err(DepthError::TruncatedSample { len: bytes.len() });
        }

        // Reject a wrong file length before decoding anything
        if bytes.len() != dimensions.byte_len() {
            return Err(DepthError::SampleCountMismatch {
                expected: dimensions.pixel_count(),
                actual: bytes.len() / 4,
            });
        }

        let samples = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Self::new(dimensions.width, dimensions.height, samples)
    }

    #[inline(always)]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    #[inline(always)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Samples of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`
    #[must_use]
    pub fn row(&self, y: u32) -> &[f32] {
        let width = self.width() as usize;
        let start = y as usize * width;
        &self.samples[start..start + width]
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Take exclusive access to the sample memory until the guard drops
    pub fn lock_base_address(&mut self) -> BaseAddressLock<'_> {
        trace!(dimensions = %self.dimensions, "locking depth map base address");
        self.locked = true;
        BaseAddressLock { buffer: self }
    }
}

/// Scoped lock on a [`DepthBuffer`]'s samples; unlocks on drop
#[derive(Debug)]
pub struct BaseAddressLock<'a> {
    buffer: &'a mut DepthBuffer,
}

impl BaseAddressLock<'_> {
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.buffer.dimensions
    }
}

impl Deref for BaseAddressLock<'_> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.buffer.samples
    }
}

impl DerefMut for BaseAddressLock<'_> {
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.buffer.samples
    }
}

impl Drop for BaseAddressLock<'_> {
    fn drop(&mut self) {
        self.buffer.locked = false;
        trace!(dimensions = %self.buffer.dimensions, "unlocked depth map base address");
    }
}

#[must_use]
pub fn samples_to_le_bytes(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Read a raw depth file into memory
pub fn open_depth_file(file_path: &Path) -> Result<Vec<u8>> {
    std::fs::read(file_path)
        .with_context(|| format!("Failed to open depth file: {}", file_path.display()))
}

/// Write samples as a raw little-endian f32 depth file
pub fn write_depth_file(file_path: &Path, samples: &[f32]) -> Result<()> {
    std::fs::write(file_path, samples_to_le_bytes(samples))
        .with_context(|| format!("Failed to write depth file: {}", file_path.display()))
}

/// `<dir>/<stem>.normalized.f32` for an input depth file
#[must_use]
pub fn normalized_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "depth".into(), |s| s.to_string_lossy());
    output_dir.join(format!("{stem}.normalized.f32"))
}
