//! Domain-specific value types for depth frames

use std::fmt;

/// Depth map size in samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Byte length of a raw little-endian f32 map with these dimensions
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * size_of::<f32>()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

/// Extrema of a depth map, taken before it was rescaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationResult {
    pub min_value: f32,
    pub max_value: f32,
}

impl NormalizationResult {
    #[must_use]
    pub fn new(min_value: f32, max_value: f32) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max_value - self.min_value
    }

    /// True when `max <= min` or either bound is NaN
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.max_value > self.min_value)
    }
}

impl fmt::Display for NormalizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={min} max={max}",
            min = self.min_value,
            max = self.max_value
        )
    }
}

impl From<NormalizationResult> for (f32, f32) {
    fn from(result: NormalizationResult) -> Self {
        (result.min_value, result.max_value)
    }
}
