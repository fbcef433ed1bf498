//! Depth frame presentation
//!
//! Turns a depth map into a normalized single-channel f32 image, rotated into
//! the orientation it was captured in.

use crate::depth::{self, DepthBuffer};
use crate::orientation::ImageOrientation;
use crate::types::{Dimensions, NormalizationResult};
use anyhow::{Context, Result};
use image::{imageops, ImageBuffer, Luma};
use tracing::debug;

/// Single-channel f32 image
pub type DepthImageBuffer = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Normalized, oriented depth frame with the extrema it was rescaled from
#[derive(Debug, Clone)]
pub struct DepthImage {
    pub image: DepthImageBuffer,
    pub orientation: ImageOrientation,
    pub result: NormalizationResult,
}

impl DepthImage {
    #[inline(always)]
    #[must_use]
    pub fn min_value(&self) -> f32 {
        self.result.min_value
    }

    #[inline(always)]
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.result.max_value
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image.width(), self.image.height())
    }

    #[must_use]
    pub fn samples(&self) -> &[f32] {
        self.image.as_raw()
    }

    /// Samples that are NaN or infinite after normalization
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.samples().iter().filter(|s| !s.is_finite()).count()
    }
}

/// Normalize a depth map and present it in `orientation`
///
/// # Errors
///
/// Returns an error if the image buffer cannot be created from the samples
pub fn depth_image(mut buffer: DepthBuffer, orientation: ImageOrientation) -> Result<DepthImage> {
    let result = depth::normalize(&mut buffer);
    orient_normalized(buffer, result, orientation)
}

/// Present an already normalized depth map in `orientation`
///
/// # Errors
///
/// Returns an error if the image buffer cannot be created from the samples
pub fn orient_normalized(
    buffer: DepthBuffer,
    result: NormalizationResult,
    orientation: ImageOrientation,
) -> Result<DepthImage> {
    let dimensions = buffer.dimensions();
    let image: DepthImageBuffer =
        ImageBuffer::from_raw(dimensions.width, dimensions.height, buffer.into_samples())
            .context("Failed to create depth image buffer")?;

    // Rotations allocate a new buffer; Up reuses the samples as-is
    let image = match orientation {
        ImageOrientation::Up => image,
        ImageOrientation::Down => imageops::rotate180(&image),
        ImageOrientation::Left => imageops::rotate270(&image),
        ImageOrientation::Right => imageops::rotate90(&image),
    };

    debug!(
        %dimensions,
        %orientation,
        width = image.width(),
        height = image.height(),
        "oriented depth image"
    );

    Ok(DepthImage {
        image,
        orientation,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 3 wide, 2 tall:
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// ```
    fn sample_buffer() -> DepthBuffer {
        DepthBuffer::new(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    fn pixel(image: &DepthImage, x: u32, y: u32) -> f32 {
        image.image.get_pixel(x, y).0[0]
    }

    #[test]
    fn test_up_keeps_layout() {
        let image = depth_image(sample_buffer(), ImageOrientation::Up).unwrap();

        assert_eq!(image.dimensions(), Dimensions::new(3, 2));
        assert_eq!(image.min_value(), 1.0);
        assert_eq!(image.max_value(), 6.0);
        assert_eq!(pixel(&image, 0, 0), 0.0);
        assert_eq!(pixel(&image, 2, 1), 1.0);
        assert_relative_eq!(pixel(&image, 1, 0), 0.2);
    }

    #[test]
    fn test_right_rotates_clockwise() {
        let image = depth_image(sample_buffer(), ImageOrientation::Right).unwrap();

        // 4 1
        // 5 2
        // 6 3
        assert_eq!(image.dimensions(), Dimensions::new(2, 3));
        assert_relative_eq!(pixel(&image, 0, 0), 0.6);
        assert_eq!(pixel(&image, 1, 0), 0.0);
        assert_eq!(pixel(&image, 0, 2), 1.0);
    }

    #[test]
    fn test_left_rotates_counter_clockwise() {
        let image = depth_image(sample_buffer(), ImageOrientation::Left).unwrap();

        // 3 6
        // 2 5
        // 1 4
        assert_eq!(image.dimensions(), Dimensions::new(2, 3));
        assert_relative_eq!(pixel(&image, 0, 0), 0.4);
        assert_eq!(pixel(&image, 1, 0), 1.0);
        assert_eq!(pixel(&image, 0, 2), 0.0);
    }

    #[test]
    fn test_down_rotates_half_turn() {
        let image = depth_image(sample_buffer(), ImageOrientation::Down).unwrap();

        assert_eq!(image.dimensions(), Dimensions::new(3, 2));
        assert_eq!(pixel(&image, 0, 0), 1.0);
        assert_eq!(pixel(&image, 2, 1), 0.0);
    }

    #[test]
    fn test_orientation_dimension_swap_matches_flag() {
        for orientation in [
            ImageOrientation::Up,
            ImageOrientation::Down,
            ImageOrientation::Left,
            ImageOrientation::Right,
        ] {
            let image = depth_image(sample_buffer(), orientation).unwrap();
            let swapped = image.dimensions() == Dimensions::new(2, 3);
            assert_eq!(swapped, orientation.swaps_dimensions(), "{orientation}");
        }
    }

    #[test]
    fn test_constant_map_counts_non_finite() {
        let buffer = DepthBuffer::new(2, 1, vec![5.0, 5.0]).unwrap();
        let image = depth_image(buffer, ImageOrientation::Up).unwrap();

        assert_eq!(image.non_finite_count(), 2);
    }

    #[test]
    fn test_orient_normalized_keeps_result() {
        let mut buffer = sample_buffer();
        let result = depth::try_normalize(&mut buffer).unwrap();
        let image = orient_normalized(buffer, result, ImageOrientation::Up).unwrap();

        assert_eq!(image.result, result);
        assert_eq!(image.non_finite_count(), 0);
    }
}
