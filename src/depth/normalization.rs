//! Min/max normalization of depth maps into `[0, 1]`
//!
//! Two sequential passes over the locked buffer: the first finds the
//! extrema, the second rescales every sample with them.
//!
//! Degenerate input is not guarded in [`normalize`]:
//! - a constant buffer divides `0 / 0` and every sample becomes NaN
//! - a NaN sample never becomes the min or max, but rescales to NaN itself
//! - the running maximum starts at [`MAX_SEED`], so a buffer whose values
//!   all lie below it reports `MAX_SEED` as its maximum
//! - `max - min` can overflow to infinity for finite samples near the f32
//!   limits; the maximum sample then rescales to `inf / inf = NaN`
//!
//! [`try_normalize`] refuses a degenerate range instead of writing NaN.

use super::error::DepthError;
use super::DepthBuffer;
use crate::types::NormalizationResult;
use tracing::{debug, warn};

/// Starting value of the running minimum
pub const MIN_SEED: f32 = f32::INFINITY;

/// Starting value of the running maximum (smallest positive normal f32)
pub const MAX_SEED: f32 = f32::MIN_POSITIVE;

#[inline]
#[must_use]
pub fn find_min_max(samples: &[f32]) -> (f32, f32) {
    samples
        .iter()
        .fold((MIN_SEED, MAX_SEED), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}

#[inline(always)]
fn rescale(samples: &mut [f32], min: f32, range: f32) {
    for sample in samples.iter_mut() {
        *sample = (*sample - min) / range;
    }
}

/// Rescale a depth map in place so its samples span `[0, 1]`
///
/// Returns the extrema found before rescaling.
pub fn normalize(buffer: &mut DepthBuffer) -> NormalizationResult {
    let mut samples = buffer.lock_base_address();
    let dimensions = samples.dimensions();

    let (min_value, max_value) = find_min_max(&samples);
    let result = NormalizationResult::new(min_value, max_value);

    if result.is_degenerate() {
        warn!(%dimensions, min_value, max_value, "normalizing a depth map with a degenerate range");
    }

    rescale(&mut samples, min_value, result.range());

    debug!(%dimensions, min_value, max_value, "normalized depth map");
    result
}

/// Like [`normalize`], but leaves the buffer untouched when `max <= min`
///
/// # Errors
///
/// Returns [`DepthError::DegenerateRange`] when the extrema do not span a
/// positive range
pub fn try_normalize(buffer: &mut DepthBuffer) -> Result<NormalizationResult, DepthError> {
    let mut samples = buffer.lock_base_address();
    let dimensions = samples.dimensions();

    let (min_value, max_value) = find_min_max(&samples);
    let result = NormalizationResult::new(min_value, max_value);
    if result.is_degenerate() {
        return Err(DepthError::DegenerateRange {
            min: min_value,
            max: max_value,
        });
    }

    rescale(&mut samples, min_value, result.range());

    debug!(%dimensions, min_value, max_value, "normalized depth map");
    Ok(result)
}
