//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between world-space floats and grid
//! indices so that call-sites never cast a negative or non-finite value.

/// Floor `coordinate / tile_size` and convert it to a grid index.
///
/// Returns `None` when the quotient is negative, non-finite, or exceeds
/// `u32::MAX`; callers treat that as a probe outside the grid.
///
/// # Examples
///
/// ```
/// use tilebound::numeric::tile_index;
/// assert_eq!(tile_index(31.9, 16.0), Some(1));
/// assert_eq!(tile_index(32.0, 16.0), Some(2));
/// assert_eq!(tile_index(-0.5, 16.0), None);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is validated against the u32 domain."
)]
#[must_use]
pub fn tile_index(coordinate: f32, tile_size: f32) -> Option<usize> {
    let floored = (coordinate / tile_size).floor();
    if !floored.is_finite() || floored < 0.0 || f64::from(floored) > f64::from(u32::MAX) {
        return None;
    }
    usize::try_from(floored as u32).ok()
}

/// Convert a grid dimension to world units.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid dimensions are far below f32's exact integer range."
)]
#[must_use]
pub const fn span(count: usize, tile_size: f32) -> f32 {
    count as f32 * tile_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_rejects_non_finite() {
        assert_eq!(tile_index(f32::NAN, 16.0), None);
        assert_eq!(tile_index(f32::INFINITY, 16.0), None);
    }

    #[test]
    fn index_floors_towards_negative_infinity() {
        assert_eq!(tile_index(15.99, 16.0), Some(0));
        assert_eq!(tile_index(-0.01, 16.0), None);
    }

    #[test]
    fn span_scales_count() {
        assert!((span(12, 16.0) - 192.0).abs() < f32::EPSILON);
    }
}
