//! Utility helpers for tests.
pub mod physics;

pub use physics::{body_moving, grid_with, single_tile, Coords2D, Extent};

/// Assert that two floats agree to within `1e-4`.
///
/// # Panics
/// Panics with both values when they differ.
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
