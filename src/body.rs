//! Axis-aligned kinematic bodies.
//!
//! A [`KinematicBody`] remembers where it was at the start of the current
//! tick so the resolver can tell a body that crossed a tile face this tick
//! from one that was already overlapping it.

use glam::Vec2;
use thiserror::Error;

/// Errors raised when constructing a body with an unusable extent.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    /// Width or height was zero, negative, or not finite.
    #[error("body extent must be positive and finite, got {width}x{height}")]
    InvalidExtent {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// The spawn position was not finite.
    #[error("body position must be finite, got ({x}, {y})")]
    InvalidPosition {
        /// Requested x coordinate.
        x: f32,
        /// Requested y coordinate.
        y: f32,
    },
}

/// Rectangle with current and previous-tick position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner at the current tick.
    pub position: Vec2,
    /// Top-left corner at the start of the current tick.
    pub old_position: Vec2,
    /// Width and height.
    size: Vec2,
    /// Velocity in world units per tick.
    pub velocity: Vec2,
    /// `true` while the body is not resting on a surface.
    pub airborne: bool,
}

impl KinematicBody {
    /// Creates a stationary body with its top-left corner at `(x, y)`.
    ///
    /// New bodies start airborne; the first landing clears the flag.
    ///
    /// # Errors
    /// Returns [`BodyError`] when the extent is not positive or any value is
    /// not finite.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, BodyError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(BodyError::InvalidExtent { width, height });
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(BodyError::InvalidPosition { x, y });
        }
        let position = Vec2::new(x, y);
        Ok(Self {
            position,
            old_position: position,
            size: Vec2::new(width, height),
            velocity: Vec2::ZERO,
            airborne: true,
        })
    }

    /// Width and height of the body.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Records the current position as the start of a new tick.
    pub const fn snapshot(&mut self) {
        self.old_position = self.position;
    }

    /// Adds the current velocity to the position.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Current top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.position.y
    }

    /// Current bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Current left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.position.x
    }

    /// Current right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Top edge at the start of the tick.
    #[must_use]
    pub const fn old_top(&self) -> f32 {
        self.old_position.y
    }

    /// Bottom edge at the start of the tick.
    #[must_use]
    pub fn old_bottom(&self) -> f32 {
        self.old_position.y + self.size.y
    }

    /// Left edge at the start of the tick.
    #[must_use]
    pub const fn old_left(&self) -> f32 {
        self.old_position.x
    }

    /// Right edge at the start of the tick.
    #[must_use]
    pub fn old_right(&self) -> f32 {
        self.old_position.x + self.size.x
    }

    /// Moves the body so its top edge sits at `value`.
    pub const fn set_top(&mut self, value: f32) {
        self.position.y = value;
    }

    /// Moves the body so its bottom edge sits at `value`.
    pub fn set_bottom(&mut self, value: f32) {
        self.position.y = value - self.size.y;
    }

    /// Moves the body so its left edge sits at `value`.
    pub const fn set_left(&mut self, value: f32) {
        self.position.x = value;
    }

    /// Moves the body so its right edge sits at `value`.
    pub fn set_right(&mut self, value: f32) {
        self.position.x = value - self.size.x;
    }
}

/// Anything that moves through the tile world by embedding a
/// [`KinematicBody`].
pub trait Kinematic {
    /// Shared access to the embedded body.
    fn body(&self) -> &KinematicBody;

    /// Exclusive access to the embedded body.
    fn body_mut(&mut self) -> &mut KinematicBody;
}

impl Kinematic for KinematicBody {
    fn body(&self) -> &KinematicBody {
        self
    }

    fn body_mut(&mut self) -> &mut KinematicBody {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn body() -> KinematicBody {
        KinematicBody::new(10.0, 20.0, 12.0, 8.0).expect("valid body")
    }

    #[test]
    fn edges_follow_position_and_extent() {
        let b = body();
        assert!((b.top() - 20.0).abs() < f32::EPSILON);
        assert!((b.bottom() - 28.0).abs() < f32::EPSILON);
        assert!((b.left() - 10.0).abs() < f32::EPSILON);
        assert!((b.right() - 22.0).abs() < f32::EPSILON);
    }

    #[test]
    fn setters_hold_extent_and_velocity() {
        let mut b = body();
        b.velocity = Vec2::new(3.0, -2.0);
        b.set_bottom(50.0);
        b.set_right(40.0);
        assert!((b.top() - 42.0).abs() < f32::EPSILON);
        assert!((b.left() - 28.0).abs() < f32::EPSILON);
        assert_eq!(b.size(), Vec2::new(12.0, 8.0));
        assert_eq!(b.velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn old_edges_track_snapshot_not_displacement() {
        let mut b = body();
        b.velocity = Vec2::new(1.0, 4.0);
        b.snapshot();
        b.integrate();
        assert!((b.old_bottom() - 28.0).abs() < f32::EPSILON);
        assert!((b.bottom() - 32.0).abs() < f32::EPSILON);
        assert!((b.old_right() - 22.0).abs() < f32::EPSILON);
        assert!((b.right() - 23.0).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(0.0, 8.0)]
    #[case(12.0, -1.0)]
    #[case(f32::NAN, 8.0)]
    #[case(12.0, f32::INFINITY)]
    fn rejects_degenerate_extent(#[case] width: f32, #[case] height: f32) {
        assert!(matches!(
            KinematicBody::new(0.0, 0.0, width, height),
            Err(BodyError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_position() {
        assert!(matches!(
            KinematicBody::new(f32::NAN, 0.0, 1.0, 1.0),
            Err(BodyError::InvalidPosition { .. })
        ));
    }
}
