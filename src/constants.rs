//! Tuning constants shared by the body, resolver, and player systems.
//!
//! The defaults keep the steady-state per-tick displacement below one tile of
//! [`DEFAULT_TILE_SIZE`], which is the regime in which the swept discrete edge
//! checks cannot tunnel.

/// Nudge applied when snapping a body against a tile's left or top face so
/// that the resting body does not satisfy the same predicate next tick.
pub const EDGE_EPSILON: f32 = 0.01;
/// Edge length of a square tile in world units.
pub const DEFAULT_TILE_SIZE: f32 = 16.0;
/// Added to vertical velocity every tick (y grows downwards).
pub const GRAVITY: f32 = 1.0;
/// Multiplier applied to both velocity components after integration.
pub const FRICTION: f32 = 0.9;
/// Horizontal velocity added by a single `move_left`/`move_right` call.
pub const MOVE_SPEED: f32 = 0.5;
/// Magnitude of the upward velocity impulse applied by a jump.
pub const JUMP_IMPULSE: f32 = 12.0;
/// Default body width used by levels that do not specify one.
pub const DEFAULT_BODY_WIDTH: f32 = 12.0;
/// Default body height used by levels that do not specify one.
pub const DEFAULT_BODY_HEIGHT: f32 = 12.0;
/// Gravity of the classic tuning preset.
pub const CLASSIC_GRAVITY: f32 = 3.0;
/// Jump impulse of the classic tuning preset.
pub const CLASSIC_JUMP_IMPULSE: f32 = 20.0;
