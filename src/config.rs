//! Physics tuning shared by every player in a level.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    CLASSIC_GRAVITY, CLASSIC_JUMP_IMPULSE, FRICTION, GRAVITY, JUMP_IMPULSE, MOVE_SPEED,
};

/// Raised when a tuning value would make the simulation diverge or stall.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Gravity was negative or not finite.
    #[error("gravity must be finite and non-negative, got {0}")]
    Gravity(f32),
    /// Friction was outside `(0, 1)`.
    #[error("friction must lie strictly between 0 and 1, got {0}")]
    Friction(f32),
    /// Move speed was negative or not finite.
    #[error("move speed must be finite and non-negative, got {0}")]
    MoveSpeed(f32),
    /// Jump impulse was negative or not finite.
    #[error("jump impulse must be finite and non-negative, got {0}")]
    JumpImpulse(f32),
}

/// Per-tick forces and impulses applied by the player update step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Added to vertical velocity each tick.
    pub gravity: f32,
    /// Velocity multiplier applied after integration.
    pub friction: f32,
    /// Horizontal velocity added per move request.
    pub move_speed: f32,
    /// Upward velocity applied by a jump.
    pub jump_impulse: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
        }
    }
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl PhysicsConfig {
    /// Heavier, higher-jumping tuning for arcade-style levels.
    ///
    /// Terminal fall speed is 27 units per tick, so on 16-unit tiles a
    /// falling body can pass a floor between two ticks.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            gravity: CLASSIC_GRAVITY,
            friction: FRICTION,
            move_speed: MOVE_SPEED,
            jump_impulse: CLASSIC_JUMP_IMPULSE,
        }
    }

    /// Checks that every value keeps the simulation finite.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !non_negative(self.gravity) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !(self.friction.is_finite() && self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !non_negative(self.move_speed) {
            return Err(ConfigError::MoveSpeed(self.move_speed));
        }
        if !non_negative(self.jump_impulse) {
            return Err(ConfigError::JumpImpulse(self.jump_impulse));
        }
        Ok(())
    }

    /// Vertical speed a body settles at when falling freely.
    ///
    /// With `v' = (v + g) * f` the fixed point is `g * f / (1 - f)`.
    #[must_use]
    pub fn terminal_fall_speed(&self) -> f32 {
        self.gravity * self.friction / (1.0 - self.friction)
    }

    /// Logs a warning for each speed that can carry a body across a whole
    /// tile in one tick, where the edge checks can miss a face.
    pub fn warn_if_tunnelling(&self, tile_size: f32) {
        let fall = self.terminal_fall_speed();
        if fall >= tile_size {
            warn!("terminal fall speed {fall:.2} reaches tile size {tile_size}; floors may be skipped");
        }
        let rise = (self.jump_impulse - self.gravity) * self.friction;
        if rise >= tile_size {
            warn!("jump speed {rise:.2} reaches tile size {tile_size}; ceilings may be skipped");
        }
    }
}
