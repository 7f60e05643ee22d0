//! The player-controlled body and its per-tick update.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::body::{BodyError, Kinematic, KinematicBody};
use crate::config::PhysicsConfig;
use crate::grid::TileLookup;
use crate::resolver::{resolve_tile_collisions, resolve_world_bounds, BoundsContact, Contact};

/// Everything that stopped the player during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// World sides the player was clamped against.
    pub bounds: BoundsContact,
    /// Tile faces hit, in probe order.
    pub contacts: Vec<Contact>,
}

/// A body steered by move and jump requests.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    body: KinematicBody,
}

impl Player {
    /// Spawns a player with its top-left corner at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`BodyError`] for a degenerate extent or position.
    pub fn spawn(x: f32, y: f32, width: f32, height: f32) -> Result<Self, BodyError> {
        KinematicBody::new(x, y, width, height).map(|body| Self { body })
    }

    /// Current top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// `true` until the player lands on a floor or tile top.
    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        self.body.airborne
    }

    /// Nudges horizontal velocity to the left.
    pub fn move_left(&mut self, config: &PhysicsConfig) {
        self.body.velocity.x -= config.move_speed;
    }

    /// Nudges horizontal velocity to the right.
    pub fn move_right(&mut self, config: &PhysicsConfig) {
        self.body.velocity.x += config.move_speed;
    }

    /// Starts a jump when standing; does nothing mid-air.
    ///
    /// Returns `true` when the impulse was applied.
    pub fn jump(&mut self, config: &PhysicsConfig) -> bool {
        if self.body.airborne {
            return false;
        }
        self.body.velocity.y -= config.jump_impulse;
        self.body.airborne = true;
        true
    }

    /// Advances the player by one tick.
    ///
    /// Gravity is applied, the body is integrated, friction damps both
    /// velocity components, and the result is resolved first against the
    /// world bounds and then against the tiles under its corners.
    pub fn update<G>(&mut self, config: &PhysicsConfig, grid: &G) -> StepReport
    where
        G: TileLookup + ?Sized,
    {
        let body = &mut self.body;
        body.snapshot();
        body.velocity.y += config.gravity;
        body.integrate();
        body.velocity *= config.friction;

        let bounds = resolve_world_bounds(body, grid.width(), grid.height());
        let contacts = resolve_tile_collisions(body, grid);
        StepReport { bounds, contacts }
    }
}

impl Kinematic for Player {
    fn body(&self) -> &KinematicBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }
}
