//! Bevy plugin wiring tile physics into the schedule.
//!
//! The plugin owns the level's static geometry and tuning as resources and
//! runs two chained systems every `Update`: intents recorded by the input
//! driver are applied to players, then players are stepped and resolved
//! against the grid. Tile hits are surfaced as [`TileContact`] events.

use bevy_app::{App, Plugin, Update};
use bevy_ecs::prelude::*;
use log::debug;

use crate::body::BodyError;
use crate::config::PhysicsConfig;
use crate::grid::TileGrid;
use crate::level::Level;
use crate::player::Player;
use crate::resolver::Contact;

/// Collision geometry shared by every player.
#[derive(Resource, Debug, Clone)]
pub struct LevelGrid(pub TileGrid);

/// Physics tuning shared by every player.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PhysicsSettings(pub PhysicsConfig);

/// Horizontal steering requested for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

/// Input recorded for a player by the external driver.
///
/// Intents are consumed by [`apply_player_intents_system`] and reset each
/// tick, so a held key must be re-recorded every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    /// Requested steering, if any.
    pub horizontal: Option<MoveDirection>,
    /// Requested jump.
    pub jump: bool,
}

/// Event raised for each tile face that stopped a player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileContact {
    /// Player entity that was stopped.
    pub entity: Entity,
    /// Face and tile that stopped it.
    pub contact: Contact,
}

/// Applies and clears every player's recorded intent.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn apply_player_intents_system(
    settings: Res<PhysicsSettings>,
    mut players: Query<(&mut Player, &mut PlayerIntent)>,
) {
    let config = &settings.0;
    for (mut player, mut intent) in &mut players {
        match intent.horizontal {
            Some(MoveDirection::Left) => player.move_left(config),
            Some(MoveDirection::Right) => player.move_right(config),
            None => {}
        }
        if intent.jump && !player.jump(config) {
            debug!("jump ignored while airborne");
        }
        *intent = PlayerIntent::default();
    }
}

/// Steps every player one tick and reports tile contacts.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn step_players_system(
    mut commands: Commands,
    grid: Res<LevelGrid>,
    settings: Res<PhysicsSettings>,
    mut players: Query<(Entity, &mut Player)>,
) {
    for (entity, mut player) in &mut players {
        let report = player.update(&settings.0, &grid.0);
        for contact in report.contacts {
            commands.trigger(TileContact { entity, contact });
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_tile_contact(event: On<TileContact>) {
    let TileContact { entity, contact } = event.event();
    debug!(
        "{entity:?} stopped by {:?} face of tile ({}, {})",
        contact.edge, contact.row, contact.col
    );
}

/// Spawns the level's player with an empty intent.
///
/// # Errors
/// Returns [`BodyError`] when the level's spawn rectangle is unusable.
pub fn spawn_player(world: &mut World, level: &Level) -> Result<Entity, BodyError> {
    let player = level.spawn_player()?;
    Ok(world.spawn((player, PlayerIntent::default())).id())
}

/// Bevy plugin installing the level resources and tile physics systems.
#[derive(Debug, Clone)]
pub struct TilePhysicsPlugin {
    level: Level,
}

impl TilePhysicsPlugin {
    /// Creates a plugin simulating `level`.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Plugin for TilePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LevelGrid(self.level.grid.clone()))
            .insert_resource(PhysicsSettings(self.level.physics))
            .add_observer(log_tile_contact)
            .add_systems(
                Update,
                (apply_player_intents_system, step_players_system).chain(),
            );
    }
}
