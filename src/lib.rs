//! Library crate providing tile-based AABB collision for 2D platformers.
//! Re-exports the body, grid, resolver, and player types used by the headless
//! runner and tests.
pub mod body;
pub mod collision_code;
pub mod config;
pub mod constants;
pub mod grid;
pub mod level;
pub mod logging;
pub mod numeric;
pub mod player;
pub mod plugin;
pub mod resolver;
pub use constants::*;

// Re-export commonly used items
pub use body::{BodyError, Kinematic, KinematicBody};
pub use collision_code::{CollisionCode, Edge, InvalidCollisionCode, EDGE_CHECKS};
pub use config::{ConfigError, PhysicsConfig};
pub use grid::{GridError, TileGrid, TileLookup};
pub use level::{Level, LevelData, LevelError};
pub use logging::init as init_logging;
pub use player::{Player, StepReport};
pub use plugin::{
    apply_player_intents_system, spawn_player, step_players_system, LevelGrid, MoveDirection,
    PhysicsSettings, PlayerIntent, TileContact, TilePhysicsPlugin,
};
pub use resolver::{
    check_bottom_edge, check_left_edge, check_right_edge, check_top_edge, resolve_tile,
    resolve_tile_collisions, resolve_world_bounds, BoundsContact, Contact,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use tilebound::prelude::*;
    //! ```

    pub use crate::resolve_tile_collisions;
    pub use crate::resolve_world_bounds;
    pub use crate::CollisionCode;
    pub use crate::Kinematic;
    pub use crate::KinematicBody;
    pub use crate::Level;
    pub use crate::PhysicsConfig;
    pub use crate::Player;
    pub use crate::TileGrid;
    pub use crate::TileLookup;
    pub use crate::TilePhysicsPlugin;
}
