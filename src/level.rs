//! Level description files.
//!
//! A level is a JSON document naming the collision grid, where the player
//! starts, and optionally overriding the physics tuning:
//!
//! ```json
//! {
//!   "tile_size": 16.0,
//!   "rows": 2,
//!   "columns": 3,
//!   "collision": [0, 0, 0,
//!                 1, 15, 1],
//!   "spawn": [20.0, 0.0],
//!   "physics": { "gravity": 0.8 }
//! }
//! ```
//!
//! `body` and `physics` may be omitted; `body` defaults to
//! [`DEFAULT_BODY_WIDTH`] by [`DEFAULT_BODY_HEIGHT`].

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::body::BodyError;
use crate::config::{ConfigError, PhysicsConfig};
use crate::constants::{DEFAULT_BODY_HEIGHT, DEFAULT_BODY_WIDTH, DEFAULT_TILE_SIZE};
use crate::grid::{GridError, TileGrid};
use crate::player::Player;

/// Errors raised while reading or validating a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level {path}: {source}")]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document was not valid level JSON.
    #[error("malformed level document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The collision grid was unusable.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The physics overrides were unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The player's spawn rectangle was unusable.
    #[error(transparent)]
    Body(#[from] BodyError),
    /// The body is wider or taller than one tile, so its corners cannot
    /// reach every tile it overlaps.
    #[error("body of size {size} does not fit in a {tile_size}-unit tile")]
    BodyLargerThanTile {
        /// Requested body extent.
        size: Vec2,
        /// Tile edge length.
        tile_size: f32,
    },
    /// The spawn rectangle does not fit inside the world.
    #[error("spawn rectangle at {spawn} with size {size} leaves the {width}x{height} world")]
    SpawnOutOfBounds {
        /// Requested top-left corner.
        spawn: Vec2,
        /// Requested body extent.
        size: Vec2,
        /// World width.
        width: f32,
        /// World height.
        height: f32,
    },
}

/// Serialised form of a level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelData {
    /// Tile edge length in world units.
    pub tile_size: f32,
    /// Grid row count.
    pub rows: usize,
    /// Grid column count.
    pub columns: usize,
    /// Row-major collision codes.
    pub collision: Vec<u8>,
    /// Player top-left corner at spawn.
    pub spawn: Vec2,
    /// Player width and height.
    #[serde(default = "default_body")]
    pub body: Vec2,
    /// Physics overrides; omitted fields keep their defaults.
    #[serde(default)]
    pub physics: PhysicsConfig,
}

const fn default_body() -> Vec2 {
    Vec2::new(DEFAULT_BODY_WIDTH, DEFAULT_BODY_HEIGHT)
}

/// A validated level ready to simulate.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Static collision geometry.
    pub grid: TileGrid,
    /// Player top-left corner at spawn.
    pub spawn: Vec2,
    /// Player width and height.
    pub body: Vec2,
    /// Physics tuning.
    pub physics: PhysicsConfig,
}

/// Collision layout of the built-in level: a 12x9 room of one-way ledges,
/// walls, and ceilings that uses every multi-face code except 15.
#[rustfmt::skip]
const DEMO_COLLISION: [[u8; 12]; 9] = [
    [0, 4, 4, 4,  0, 0, 4,  4, 4,  4, 4, 0],
    [2, 0, 0, 0, 12, 6, 0,  0, 0,  0, 0, 8],
    [2, 0, 0, 0,  0, 0, 0,  9, 5,  5, 1, 0],
    [0, 7, 0, 0,  0, 0, 0, 14, 0,  0, 8, 0],
    [2, 0, 0, 1,  0, 1, 0,  0, 0, 13, 4, 0],
    [2, 0, 0, 0,  0, 0, 0,  0, 0,  0, 0, 8],
    [2, 0, 0, 13, 1, 7, 0,  0, 11, 0, 9, 0],
    [0, 3, 0, 0, 10, 0, 0,  0, 8,  1, 0, 0],
    [0, 0, 1, 1,  0, 1, 1,  1, 0,  0, 0, 0],
];

/// Top-left corner of the player in the built-in level.
const DEMO_SPAWN: Vec2 = Vec2::new(100.0, 100.0);

impl Level {
    /// Validates serialised level data.
    ///
    /// # Errors
    /// Returns [`LevelError`] when the grid, physics, or spawn rectangle is
    /// unusable, or when the body is larger than a tile.
    pub fn from_data(data: LevelData) -> Result<Self, LevelError> {
        let grid = TileGrid::new(data.rows, data.columns, data.tile_size, &data.collision)?;
        data.physics.validate()?;
        Player::spawn(data.spawn.x, data.spawn.y, data.body.x, data.body.y)?;
        if data.body.x > data.tile_size || data.body.y > data.tile_size {
            return Err(LevelError::BodyLargerThanTile {
                size: data.body,
                tile_size: data.tile_size,
            });
        }
        let max = data.spawn + data.body;
        if data.spawn.x < 0.0 || data.spawn.y < 0.0 || max.x > grid.width() || max.y > grid.height()
        {
            return Err(LevelError::SpawnOutOfBounds {
                spawn: data.spawn,
                size: data.body,
                width: grid.width(),
                height: grid.height(),
            });
        }
        data.physics.warn_if_tunnelling(data.tile_size);
        Ok(Self {
            grid,
            spawn: data.spawn,
            body: data.body,
            physics: data.physics,
        })
    }

    /// Parses and validates a JSON level document.
    ///
    /// # Errors
    /// Returns [`LevelError::Parse`] for malformed JSON plus every error
    /// [`Level::from_data`] can return.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let data: LevelData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Reads and validates a JSON level file.
    ///
    /// # Errors
    /// Returns [`LevelError::Io`] when the file cannot be read plus every
    /// error [`Level::from_json_str`] can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|source| LevelError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let level = Self::from_json_str(&json)?;
        debug!(
            "loaded level {} ({}x{} tiles)",
            path_ref.display(),
            level.grid.columns(),
            level.grid.rows()
        );
        Ok(level)
    }

    /// The built-in level used when no file is given.
    ///
    /// # Errors
    /// Only fails if the built-in layout is inconsistent with the default
    /// tuning, which the test suite guards against.
    pub fn demo() -> Result<Self, LevelError> {
        Self::from_data(LevelData {
            tile_size: DEFAULT_TILE_SIZE,
            rows: DEMO_COLLISION.len(),
            columns: DEMO_COLLISION.first().map_or(0, |row| row.len()),
            collision: DEMO_COLLISION.iter().flatten().copied().collect(),
            spawn: DEMO_SPAWN,
            body: default_body(),
            physics: PhysicsConfig::default(),
        })
    }

    /// A fresh player at the spawn point.
    ///
    /// # Errors
    /// Returns [`BodyError`] only if the level was built by hand with an
    /// invalid body; validated levels always succeed.
    pub fn spawn_player(&self) -> Result<Player, BodyError> {
        Player::spawn(self.spawn.x, self.spawn.y, self.body.x, self.body.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_level_is_valid() {
        let level = Level::demo().expect("demo level");
        assert_eq!(level.grid.columns(), 12);
        assert_eq!(level.grid.rows(), 9);
        let player = level.spawn_player().expect("player spawns");
        assert_eq!(player.position(), DEMO_SPAWN);
        assert!(player.is_airborne());
    }
}
