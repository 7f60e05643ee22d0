//! Headless runner that drives a level for a fixed number of ticks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy_app::App;
use clap::{Parser, ValueEnum};
use log::info;
use tilebound::{
    init_logging, spawn_player, Level, MoveDirection, PhysicsConfig, Player, PlayerIntent,
    TileLookup, TilePhysicsPlugin,
};

/// Scripted horizontal input.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Walk {
    /// Stand still.
    #[default]
    None,
    /// Hold left every tick.
    Left,
    /// Hold right every tick.
    Right,
}

impl Walk {
    const fn direction(self) -> Option<MoveDirection> {
        match self {
            Self::None => None,
            Self::Left => Some(MoveDirection::Left),
            Self::Right => Some(MoveDirection::Right),
        }
    }
}

/// Physics tuning to simulate with.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Tuning {
    /// Whatever the level file specifies.
    #[default]
    Level,
    /// Heavy gravity and high jumps; can tunnel through floors.
    Classic,
}

/// Simulate a tile platformer level without rendering
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level JSON file; the built-in level is used when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 120)]
    ticks: u32,

    /// Horizontal input held every tick
    #[arg(short, long, value_enum, default_value_t = Walk::None)]
    walk: Walk,

    /// Request a jump every N ticks (0 disables jumping)
    #[arg(short, long, default_value_t = 0)]
    jump_every: u32,

    /// Physics tuning preset
    #[arg(long, value_enum, default_value_t = Tuning::Level)]
    tuning: Tuning,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut level = match &args.level {
        Some(path) => {
            Level::load(path).with_context(|| format!("loading level {}", path.display()))?
        }
        None => Level::demo().context("building the built-in level")?,
    };
    if matches!(args.tuning, Tuning::Classic) {
        level.physics = PhysicsConfig::classic();
        level.physics.warn_if_tunnelling(level.grid.tile_size());
    }

    let mut app = App::new();
    app.add_plugins(TilePhysicsPlugin::new(level.clone()));
    let entity = spawn_player(app.world_mut(), &level).context("spawning the player")?;

    for tick in 1..=args.ticks {
        let jump = args.jump_every != 0 && tick % args.jump_every == 0;
        if let Some(mut intent) = app.world_mut().get_mut::<PlayerIntent>(entity) {
            *intent = PlayerIntent {
                horizontal: args.walk.direction(),
                jump,
            };
        }
        app.update();
    }

    let player = app
        .world()
        .get::<Player>(entity)
        .context("player entity vanished")?;
    info!(
        "after {} ticks: position {}, velocity {}, airborne {}",
        args.ticks,
        player.position(),
        player.velocity(),
        player.is_airborne()
    );
    Ok(())
}
