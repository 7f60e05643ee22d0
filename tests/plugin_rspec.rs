//! Behaviour-driven tests for `TilePhysicsPlugin` in a headless app.
//!
//! A player dropped above a row of one-way platforms should land on them,
//! report the contact, and be able to jump off again.

#[path = "support/thread_safe_app.rs"]
mod thread_safe_app;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex, MutexGuard};

use bevy_app::App;
use bevy_ecs::prelude::*;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use test_utils::assert_close;
use thread_safe_app::{lock_app, SharedApp, ThreadSafeApp};
use tilebound::{
    spawn_player, Edge, Kinematic, Level, Player, PlayerIntent, TileContact, TilePhysicsPlugin,
    EDGE_EPSILON,
};

const LEVEL: &str = r#"{
    "tile_size": 16.0,
    "rows": 4,
    "columns": 4,
    "collision": [0, 0, 0, 0,
                  0, 0, 0, 0,
                  0, 0, 0, 0,
                  1, 1, 1, 1],
    "spawn": [20.0, 0.0]
}"#;

#[derive(Resource, Default)]
struct ContactLog(Vec<TileContact>);

fn record_contact(event: On<TileContact>, mut log: ResMut<ContactLog>) {
    log.0.push(*event.event());
}

#[derive(Debug, Clone)]
struct PlatformFixture {
    app: SharedApp,
    entity: Entity,
}

impl PlatformFixture {
    fn bootstrap() -> Self {
        let level = Level::from_json_str(LEVEL).expect("valid level");
        let mut app = App::new();
        app.add_plugins(TilePhysicsPlugin::new(level.clone()));
        app.init_resource::<ContactLog>();
        app.add_observer(record_contact);
        let entity = spawn_player(app.world_mut(), &level).expect("player spawns");
        Self {
            app: Arc::new(Mutex::new(ThreadSafeApp(app))),
            entity,
        }
    }

    fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    fn tick(&self, ticks: usize) {
        let mut app = self.app_guard();
        for _ in 0..ticks {
            app.update();
        }
    }

    fn request_jump(&self) {
        let mut app = self.app_guard();
        let mut intent = app
            .world_mut()
            .get_mut::<PlayerIntent>(self.entity)
            .expect("player has an intent");
        intent.jump = true;
    }

    fn player(&self) -> Player {
        *self
            .app_guard()
            .world()
            .get::<Player>(self.entity)
            .expect("player exists")
    }

    fn contacts(&self) -> Vec<TileContact> {
        self.app_guard().world().resource::<ContactLog>().0.clone()
    }
}

fn landing_scenario(ctx: &mut Scenario<PlatformFixture>) {
    ctx.before_each(|fixture| {
        *fixture = PlatformFixture::bootstrap();
        fixture.tick(60);
    });

    ctx.then("the player rests on the platform tops", |fixture| {
        let player = fixture.player();
        assert!(!player.is_airborne());
        assert_close(player.body().bottom(), 48.0 - EDGE_EPSILON);
        assert_close(player.velocity().y, 0.0);
    });

    ctx.then("each landing is reported as a top contact", |fixture| {
        let contacts = fixture.contacts();
        assert!(!contacts.is_empty());
        assert!(contacts
            .iter()
            .all(|c| c.entity == fixture.entity && c.contact.edge == Edge::Top && c.contact.row == 3));
    });

    ctx.when("a jump is requested", |ctx| {
        ctx.before_each(|fixture| {
            fixture.request_jump();
            fixture.tick(1);
        });

        ctx.then("the player leaves the platform", |fixture| {
            let player = fixture.player();
            assert!(player.is_airborne());
            assert!(player.velocity().y < 0.0);
            assert!(player.body().bottom() < 48.0 - 1.0);
        });
    });
}

#[test]
fn player_lands_on_platforms() {
    run_serial(&rspec::given(
        "a headless app with a platform row and a falling player",
        PlatformFixture::bootstrap(),
        landing_scenario,
    ));
}

#[test]
fn intents_are_consumed_each_tick() {
    let fixture = PlatformFixture::bootstrap();
    fixture.tick(60);
    fixture.request_jump();
    fixture.tick(1);
    let intent = *fixture
        .app_guard()
        .world()
        .get::<PlayerIntent>(fixture.entity)
        .expect("player has an intent");
    assert_eq!(intent, PlayerIntent::default());
}
