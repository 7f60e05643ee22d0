//! Scenarios on the built-in level, whose layout mixes one-way ledges with
//! multi-face walls and ceilings.
use approx::assert_relative_eq;
use test_utils::{body_moving, Extent};
use tilebound::{
    resolve_tile_collisions, Contact, Edge, Kinematic, Level, PhysicsConfig, Player, TileLookup,
    EDGE_EPSILON,
};

fn demo() -> Level {
    Level::demo().expect("demo level")
}

#[test]
fn layout_uses_every_partial_code() {
    let level = demo();
    for raw in 1..=14_u8 {
        assert!(
            level.grid.codes().iter().any(|code| code.raw() == raw),
            "code {raw} missing from the demo layout"
        );
    }
    assert_eq!(level.grid.code_at(3, 7).map(|c| c.raw()), Some(14));
    assert_eq!(level.grid.code_at(6, 3).map(|c| c.raw()), Some(13));
}

#[test]
fn spawned_player_falls_onto_the_floor_ledge() {
    let level = demo();
    let mut player = level.spawn_player().expect("player spawns");
    for _ in 0..100 {
        player.update(&level.physics, &level.grid);
    }
    assert!(!player.is_airborne());
    assert_relative_eq!(player.body().bottom(), 128.0 - EDGE_EPSILON, epsilon = 1e-3);
    assert_relative_eq!(player.position().x, 100.0);
}

#[test]
fn player_lands_on_the_top_of_a_top_left_bottom_tile() {
    // Tile (6, 3) is code 13 and spans x 48..64, y 96..112.
    let level = demo();
    let mut player = Player::spawn(50.0, 70.0, 12.0, 12.0).expect("valid player");
    let contacts: Vec<Contact> = (0..60)
        .flat_map(|_| player.update(&level.physics, &level.grid).contacts)
        .collect();

    assert!(!contacts.is_empty());
    assert!(contacts
        .iter()
        .all(|c| *c == Contact { edge: Edge::Top, row: 6, col: 3 }));
    assert_relative_eq!(player.body().bottom(), 96.0 - EDGE_EPSILON, epsilon = 1e-3);
    assert!(!player.is_airborne());
}

#[test]
fn moving_left_into_a_left_right_bottom_tile_stops_at_its_right_face() {
    // Tile (3, 7) is code 14 and spans x 112..128, y 48..64.
    let level = demo();
    let mut body = body_moving((130.0, 50.0), (126.0, 50.0), Extent::square(12.0));
    let contacts = resolve_tile_collisions(&mut body, &level.grid);

    assert_eq!(contacts, vec![Contact { edge: Edge::Right, row: 3, col: 7 }]);
    assert_relative_eq!(body.left(), 128.0);
    assert_relative_eq!(body.velocity.x, 0.0);
}

#[test]
fn moving_right_into_a_top_left_bottom_tile_stops_short_of_its_left_face() {
    // Tile (4, 9) is code 13 and spans x 144..160, y 64..80.
    let level = demo();
    let mut body = body_moving((130.0, 66.0), (134.0, 66.0), Extent::square(12.0));
    let contacts = resolve_tile_collisions(&mut body, &level.grid);

    assert_eq!(contacts, vec![Contact { edge: Edge::Left, row: 4, col: 9 }]);
    assert_relative_eq!(body.right(), 144.0 - EDGE_EPSILON, epsilon = 1e-4);
    assert_relative_eq!(body.velocity.x, 0.0);
}

#[test]
fn classic_tuning_is_accepted_for_the_demo_layout() {
    let mut level = demo();
    level.physics = PhysicsConfig::classic();
    level.physics.warn_if_tunnelling(level.grid.tile_size());
    let mut player = level.spawn_player().expect("player spawns");
    player.update(&level.physics, &level.grid);
    assert!(player.velocity().y > 0.0);
}
