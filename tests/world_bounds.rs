//! Tests for clamping bodies inside the world rectangle.
use approx::assert_relative_eq;
use glam::Vec2;
use rstest::rstest;
use tilebound::{resolve_world_bounds, BoundsContact, KinematicBody};

fn body_at(x: f32, y: f32, velocity: Vec2) -> KinematicBody {
    let mut body = KinematicBody::new(x, y, 10.0, 10.0).expect("valid body");
    body.velocity = velocity;
    body
}

#[test]
fn left_overshoot_snaps_to_zero() {
    let mut body = body_at(-5.0, 50.0, Vec2::new(-3.0, 2.0));
    let contact = resolve_world_bounds(&mut body, 200.0, 100.0);
    assert_relative_eq!(body.left(), 0.0);
    assert_relative_eq!(body.velocity.x, 0.0);
    assert_relative_eq!(body.velocity.y, 2.0);
    assert_eq!(
        contact,
        BoundsContact {
            left: true,
            ..BoundsContact::default()
        }
    );
}

#[test]
fn floor_overshoot_lands_body() {
    // Bottom edge at 105 in a world 100 high.
    let mut body = body_at(20.0, 95.0, Vec2::new(1.0, 4.0));
    assert!(body.airborne);
    let contact = resolve_world_bounds(&mut body, 200.0, 100.0);
    assert_relative_eq!(body.bottom(), 100.0);
    assert_relative_eq!(body.velocity.y, 0.0);
    assert_relative_eq!(body.velocity.x, 1.0);
    assert!(!body.airborne);
    assert!(contact.bottom);
}

#[rstest]
#[case::right(195.0, 50.0, 190.0, 50.0)]
#[case::top(20.0, -1.0, 20.0, 0.0)]
#[case::corner(-2.0, -2.0, 0.0, 0.0)]
fn clamps_each_axis(
    #[case] x: f32,
    #[case] y: f32,
    #[case] expected_x: f32,
    #[case] expected_y: f32,
) {
    let mut body = body_at(x, y, Vec2::new(-1.0, -1.0));
    let contact = resolve_world_bounds(&mut body, 200.0, 100.0);
    assert!(contact.any());
    assert_relative_eq!(body.position.x, expected_x);
    assert_relative_eq!(body.position.y, expected_y);
    assert!(body.airborne, "only the floor ends a jump");
}

#[test]
fn inside_body_is_untouched() {
    let mut body = body_at(20.0, 20.0, Vec2::new(3.0, -4.0));
    let before = body;
    assert!(!resolve_world_bounds(&mut body, 200.0, 100.0).any());
    assert_eq!(body, before);
}
