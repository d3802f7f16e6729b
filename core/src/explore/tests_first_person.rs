use super::*;
use crate::extrusion::convert_2d_to_3d;
use crate::geometry::{ApproxEq, LineSegment2D, Point2, Point3, Vector2};
use crate::maze::{Maze2D, Maze3D};

fn open_maze() -> Maze3D {
    Maze3D::default()
}

/// A 200x200 maze with one horizontal wall spanning y in [15, 25].
fn corridor_maze(extra: &[LineSegment2D]) -> Maze3D {
    let mut maze = Maze2D::new(200, 200);
    maze.add_line(LineSegment2D::from_coords(-50.0, 20.0, 50.0, 20.0));
    for line in extra {
        maze.add_line(*line);
    }
    convert_2d_to_3d(&maze, 10.0, 50.0)
}

fn holding(f: impl FnOnce(&mut FirstPersonInput)) -> FirstPersonInput {
    let mut input = FirstPersonInput::new();
    f(&mut input);
    input
}

#[test]
fn test_jump_rises_by_jump_velocity() {
    let mut fp = FirstPersonState::default();
    fp.jump();
    fp.update_position(&open_maze(), &FirstPersonInput::new());

    assert!(fp.y().approx_eq(&3.0));
    assert!(fp.vertical_velocity().approx_eq(&2.92));
}

#[test]
fn test_jump_ignored_while_airborne() {
    let mut fp = FirstPersonState::default();
    fp.jump();
    fp.update_position(&open_maze(), &FirstPersonInput::new());

    fp.jump();
    assert!(fp.vertical_velocity().approx_eq(&2.92));
}

#[test]
fn test_player_lands_and_stays_grounded() {
    let maze = open_maze();
    let input = FirstPersonInput::new();
    let mut fp = FirstPersonState::default();
    fp.jump();

    let mut peak: f64 = 0.0;
    for _ in 0..200 {
        fp.update_position(&maze, &input);
        peak = peak.max(fp.y());
        assert!(fp.y() >= 0.0);
    }
    assert!(peak > 50.0);
    assert_eq!(fp.y(), 0.0);
    assert_eq!(fp.vertical_velocity(), 0.0);
}

#[test]
fn test_walk_forward_follows_spin() {
    let maze = open_maze();
    let input = holding(|i| i.moving_forward = true);

    let mut fp = FirstPersonState::default();
    fp.update_position(&maze, &input);
    assert!(fp.position().approx_eq(&Point3::new(0.0, 0.0, -2.0)));

    let mut fp = FirstPersonState::default();
    fp.look_right(90.0);
    fp.update_position(&maze, &input);
    assert!(fp.position().approx_eq(&Point3::new(2.0, 0.0, 0.0)));
}

#[test]
fn test_strafe_uses_strafe_velocity() {
    let config = FirstPersonConfig {
        strafe_velocity: 1.0,
        ..FirstPersonConfig::default()
    };
    let mut fp = FirstPersonState::new(config);
    fp.update_position(&open_maze(), &holding(|i| i.strafing_right = true));
    assert!(fp.position().approx_eq(&Point3::new(1.0, 0.0, 0.0)));

    fp.update_position(&open_maze(), &holding(|i| i.strafing_left = true));
    assert!(fp.position().approx_eq(&Point3::origin()));
}

#[test]
fn test_opposing_inputs_cancel() {
    let maze = open_maze();
    let input = holding(|i| {
        i.moving_forward = true;
        i.moving_backward = true;
        i.strafing_left = true;
        i.strafing_right = true;
    });

    let mut fp = FirstPersonState::default().with_position(3.0, 0.0, 4.0);
    for _ in 0..10 {
        fp.update_position(&maze, &input);
    }
    assert!(fp.position().approx_eq(&Point3::new(3.0, 0.0, 4.0)));
}

#[test]
fn test_tilt_is_clamped() {
    let mut fp = FirstPersonState::default();
    for _ in 0..30 {
        fp.look_down(3.0);
    }
    assert!(fp.tilt_degrees().approx_eq(&90.0));

    fp.look_down(3.0);
    assert!(fp.tilt_degrees().approx_eq(&90.0));

    fp.look_up(181.0);
    assert!(fp.tilt_degrees().approx_eq(&90.0));
    fp.look_up(180.0);
    assert!(fp.tilt_degrees().approx_eq(&-90.0));
}

#[test]
fn test_spin_is_unbounded() {
    let mut fp = FirstPersonState::default();
    for _ in 0..200 {
        fp.look_right(3.0);
    }
    assert!(fp.spin_degrees().approx_eq(&600.0));
    fp.look_left(1000.0);
    assert!(fp.spin_degrees().approx_eq(&-400.0));
}

#[test]
fn test_look_applies_one_increment_per_axis() {
    let mut fp = FirstPersonState::default();
    let delta = LookDelta::from_mouse((10, 10), (20, 0));
    fp.look(&delta);
    assert!(fp.tilt_degrees().approx_eq(&-3.0));
    assert!(fp.spin_degrees().approx_eq(&3.0));
}

#[test]
fn test_free_movement_is_unchanged() {
    let maze = corridor_maze(&[]);
    let r = resolve_collision(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0), &maze);
    assert!(r.approx_eq(&Vector2::new(3.0, 4.0)));
}

#[test]
fn test_slides_along_wall() {
    let maze = corridor_maze(&[]);
    let input = holding(|i| i.moving_forward = true);

    // Facing 45° into the wall, just outside the probe's reach of it
    let mut fp = FirstPersonState::default().with_position(0.0, 0.0, -12.0);
    fp.look_right(45.0);
    fp.update_position(&maze, &input);

    assert!(fp.x().approx_eq(&2f64.sqrt()));
    assert!(fp.z().approx_eq(&-12.0));
}

#[test]
fn test_concave_corner_stops_motion() {
    // An upright wall covering x in [3, 13] meets the corridor wall
    let maze = corridor_maze(&[LineSegment2D::from_coords(8.0, -50.0, 8.0, 20.0)]);
    let input = holding(|i| i.moving_forward = true);

    let mut fp = FirstPersonState::default().with_position(0.0, 0.0, -12.0);
    fp.look_right(45.0);
    fp.update_position(&maze, &input);

    assert!(fp.position().approx_eq(&Point3::new(0.0, 0.0, -12.0)));
}

#[test]
fn test_zero_length_line_does_not_block() {
    let maze = corridor_maze(&[LineSegment2D::from_coords(4.0, 4.0, 4.0, 4.0)]);
    let input = holding(|i| i.moving_forward = true);

    let mut fp = FirstPersonState::default();
    for _ in 0..3 {
        fp.update_position(&maze, &input);
    }
    assert!(fp.position().approx_eq(&Point3::new(0.0, 0.0, -6.0)));
    assert!(maze.detect_collision(&Point2::new(-80.0, -80.0)).is_err());
}

#[test]
fn test_view_matrix_stands_maze_upright() {
    let fp = FirstPersonState::default().with_position(5.0, 0.0, 0.0);
    let m = fp.view_matrix();

    let up = m.transform_point(&Point3::new(5.0, 1.0, 0.0));
    assert!(up.approx_eq(&Point3::new(0.0, 0.0, -1.0)));

    let player = m.transform_point(&Point3::new(5.0, 0.0, 0.0));
    assert!(player.approx_eq(&Point3::origin()));
}
