use super::utils_2d::{cross_2d, midpoint};
use super::wall::WallSide;
use super::*;
use crate::io::TextSerializable;

fn horizontal_wall() -> (LineSegment2D, Wall) {
    let line = LineSegment2D::from_coords(-50.0, 0.0, 50.0, 0.0);
    let wall = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    (line, wall)
}

#[test]
fn test_fit_to_line_corners() {
    let (_, wall) = horizontal_wall();

    let front = wall.front_end.corners();
    assert!(front[0].approx_eq(&Point3::new(-50.0, 5.0, -25.0)));
    assert!(front[1].approx_eq(&Point3::new(-50.0, 5.0, 25.0)));
    assert!(front[2].approx_eq(&Point3::new(-50.0, -5.0, 25.0)));
    assert!(front[3].approx_eq(&Point3::new(-50.0, -5.0, -25.0)));

    let back = wall.back_end.corners();
    assert!(back[0].approx_eq(&Point3::new(50.0, -5.0, -25.0)));
    assert!(back[2].approx_eq(&Point3::new(50.0, 5.0, 25.0)));
}

#[test]
fn test_faces_share_corners() {
    let line = LineSegment2D::from_coords(3.0, -7.0, 18.0, 11.0);
    let wall = Wall::fit_to_line(&line, 4.0, 12.0, 50.0, 50.0);

    let front = wall.front_end.corners();
    let back = wall.back_end.corners();
    let left = wall.left_side.corners();
    let right = wall.right_side.corners();
    let top = wall.top.corners();

    // a1 b1 c1 d1 / a2 b2 c2 d2 must be the very same points on every face
    assert_eq!(left[3], front[0]);
    assert_eq!(left[2], front[1]);
    assert_eq!(right[1], front[2]);
    assert_eq!(right[0], front[3]);
    assert_eq!(right[3], back[0]);
    assert_eq!(right[2], back[1]);
    assert_eq!(left[1], back[2]);
    assert_eq!(left[0], back[3]);

    assert_eq!(top[0], front[1]);
    assert_eq!(top[1], back[2]);
    assert_eq!(top[2], back[1]);
    assert_eq!(top[3], front[2]);
}

#[test]
fn test_fit_to_line_is_idempotent() {
    let line = LineSegment2D::from_coords(-12.5, 4.0, 30.0, -9.0);
    let a = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    let b = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    assert_eq!(a, b);
}

#[test]
fn test_face_texture_tiling() {
    let (_, wall) = horizontal_wall();
    // Long side: 100 wide, 50 tall with a 50x50 tile
    let tex = wall.left_side.tex_coords;
    assert!(tex[2].approx_eq(&Point2::new(2.0, 0.0)));
    assert!(tex[0].approx_eq(&Point2::new(0.0, 1.0)));
    // End cap: 10 wide
    let cap = wall.front_end.tex_coords;
    assert!(cap[3].approx_eq(&Point2::new(0.2, 1.0)));
}

#[test]
fn test_base_edges_walk_clockwise() {
    let (_, wall) = horizontal_wall();
    let inside = Point2::new(0.0, 0.0);

    for side in [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right] {
        assert!(wall.base_edge(side).is_to_the_right_of_me(&inside), "{:?}", side);
    }
}

#[test]
fn test_is_inside_me() {
    let (line, wall) = horizontal_wall();

    assert!(wall.is_inside_me(&midpoint(&line.p1, &line.p2)));
    assert!(wall.is_inside_me(&Point2::new(-49.0, 4.9)));
    assert!(!wall.is_inside_me(&Point2::new(0.0, 6.0)));
    assert!(!wall.is_inside_me(&Point2::new(500.0, 500.0)));
}

#[test]
fn test_is_inside_me_boundary_is_inclusive() {
    let line = LineSegment2D::from_coords(0.0, 0.0, 10.0, 0.0);
    let wall = Wall::fit_to_line(&line, 2.0, 5.0, 50.0, 50.0);

    for _ in 0..3 {
        assert!(wall.is_inside_me(&Point2::new(5.0, 1.0)));
        assert!(wall.is_inside_me(&Point2::new(10.0, -1.0)));
    }
    assert!(!wall.is_inside_me(&Point2::new(5.0, 1.01)));
}

#[test]
fn test_is_inside_me_rotated() {
    let line = LineSegment2D::from_coords(0.0, 0.0, 10.0, 10.0);
    let wall = Wall::fit_to_line(&line, 2.0, 5.0, 50.0, 50.0);

    assert!(wall.is_inside_me(&Point2::new(5.0, 5.0)));
    assert!(wall.is_inside_me(&Point2::new(5.5, 4.5)));
    // Inside the axis-aligned bounds, but well off the diagonal
    assert!(!wall.is_inside_me(&Point2::new(8.0, 2.0)));
    assert!(!wall.is_inside_me(&Point2::new(-1.0, -1.0)));
}

#[test]
fn test_resolve_collision_without_hit() {
    let (_, wall) = horizontal_wall();
    let travel = LineSegment2D::from_coords(0.0, 20.0, 30.0, 40.0);

    assert_eq!(wall.collision_surface(&travel), Err(NoCollisionDetected));
    let v = wall.resolve_collision(&travel);
    assert!(v.approx_eq(&(travel.p2 - travel.p1)));
}

#[test]
fn test_resolve_collision_slides_along_hit_edge() {
    // A diagonal wall whose left side passes through (40, 0)
    let a = 5.0 / 2f64.sqrt();
    let line = LineSegment2D::from_coords(20.0 + a, -a - 20.0, 60.0 + a, -a + 20.0);
    let wall = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    let travel = LineSegment2D::from_coords(0.0, 0.0, 100.0, 0.0);

    let hit = wall.collision_surface(&travel).unwrap();
    assert_eq!(hit, wall.base_edge(WallSide::Left));
    assert!(travel.intersection(&hit).unwrap().approx_eq(&Point2::new(40.0, 0.0)));

    let slide = wall.resolve_collision(&travel);
    assert!(cross_2d(&slide, &hit.direction()).abs() < 1e-9);
    assert!(slide.norm().approx_eq(&(100.0 * 45f64.to_radians().cos())));
    assert!(slide.approx_eq(&Vector2::new(50.0, 50.0)));
}

#[test]
fn test_head_on_collision_stops() {
    let line = LineSegment2D::from_coords(50.0, -20.0, 50.0, 20.0);
    let wall = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    let travel = LineSegment2D::from_coords(0.0, 0.0, 100.0, 0.0);

    assert!(wall.resolve_collision(&travel).approx_eq(&Vector2::zeros()));
}

#[test]
fn test_corner_tie_prefers_left_side() {
    let line = LineSegment2D::from_coords(0.0, 0.0, 10.0, 0.0);
    let wall = Wall::fit_to_line(&line, 2.0, 5.0, 50.0, 50.0);
    // Passes exactly through the shared front/left corner (0, 1)
    let travel = LineSegment2D::from_coords(-5.0, 6.0, 5.0, -4.0);

    assert_eq!(wall.collision_surface(&travel).unwrap(), wall.base_edge(WallSide::Left));
    assert!(wall.resolve_collision(&travel).approx_eq(&Vector2::new(10.0, 0.0)));
}

#[test]
fn test_degenerate_line_builds_flat_wall() {
    let line = LineSegment2D::from_coords(4.0, 4.0, 4.0, 4.0);
    let wall = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);

    for face in wall.faces() {
        for c in face.corners() {
            assert!(c.x.is_finite() && c.y.is_finite());
        }
    }
    let travel = LineSegment2D::from_coords(0.0, 0.0, 8.0, 8.0);
    assert!(wall.resolve_collision(&travel).approx_eq(&Vector2::new(8.0, 8.0)));

    assert!(!wall.is_inside_me(&Point2::new(-100.0, 100.0)));
    assert!(!wall.is_inside_me(&Point2::new(4.0, 4.0)));
}

#[test]
fn test_wall_text_round_trip() {
    let line = LineSegment2D::from_coords(-12.5, 4.0, 30.0, -9.0);
    let wall = Wall::fit_to_line(&line, 10.0, 50.0, 50.0, 50.0);
    let text = wall.to_text().unwrap();
    assert_eq!(text.lines().count(), 20);

    let back = Wall::from_text(&text).unwrap();
    for (a, b) in wall.faces().iter().zip(back.faces().iter()) {
        for i in 0..4 {
            assert!(a.corners()[i].approx_eq(&b.corners()[i]));
            assert!(a.tex_coords[i].approx_eq(&b.tex_coords[i]));
        }
    }
}
