use super::*;
use crate::explore::LookDelta;
use crate::geometry::{ApproxEq, Matrix4, Point3, Vector3};

fn approx_matrix(a: &Matrix4, b: &Matrix4) -> bool {
    (a - b).abs().max() < 1e-9
}

#[test]
fn test_new_state_is_identity() {
    let state = OrbitState::default();
    assert!(approx_matrix(&state.model_matrix(), &Matrix4::identity()));
}

#[test]
fn test_scale_and_translation_respect_limits() {
    let mut state = OrbitState::default();
    for _ in 0..500 {
        state.multiply_x_scale_by(2.0);
        state.add_to_y_translation(-40.0);
    }
    assert_eq!(state.scale(), Vector3::new(10.0, 1.0, 1.0));
    assert_eq!(state.translation(), Vector3::new(0.0, -500.0, 0.0));

    state.set_up_x_scale(0.5, 2.0, 1.5);
    assert_eq!(state.scale().x, 1.5);
}

#[test]
fn test_reset_keeps_limits() {
    let mut state = OrbitState::default();
    state.add_to_x_translation(20.0);
    state.rotate_around_z_axis(30.0);
    state.reset();

    assert!(approx_matrix(&state.model_matrix(), &Matrix4::identity()));
    for _ in 0..200 {
        state.add_to_x_translation(5.0);
    }
    assert_eq!(state.translation().x, 500.0);
}

#[test]
fn test_rotations_compose_in_order() {
    let mut state = OrbitState::default();
    state.rotate_around_x_axis(90.0);
    state.rotate_around_y_axis(90.0);

    // x first: +y goes to +z; then y: +z goes to +x
    let p = state.rotation().transform_point(&Point3::new(0.0, 1.0, 0.0));
    assert!(p.approx_eq(&Point3::new(1.0, 0.0, 0.0)));
}

#[test]
fn test_model_matrix_scales_then_rotates_then_translates() {
    let mut state = OrbitState::default();
    state.multiply_x_scale_by(2.0);
    state.rotate_around_z_axis(90.0);
    state.add_to_x_translation(10.0);

    let p = state.model_matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
    assert!(p.approx_eq(&Point3::new(10.0, 2.0, 0.0)));
}

#[test]
fn test_drag_modes() {
    let config = OrbitConfig::default();
    let right_and_up = LookDelta {
        right: true,
        up: true,
        ..LookDelta::default()
    };

    let mut state = OrbitState::new(config);
    state.drag(OrbitAction::Translating, &right_and_up);
    assert_eq!(state.translation(), Vector3::new(5.0, 5.0, 0.0));

    state.drag(OrbitAction::Scaling, &right_and_up);
    assert!(state.scale().x.approx_eq(&config.scale_multiplier));

    let before = state.clone();
    state.drag(OrbitAction::None, &right_and_up);
    assert_eq!(state, before);
}

#[test]
fn test_orbit_input_modes() {
    assert_eq!(OrbitAction::from_modifiers(true, true), OrbitAction::Translating);
    assert_eq!(OrbitAction::from_modifiers(false, true), OrbitAction::Scaling);
    assert_eq!(OrbitAction::from_modifiers(false, false), OrbitAction::Rotating);

    let mut input = OrbitInput::default();
    input.press(OrbitAction::Rotating, 50, 50);
    assert!(input.moved_mouse_left(40) && input.moved_mouse_down(60));

    let d = input.track_mouse(40, 50);
    assert!(d.left && !d.up && !d.down);
    input.release(0, 0);
    assert_eq!(input.action, OrbitAction::None);
}
