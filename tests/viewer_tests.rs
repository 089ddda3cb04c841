mod common;

use approx::assert_relative_eq;
use common::viewer_at;
use std::f32::consts::TAU;

#[test]
fn rotation_round_trip_restores_heading() {
    for &heading in &[0.05, 0.5, 1.0, 3.0, 6.2, TAU - 0.05] {
        let mut viewer = viewer_at(100.0, 100.0, heading);
        viewer.rotate(1);
        viewer.rotate(-1);
        assert_relative_eq!(viewer.heading, heading, epsilon = 1e-5);

        viewer.rotate(-1);
        viewer.rotate(1);
        assert_relative_eq!(viewer.heading, heading, epsilon = 1e-5);
    }
}

#[test]
fn heading_stays_in_range_over_full_turns() {
    let mut viewer = viewer_at(100.0, 100.0, 0.0);
    for _ in 0..200 {
        viewer.rotate(1);
        assert!((0.0..TAU).contains(&viewer.heading));
    }
    for _ in 0..500 {
        viewer.rotate(-1);
        assert!((0.0..TAU).contains(&viewer.heading));
    }
}

#[test]
fn move_then_back_returns_home() {
    let mut viewer = viewer_at(250.0, 130.0, 2.4);
    viewer.advance(1);
    viewer.strafe(-1);
    viewer.strafe(1);
    viewer.advance(-1);
    assert_relative_eq!(viewer.x, 250.0, epsilon = 1e-3);
    assert_relative_eq!(viewer.y, 130.0, epsilon = 1e-3);
}
