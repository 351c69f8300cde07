use hitch::{PointMass, Vec2};

const DT: f64 = 0.016;

#[test]
fn force_from_rest_moves_by_acceleration_times_dt_squared() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(0.0, 0.0));
    p.add_force(Vec2::new(0.0, 100.0));
    p.update(1.0);
    assert!(p.pos.x.abs() < 1e-12);
    assert!((p.pos.y - 100.0).abs() < 1e-12, "pos.y = {}", p.pos.y);
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn free_fall_follows_verlet_series() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(0.0, 0.0));
    let g = 450.0;
    let steps = 60;

    for _ in 0..steps {
        p.add_force(Vec2::new(0.0, g));
        p.update(DT);
    }

    // With zero start velocity, step n lands at g*dt^2 * n(n+1)/2.
    let expected_y = g * DT * DT * (steps * (steps + 1) / 2) as f64;
    assert!((p.pos.y - expected_y).abs() < 1e-6, "pos.y = {}, expected {}", p.pos.y, expected_y);
}

#[test]
fn force_is_consumed_by_update() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(0.0, 0.0));
    p.add_force(Vec2::new(10.0, 0.0));
    p.update(1.0);
    let after_first = p.pos.x;
    p.update(1.0);
    // Only inertia carries it on: same displacement again.
    assert!((p.pos.x - 2.0 * after_first).abs() < 1e-12);
}

#[test]
fn pinned_axis_holds_its_value_under_force() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(5.0, 5.0));
    p.set_pin_x(Some(10.0));
    p.add_force(Vec2::new(1000.0, 1000.0));
    p.update(DT);

    assert_eq!(p.pos.x, 10.0);
    assert!((p.pos.y - (5.0 + 1000.0 * DT * DT)).abs() < 1e-12);

    p.add_force(Vec2::new(-5000.0, 0.0));
    p.update(DT);
    assert_eq!(p.pos.x, 10.0);
}

#[test]
fn fully_pinned_point_stays_fixed() {
    let mut p: PointMass<f32> = PointMass::pinned(Vec2::new(5.0, 5.0));
    p.add_force(Vec2::new(1000.0, 1000.0));
    p.update(1.0 / 60.0);
    assert_eq!(p.pos, Vec2::new(5.0, 5.0));
    assert!(p.is_pinned());
}

#[test]
fn damping_scales_inferred_velocity() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(10.0, 0.0)).with_damping(0.5);
    p.prev_pos = Vec2::new(0.0, 0.0);
    p.update(DT);
    assert!((p.pos.x - 15.0).abs() < 1e-12);
    assert!((p.velocity().x - 5.0).abs() < 1e-12);
}

#[test]
fn constrain_to_box_clamps_previous_position_outside_same_bound() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(-5.0, 150.0));
    p.prev_pos = Vec2::new(-3.0, 120.0);
    p.constrain_to_box(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));

    assert_eq!(p.pos, Vec2::new(0.0, 100.0));
    assert_eq!(p.prev_pos, Vec2::new(0.0, 100.0));

    // No velocity spike from the clamp.
    p.update(DT);
    assert_eq!(p.pos, Vec2::new(0.0, 100.0));
}

#[test]
fn constrain_to_box_keeps_previous_position_inside_bound() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(-5.0, 50.0));
    p.prev_pos = Vec2::new(2.0, 50.0);
    p.constrain_to_box(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));

    assert_eq!(p.pos.x, 0.0);
    assert_eq!(p.prev_pos.x, 2.0);
}

#[test]
fn pin_at_teleports_without_velocity() {
    let mut p: PointMass<f64> = PointMass::new(Vec2::new(0.0, 0.0));
    p.pin_at(Vec2::new(30.0, 40.0));
    assert_eq!(p.velocity(), Vec2::zero());
    p.update(DT);
    assert_eq!(p.pos, Vec2::new(30.0, 40.0));

    p.unpin();
    assert!(!p.is_pinned());
    p.add_force(Vec2::new(0.0, 100.0));
    p.update(1.0);
    assert!((p.pos.y - 140.0).abs() < 1e-12);
}
