use hitch::{TowTrailer, Vec2, VerletEngine};

/// Drives a sleigh the way the game's player does: re-pin the tow point on the
/// player, add drag to the trail point, step once per frame.
fn play(frames: usize) -> Vec<Vec2<f32>> {
    let mut engine: VerletEngine<f32> = VerletEngine::new(288.0, 288.0, 450.0);
    let mut trailer = TowTrailer::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 100.0));
    trailer.trail_point_mut().damping = 0.95;
    let sleigh = engine.add_body(trailer);

    let mut player_y = 100.0f32;
    let mut speed = 0.0f32;
    let mut trail = Vec::with_capacity(frames);
    for _ in 0..frames {
        if player_y > 150.0 {
            speed = -3.6;
        }
        speed += 0.125;
        player_y += speed;

        let trailer = engine.body_mut(sleigh).unwrap();
        trailer.tow_to(Vec2::new(100.0, player_y));
        trailer.trail_point_mut().add_force(Vec2::new(-2.0 * 0.5 * 3900.0, -0.06 * 3900.0));
        engine.update(0.02);

        trail.push(engine.body(sleigh).unwrap().trail_point().pos);
    }
    trail
}

#[test]
fn sleigh_run_is_deterministic() {
    let runs: Vec<_> = (0..5).map(|_| play(300)).collect();

    for r in &runs[1..] {
        for (a, b) in runs[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn frame_slicing_does_not_change_trajectory() {
    let build = || {
        let mut engine: VerletEngine<f64> = VerletEngine::new(288.0, 400.0, 450.0);
        let handle = engine.add_body(TowTrailer::new(Vec2::new(150.0, 50.0), Vec2::new(90.0, 50.0)));
        engine.body_mut(handle).unwrap().tow_to(Vec2::new(150.0, 50.0));
        (engine, handle)
    };

    let (mut fine, a) = build();
    let (mut coarse, b) = build();
    let mut fine_steps = 0;
    let mut coarse_steps = 0;
    for _ in 0..100 {
        fine_steps += fine.update(0.016);
    }
    for _ in 0..50 {
        coarse_steps += coarse.update(0.016 * 2.0);
    }

    assert_eq!(fine_steps, 100);
    assert_eq!(coarse_steps, 100);
    assert_eq!(
        fine.body(a).unwrap().trail_point().pos,
        coarse.body(b).unwrap().trail_point().pos
    );
}

#[test]
fn trail_hangs_behind_a_moving_player() {
    let trail = play(200);
    let last = trail[trail.len() - 1];
    assert!(last.x < 100.0, "drag should keep the sleigh behind, x = {}", last.x);
    assert!(last.x.is_finite() && last.y.is_finite());
}
