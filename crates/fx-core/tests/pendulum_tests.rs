// Host-side tests for the pendulum core: integrator invariants, rope
// sources, gesture guards and the discretized cable renderer.

use fx_core::{Pendulum, PendulumParams, DEPLOY_THRESHOLD, FADE_SPAN, MAX_ROPE, MIN_ROPE};
use glam::Vec2;

const VIEWPORT: f32 = 400.0;

fn deployed() -> Pendulum {
    let mut p = Pendulum::new(PendulumParams::default());
    p.on_scroll(100.0);
    p
}

#[test]
fn scroll_drives_rope_within_bounds() {
    let mut p = Pendulum::new(PendulumParams::default());
    p.on_scroll(50.0);
    assert_eq!(p.rope_length(), 50.0);
    p.on_scroll(1.0e9);
    assert_eq!(p.rope_length(), MAX_ROPE);
    p.on_scroll(-10.0);
    assert_eq!(p.rope_length(), 0.0);
}

#[test]
fn drag_distance_clamps_rope() {
    let mut p = deployed();
    assert!(p.drag_start());
    // Far below the anchor: distance 1000 clamps to the max rope
    p.drag_move(Vec2::new(200.0, 1000.0), VIEWPORT);
    assert_eq!(p.rope_length(), MAX_ROPE);
    // Right next to the anchor: clamps up to the min rope
    p.drag_move(Vec2::new(201.0, 0.0), VIEWPORT);
    assert_eq!(p.rope_length(), MIN_ROPE);
}

#[test]
fn drag_move_zeroes_velocity() {
    let mut p = deployed();
    assert!(p.drag_start());
    p.drag_move(Vec2::new(300.0, 100.0), VIEWPORT);
    assert_eq!(p.angular_velocity(), 0.0);
    // Release resumes from rest at the dragged angle
    let angle = p.angle();
    p.drag_end();
    assert_eq!(p.angle(), angle);
    assert_eq!(p.angular_velocity(), 0.0);
}

#[test]
fn dragging_suspends_integration() {
    let mut p = deployed();
    assert!(p.drag_start());
    p.drag_move(Vec2::new(300.0, 100.0), VIEWPORT);
    let angle = p.angle();
    for _ in 0..50 {
        p.step();
    }
    assert_eq!(p.angle(), angle);
    assert_eq!(p.angular_velocity(), 0.0);
}

#[test]
fn integration_waits_for_deploy_threshold() {
    let mut p = deployed();
    assert!(p.drag_start());
    p.drag_move(Vec2::new(300.0, 100.0), VIEWPORT);
    p.drag_end();
    // Scroll back to the threshold: displaced, but not yet dropped in
    p.on_scroll(DEPLOY_THRESHOLD);
    let angle = p.angle();
    for _ in 0..50 {
        p.step();
    }
    assert_eq!(p.angle(), angle);
    assert_eq!(p.angular_velocity(), 0.0);
}

#[test]
fn angle_stays_clamped_under_heavy_gravity() {
    // Exaggerated gravity so the swing keeps slamming into the clamp
    let params = PendulumParams {
        gravity: 0.5,
        damping: 0.995,
        ..PendulumParams::default()
    };
    let max_angle = params.max_angle;
    let mut p = Pendulum::new(params);
    p.on_scroll(100.0);
    assert!(p.drag_start());
    p.drag_move(Vec2::new(320.0, 40.0), VIEWPORT);
    p.drag_end();
    for _ in 0..2000 {
        p.step();
        assert!(
            p.angle().abs() <= max_angle + 1e-6,
            "angle {} escaped the clamp",
            p.angle()
        );
    }
}

#[test]
fn clamp_does_not_zero_velocity() {
    // Strong enough forcing that the second step lands on the boundary with
    // plenty of speed left; the soft limit keeps that speed.
    let params = PendulumParams {
        gravity: 1.5,
        damping: 0.9999,
        ..PendulumParams::default()
    };
    let max_angle = params.max_angle;
    let mut p = Pendulum::new(params);
    p.on_scroll(100.0);
    assert!(p.drag_start());
    p.drag_move(Vec2::new(300.0, 30.0), VIEWPORT);
    p.drag_end();
    p.step();
    p.step();
    assert!((p.angle() + max_angle).abs() < 1e-5, "angle {}", p.angle());
    assert!(p.angular_velocity() < -0.5, "velocity {}", p.angular_velocity());
}

#[test]
fn opacity_follows_rope_length() {
    let mut p = Pendulum::new(PendulumParams::default());
    assert_eq!(p.opacity(), 0.0);
    p.on_scroll(60.0);
    assert!((p.opacity() - 0.5).abs() < 1e-6);
    p.on_scroll(DEPLOY_THRESHOLD + FADE_SPAN);
    assert_eq!(p.opacity(), 1.0);
    p.on_scroll(MAX_ROPE);
    assert_eq!(p.opacity(), 1.0);
}

#[test]
fn drag_refused_while_invisible() {
    let mut p = Pendulum::new(PendulumParams::default());
    assert!(!p.drag_start());
    assert!(!p.is_dragging());
    // Moves after the refused grab must not touch the state
    p.drag_move(Vec2::new(300.0, 100.0), VIEWPORT);
    assert_eq!(p.rope_length(), 0.0);
    assert_eq!(p.angle(), 0.0);
}

#[test]
fn drag_end_is_idempotent() {
    let mut p = Pendulum::new(PendulumParams::default());
    p.drag_end();
    p.drag_end();
    assert!(!p.is_dragging());
    assert_eq!(p.angle(), 0.0);
    assert_eq!(p.angular_velocity(), 0.0);
    assert_eq!(p.rope_length(), 0.0);
}

#[test]
fn hidden_render_parks_mic_offscreen() {
    let mut p = deployed();
    // Give it a nonzero angle first so hiding is angle-independent
    assert!(p.drag_start());
    p.drag_move(Vec2::new(300.0, 100.0), VIEWPORT);
    p.drag_end();
    p.on_scroll(3.0);
    let frame = p.render(VIEWPORT, None);
    assert!(frame.segments.is_empty());
    assert!(frame.mic_origin.x < 0.0 && frame.mic_origin.y < 0.0);
    assert!(frame.mic_origin.x < -500.0);
}

#[test]
fn cable_is_discretized_inclusive_of_endpoints() {
    let mut p = Pendulum::new(PendulumParams::default());
    p.on_scroll(120.0);
    let frame = p.render(VIEWPORT, None);
    // Anchor (200, 0) to tip (200, 120): 120 / 4 = 30 steps, 31 squares
    assert_eq!(frame.segments.len(), 31);
    assert_eq!(frame.segments[0].origin, Vec2::new(200.0, 0.0));
    assert_eq!(frame.segments[30].origin, Vec2::new(200.0, 120.0));
    for seg in &frame.segments {
        assert_eq!(seg.origin.x.rem_euclid(4.0), 0.0);
        assert_eq!(seg.origin.y.rem_euclid(4.0), 0.0);
    }
    // Mic centered on the tip, falling back to the 120px default size
    assert_eq!(frame.mic_origin, Vec2::new(140.0, 60.0));
}

#[test]
fn measured_mic_size_offsets_the_origin() {
    let mut p = Pendulum::new(PendulumParams::default());
    p.on_scroll(120.0);
    let frame = p.render(VIEWPORT, Some(Vec2::new(80.0, 40.0)));
    assert_eq!(frame.mic_origin, Vec2::new(160.0, 100.0));
    // Degenerate measurements fall back to the default
    let frame = p.render(VIEWPORT, Some(Vec2::ZERO));
    assert_eq!(frame.mic_origin, Vec2::new(140.0, 60.0));
}

#[test]
fn short_rope_renders_through_min_rope_floor() {
    let mut p = Pendulum::new(PendulumParams::default());
    p.on_scroll(10.0);
    // Above the hide threshold but below min rope: rendered at min length
    let frame = p.render(VIEWPORT, None);
    assert!(!frame.segments.is_empty());
    assert_eq!(
        frame.segments.last().map(|s| s.origin),
        Some(Vec2::new(200.0, MIN_ROPE))
    );
}
