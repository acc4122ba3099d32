//! # Trail Behaviour Tests
//!
//! Observable behaviour of a running trail, frame by frame: the spawn
//! rule, the population ceiling, ageing, fading and linking.

use glimmer::core::{find_links, Particle, TrailSimulation};
use glimmer::shared::{Color, PhysicsConfig, Vec2};
use glimmer::ui::DrawCommand;
use glimmer::{CursorTrail, HeadlessHost, HostEvent, TrailConfig, Viewport};

fn seeded(seed: u64) -> TrailConfig {
    TrailConfig {
        seed: Some(seed),
        ..TrailConfig::default()
    }
}

fn move_to(x: f32, y: f32) -> HostEvent {
    HostEvent::PointerMove { x, y }
}

/// Test: the live set never exceeds the ceiling, however fast the pointer.
#[test]
fn test_population_bounded() {
    let mut host = HeadlessHost::new(Viewport::new(1920, 1080));
    let mut trail = CursorTrail::new(&mut host, seeded(7));
    trail.activate();

    for frame in 0..600u16 {
        let x = if frame % 2 == 0 { 0.0 } else { 1500.0 };
        trail.dispatch(move_to(x, f32::from(frame % 400)));
        let report = trail.fire_pending_frame().unwrap();
        assert!(report.tick.alive <= 80, "frame {frame}: {} alive", report.tick.alive);
        assert!(report.tick.spawned <= 4);
    }
    assert_eq!(trail.stats().peak_alive, 80);
}

/// Test: a 10 px move spawns exactly 3, a 1 px move spawns none.
#[test]
fn test_spawn_threshold_and_count() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut trail = CursorTrail::new(&mut host, seeded(1));
    trail.activate();

    trail.dispatch(move_to(100.0, 100.0));
    assert_eq!(trail.fire_pending_frame().unwrap().tick.spawned, 0);

    trail.dispatch(move_to(110.0, 100.0));
    let report = trail.fire_pending_frame().unwrap();
    assert_eq!(report.tick.spawned, 3);
    assert_eq!(report.tick.alive, 3);

    trail.dispatch(move_to(111.0, 100.0));
    assert_eq!(trail.fire_pending_frame().unwrap().tick.spawned, 0);

    // Exactly at the threshold is not enough
    trail.dispatch(move_to(113.0, 100.0));
    assert_eq!(trail.fire_pending_frame().unwrap().tick.spawned, 0);
}

/// Test: a stationary pointer spawns nothing, even on the first frame.
#[test]
fn test_no_burst_on_first_sample() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut trail = CursorTrail::new(&mut host, seeded(3));
    trail.activate();

    trail.dispatch(move_to(700.0, 500.0));
    for _ in 0..10 {
        assert_eq!(trail.fire_pending_frame().unwrap().tick.spawned, 0);
    }
    assert!(trail.simulation().unwrap().is_empty());
}

/// Test: every survivor loses exactly one tick of life per frame, and its
/// opacity is its remaining fraction of life.
#[test]
fn test_ageing_and_fading() {
    let mut sim = TrailSimulation::new(&seeded(11));
    sim.pointer_moved(Vec2::new(0.0, 0.0));
    sim.tick();
    sim.pointer_moved(Vec2::new(30.0, 0.0));
    sim.tick();

    let before: Vec<Particle> = sim.particles().to_vec();
    assert!(!before.is_empty());
    sim.tick();

    for (old, new) in before.iter().zip(sim.particles()) {
        assert_eq!(new.age() + 1, old.age());
        assert_eq!(new.max_age(), old.max_age());
        #[allow(clippy::cast_precision_loss)]
        let expected = new.age() as f32 / new.max_age() as f32;
        assert!((new.opacity() - expected).abs() < 1e-6);
    }
}

/// Test: the whole trail is gone once the longest lifetime has passed.
#[test]
fn test_trail_fades_out() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut trail = CursorTrail::new(&mut host, seeded(5));
    trail.activate();

    trail.dispatch(move_to(0.0, 0.0));
    trail.fire_pending_frame();
    trail.dispatch(move_to(50.0, 0.0));
    assert!(trail.fire_pending_frame().unwrap().tick.alive > 0);

    for _ in 0..60 {
        trail.fire_pending_frame();
    }
    let report = trail.fire_pending_frame().unwrap();
    assert_eq!(report.tick.alive, 0);
    assert_eq!(report.commands, 0);
    assert_eq!(trail.stats().spawned, trail.stats().expired);
}

/// Test: particles 30 px apart are linked, 90 px apart are not.
#[test]
fn test_link_distance() {
    let still = PhysicsConfig {
        gravity: 0.0,
        friction: 1.0,
        damp_vertical: false,
    };
    let mut near = Particle::new(Vec2::new(30.0, 0.0), Vec2::ZERO, 10, 2.0, Color::WHITE);
    near.step(&still);
    let particles = [
        Particle::new(Vec2::ZERO, Vec2::ZERO, 10, 2.0, Color::WHITE),
        near,
        Particle::new(Vec2::new(120.0, 0.0), Vec2::ZERO, 10, 2.0, Color::WHITE),
    ];

    let mut links = Vec::new();
    find_links(&particles, 60.0, &mut links);

    assert_eq!(links.len(), 1);
    let link = links[0];
    assert_eq!((link.a, link.b), (0, 1));
    assert!((link.distance - 30.0).abs() < 1e-6);
    // (1 - 30/60) * min(1.0, 0.9)
    assert!((link.strength - 0.45).abs() < 1e-6);
}

/// Test: submitted batches hold two discs per particle, then the links.
#[test]
fn test_submitted_batch_layout() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut trail = CursorTrail::new(&mut host, seeded(21));
    trail.activate();

    trail.dispatch(move_to(400.0, 300.0));
    trail.fire_pending_frame();
    trail.dispatch(move_to(420.0, 300.0));
    let report = trail.fire_pending_frame().unwrap();

    let log = trail.host().surface_log().unwrap();
    let log = log.borrow();
    let batch = log.last_batch.as_ref().unwrap();
    assert_eq!(batch.len(), report.commands);
    assert_eq!(batch.disc_count(), report.tick.alive * 2);
    assert_eq!(batch.line_count(), report.tick.links);

    let first_line = batch
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap_or(batch.len());
    assert!(batch.commands[first_line..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Line { .. })));
}

/// Test: the same seed and pointer path give the same trail.
#[test]
fn test_seeded_replay_is_deterministic() {
    fn run() -> Vec<Particle> {
        let mut host = HeadlessHost::new(Viewport::new(800, 600));
        let mut trail = CursorTrail::new(&mut host, seeded(99));
        trail.activate();
        for i in 0..30u8 {
            trail.dispatch(move_to(f32::from(i) * 12.0, 200.0));
            trail.fire_pending_frame();
        }
        trail.simulation().unwrap().particles().to_vec()
    }

    assert_eq!(run(), run());
}
