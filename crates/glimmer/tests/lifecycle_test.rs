//! # Trail Lifecycle Tests
//!
//! Activation, frame scheduling and teardown against a headless host.
//! After every teardown path the host must hold no listener and no
//! frame request, and the surface must have been released once.

use glimmer::{
    CursorTrail, FrameHandle, HeadlessHost, HostEvent, HostEventKind, TrailConfig, TrailState, Viewport,
};

fn seeded() -> TrailConfig {
    TrailConfig {
        seed: Some(42),
        ..TrailConfig::default()
    }
}

fn host() -> HeadlessHost {
    HeadlessHost::new(Viewport::new(800, 600))
}

/// Test: activation registers two listeners, one frame and one surface.
#[test]
fn test_activate_registers_everything() {
    let mut host = host();
    {
        let mut trail = CursorTrail::new(&mut host, seeded());
        assert_eq!(trail.state(), TrailState::Idle);
        assert_eq!(trail.activate(), TrailState::Running);
        assert!(trail.pending_frame().is_some());

        // Second activate is a no-op
        assert_eq!(trail.activate(), TrailState::Running);
        assert_eq!(trail.host().listener_count(), 2);
        assert!(trail.host().is_listening(HostEventKind::PointerMove));
        assert!(trail.host().is_listening(HostEventKind::Resize));
        assert_eq!(trail.host().frames_requested(), 1);
    }

    let log = host.surface_log().unwrap();
    let descriptor = log.borrow().descriptor.clone().unwrap();
    assert_eq!(descriptor.viewport, Viewport::new(800, 600));
    assert!(descriptor.pointer_passthrough);
    assert_eq!(descriptor.layer, 60);
}

/// Test: deactivate before any frame ran leaves nothing behind.
#[test]
fn test_deactivate_before_first_frame() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();
    trail.deactivate();

    assert_eq!(trail.state(), TrailState::Idle);
    assert_eq!(trail.host().listener_count(), 0);
    assert_eq!(trail.host().pending_frame(), None);
    assert_eq!(trail.host().frames_cancelled(), 1);
    drop(trail);

    let log = host.surface_log().unwrap();
    assert_eq!(log.borrow().releases, 1);
    assert_eq!(log.borrow().submits, 0);
}

/// Test: deactivate twice, and deactivate without activate, are harmless.
#[test]
fn test_deactivate_is_idempotent() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.deactivate();

    trail.activate();
    trail.fire_pending_frame();
    trail.deactivate();
    trail.deactivate();
    drop(trail);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pending_frame(), None);
    assert_eq!(host.frames_cancelled(), 1);
    assert_eq!(host.surface_log().unwrap().borrow().releases, 1);
}

/// Test: dropping a running trail tears it down.
#[test]
fn test_drop_tears_down() {
    let mut host = host();
    {
        let mut trail = CursorTrail::new(&mut host, seeded());
        trail.activate();
        for i in 0..10u8 {
            trail.dispatch(HostEvent::PointerMove {
                x: f32::from(i) * 20.0,
                y: 300.0,
            });
            trail.fire_pending_frame();
        }
    }

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pending_frame(), None);
    assert_eq!(host.surface_log().unwrap().borrow().releases, 1);
}

/// Test: every frame clears, submits and requests exactly one more frame.
#[test]
fn test_frame_loop_reschedules() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();

    for expected in 1..=5 {
        let report = trail.fire_pending_frame().unwrap();
        assert_eq!(report.frame, expected);
        assert!(trail.pending_frame().is_some());
    }
    assert_eq!(trail.stats().frames, 5);
    assert_eq!(trail.host().frames_requested(), 6);

    let log = trail.host().surface_log().unwrap();
    assert_eq!(log.borrow().clears, 5);
    assert_eq!(log.borrow().submits, 5);
}

/// Test: a stale or cancelled handle does not run a frame.
#[test]
fn test_stale_frame_ignored() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();

    let first = trail.pending_frame().unwrap();
    assert!(trail.on_frame(FrameHandle(first.0 + 1000)).is_none());
    assert!(trail.on_frame(first).is_some());
    // Already consumed
    assert!(trail.on_frame(first).is_none());

    let next = trail.pending_frame().unwrap();
    trail.deactivate();
    assert!(trail.on_frame(next).is_none());
    assert_eq!(trail.stats().frames, 1);
}

/// Test: no surface means no listeners, no frames and no panic.
#[test]
fn test_inert_without_surface() {
    let mut host = HeadlessHost::without_surface(Viewport::new(800, 600), "no 2d context");
    let mut trail = CursorTrail::new(&mut host, seeded());

    assert_eq!(trail.activate(), TrailState::Inert);
    assert_eq!(trail.state(), TrailState::Inert);
    assert!(trail.pending_frame().is_none());
    assert!(!trail.dispatch(HostEvent::PointerMove { x: 10.0, y: 10.0 }));
    assert!(trail.fire_pending_frame().is_none());

    trail.deactivate();
    assert_eq!(trail.state(), TrailState::Idle);
    drop(trail);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.frames_requested(), 0);
}

/// Test: an invalid config is refused at activation and registers nothing.
#[test]
fn test_inert_with_invalid_config() {
    let mut config = seeded();
    config.links.radius = f32::NAN;

    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, config);
    assert!(trail.config().links.radius.is_nan());

    assert_eq!(trail.activate(), TrailState::Inert);
    assert!(trail.simulation().is_none());
    assert!(!trail.dispatch(HostEvent::PointerMove { x: 10.0, y: 10.0 }));
    assert!(trail.fire_pending_frame().is_none());
    drop(trail);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.frames_requested(), 0);
    assert!(host.surface_log().is_none());
}

/// Test: an oversized ceiling is refused instead of allocated.
#[test]
fn test_inert_with_oversized_ceiling() {
    let mut config = seeded();
    config.spawn.max_particles = usize::MAX;

    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, config);
    assert_eq!(trail.activate(), TrailState::Inert);
    drop(trail);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.frames_requested(), 0);
}

/// Test: resize events reach the surface, and later frames report the new size.
#[test]
fn test_resize_syncs_surface() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();

    let event = trail.host_mut().set_viewport(Viewport::new(1920, 1080)).unwrap();
    assert!(trail.dispatch(event));

    let report = trail.fire_pending_frame().unwrap();
    assert_eq!(report.viewport, Viewport::new(1920, 1080));

    let log = trail.host().surface_log().unwrap();
    assert_eq!(log.borrow().resizes, 1);
}

/// Test: events after deactivate are not delivered and change nothing.
#[test]
fn test_events_after_deactivate_dropped() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();
    trail.deactivate();

    assert!(!trail.dispatch(HostEvent::PointerMove { x: 1.0, y: 1.0 }));
    trail.handle_event(HostEvent::PointerMove { x: 500.0, y: 1.0 });
    assert!(trail.simulation().is_none());
}

/// Test: reactivation starts from an empty trail.
#[test]
fn test_reactivate_starts_fresh() {
    let mut host = host();
    let mut trail = CursorTrail::new(&mut host, seeded());
    trail.activate();
    trail.dispatch(HostEvent::PointerMove { x: 0.0, y: 0.0 });
    trail.fire_pending_frame();
    trail.dispatch(HostEvent::PointerMove { x: 40.0, y: 0.0 });
    trail.fire_pending_frame();
    assert!(!trail.simulation().unwrap().is_empty());

    trail.deactivate();
    trail.activate();
    assert!(trail.simulation().unwrap().is_empty());
    assert_eq!(trail.host().listener_count(), 2);

    let report = trail.fire_pending_frame().unwrap();
    assert_eq!(report.frame, 1);
}
