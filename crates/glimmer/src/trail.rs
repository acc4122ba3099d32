//! # Cursor Trail Component
//!
//! Owns one trail from `activate()` to `deactivate()`:
//!
//! ```text
//! activate()                     on_frame(h)                    deactivate()
//! ├─ create surface              ├─ h == pending? else ignore   ├─ cancel pending frame
//! ├─ listen: pointer, resize     ├─ simulation.tick()           ├─ unlisten all
//! └─ request frame ─────────────►├─ clear + paint + submit      └─ release surface
//!                                └─ request next frame ──┐
//!                                          ▲             │
//!                                          └─────────────┘
//! ```
//!
//! Teardown also runs on drop, so a trail that goes out of scope never
//! leaves listeners or a frame request behind.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use glimmer_core::{TickStats, TrailSimulation};
use glimmer_shared::{TrailConfig, Vec2};
use glimmer_ui::{Surface, SurfaceDescriptor, TrailPainter, Viewport};

use crate::host::{FrameHandle, HostEvent, HostEventKind, ListenerId, TrailHost};

/// Lifecycle state of a [`CursorTrail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailState {
    /// Not activated, or deactivated.
    Idle,
    /// Listening and drawing every frame.
    Running,
    /// Activated, but the config was invalid or the host had no drawing
    /// surface. Does nothing.
    Inert,
}

/// Outcome of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame number since activation, starting at 1.
    pub frame: u64,
    /// Simulation stats for this frame.
    pub tick: TickStats,
    /// Draw commands submitted.
    pub commands: usize,
    /// Surface size this frame was drawn at.
    pub viewport: Viewport,
    /// Time spent ticking and painting (microseconds).
    pub frame_us: u64,
}

/// Totals across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailStats {
    /// Frames run.
    pub frames: u64,
    /// Particles spawned.
    pub spawned: u64,
    /// Particles expired.
    pub expired: u64,
    /// Highest live count seen.
    pub peak_alive: usize,
    /// Highest link count seen.
    pub peak_links: usize,
    /// Sum of frame times (microseconds).
    pub total_frame_us: u64,
    /// Slowest frame (microseconds).
    pub max_frame_us: u64,
}

impl TrailStats {
    /// Folds one frame in.
    pub fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.spawned += report.tick.spawned as u64;
        self.expired += report.tick.expired as u64;
        self.peak_alive = self.peak_alive.max(report.tick.alive);
        self.peak_links = self.peak_links.max(report.tick.links);
        self.total_frame_us += report.frame_us;
        self.max_frame_us = self.max_frame_us.max(report.frame_us);
    }

    /// Average frame time in microseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_us(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.total_frame_us as f64 / self.frames as f64
    }
}

/// Everything that exists only while the trail is running.
struct Session {
    /// Particles and pointer samples.
    simulation: TrailSimulation,
    /// Command builder.
    painter: TrailPainter,
    /// Overlay surface, released at teardown.
    surface: Box<dyn Surface>,
    /// Listeners to remove at teardown.
    listeners: Vec<ListenerId>,
    /// Outstanding frame request.
    pending: Option<FrameHandle>,
    /// Frames run in this session.
    frame: u64,
}

/// A self-driving cursor trail bound to a host.
pub struct CursorTrail<H: TrailHost> {
    /// Embedding environment.
    host: H,
    /// Config as given; checked at activation.
    config: TrailConfig,
    /// Present while running.
    session: Option<Session>,
    /// Activation was refused.
    inert: bool,
    /// Totals since construction.
    stats: TrailStats,
}

impl<H: TrailHost> CursorTrail<H> {
    /// Creates an idle trail. Nothing is registered until [`Self::activate`].
    #[must_use]
    pub fn new(host: H, config: TrailConfig) -> Self {
        Self {
            host,
            config,
            session: None,
            inert: false,
            stats: TrailStats::default(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TrailState {
        if self.session.is_some() {
            TrailState::Running
        } else if self.inert {
            TrailState::Inert
        } else {
            TrailState::Idle
        }
    }

    /// Creates the surface, attaches listeners and requests the first frame.
    ///
    /// Calling it while running changes nothing. If the config fails
    /// validation or the host cannot provide a surface, the trail goes
    /// [`TrailState::Inert`]: no listeners, no frames, no error.
    pub fn activate(&mut self) -> TrailState {
        if self.session.is_some() {
            return TrailState::Running;
        }

        if let Err(error) = self.config.validate() {
            tracing::warn!(%error, "cursor trail disabled: invalid config");
            self.inert = true;
            return TrailState::Inert;
        }

        let viewport = self.host.viewport();
        let descriptor = SurfaceDescriptor::overlay(viewport, &self.config.surface);
        let surface = match self.host.create_surface(&descriptor) {
            Ok(surface) => surface,
            Err(error) => {
                tracing::warn!(%error, "cursor trail disabled: no drawing surface");
                self.inert = true;
                return TrailState::Inert;
            }
        };

        let listeners = vec![
            self.host.listen(HostEventKind::PointerMove),
            self.host.listen(HostEventKind::Resize),
        ];
        let pending = Some(self.host.request_frame());

        self.inert = false;
        self.session = Some(Session {
            simulation: TrailSimulation::new(&self.config),
            painter: TrailPainter::new(&self.config),
            surface,
            listeners,
            pending,
            frame: 0,
        });

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            ceiling = self.config.spawn.max_particles,
            "cursor trail activated"
        );
        TrailState::Running
    }

    /// Cancels the pending frame, removes listeners and releases the surface.
    ///
    /// Idempotent; safe before any frame ran and while already idle.
    pub fn deactivate(&mut self) {
        self.inert = false;
        let Some(mut session) = self.session.take() else {
            return;
        };

        if let Some(handle) = session.pending.take() {
            self.host.cancel_frame(handle);
        }
        for id in session.listeners.drain(..) {
            self.host.unlisten(id);
        }
        session.surface.release();

        tracing::debug!(frames = session.frame, "cursor trail deactivated");
    }

    /// Listener callback for pointer and resize events. Ignored unless running.
    pub fn handle_event(&mut self, event: HostEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            HostEvent::PointerMove { x, y } => session.simulation.pointer_moved(Vec2::new(x, y)),
            HostEvent::Resize(viewport) => {
                tracing::trace!(width = viewport.width, height = viewport.height, "trail surface resized");
                session.surface.resize(viewport);
            }
        }
    }

    /// Frame callback: tick, draw, request the next frame.
    ///
    /// Returns `None` when idle or when `handle` is not the outstanding
    /// request (cancelled or stale).
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<FrameReport> {
        let session = self.session.as_mut()?;
        if session.pending != Some(handle) {
            tracing::trace!(handle = handle.0, "ignoring stale frame callback");
            return None;
        }
        session.pending = None;

        let start = Instant::now();
        session.frame += 1;

        let tick = session.simulation.tick();
        session.surface.clear();
        let batch = session.painter.paint(&session.simulation);
        session.surface.submit(batch);
        let commands = batch.len();

        let frame_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        let report = FrameReport {
            frame: session.frame,
            tick,
            commands,
            viewport: session.surface.viewport(),
            frame_us,
        };

        session.pending = Some(self.host.request_frame());
        self.stats.record(&report);

        Some(report)
    }

    /// The host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The config this trail runs with.
    #[must_use]
    pub const fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// The simulation, while running.
    #[must_use]
    pub fn simulation(&self) -> Option<&TrailSimulation> {
        self.session.as_ref().map(|s| &s.simulation)
    }

    /// The outstanding frame request, while running.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.session.as_ref().and_then(|s| s.pending)
    }

    /// Totals since construction.
    #[must_use]
    pub const fn stats(&self) -> &TrailStats {
        &self.stats
    }
}

impl<H: TrailHost> Drop for CursorTrail<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<H: TrailHost> std::fmt::Debug for CursorTrail<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorTrail")
            .field("state", &self.state())
            .field("pending_frame", &self.pending_frame())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
