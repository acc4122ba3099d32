//! # GLIMMER
//!
//! A decorative particle trail that follows the pointer, drawn on a
//! transparent overlay above everything else.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                              HOST                                   │
//! │   pointer events     resize events     frame callbacks    surface   │
//! └────────┬──────────────────┬──────────────────┬──────────────────▲───┘
//!          │                  │                  │                  │
//!          ▼                  ▼                  ▼                  │
//! ┌─────────────────────────────────────────────────────────────────┴───┐
//! │                        CursorTrail (this crate)                     │
//! │                                                                     │
//! │  ┌──────────────────────┐        ┌──────────────────────────────┐   │
//! │  │  glimmer_core        │        │  glimmer_ui                  │   │
//! │  │  • PointerTracker    │──────> │  • TrailPainter              │   │
//! │  │  • Spawner           │        │  • DrawBatch                 │   │
//! │  │  • TrailSimulation   │        │  • Surface                   │   │
//! │  │  • find_links        │        │                              │   │
//! │  └──────────────────────┘        └──────────────────────────────┘   │
//! │                      glimmer_shared: config, colour, math           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `host`: what the trail needs from its environment
//! - `trail`: the activate / frame / deactivate lifecycle
//! - `headless`: an in-memory host for replays and tests
//!
//! ## Example
//!
//! ```
//! use glimmer::{CursorTrail, HeadlessHost, HostEvent, TrailConfig, TrailState, Viewport};
//!
//! let mut host = HeadlessHost::new(Viewport::new(800, 600));
//! let mut trail = CursorTrail::new(&mut host, TrailConfig::default());
//! assert_eq!(trail.activate(), TrailState::Running);
//!
//! trail.dispatch(HostEvent::PointerMove { x: 100.0, y: 100.0 });
//! trail.fire_pending_frame();
//! trail.dispatch(HostEvent::PointerMove { x: 110.0, y: 100.0 });
//! let report = trail.fire_pending_frame().unwrap();
//! assert_eq!(report.tick.spawned, 3);
//!
//! drop(trail);
//! assert_eq!(host.listener_count(), 0);
//! assert_eq!(host.pending_frame(), None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod headless;
pub mod host;
pub mod trail;

// Re-export the layers
pub use glimmer_core as core;
pub use glimmer_shared as shared;
pub use glimmer_ui as ui;

// Re-export commonly used types
pub use glimmer_shared::{ConfigError, ConfigResult, TrailConfig};
pub use glimmer_ui::{SurfaceError, Viewport};
pub use headless::HeadlessHost;
pub use host::{FrameHandle, HostEvent, HostEventKind, ListenerId, TrailHost};
pub use trail::{CursorTrail, FrameReport, TrailState, TrailStats};
