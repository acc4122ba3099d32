//! Drawing surface abstraction.
//!
//! The host creates the surface; the trail owns it from activation until
//! deactivation and releases it exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use glimmer_shared::{BlendMode, SurfaceConfig};
use thiserror::Error;

use crate::render::DrawBatch;

/// Viewport size in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width (px).
    pub width: u32,
    /// Height (px).
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-area viewport?
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// What the trail asks the host for at activation.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDescriptor {
    /// Initial size; tracks the viewport afterwards.
    pub viewport: Viewport,
    /// Compositing mode.
    pub blend: BlendMode,
    /// Pointer input falls through to the page underneath.
    pub pointer_passthrough: bool,
    /// Stacking layer above page content.
    pub layer: i32,
}

impl SurfaceDescriptor {
    /// Overlay descriptor for `viewport` from the surface config.
    #[must_use]
    pub fn overlay(viewport: Viewport, config: &SurfaceConfig) -> Self {
        Self {
            viewport,
            blend: config.blend,
            pointer_passthrough: config.pointer_passthrough,
            layer: config.layer,
        }
    }
}

/// Errors from surface creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host could not provide a drawing context.
    #[error("drawing context unavailable: {0}")]
    Unavailable(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Something the trail can draw on.
pub trait Surface {
    /// Matches the backing store to a new viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Current backing store size.
    fn viewport(&self) -> Viewport;

    /// Clears to fully transparent.
    fn clear(&mut self);

    /// Draws a batch on top of whatever is there.
    fn submit(&mut self, batch: &DrawBatch);

    /// Frees the backing store. Further calls are no-ops.
    fn release(&mut self);
}

/// Everything a [`RecordingSurface`] saw, shared with whoever created it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceLog {
    /// Descriptor the surface was created with.
    pub descriptor: Option<SurfaceDescriptor>,
    /// Current size.
    pub viewport: Viewport,
    /// Number of resizes.
    pub resizes: u32,
    /// Number of clears.
    pub clears: u32,
    /// Number of submitted batches.
    pub submits: u32,
    /// Most recent batch.
    pub last_batch: Option<DrawBatch>,
    /// Number of release calls that actually freed something.
    pub releases: u32,
}

/// Headless surface that records instead of drawing.
#[derive(Debug)]
pub struct RecordingSurface {
    /// Shared record.
    log: Rc<RefCell<SurfaceLog>>,
    /// Already released?
    released: bool,
}

impl RecordingSurface {
    /// Creates a surface and the log handle to inspect it with.
    #[must_use]
    pub fn new(descriptor: SurfaceDescriptor) -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog {
            viewport: descriptor.viewport,
            descriptor: Some(descriptor),
            ..SurfaceLog::default()
        }));
        let surface = Self {
            log: Rc::clone(&log),
            released: false,
        };
        (surface, log)
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        if self.released {
            return;
        }
        let mut log = self.log.borrow_mut();
        log.viewport = viewport;
        log.resizes += 1;
    }

    fn viewport(&self) -> Viewport {
        self.log.borrow().viewport
    }

    fn clear(&mut self) {
        if self.released {
            return;
        }
        self.log.borrow_mut().clears += 1;
    }

    fn submit(&mut self, batch: &DrawBatch) {
        if self.released {
            return;
        }
        let mut log = self.log.borrow_mut();
        log.submits += 1;
        log.last_batch = Some(batch.clone());
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut log = self.log.borrow_mut();
        log.releases += 1;
        log.last_batch = None;
        log.viewport = Viewport::default();
        tracing::trace!(submits = log.submits, resizes = log.resizes, "recording surface released");
    }
}
