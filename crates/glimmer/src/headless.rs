//! # Headless Host
//!
//! A [`TrailHost`] with no window: listeners and frame requests are kept
//! in plain maps, surfaces are [`RecordingSurface`]s. Used by the replay
//! binary and by tests to drive a trail frame by frame and then check
//! that teardown left nothing behind.

use std::borrow::{Borrow, BorrowMut};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use glimmer_ui::{
    RecordingSurface, Surface, SurfaceDescriptor, SurfaceError, SurfaceLog, SurfaceResult, Viewport,
};

use crate::host::{FrameHandle, HostEvent, HostEventKind, ListenerId, TrailHost};
use crate::trail::{CursorTrail, FrameReport};

/// In-memory host.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Current viewport.
    viewport: Viewport,
    /// Registered listeners.
    listeners: BTreeMap<ListenerId, HostEventKind>,
    /// The one outstanding frame request, if any.
    pending_frame: Option<FrameHandle>,
    /// Next token value.
    next_id: u64,
    /// When set, surface creation fails with this reason.
    fail_surface: Option<String>,
    /// Log of the last created surface.
    surface_log: Option<Rc<RefCell<SurfaceLog>>>,
    /// Frame requests made.
    frames_requested: u64,
    /// Frame requests withdrawn.
    frames_cancelled: u64,
}

impl HeadlessHost {
    /// Host with the given viewport and a working surface.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Host whose surface creation always fails.
    #[must_use]
    pub fn without_surface(viewport: Viewport, reason: impl Into<String>) -> Self {
        Self {
            viewport,
            fail_surface: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Changes the viewport and returns the event a listener would get.
    ///
    /// `None` when nobody listens for resizes.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Option<HostEvent> {
        self.viewport = viewport;
        self.is_listening(HostEventKind::Resize)
            .then_some(HostEvent::Resize(viewport))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Anyone listening for `kind`?
    #[must_use]
    pub fn is_listening(&self, kind: HostEventKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    /// The outstanding frame request.
    #[must_use]
    pub const fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Removes and returns the outstanding frame request, as a display
    /// refresh would.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending_frame.take()
    }

    /// Log of the most recently created surface.
    #[must_use]
    pub fn surface_log(&self) -> Option<Rc<RefCell<SurfaceLog>>> {
        self.surface_log.clone()
    }

    /// Frame requests made so far.
    #[must_use]
    pub const fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Frame requests withdrawn so far.
    #[must_use]
    pub const fn frames_cancelled(&self) -> u64 {
        self.frames_cancelled
    }

    fn next_token(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl TrailHost for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn listen(&mut self, kind: HostEventKind) -> ListenerId {
        let id = ListenerId(self.next_token());
        self.listeners.insert(id, kind);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_token());
        self.pending_frame = Some(handle);
        self.frames_requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
            self.frames_cancelled += 1;
        }
    }

    fn create_surface(&mut self, descriptor: &SurfaceDescriptor) -> SurfaceResult<Box<dyn Surface>> {
        if let Some(reason) = &self.fail_surface {
            return Err(SurfaceError::Unavailable(reason.clone()));
        }
        let (surface, log) = RecordingSurface::new(descriptor.clone());
        self.surface_log = Some(log);
        Ok(Box::new(surface))
    }
}

impl<H> CursorTrail<H>
where
    H: TrailHost + BorrowMut<HeadlessHost>,
{
    /// Delivers an event if the headless host has a listener for it.
    ///
    /// Returns whether the event was delivered.
    pub fn dispatch(&mut self, event: HostEvent) -> bool {
        let host = Borrow::<HeadlessHost>::borrow(self.host());
        if !host.is_listening(event.kind()) {
            return false;
        }
        self.handle_event(event);
        true
    }

    /// Fires the headless host's outstanding frame request, if any.
    pub fn fire_pending_frame(&mut self) -> Option<FrameReport> {
        let handle = BorrowMut::<HeadlessHost>::borrow_mut(self.host_mut()).take_frame()?;
        self.on_frame(handle)
    }
}
