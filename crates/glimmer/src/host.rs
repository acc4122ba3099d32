//! # Host Environment
//!
//! What the trail needs from whatever embeds it: a viewport, event
//! listeners, a per-frame callback and a drawing surface.
//!
//! All callbacks arrive on one thread and never overlap. The host calls
//! [`crate::CursorTrail::handle_event`] for events and
//! [`crate::CursorTrail::on_frame`] for frames.

use glimmer_ui::{Surface, SurfaceDescriptor, SurfaceResult, Viewport};

/// Token for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Token for one registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Kinds of event the trail listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostEventKind {
    /// Pointer moved.
    PointerMove,
    /// Viewport changed size.
    Resize,
}

/// An event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to screen position (px).
    PointerMove {
        /// X (px).
        x: f32,
        /// Y (px).
        y: f32,
    },
    /// Viewport is now this size.
    Resize(Viewport),
}

impl HostEvent {
    /// Which listener this event is for.
    #[must_use]
    pub const fn kind(&self) -> HostEventKind {
        match self {
            Self::PointerMove { .. } => HostEventKind::PointerMove,
            Self::Resize(_) => HostEventKind::Resize,
        }
    }
}

/// The embedding environment.
pub trait TrailHost {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Registers interest in an event kind.
    fn listen(&mut self, kind: HostEventKind) -> ListenerId;

    /// Removes a listener. Unknown ids are ignored.
    fn unlisten(&mut self, id: ListenerId);

    /// Asks for one callback before the next repaint.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraws a frame request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Creates the overlay surface.
    ///
    /// # Errors
    ///
    /// Returns [`glimmer_ui::SurfaceError`] when no drawing context exists.
    fn create_surface(&mut self, descriptor: &SurfaceDescriptor) -> SurfaceResult<Box<dyn Surface>>;
}

impl<H: TrailHost + ?Sized> TrailHost for &mut H {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn listen(&mut self, kind: HostEventKind) -> ListenerId {
        (**self).listen(kind)
    }

    fn unlisten(&mut self, id: ListenerId) {
        (**self).unlisten(id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }

    fn create_surface(&mut self, descriptor: &SurfaceDescriptor) -> SurfaceResult<Box<dyn Surface>> {
        (**self).create_surface(descriptor)
    }
}
