//! Pointer tracking for speed measurement.
//!
//! Keeps exactly two samples: where the pointer is now, and where it was
//! at the start of the current tick.

use glimmer_shared::Vec2;

/// Current and previous pointer sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    /// Latest reported position.
    current: Option<Vec2>,
    /// Position at the last [`PointerTracker::advance`].
    previous: Option<Vec2>,
}

impl PointerTracker {
    /// Creates an unseeded tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }

    /// Records a pointer position. Several moves within one tick collapse
    /// into the latest.
    ///
    /// The very first sample seeds both cells, so the jump from "nowhere"
    /// never reads as movement.
    pub fn set_position(&mut self, position: Vec2) {
        if self.previous.is_none() {
            self.previous = Some(position);
        }
        self.current = Some(position);
    }

    /// Distance moved since the last [`PointerTracker::advance`].
    #[must_use]
    pub fn speed(&self) -> f32 {
        match (self.current, self.previous) {
            (Some(current), Some(previous)) => current.distance(previous),
            _ => 0.0,
        }
    }

    /// Latest position, if the pointer was ever seen.
    #[must_use]
    pub const fn position(&self) -> Option<Vec2> {
        self.current
    }

    /// Ends the tick: previous ← current.
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    /// Forgets both samples.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
