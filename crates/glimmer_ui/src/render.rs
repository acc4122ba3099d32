//! Draw commands for one frame of the trail.

use glimmer_shared::{BlendMode, Color, Vec2};

/// A single primitive for the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled, blurred disc.
    Disc {
        /// Centre (px).
        center: Vec2,
        /// Radius (px).
        radius: f32,
        /// Fill colour; alpha already includes the particle's fade.
        color: Color,
        /// Shadow blur radius, tinted with `color`.
        blur: f32,
    },
    /// Straight stroke.
    Line {
        /// Start point (px).
        from: Vec2,
        /// End point (px).
        to: Vec2,
        /// Stroke colour; alpha already includes the link's fade.
        color: Color,
        /// Stroke width (px).
        width: f32,
    },
}

/// All commands for one frame, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    /// Commands in this batch.
    pub commands: Vec<DrawCommand>,
    /// How the batch composites onto the page.
    pub blend: BlendMode,
}

impl DrawBatch {
    /// Creates an empty batch with room for `capacity` commands.
    #[must_use]
    pub fn with_capacity(capacity: usize, blend: BlendMode) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            blend,
        }
    }

    /// Drops all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Adds a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Total command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// No commands?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of disc commands.
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }

    /// Number of line commands.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.len() - self.disc_count()
    }
}

impl Default for DrawBatch {
    fn default() -> Self {
        Self::with_capacity(0, BlendMode::default())
    }
}
