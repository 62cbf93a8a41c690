//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, RadialGradient, StrokeStyle};
use crate::widget::Canvas;
use crate::Point;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Replay (hand the commands to a platform renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.commands.push(DrawCommand::line(from, to, *style));
    }

    fn fill_circle_gradient(&mut self, center: Point, radius: f32, gradient: &RadialGradient) {
        self.commands
            .push(DrawCommand::circle(center, radius, gradient.clone()));
    }
}
