//! Draw commands.
//!
//! All rendering reduces to these primitives.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Stroke style for line rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Round-capped stroke.
    #[must_use]
    pub const fn round(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
        }
    }
}

/// How a gradient continues past its last stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileMode {
    /// Extend the edge colors
    #[default]
    Clamp,
    /// Restart from the first stop
    Repeat,
    /// Reflect back and forth
    Mirror,
}

/// A color at a normalized offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color
    pub color: Color,
    /// Offset in [0.0, 1.0]
    pub offset: f32,
}

impl GradientStop {
    /// Create a stop, clamping the offset to [0.0, 1.0].
    #[must_use]
    pub fn new(color: Color, offset: f32) -> Self {
        Self {
            color,
            offset: offset.clamp(0.0, 1.0),
        }
    }
}

/// Radial gradient centered on a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Gradient center
    pub center: Point,
    /// Radius at which offset 1.0 is reached
    pub radius: f32,
    /// Stops, ordered by offset
    pub stops: Vec<GradientStop>,
    /// Behavior beyond the radius
    pub tile: TileMode,
}

impl RadialGradient {
    /// Create a gradient with the given stops.
    #[must_use]
    pub fn new(center: Point, radius: f32, stops: Vec<GradientStop>, tile: TileMode) -> Self {
        Self {
            center,
            radius,
            stops,
            tile,
        }
    }

    /// Color at normalized distance `t` from the center (before tiling).
    #[must_use]
    pub fn color_at(&self, t: f32) -> Color {
        let t = match self.tile {
            TileMode::Clamp => t.clamp(0.0, 1.0),
            TileMode::Repeat => t.rem_euclid(1.0),
            TileMode::Mirror => {
                let m = t.abs().rem_euclid(2.0);
                if m > 1.0 {
                    2.0 - m
                } else {
                    m
                }
            }
        };

        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        self.stops
            .windows(2)
            .find(|w| t >= w[0].offset && t <= w[1].offset)
            .map_or(last.color, |w| {
                let span = w[1].offset - w[0].offset;
                if span <= f32::EPSILON {
                    w[1].color
                } else {
                    w[0].color.lerp(&w[1].color, (t - w[0].offset) / span)
                }
            })
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke a straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Fill a circle with a radial gradient
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Gradient fill
        gradient: RadialGradient,
    },
}

impl DrawCommand {
    /// Create a line command.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Create a gradient-filled circle command.
    #[must_use]
    pub fn circle(center: Point, radius: f32, gradient: RadialGradient) -> Self {
        Self::Circle {
            center,
            radius,
            gradient,
        }
    }
}
