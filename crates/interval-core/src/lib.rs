//! Core types and traits for the interval seek bar.
//!
//! This crate provides the host integration surface a widget plugs into:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`], [`MeasureSpec`]
//! - Input: [`Event`]
//! - Rendering: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, MeasureMode, MeasureSpec};
pub use draw::{DrawCommand, GradientStop, LineCap, RadialGradient, StrokeStyle, TileMode};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
