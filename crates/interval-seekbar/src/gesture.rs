//! Handle hit testing and drag state.

use crate::track::TrackGeometry;
use interval_core::{Point, TouchId};

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Lower bound of the interval
    Left,
    /// Upper bound of the interval
    Right,
}

/// Input device driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Primary mouse button
    Mouse,
    /// A single touch point
    Touch(TouchId),
}

/// Which hit zones a pointer-down landed in.
///
/// The zones are tested independently and may overlap when the handles are
/// close together; [`HitTest::grabbed`] picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitTest {
    /// Inside the left handle's zone
    pub left: bool,
    /// Inside the right handle's zone
    pub right: bool,
}

impl HitTest {
    /// Test a widget-local `point` against both handle zones.
    ///
    /// The left zone spans everything up to one radius right of the left
    /// handle; the right zone spans everything from two radii left of the
    /// right handle. Both extend two radii above and below the track.
    #[must_use]
    pub fn at(geometry: &TrackGeometry, left_progress: i32, right_progress: i32, point: Point) -> Self {
        let radius = geometry.handle_radius();
        let left = geometry.handle_center(left_progress);
        let right = geometry.handle_center(right_progress);

        let within_band = |center: Point| {
            point.y >= 2.0f32.mul_add(-radius, center.y) && point.y <= 2.0f32.mul_add(radius, center.y)
        };

        Self {
            left: point.x <= left.x + radius && within_band(left),
            right: point.x >= 2.0f32.mul_add(-radius, right.x) && within_band(right),
        }
    }

    /// Both zones were hit.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        self.left && self.right
    }

    /// Handle grabbed by this hit. The left handle wins when both zones
    /// overlap, so a single move never updates both handles.
    #[must_use]
    pub const fn grabbed(&self) -> Option<Handle> {
        if self.left {
            Some(Handle::Left)
        } else if self.right {
            Some(Handle::Right)
        } else {
            None
        }
    }
}

/// Drag state machine, scoped to one pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No handle grabbed
    #[default]
    Idle,
    /// Left handle follows the pointer
    DraggingLeft(PointerSource),
    /// Right handle follows the pointer
    DraggingRight(PointerSource),
}

impl DragState {
    /// Start dragging `handle` from `source`.
    #[must_use]
    pub const fn grab(handle: Handle, source: PointerSource) -> Self {
        match handle {
            Handle::Left => Self::DraggingLeft(source),
            Handle::Right => Self::DraggingRight(source),
        }
    }

    /// Handle currently being dragged.
    #[must_use]
    pub const fn handle(&self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::DraggingLeft(_) => Some(Handle::Left),
            Self::DraggingRight(_) => Some(Handle::Right),
        }
    }

    /// Input device that owns the current drag.
    #[must_use]
    pub const fn source(&self) -> Option<PointerSource> {
        match self {
            Self::Idle => None,
            Self::DraggingLeft(source) | Self::DraggingRight(source) => Some(*source),
        }
    }

    /// Whether events from `source` belong to the current drag.
    #[must_use]
    pub fn is_driven_by(&self, source: PointerSource) -> bool {
        self.source() == Some(source)
    }

    /// Whether no handle is grabbed.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
