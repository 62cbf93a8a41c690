//! Layout constraints for widgets.
//!
//! Two equivalent forms are supported. [`Constraints`] is a min/max box, the
//! form parents hand to children during a layout pass. [`MeasureSpec`] is the
//! per-axis `(size, mode)` form mobile hosts use in their measure pass.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// How a [`MeasureSpec`] size should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasureMode {
    /// The parent has decided the exact size.
    Exact,
    /// The child may be as large as it wants up to the given size.
    AtMost,
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
}

/// A single-axis measure requirement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Size offered by the parent (ignored when unspecified)
    pub size: f32,
    /// Interpretation of `size`
    pub mode: MeasureMode,
}

impl MeasureSpec {
    /// Exactly `size`.
    #[must_use]
    pub const fn exact(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exact,
        }
    }

    /// Up to `size`.
    #[must_use]
    pub const fn at_most(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::AtMost,
        }
    }

    /// No constraint.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            size: 0.0,
            mode: MeasureMode::Unspecified,
        }
    }

    /// Resolve against a preferred size: exact specs win, anything else
    /// takes the preference.
    #[must_use]
    pub fn resolve_or(&self, preferred: f32) -> f32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => preferred,
        }
    }

    fn from_range(min: f32, max: f32) -> Self {
        if min == max {
            Self::exact(max)
        } else if max.is_finite() {
            Self::at_most(max)
        } else {
            Self::unspecified()
        }
    }
}

impl Default for MeasureSpec {
    fn default() -> Self {
        Self::unspecified()
    }
}

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Horizontal axis as a measure spec.
    #[must_use]
    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_width, self.max_width)
    }

    /// Vertical axis as a measure spec.
    #[must_use]
    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_height, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
