//! Visual style of the seek bar.

use interval_core::Color;
use serde::{Deserialize, Serialize};

/// Default handle radius in pixels.
pub const DEFAULT_HANDLE_RADIUS: f32 = 20.0;
/// Default track stroke width in pixels.
pub const DEFAULT_LINE_WIDTH: f32 = 8.0;
/// Default horizontal margin between the widget edge and the track ends.
pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 40.0;
/// Default vertical margin above and below the handles.
pub const DEFAULT_VERTICAL_MARGIN: f32 = 40.0;
/// Default background track color, `#929292`.
pub const DEFAULT_BACKGROUND_ARGB: u32 = 0xFF92_9292;
/// Default progress track color, `#003AFD`.
pub const DEFAULT_PROGRESS_ARGB: u32 = 0xFF00_3AFD;
/// Default left handle position.
pub const DEFAULT_LEFT_PROGRESS: i32 = 20;
/// Default right handle position.
pub const DEFAULT_RIGHT_PROGRESS: i32 = 80;

/// Colors and dimensions used to lay out and paint an
/// [`IntervalSeekBar`](crate::IntervalSeekBar).
///
/// Dimensions are in pixels. Nothing here is validated: zero or negative
/// track widths and oversized radii are accepted and simply produce
/// degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekBarStyle {
    /// Inner color of both handles
    pub handle_color: Color,
    /// Handle radius
    pub handle_radius: f32,
    /// Track stroke width
    pub line_width: f32,
    /// Gap between the widget edges and the track ends
    pub horizontal_margin: f32,
    /// Gap above and below the handles
    pub vertical_margin: f32,
    /// Color of the unselected track
    pub background_color: Color,
    /// Color of the selected interval
    pub progress_color: Color,
}

impl Default for SeekBarStyle {
    fn default() -> Self {
        Self {
            handle_color: Color::WHITE,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            vertical_margin: DEFAULT_VERTICAL_MARGIN,
            background_color: Color::from_argb(DEFAULT_BACKGROUND_ARGB),
            progress_color: Color::from_argb(DEFAULT_PROGRESS_ARGB),
        }
    }
}

impl SeekBarStyle {
    /// Height the widget asks for when its parent leaves height open.
    #[must_use]
    pub fn preferred_height(&self) -> f32 {
        2.0f32.mul_add(self.handle_radius, 2.0 * self.vertical_margin)
    }
}
