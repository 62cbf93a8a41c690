//! Per-pass track geometry.
//!
//! A [`TrackGeometry`] is a snapshot derived from the widget's size and style.
//! It is rebuilt for every paint and every pointer event and never stored,
//! so a style or size change can't leave stale handle positions behind.
//! All coordinates are widget-local.

use crate::style::SeekBarStyle;
use interval_core::{Point, Size};

/// Upper bound of a progress value.
pub const MAX_PROGRESS: i32 = 100;

/// Geometry of the track and handles for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Widget width
    pub width: f32,
    /// Widget height
    pub height: f32,
    /// Vertical center of the track and handles
    pub center_y: f32,
    horizontal_margin: f32,
    handle_radius: f32,
}

impl TrackGeometry {
    /// Derive geometry for a widget of `size` painted with `style`.
    #[must_use]
    pub fn new(size: Size, style: &SeekBarStyle) -> Self {
        Self {
            width: size.width,
            height: size.height,
            center_y: size.height / 2.0,
            horizontal_margin: style.horizontal_margin,
            handle_radius: style.handle_radius,
        }
    }

    /// X coordinate where the track starts.
    #[must_use]
    pub const fn track_start(&self) -> f32 {
        self.horizontal_margin
    }

    /// X coordinate where the track ends.
    #[must_use]
    pub fn track_end(&self) -> f32 {
        self.width - self.horizontal_margin
    }

    /// Length of the track. Negative when the margins exceed the width.
    #[must_use]
    pub fn track_width(&self) -> f32 {
        2.0f32.mul_add(-self.horizontal_margin, self.width)
    }

    /// Handle radius this geometry was built with.
    #[must_use]
    pub const fn handle_radius(&self) -> f32 {
        self.handle_radius
    }

    /// Handle x position for `progress`.
    #[must_use]
    pub fn handle_x(&self, progress: i32) -> f32 {
        self.track_width()
            .mul_add(progress as f32 / MAX_PROGRESS as f32, self.horizontal_margin)
    }

    /// Handle center for `progress`.
    #[must_use]
    pub fn handle_center(&self, progress: i32) -> Point {
        Point::new(self.handle_x(progress), self.center_y)
    }

    /// Smallest allowed distance between the two progress values, so the
    /// handles (three radii apart) never overlap on screen.
    ///
    /// An empty track makes the gap saturate to `i32::MAX`: no drag can
    /// satisfy it. A negative track yields a negative gap that every drag
    /// satisfies.
    #[must_use]
    pub fn min_gap_progress(&self) -> i32 {
        let gap = 3.0 * self.handle_radius * MAX_PROGRESS as f32 / self.track_width();
        gap as i32
    }

    /// Progress for a pointer at local `x`, clamped into `[0, 100]`.
    ///
    /// The pointer is mapped against the full widget width (not the track),
    /// truncating toward zero. Returns `None` for a widget with no width.
    #[must_use]
    pub fn progress_at(&self, x: f32) -> Option<i32> {
        if self.width <= 0.0 {
            return None;
        }
        let raw = x * MAX_PROGRESS as f32 / self.width;
        Some((raw as i32).clamp(0, MAX_PROGRESS))
    }

    /// Whether `left` and `right` are far enough apart to be committed.
    #[must_use]
    pub fn allows(&self, left: i32, right: i32) -> bool {
        left < right.saturating_sub(self.min_gap_progress())
    }

    /// Whether the margins leave no room for a track.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.track_width() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(width: f32) -> TrackGeometry {
        TrackGeometry::new(Size::new(width, 120.0), &SeekBarStyle::default())
    }

    #[test]
    fn test_track_bounds() {
        let g = geometry(400.0);
        assert_eq!(g.track_start(), 40.0);
        assert_eq!(g.track_end(), 360.0);
        assert_eq!(g.track_width(), 320.0);
        assert_eq!(g.center_y, 60.0);
    }

    #[test]
    fn test_handle_x() {
        let g = geometry(400.0);
        assert_eq!(g.handle_x(0), 40.0);
        assert_eq!(g.handle_x(20), 104.0);
        assert_eq!(g.handle_x(80), 296.0);
        assert_eq!(g.handle_x(100), 360.0);
        assert_eq!(g.handle_center(50), Point::new(200.0, 60.0));
    }

    #[test]
    fn test_min_gap_progress() {
        // 60 * 100 / 320 = 18.75
        assert_eq!(geometry(400.0).min_gap_progress(), 18);
    }

    #[test]
    fn test_min_gap_empty_track_never_satisfied() {
        let g = geometry(80.0);
        assert!(g.is_degenerate());
        assert_eq!(g.min_gap_progress(), i32::MAX);
        assert!(!g.allows(0, 100));
    }

    #[test]
    fn test_min_gap_negative_track_always_satisfied() {
        let g = geometry(40.0);
        assert!(g.min_gap_progress() < 0);
        assert!(g.allows(90, 91));
    }

    #[test]
    fn test_progress_at() {
        let g = geometry(400.0);
        assert_eq!(g.progress_at(150.0), Some(37));
        assert_eq!(g.progress_at(0.0), Some(0));
        assert_eq!(g.progress_at(-50.0), Some(0));
        assert_eq!(g.progress_at(1000.0), Some(100));
        assert_eq!(geometry(0.0).progress_at(10.0), None);
    }

    #[test]
    fn test_allows() {
        let g = geometry(400.0);
        assert!(g.allows(20, 80));
        assert!(g.allows(61, 80));
        assert!(!g.allows(62, 80));
    }

    proptest! {
        #[test]
        fn prop_handle_x_within_track(p in 0i32..=100, width in 100.0f32..2000.0) {
            let g = geometry(width);
            let x = g.handle_x(p);
            prop_assert!(x >= g.track_start() - 0.001);
            prop_assert!(x <= g.track_end() + 0.001);
        }

        #[test]
        fn prop_handle_x_monotonic(a in 0i32..=100, b in 0i32..=100, width in 100.0f32..2000.0) {
            let g = geometry(width);
            if a < b {
                prop_assert!(g.handle_x(a) <= g.handle_x(b));
            }
        }

        #[test]
        fn prop_progress_at_clamped(x in -1.0e6f32..1.0e6, width in 1.0f32..2000.0) {
            let p = geometry(width).progress_at(x).unwrap();
            prop_assert!((0..=100).contains(&p));
        }
    }
}
