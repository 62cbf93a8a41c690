//! Dual-handle interval seek bar.

use crate::attributes::{ConfigError, SeekBarAttributes};
use crate::gesture::{DragState, Handle, HitTest, PointerSource};
use crate::listener::{IntervalChanged, ProgressListener};
use crate::style::{SeekBarStyle, DEFAULT_LEFT_PROGRESS, DEFAULT_RIGHT_PROGRESS};
use crate::track::TrackGeometry;
use interval_core::{
    AccessibleRole, Canvas, Color, Constraints, Event, GradientStop, LayoutResult, MeasureMode,
    MeasureSpec, MouseButton, Point, RadialGradient, Rect, Size, StrokeStyle, TileMode, TypeId,
    Widget,
};
use std::any::Any;
use std::fmt;
use tracing::{debug, trace};

/// Offset at which the handle gradient starts fading to its rim color.
const HANDLE_GRADIENT_INNER_STOP: f32 = 0.9;

/// Horizontal track with two draggable handles selecting a `[left, right]`
/// progress interval in `0..=100`.
///
/// While a handle is dragged, the pointer position is mapped to a progress
/// value, clamped into range, and committed only if the handles stay at
/// least [`TrackGeometry::min_gap_progress`] apart. Moves that would break the
/// gap are dropped without touching state. Committed moves request a redraw,
/// notify the listener and return an [`IntervalChanged`] message.
///
/// Setters never validate across fields; setting `right_progress` below
/// `left_progress` is accepted as-is.
pub struct IntervalSeekBar {
    style: SeekBarStyle,
    left_progress: i32,
    right_progress: i32,
    bounds: Rect,
    drag: DragState,
    listener: Option<Box<dyn ProgressListener>>,
    redraw_requests: u32,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl Default for IntervalSeekBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntervalSeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalSeekBar")
            .field("style", &self.style)
            .field("left_progress", &self.left_progress)
            .field("right_progress", &self.right_progress)
            .field("bounds", &self.bounds)
            .field("drag", &self.drag)
            .field("has_listener", &self.listener.is_some())
            .field("redraw_requests", &self.redraw_requests)
            .finish_non_exhaustive()
    }
}

impl IntervalSeekBar {
    /// Create a seek bar with the default style and a `[20, 80]` interval.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(SeekBarStyle::default())
    }

    /// Create a seek bar with a custom style.
    #[must_use]
    pub fn with_style(style: SeekBarStyle) -> Self {
        Self {
            style,
            left_progress: DEFAULT_LEFT_PROGRESS,
            right_progress: DEFAULT_RIGHT_PROGRESS,
            bounds: Rect::default(),
            drag: DragState::Idle,
            listener: None,
            redraw_requests: 0,
            test_id_value: None,
            accessible_name_value: None,
        }
    }

    /// Create a seek bar from host attributes at the given display density.
    pub fn from_attributes(
        attributes: &SeekBarAttributes,
        density: f32,
    ) -> Result<Self, ConfigError> {
        let resolved = attributes.resolve(density)?;
        let mut bar = Self::with_style(resolved.style);
        bar.left_progress = resolved.left_progress;
        bar.right_progress = resolved.right_progress;
        Ok(bar)
    }

    /// Set the initial interval.
    #[must_use]
    pub const fn interval(mut self, left: i32, right: i32) -> Self {
        self.left_progress = left;
        self.right_progress = right;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the listener, replacing any previous one.
    pub fn set_on_progress_change_listener(&mut self, listener: impl ProgressListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_on_progress_change_listener(&mut self) {
        self.listener = None;
    }

    // =========================================================================
    // Style accessors
    // =========================================================================

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &SeekBarStyle {
        &self.style
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: SeekBarStyle) {
        self.style = style;
        self.invalidate();
    }

    #[must_use]
    pub const fn handle_color(&self) -> Color {
        self.style.handle_color
    }

    pub fn set_handle_color(&mut self, color: Color) {
        self.style.handle_color = color;
        self.invalidate();
    }

    #[must_use]
    pub const fn handle_radius(&self) -> f32 {
        self.style.handle_radius
    }

    pub fn set_handle_radius(&mut self, radius: f32) {
        self.style.handle_radius = radius;
        self.invalidate();
    }

    #[must_use]
    pub const fn line_width(&self) -> f32 {
        self.style.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.style.line_width = width;
        self.invalidate();
    }

    #[must_use]
    pub const fn horizontal_margin(&self) -> f32 {
        self.style.horizontal_margin
    }

    pub fn set_horizontal_margin(&mut self, margin: f32) {
        self.style.horizontal_margin = margin;
        self.invalidate();
    }

    #[must_use]
    pub const fn vertical_margin(&self) -> f32 {
        self.style.vertical_margin
    }

    pub fn set_vertical_margin(&mut self, margin: f32) {
        self.style.vertical_margin = margin;
        self.invalidate();
    }

    #[must_use]
    pub const fn background_color(&self) -> Color {
        self.style.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.style.background_color = color;
        self.invalidate();
    }

    #[must_use]
    pub const fn progress_color(&self) -> Color {
        self.style.progress_color
    }

    pub fn set_progress_color(&mut self, color: Color) {
        self.style.progress_color = color;
        self.invalidate();
    }

    // =========================================================================
    // Progress accessors
    // =========================================================================

    #[must_use]
    pub const fn left_progress(&self) -> i32 {
        self.left_progress
    }

    /// Set the left progress. Not range-checked.
    pub fn set_left_progress(&mut self, progress: i32) {
        self.left_progress = progress;
        self.invalidate();
    }

    #[must_use]
    pub const fn right_progress(&self) -> i32 {
        self.right_progress
    }

    /// Set the right progress. Not range-checked.
    pub fn set_right_progress(&mut self, progress: i32) {
        self.right_progress = progress;
        self.invalidate();
    }

    // =========================================================================
    // Redraw requests
    // =========================================================================

    /// Request a redraw.
    pub fn invalidate(&mut self) {
        self.redraw_requests = self.redraw_requests.saturating_add(1);
    }

    /// Whether a redraw has been requested since the last drain.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw_requests > 0
    }

    /// Drain pending redraw requests, returning how many were made.
    pub fn take_redraw_requests(&mut self) -> u32 {
        std::mem::take(&mut self.redraw_requests)
    }

    // =========================================================================
    // Geometry and gestures
    // =========================================================================

    /// Geometry for the current size and style.
    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.bounds.size(), &self.style)
    }

    /// Resolve the widget size from per-axis measure specs.
    ///
    /// Height falls back to `2 * handle_radius + 2 * vertical_margin` unless
    /// fixed exactly. Width has no intrinsic value: an upper bound is taken
    /// in full, and with no constraint at all the previously laid-out width
    /// is reused.
    #[must_use]
    pub fn measure_spec(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let resolved_width = match width.mode {
            MeasureMode::Exact | MeasureMode::AtMost => width.size,
            MeasureMode::Unspecified => self.bounds.width,
        };
        Size::new(resolved_width, height.resolve_or(self.style.preferred_height()))
    }

    /// Hit-test a position in parent coordinates against both handles.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> HitTest {
        HitTest::at(
            &self.geometry(),
            self.left_progress,
            self.right_progress,
            self.bounds.to_local(position),
        )
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    fn begin_drag(&mut self, position: Point, source: PointerSource) {
        let hit = self.hit_test(position);
        if hit.is_ambiguous() {
            debug!(?position, "pointer down in overlapping hit zones, left handle wins");
        }
        self.drag = hit
            .grabbed()
            .map_or(DragState::Idle, |handle| DragState::grab(handle, source));
        debug!(?source, state = ?self.drag, "pointer down");
    }

    fn end_drag(&mut self) {
        if !self.drag.is_idle() {
            debug!(state = ?self.drag, "drag released");
        }
        self.drag = DragState::Idle;
    }

    fn drag_to(&mut self, position: Point) -> Option<IntervalChanged> {
        let handle = self.drag.handle()?;
        let geometry = self.geometry();
        let local = self.bounds.to_local(position);

        let current = match handle {
            Handle::Left => self.left_progress,
            Handle::Right => self.right_progress,
        };
        let handle_x = geometry.handle_x(current);
        let delta_x = local.x - handle_x;
        let candidate = if delta_x == 0.0 {
            current
        } else {
            geometry.progress_at(handle_x + delta_x)?
        };
        let candidate = candidate.clamp(0, 100);

        let (left, right) = match handle {
            Handle::Left => (candidate, self.right_progress),
            Handle::Right => (self.left_progress, candidate),
        };

        if !geometry.allows(left, right) {
            debug!(
                left,
                right,
                min_gap = geometry.min_gap_progress(),
                "drag rejected, handles too close"
            );
            return None;
        }

        self.left_progress = left;
        self.right_progress = right;
        self.invalidate();
        debug!(left, right, "interval changed");
        self.notify(left, right);
        Some(IntervalChanged { left, right })
    }

    fn notify(&mut self, left: i32, right: i32) {
        if let Some(mut listener) = self.listener.take() {
            listener.on_progress_changed(self, left, right);
            self.listener = Some(listener);
        }
    }

    fn handle_gradient(&self, center: Point) -> RadialGradient {
        RadialGradient::new(
            center,
            self.style.handle_radius,
            vec![
                GradientStop::new(self.style.handle_color, HANDLE_GRADIENT_INNER_STOP),
                GradientStop::new(Color::GRAY, 1.0),
            ],
            TileMode::Mirror,
        )
    }
}

impl Widget for IntervalSeekBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let size = self.measure_spec(constraints.width_spec(), constraints.height_spec());
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let geometry = self.geometry();
        let origin = self.bounds.origin();
        let at = |x: f32| origin + Point::new(x, geometry.center_y);

        if geometry.is_degenerate() {
            trace!(width = geometry.width, "painting with an empty track");
        }

        let background = StrokeStyle::round(self.style.background_color, self.style.line_width);
        let progress = StrokeStyle::round(self.style.progress_color, self.style.line_width);
        let left_x = geometry.handle_x(self.left_progress);
        let right_x = geometry.handle_x(self.right_progress);

        canvas.stroke_line(
            at(geometry.track_start()),
            at(geometry.track_end()),
            &background,
        );
        canvas.stroke_line(at(geometry.track_start()), at(left_x), &background);
        canvas.stroke_line(at(left_x), at(right_x), &progress);

        for x in [left_x, right_x] {
            let center = at(x);
            canvas.fill_circle_gradient(
                center,
                self.style.handle_radius,
                &self.handle_gradient(center),
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = match *event {
            // A press never takes over a touch drag; a repeated press while
            // mouse-driven re-grabs so a lost mouse-up cannot wedge the bar.
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.drag.is_idle() || self.drag.is_driven_by(PointerSource::Mouse) => {
                self.begin_drag(position, PointerSource::Mouse);
                None
            }
            Event::MouseMove { position } if self.drag.is_driven_by(PointerSource::Mouse) => {
                self.drag_to(position)
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } if self.drag.is_driven_by(PointerSource::Mouse) => {
                self.end_drag();
                None
            }
            Event::TouchStart { id, position } if self.drag.is_idle() => {
                self.begin_drag(position, PointerSource::Touch(id));
                None
            }
            Event::TouchMove { id, position }
                if self.drag.is_driven_by(PointerSource::Touch(id)) =>
            {
                self.drag_to(position)
            }
            Event::TouchEnd { id, .. } | Event::TouchCancel { id }
                if self.drag.is_driven_by(PointerSource::Touch(id)) =>
            {
                self.end_drag();
                None
            }
            _ => None,
        };

        changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::RangeSlider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
