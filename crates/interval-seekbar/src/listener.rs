//! Progress change notification.

use crate::seek_bar::IntervalSeekBar;

/// Message emitted from [`Widget::event`](interval_core::Widget::event) when a
/// drag commits a new interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalChanged {
    /// New left progress
    pub left: i32,
    /// New right progress
    pub right: i32,
}

/// Receives committed interval changes.
///
/// Called synchronously from the event handler, only for drags that keep
/// the two handles at least the minimum gap apart. Programmatic setters do
/// not notify.
pub trait ProgressListener: Send {
    /// The user dragged a handle to a new accepted position.
    fn on_progress_changed(&mut self, seek_bar: &IntervalSeekBar, left: i32, right: i32);
}

impl<F> ProgressListener for F
where
    F: FnMut(&IntervalSeekBar, i32, i32) + Send,
{
    fn on_progress_changed(&mut self, seek_bar: &IntervalSeekBar, left: i32, right: i32) {
        self(seek_bar, left, right);
    }
}
