//! Dual-handle interval seek bar widget.
//!
//! [`IntervalSeekBar`] renders a horizontal track with two circular handles
//! and reports the selected `[left, right]` progress interval (0-100) as the
//! user drags either handle.
//!
//! # Examples
//!
//! ```
//! use interval_core::{Event, MouseButton, Point, Rect, Widget};
//! use interval_seekbar::{IntervalChanged, IntervalSeekBar};
//!
//! let mut bar = IntervalSeekBar::new();
//! bar.layout(Rect::new(0.0, 0.0, 400.0, 120.0));
//!
//! bar.event(&Event::MouseDown {
//!     position: Point::new(104.0, 60.0),
//!     button: MouseButton::Left,
//! });
//! let msg = bar
//!     .event(&Event::MouseMove { position: Point::new(150.0, 60.0) })
//!     .and_then(|m| m.downcast::<IntervalChanged>().ok());
//!
//! assert_eq!(msg.map(|m| (m.left, m.right)), Some((37, 80)));
//! ```

pub mod attributes;
pub mod gesture;
mod listener;
mod seek_bar;
pub mod style;
pub mod track;

pub use attributes::{ColorValue, ConfigError, ResolvedAttributes, SeekBarAttributes};
pub use gesture::{DragState, Handle, HitTest, PointerSource};
pub use listener::{IntervalChanged, ProgressListener};
pub use seek_bar::IntervalSeekBar;
pub use style::SeekBarStyle;
pub use track::TrackGeometry;
