//! Platform seams.
//!
//! The board never touches the browser directly. It reads and mutates the
//! page through [`Page`], schedules callbacks through [`Scheduler`], writes
//! the clipboard through [`ClipboardWriter`] and reads the time through
//! [`WallClock`]. The browser runtime implements these over `web-sys`; the
//! test harness implements them in memory.

use std::fmt;
use std::time::Duration;

/// DOM-like access to the page hosting the match list.
///
/// All methods take `&self`: DOM handles are shared references into a
/// document owned by the host.
pub trait Page {
    /// Handle to one element.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Child elements of `element`, in document order.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    /// First descendant of `scope` carrying `class`.
    fn find_by_class(&self, scope: &Self::Element, class: &str) -> Option<Self::Element>;

    /// Inner markup of `element`.
    fn inner_html(&self, element: &Self::Element) -> String;

    /// Replace the inner markup of `element`.
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Whether `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` when `force` is true, remove it otherwise.
    fn toggle_class(&self, element: &Self::Element, class: &str, force: bool);

    /// Move `child` to the end of `parent`'s children.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    /// Route clicks on `button` to the filter toggle for `slot`.
    fn bind_toggle(&self, button: &Self::Element, slot: usize);
}

/// The user interaction that triggered a copy.
pub trait Interaction<E> {
    /// The element the handler is attached to.
    fn current_target(&self) -> Option<E>;

    /// Keep enclosing clickable regions from reacting to the same click.
    fn stop_propagation(&self);
}

/// Fire-and-forget clipboard access.
pub trait ClipboardWriter {
    /// Request that `text` be placed on the system clipboard.
    fn write_text(&self, text: &str);
}

/// Source of the current instant.
pub trait WallClock {
    /// Milliseconds since the Unix epoch, UTC.
    fn now_millis(&self) -> i64;
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Revert the confirmed clipboard indicator.
    ClipboardRevert,
    /// Refresh the clock displays.
    ClockTick,
}

/// Opaque id of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub i32);

/// Timer creation failure reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError(pub String);

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ScheduleError {}

impl From<ScheduleError> for crate::BoardError {
    fn from(err: ScheduleError) -> Self {
        Self::Schedule(err.0)
    }
}

/// Host timers. When a timer fires, the host hands its [`TimerTask`] to
/// [`crate::MatchBoard::fire`].
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn set_timeout(&self, task: TimerTask, delay: Duration) -> Result<TimerHandle, ScheduleError>;

    /// Run `task` every `period` until cleared.
    fn set_interval(&self, task: TimerTask, period: Duration)
        -> Result<TimerHandle, ScheduleError>;

    /// Cancel a pending timeout or interval. Unknown handles are ignored.
    fn clear(&self, handle: TimerHandle);
}
