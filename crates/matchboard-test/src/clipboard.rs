//! Recording clipboard and synthetic clicks.

use crate::page::NodeId;
use matchboard_core::{ClipboardWriter, Interaction};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Clipboard that remembers every write. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The most recent write.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}

/// A click whose handler sits on `target`.
#[derive(Debug, Default)]
pub struct Click {
    target: Option<NodeId>,
    stopped: Cell<bool>,
}

impl Click {
    /// Click on `target`.
    #[must_use]
    pub fn on(target: NodeId) -> Self {
        Self {
            target: Some(target),
            stopped: Cell::new(false),
        }
    }

    /// Click with no current target.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the handler stopped propagation.
    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl Interaction<NodeId> for Click {
    fn current_target(&self) -> Option<NodeId> {
        self.target
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}
