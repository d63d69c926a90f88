//! Test harness driving a [`MatchBoard`] over an in-memory page.

use crate::clipboard::{Click, RecordingClipboard};
use crate::fixture::{PageFixture, COPY_FIELD};
use crate::page::{MemoryPage, NodeId};
use crate::time::VirtualTime;
use matchboard_core::{BoardConfig, BoardError, MatchBoard, Page};
use std::time::Duration;

/// Epoch used by [`Harness::new`]: 2024-05-01T12:30:00Z.
pub const DEFAULT_EPOCH_MILLIS: i64 = 1_714_566_600_000;

/// Board type the harness drives.
pub type TestBoard = MatchBoard<MemoryPage, VirtualTime, RecordingClipboard, VirtualTime>;

/// Test harness for a match-listing page.
pub struct Harness {
    board: TestBoard,
    page: MemoryPage,
    time: VirtualTime,
    clipboard: RecordingClipboard,
}

impl Harness {
    /// Build `fixture` with the default configuration.
    #[must_use]
    pub fn new(fixture: &PageFixture) -> Self {
        Self::with_config(fixture, BoardConfig::default(), DEFAULT_EPOCH_MILLIS)
    }

    /// Build `fixture` with `config`, starting the wall clock at
    /// `epoch_millis`.
    #[must_use]
    pub fn with_config(fixture: &PageFixture, config: BoardConfig, epoch_millis: i64) -> Self {
        let page = fixture.build(&config);
        let time = VirtualTime::starting_at(epoch_millis);
        let clipboard = RecordingClipboard::new();
        let board = MatchBoard::new(
            config,
            page.clone(),
            time.clone(),
            clipboard.clone(),
            time.clone(),
        );
        Self {
            board,
            page,
            time,
            clipboard,
        }
    }

    /// The board under test.
    #[must_use]
    pub const fn board(&self) -> &TestBoard {
        &self.board
    }

    /// Mutable access to the board.
    pub fn board_mut(&mut self) -> &mut TestBoard {
        &mut self.board
    }

    /// The page, shared with the board.
    #[must_use]
    pub const fn page(&self) -> &MemoryPage {
        &self.page
    }

    /// The timeline, shared with the board.
    #[must_use]
    pub const fn time(&self) -> &VirtualTime {
        &self.time
    }

    /// The clipboard, shared with the board.
    #[must_use]
    pub const fn clipboard(&self) -> &RecordingClipboard {
        &self.clipboard
    }

    fn config(&self) -> &BoardConfig {
        self.board.config()
    }

    // === Lifecycle ===

    /// Run the load hook.
    pub fn load(&mut self) -> Result<usize, BoardError> {
        self.board.matches_load()
    }

    /// Run the update hook.
    pub fn update(&mut self) -> Result<usize, BoardError> {
        self.board.matches_update()
    }

    /// Start the live clock.
    pub fn start_clock(&mut self) -> Result<(), BoardError> {
        self.board.start_clock()
    }

    // === Event Simulation ===

    /// Click the element with `id`, dispatching to its bound toggle.
    /// Returns `None` when nothing is bound to it.
    pub fn click(&mut self, id: &str) -> Option<Result<usize, BoardError>> {
        let button = self.page.element_by_id(id)?;
        let slot = self.page.binding(button)?;
        Some(self.board.toggle(slot))
    }

    /// Click the copy field of entry `entry_id`.
    pub fn copy(&mut self, entry_id: &str, text: &str) -> Result<bool, BoardError> {
        let click = match self.copy_region(entry_id) {
            Some(region) => Click::on(region),
            None => Click::detached(),
        };
        self.board.copy(&click, text)
    }

    /// Advance time by `by`, firing every timer that comes due.
    pub fn advance(&mut self, by: Duration) -> &mut Self {
        let until = self.time.elapsed() + by;
        while let Some(task) = self.time.next_due(until) {
            self.board.fire(task);
        }
        self.time.settle(until);
        self
    }

    // === Queries ===

    /// Copy field of `entry_id`.
    #[must_use]
    pub fn copy_region(&self, entry_id: &str) -> Option<NodeId> {
        let entry = self.page.element_by_id(entry_id)?;
        self.page.children(&entry).get(COPY_FIELD).copied()
    }

    /// Clipboard indicator of `entry_id`.
    #[must_use]
    pub fn indicator(&self, entry_id: &str) -> Option<NodeId> {
        let region = self.copy_region(entry_id)?;
        self.page
            .find_by_class(&region, &self.config().clipboard.indicator_class)
    }

    /// Whether the indicator of `entry_id` shows the confirmed icon.
    #[must_use]
    pub fn is_confirmed(&self, entry_id: &str) -> bool {
        self.indicator(entry_id).is_some_and(|indicator| {
            self.page.inner_html(&indicator) == self.config().clipboard.confirmed_icon
        })
    }

    /// Whether the element with `id` carries the hidden class.
    ///
    /// # Panics
    ///
    /// Panics if there is no such element.
    #[must_use]
    pub fn is_hidden(&self, id: &str) -> bool {
        let element = self
            .page
            .element_by_id(id)
            .unwrap_or_else(|| panic!("no element '#{id}'"));
        self.page.has_class(&element, &self.config().hidden_class)
    }

    /// Inner markup of the element with `id`, empty if absent.
    #[must_use]
    pub fn text(&self, id: &str) -> String {
        self.page
            .element_by_id(id)
            .map(|element| self.page.inner_html(&element))
            .unwrap_or_default()
    }

    /// Entry ids in document order.
    #[must_use]
    pub fn order(&self) -> Vec<String> {
        self.page.entry_ids(self.config())
    }

    /// Ids of entries without the hidden class, in document order.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<String> {
        self.order()
            .into_iter()
            .filter(|id| !self.is_hidden(id))
            .collect()
    }

    /// Whether the button with `id` shows exactly the active style.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        let Some(button) = self.page.element_by_id(id) else {
            return false;
        };
        let style = &self.config().filter.style;
        style.active.iter().all(|c| self.page.has_class(&button, c))
            && !style.inactive.iter().any(|c| self.page.has_class(&button, c))
    }

    // === Assertions ===

    /// Assert the document order of the entries.
    ///
    /// # Panics
    ///
    /// Panics if the order differs.
    pub fn assert_order(&self, expected: &[&str]) -> &Self {
        let actual = self.order();
        assert_eq!(actual, expected, "unexpected entry order");
        self
    }

    /// Assert which entries are visible.
    ///
    /// # Panics
    ///
    /// Panics if the visible set differs.
    pub fn assert_visible(&self, expected: &[&str]) -> &Self {
        let actual = self.visible_entries();
        assert_eq!(actual, expected, "unexpected visible entries");
        self
    }

    /// Assert that exactly one of the list and the placeholder is shown.
    ///
    /// # Panics
    ///
    /// Panics if the empty state does not match `empty`.
    pub fn assert_empty_state(&self, empty: bool) -> &Self {
        let config = self.config();
        assert_eq!(
            self.is_hidden(&config.empty_id),
            !empty,
            "placeholder visibility"
        );
        assert_eq!(self.is_hidden(&config.list_id), empty, "list visibility");
        self
    }

    /// Assert the button style for `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the button style does not match `active`.
    pub fn assert_button_active(&self, slot: usize, active: bool) -> &Self {
        let id = &self.config().filter.button_ids[slot];
        assert_eq!(self.is_active(id), active, "style of button '#{id}'");
        self
    }

    /// Assert the text of the element with `id`.
    ///
    /// # Panics
    ///
    /// Panics if the text differs.
    pub fn assert_text(&self, id: &str, expected: &str) -> &Self {
        let actual = self.text(id);
        assert_eq!(actual, expected, "text of '#{id}'");
        self
    }
}
