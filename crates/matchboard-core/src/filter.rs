//! Status filter: three toggle buttons deciding which entries are shown.

use crate::config::{BoardConfig, ToggleStyle};
use crate::entry::MatchEntry;
use crate::error::BoardError;
use crate::page::Page;
use crate::status::{MatchStatus, STATUS_COUNT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility per status slot, indexed like [`MatchStatus::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState([bool; STATUS_COUNT]);

impl Default for FilterState {
    fn default() -> Self {
        Self([true; STATUS_COUNT])
    }
}

impl FilterState {
    /// Create a state from per-slot visibility.
    #[must_use]
    pub const fn new(visible: [bool; STATUS_COUNT]) -> Self {
        Self(visible)
    }

    /// Whether entries of `status` are shown.
    #[must_use]
    pub const fn shows(&self, status: MatchStatus) -> bool {
        self.0[status.slot()]
    }

    /// Visibility of `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<bool> {
        self.0.get(slot).copied()
    }

    /// Set visibility of `slot`. Returns `false` for an invalid slot.
    pub fn set(&mut self, slot: usize, visible: bool) -> bool {
        match self.0.get_mut(slot) {
            Some(value) => {
                *value = visible;
                true
            }
            None => false,
        }
    }

    /// Flip `slot` and return its new visibility.
    pub fn flip(&mut self, slot: usize) -> Option<bool> {
        let value = self.0.get_mut(slot)?;
        *value = !*value;
        Some(*value)
    }

    /// Per-slot visibility.
    #[must_use]
    pub const fn as_array(&self) -> [bool; STATUS_COUNT] {
        self.0
    }
}

impl ToggleStyle {
    /// Apply exactly one of the two style sets to `button`.
    pub fn apply<P: Page>(&self, page: &P, button: &P::Element, active: bool) {
        for class in self.active.iter() {
            page.toggle_class(button, class, active);
        }
        for class in self.inactive.iter() {
            page.toggle_class(button, class, !active);
        }
    }
}

/// Owns the filter state and keeps buttons and entries in line with it.
///
/// `E` is the page's element handle; the controller remembers which button
/// element each slot's click handler was registered on.
#[derive(Debug, Clone)]
pub struct FilterController<E> {
    state: FilterState,
    button_ids: [String; STATUS_COUNT],
    style: ToggleStyle,
    list_id: String,
    hidden_class: String,
    bound: [Option<E>; STATUS_COUNT],
}

impl<E: Clone + PartialEq> FilterController<E> {
    /// Create a controller in the configured initial state.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            state: FilterState::new(config.filter.initial),
            button_ids: config.filter.button_ids.clone(),
            style: config.filter.style.clone(),
            list_id: config.list_id.clone(),
            hidden_class: config.hidden_class.clone(),
            bound: std::array::from_fn(|_| None),
        }
    }

    /// Current filter state.
    #[must_use]
    pub const fn state(&self) -> FilterState {
        self.state
    }

    /// Style every button from the current state and wire its clicks.
    ///
    /// A button is wired once per element: running the load hook again
    /// after a reconnect does not double-toggle, while buttons re-rendered by
    /// a page swap get a fresh handler.
    pub fn initialize<P: Page<Element = E>>(&mut self, page: &P) -> Result<(), BoardError> {
        let mut buttons = Vec::with_capacity(STATUS_COUNT);
        for id in &self.button_ids {
            let button = page
                .element_by_id(id)
                .ok_or_else(|| BoardError::MissingElement(id.clone()))?;
            buttons.push(button);
        }

        for (slot, button) in buttons.into_iter().enumerate() {
            self.style.apply(page, &button, self.state.0[slot]);
            if self.bound[slot].as_ref() != Some(&button) {
                page.bind_toggle(&button, slot);
                self.bound[slot] = Some(button);
            }
        }
        debug!(state = ?self.state.as_array(), "filter buttons initialized");
        Ok(())
    }

    /// Flip `slot`, update matching entries and restyle its button.
    pub fn on_toggle<P: Page<Element = E>>(
        &mut self,
        page: &P,
        slot: usize,
    ) -> Result<bool, BoardError> {
        if slot >= STATUS_COUNT {
            return Err(BoardError::InvalidSlot(slot));
        }
        let list = self.list(page)?;
        let visible = self.state.flip(slot).ok_or(BoardError::InvalidSlot(slot))?;
        let entries = MatchEntry::read_all(page, &list);
        self.apply_slot(page, &entries, slot);

        let id = &self.button_ids[slot];
        let button = page
            .element_by_id(id)
            .ok_or_else(|| BoardError::MissingElement(id.clone()))?;
        self.style.apply(page, &button, visible);

        debug!(slot, visible, "filter toggled");
        Ok(visible)
    }

    /// Hide or show the entries whose status belongs to `slot`.
    pub fn apply_slot<P: Page<Element = E>>(
        &self,
        page: &P,
        entries: &[MatchEntry<E>],
        slot: usize,
    ) {
        let Some(status) = MatchStatus::from_slot(slot) else {
            return;
        };
        let visible = self.state.shows(status);
        for entry in entries.iter().filter(|e| e.status == Some(status)) {
            page.toggle_class(&entry.element, &self.hidden_class, !visible);
        }
    }

    /// Re-apply every slot to `entries`.
    pub fn apply_all<P: Page<Element = E>>(&self, page: &P, entries: &[MatchEntry<E>]) {
        for slot in 0..STATUS_COUNT {
            self.apply_slot(page, entries, slot);
        }
    }

    fn list<P: Page<Element = E>>(&self, page: &P) -> Result<P::Element, BoardError> {
        page.element_by_id(&self.list_id)
            .ok_or_else(|| BoardError::MissingElement(self.list_id.clone()))
    }
}
