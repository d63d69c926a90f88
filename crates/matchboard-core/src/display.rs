//! List ordering and the "no results" placeholder.

use crate::config::BoardConfig;
use crate::entry::{sort_descending, MatchEntry};
use crate::error::BoardError;
use crate::filter::FilterController;
use crate::page::Page;
use tracing::debug;

/// Keeps the list sorted, filtered and its empty state accurate.
#[derive(Debug, Clone)]
pub struct DisplayCoordinator {
    list_id: String,
    empty_id: String,
    hidden_class: String,
}

impl DisplayCoordinator {
    /// Create a coordinator for the configured list.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            list_id: config.list_id.clone(),
            empty_id: config.empty_id.clone(),
            hidden_class: config.hidden_class.clone(),
        }
    }

    /// Reorder entries by sort key, greatest first, then re-apply the filter
    /// and the empty-state check. Returns the number of visible entries.
    pub fn resort<P: Page>(
        &self,
        page: &P,
        filter: &FilterController<P::Element>,
    ) -> Result<usize, BoardError> {
        let list = self.element(page, &self.list_id)?;
        let mut entries = MatchEntry::read_all(page, &list);
        sort_descending(&mut entries);
        for entry in &entries {
            page.append_child(&list, &entry.element);
        }
        filter.apply_all(page, &entries);
        debug!(entries = entries.len(), "match list resorted");
        self.check_empty(page)
    }

    /// Show the placeholder instead of the list when no entry is visible.
    /// Returns the number of visible entries.
    pub fn check_empty<P: Page>(&self, page: &P) -> Result<usize, BoardError> {
        let list = self.element(page, &self.list_id)?;
        let placeholder = self.element(page, &self.empty_id)?;
        let visible = page
            .children(&list)
            .iter()
            .filter(|entry| !page.has_class(entry, &self.hidden_class))
            .count();
        page.toggle_class(&placeholder, &self.hidden_class, visible != 0);
        page.toggle_class(&list, &self.hidden_class, visible == 0);
        Ok(visible)
    }

    fn element<P: Page>(&self, page: &P, id: &str) -> Result<P::Element, BoardError> {
        page.element_by_id(id)
            .ok_or_else(|| BoardError::MissingElement(id.to_string()))
    }
}
