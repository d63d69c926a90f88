//! Builder for a rendered match-listing page.
//!
//! The page mirrors what the server renders: three filter buttons, the list
//! container, the "no matches" placeholder and the error region. Each entry
//! has six fields; the date sits in field 2 and the status label in field 4.
//!
//! ```
//! use matchboard_core::{BoardConfig, MatchStatus};
//! use matchboard_test::PageFixture;
//!
//! let config = BoardConfig::default();
//! let page = PageFixture::new()
//!     .entry("m1", "2024-05-01 18:00", MatchStatus::Planned)
//!     .build(&config);
//! assert_eq!(page.entry_ids(&config), ["m1"]);
//! ```

use crate::page::{MemoryPage, NodeId};
use matchboard_core::{BoardConfig, MatchStatus, Page, SORT_KEY_FIELD, STATUS_FIELD};

/// Field holding the copyable result of a finished match.
pub const COPY_FIELD: usize = 3;

const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone)]
struct EntryRow {
    id: String,
    sort_key: String,
    status_label: String,
    copyable: bool,
}

#[derive(Debug, Clone)]
struct ClockSpec {
    match_start: String,
    set_start: String,
}

/// Page builder.
#[derive(Debug, Clone, Default)]
pub struct PageFixture {
    entries: Vec<EntryRow>,
    clock: Option<ClockSpec>,
    omit: Vec<String>,
}

impl PageFixture {
    /// Start an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Finished entries get a copy field with an indicator.
    #[must_use]
    pub fn entry(mut self, id: &str, sort_key: &str, status: MatchStatus) -> Self {
        self.entries.push(EntryRow {
            id: id.to_string(),
            sort_key: sort_key.to_string(),
            status_label: status.label().to_string(),
            copyable: status == MatchStatus::Finished,
        });
        self
    }

    /// Add an entry with an arbitrary status label and no copy field.
    #[must_use]
    pub fn raw_entry(mut self, id: &str, sort_key: &str, status_label: &str) -> Self {
        self.entries.push(EntryRow {
            id: id.to_string(),
            sort_key: sort_key.to_string(),
            status_label: status_label.to_string(),
            copyable: false,
        });
        self
    }

    /// Render the live clock fields with the given start timestamps.
    #[must_use]
    pub fn clock(mut self, match_start: &str, set_start: &str) -> Self {
        self.clock = Some(ClockSpec {
            match_start: match_start.to_string(),
            set_start: set_start.to_string(),
        });
        self
    }

    /// Leave out the element with `id`.
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        self.omit.push(id.to_string());
        self
    }

    /// Render the page for `config`.
    #[must_use]
    pub fn build(&self, config: &BoardConfig) -> MemoryPage {
        let page = MemoryPage::new();
        let root = MemoryPage::ROOT;
        let active: Vec<&str> = config.filter.style.active.iter().collect();

        for id in &config.filter.button_ids {
            self.add(&page, root, id, &active, "");
        }

        if let Some(list) = self.add(&page, root, &config.list_id, &[], "") {
            for row in &self.entries {
                self.add_entry(&page, list, row, config);
            }
        }
        self.add(&page, root, &config.empty_id, &[config.hidden_class.as_str()], "No matches");
        self.add(&page, root, &config.error_id, &[], "<p>Something went wrong</p>");

        if let Some(clock) = &self.clock {
            let ids = &config.clock;
            self.add(&page, root, &ids.current_time_id, &[], "");
            self.add(&page, root, &ids.match_start_id, &[], &clock.match_start);
            self.add(&page, root, &ids.match_time_id, &[], "");
            self.add(&page, root, &ids.set_start_id, &[], &clock.set_start);
            self.add(&page, root, &ids.set_time_id, &[], "");
        }
        page
    }

    fn add(
        &self,
        page: &MemoryPage,
        parent: NodeId,
        id: &str,
        classes: &[&str],
        html: &str,
    ) -> Option<NodeId> {
        if self.omit.iter().any(|o| o == id) {
            return None;
        }
        Some(page.add(parent, Some(id), classes, html))
    }

    fn add_entry(&self, page: &MemoryPage, list: NodeId, row: &EntryRow, config: &BoardConfig) {
        let entry = page.add(list, Some(&row.id), &[], "");
        for field in 0..FIELD_COUNT {
            match field {
                SORT_KEY_FIELD => {
                    page.add(entry, None, &[], &row.sort_key);
                }
                STATUS_FIELD => {
                    page.add(entry, None, &[], &row.status_label);
                }
                COPY_FIELD if row.copyable => {
                    let region = page.add(entry, Some(&format!("{}-copy", row.id)), &[], "");
                    page.add(region, None, &[], "3:1");
                    page.add(
                        region,
                        None,
                        &[config.clipboard.indicator_class.as_str()],
                        &config.clipboard.default_icon,
                    );
                }
                _ => {
                    page.add(entry, None, &[], "");
                }
            }
        }
    }
}

impl MemoryPage {
    /// Ids of the list entries, in document order.
    #[must_use]
    pub fn entry_ids(&self, config: &BoardConfig) -> Vec<String> {
        let Some(list) = self.element_by_id(&config.list_id) else {
            return Vec::new();
        };
        self.children(&list)
            .iter()
            .filter_map(|entry| self.id_of(*entry))
            .collect()
    }
}
