//! Named view over a rendered match entry.

use crate::page::Page;
use crate::status::MatchStatus;

/// Position of the sort key (match date) among an entry's fields.
pub const SORT_KEY_FIELD: usize = 2;
/// Position of the status label among an entry's fields.
pub const STATUS_FIELD: usize = 4;

/// One child of the list container, with the fields the board reads.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry<E> {
    /// The entry element itself.
    pub element: E,
    /// Text of the sort key field; empty when the field is absent.
    pub sort_key: String,
    /// Parsed status label; `None` when absent or unrecognised.
    pub status: Option<MatchStatus>,
}

impl<E: Clone> MatchEntry<E> {
    /// Read the named fields of `element`.
    pub fn read<P>(page: &P, element: &E) -> Self
    where
        P: Page<Element = E>,
    {
        let fields = page.children(element);
        let sort_key = fields
            .get(SORT_KEY_FIELD)
            .map(|field| page.inner_html(field))
            .unwrap_or_default();
        let status = fields
            .get(STATUS_FIELD)
            .and_then(|field| MatchStatus::from_label(&page.inner_html(field)));
        Self {
            element: element.clone(),
            sort_key,
            status,
        }
    }

    /// Read every entry currently in `list`, in document order.
    pub fn read_all<P>(page: &P, list: &E) -> Vec<Self>
    where
        P: Page<Element = E>,
    {
        page.children(list)
            .iter()
            .map(|element| Self::read(page, element))
            .collect()
    }
}

/// Stable sort, greatest key first. Equal keys keep their input order.
pub fn sort_descending<E>(entries: &mut [MatchEntry<E>]) {
    entries.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(id: u32, key: &str) -> MatchEntry<u32> {
        MatchEntry {
            element: id,
            sort_key: key.to_string(),
            status: None,
        }
    }

    fn keys(entries: &[MatchEntry<u32>]) -> Vec<&str> {
        entries.iter().map(|e| e.sort_key.as_str()).collect()
    }

    #[test]
    fn test_sort_descending_basic() {
        let mut entries = vec![entry(0, "b"), entry(1, "a"), entry(2, "c")];
        sort_descending(&mut entries);
        assert_eq!(keys(&entries), ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut entries = vec![entry(0, "x"), entry(1, "y"), entry(2, "x"), entry(3, "y")];
        sort_descending(&mut entries);
        let ids: Vec<u32> = entries.iter().map(|e| e.element).collect();
        assert_eq!(ids, [1, 3, 0, 2]);
    }

    #[test]
    fn test_sort_descending_dates() {
        let mut entries = vec![
            entry(0, "2024.05.01 10:00"),
            entry(1, "2024.05.12 09:30"),
            entry(2, "2023.12.31 23:59"),
        ];
        sort_descending(&mut entries);
        assert_eq!(
            keys(&entries),
            ["2024.05.12 09:30", "2024.05.01 10:00", "2023.12.31 23:59"]
        );
    }

    #[test]
    fn test_sort_descending_empty() {
        let mut entries: Vec<MatchEntry<u32>> = Vec::new();
        sort_descending(&mut entries);
        assert!(entries.is_empty());
    }

    proptest! {
        #[test]
        fn prop_sorted_keys_never_increase(raw in proptest::collection::vec("[a-d]{0,3}", 0..20)) {
            let mut entries: Vec<_> = raw
                .iter()
                .enumerate()
                .map(|(i, k)| entry(i as u32, k))
                .collect();
            sort_descending(&mut entries);
            for pair in entries.windows(2) {
                prop_assert!(pair[0].sort_key >= pair[1].sort_key);
                if pair[0].sort_key == pair[1].sort_key {
                    prop_assert!(pair[0].element < pair[1].element);
                }
            }
            prop_assert_eq!(entries.len(), raw.len());
        }
    }
}
