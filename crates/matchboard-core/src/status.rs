//! Match status values shown in the listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of status values, and therefore of filter slots and toggle buttons.
pub const STATUS_COUNT: usize = 3;

/// Lifecycle status of a match, as rendered in an entry's status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Scheduled, not started yet.
    Planned,
    /// Currently being played.
    InProgress,
    /// Completed; the result can be copied.
    Finished,
}

impl MatchStatus {
    /// All statuses in toggle-button order.
    pub const ALL: [Self; STATUS_COUNT] = [Self::Planned, Self::InProgress, Self::Finished];

    /// The label rendered in the entry's status field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "InProgress",
            Self::Finished => "Finished",
        }
    }

    /// Parse a rendered label. The markup must match the label exactly.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Planned" => Some(Self::Planned),
            "InProgress" => Some(Self::InProgress),
            "Finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Filter slot index of this status.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Planned => 0,
            Self::InProgress => 1,
            Self::Finished => 2,
        }
    }

    /// Status for a filter slot index.
    #[must_use]
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip_for_all() {
        for status in MatchStatus::ALL {
            assert_eq!(MatchStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(MatchStatus::from_label("  InProgress\n"), None);
        assert_eq!(MatchStatus::from_label("Planned "), None);
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(MatchStatus::from_label("finished"), None);
        assert_eq!(MatchStatus::from_label(""), None);
        assert_eq!(MatchStatus::from_label("In Progress"), None);
    }

    #[test]
    fn test_slots_follow_button_order() {
        for (i, status) in MatchStatus::ALL.iter().enumerate() {
            assert_eq!(status.slot(), i);
            assert_eq!(MatchStatus::from_slot(i), Some(*status));
        }
        assert_eq!(MatchStatus::from_slot(STATUS_COUNT), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(MatchStatus::Finished.to_string(), "Finished");
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&MatchStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
        let parsed: MatchStatus = serde_json::from_str("\"Planned\"").unwrap();
        assert_eq!(parsed, MatchStatus::Planned);
    }
}
