//! Page contract configuration.
//!
//! Every element id, class name, icon and timing the board relies on lives
//! here. Defaults describe the scoreboard page the board was written for, so
//! an empty JSON object is a complete configuration.
//!
//! # Example
//!
//! ```
//! use matchboard_core::BoardConfig;
//!
//! let config = BoardConfig::from_json(r#"{ "list_id": "fixtures" }"#).unwrap();
//! assert_eq!(config.list_id, "fixtures");
//! assert_eq!(config.empty_id, "no_matches");
//! ```

use crate::error::ConfigError;
use crate::status::STATUS_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the list container holding the match entries.
    pub list_id: String,
    /// Id of the "no results" placeholder.
    pub empty_id: String,
    /// Id of the error-message region cleared by `close_error`.
    pub error_id: String,
    /// Class that hides an element.
    pub hidden_class: String,
    /// Status filter settings.
    pub filter: FilterConfig,
    /// Clipboard feedback settings.
    pub clipboard: ClipboardConfig,
    /// Live clock settings.
    pub clock: ClockConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            list_id: "match_list".to_string(),
            empty_id: "no_matches".to_string(),
            error_id: "error".to_string(),
            hidden_class: "hidden".to_string(),
            filter: FilterConfig::default(),
            clipboard: ClipboardConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the board depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = [
            ("list_id", &self.list_id),
            ("empty_id", &self.empty_id),
            ("error_id", &self.error_id),
            ("hidden_class", &self.hidden_class),
            ("clipboard.indicator_class", &self.clipboard.indicator_class),
            ("clock.current_time_id", &self.clock.current_time_id),
            ("clock.match_start_id", &self.clock.match_start_id),
            ("clock.match_time_id", &self.clock.match_time_id),
            ("clock.set_start_id", &self.clock.set_start_id),
            ("clock.set_time_id", &self.clock.set_time_id),
        ];
        for (name, value) in ids {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }

        let mut seen = HashSet::new();
        for id in &self.filter.button_ids {
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "filter.button_ids must not contain empty ids".to_string(),
                ));
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "filter.button_ids contains duplicate id {id:?}"
                )));
            }
        }

        let style = &self.filter.style;
        for (name, set) in [("active", &style.active), ("inactive", &style.inactive)] {
            if set.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "filter.style.{name} must name at least one class"
                )));
            }
            if set.iter().any(|class| class.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "filter.style.{name} must not contain empty classes"
                )));
            }
        }

        if let Some(class) = style.overlap() {
            return Err(ConfigError::Invalid(format!(
                "class {class:?} is in both the active and inactive style sets"
            )));
        }

        if self.clipboard.revert_after_ms == 0 {
            return Err(ConfigError::Invalid(
                "clipboard.revert_after_ms must be positive".to_string(),
            ));
        }
        if self.clock.period_ms == 0 {
            return Err(ConfigError::Invalid(
                "clock.period_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Status filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Toggle button ids in status order (Planned, InProgress, Finished).
    pub button_ids: [String; STATUS_COUNT],
    /// Initial visibility per status slot.
    pub initial: [bool; STATUS_COUNT],
    /// Button styling for the two toggle states.
    pub style: ToggleStyle,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_ids: [
                "toggle_planned".to_string(),
                "toggle_in_progress".to_string(),
                "toggle_finished".to_string(),
            ],
            initial: [true; STATUS_COUNT],
            style: ToggleStyle::default(),
        }
    }
}

/// A set of presentation classes applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSet(pub Vec<String>);

impl StyleSet {
    /// Build a style set from class names.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    /// Iterate the class names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the set has no usable class.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.trim().is_empty())
    }

    /// Whether the set contains `class`.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }
}

/// Button styling: exactly one of the two sets is applied at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleStyle {
    /// Classes for a button whose status is shown.
    pub active: StyleSet,
    /// Classes for a button whose status is hidden.
    pub inactive: StyleSet,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            active: StyleSet::new(["bg-sky-500", "hover:bg-sky-400", "active:bg-sky-300"]),
            inactive: StyleSet::new(["bg-zinc-700", "hover:bg-zinc-600", "active:bg-zinc-500"]),
        }
    }
}

impl ToggleStyle {
    /// First class present in both sets, if any.
    #[must_use]
    pub fn overlap(&self) -> Option<&str> {
        self.active.iter().find(|c| self.inactive.contains(c))
    }
}

/// Clipboard feedback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Class of the indicator element inside a copyable region.
    pub indicator_class: String,
    /// Indicator markup in the resting state.
    pub default_icon: String,
    /// Indicator markup while a copy is being confirmed.
    pub confirmed_icon: String,
    /// How long the confirmation stays visible.
    pub revert_after_ms: u32,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            indicator_class: "clipboard".to_string(),
            default_icon: r##"<svg viewBox="0 0 24 24" class="size-full"><use xlink:href="#clipboard-icon"></use></svg>"##
                .to_string(),
            confirmed_icon: r##"<svg viewBox="0 0 24 24" class="size-full text-green-400"><use xlink:href="#clipboard-check-icon"></use></svg>"##
                .to_string(),
            revert_after_ms: 1000,
        }
    }
}

impl ClipboardConfig {
    /// Revert delay as a [`Duration`].
    #[must_use]
    pub fn revert_after(&self) -> Duration {
        Duration::from_millis(u64::from(self.revert_after_ms))
    }
}

/// Live clock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Field showing the current time of day.
    pub current_time_id: String,
    /// Hidden field holding the match start timestamp.
    pub match_start_id: String,
    /// Field showing time since match start.
    pub match_time_id: String,
    /// Hidden field holding the set start timestamp.
    pub set_start_id: String,
    /// Field showing time since set start.
    pub set_time_id: String,
    /// Tick period.
    pub period_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            current_time_id: "current_time".to_string(),
            match_start_id: "match_start".to_string(),
            match_time_id: "match_time".to_string(),
            set_start_id: "set_start".to_string(),
            set_time_id: "set_time".to_string(),
            period_ms: 1000,
        }
    }
}

impl ClockConfig {
    /// Tick period as a [`Duration`].
    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_millis(u64::from(self.period_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_nested_override() {
        let config =
            BoardConfig::from_json(r#"{ "clipboard": { "revert_after_ms": 250 } }"#).unwrap();
        assert_eq!(config.clipboard.revert_after(), Duration::from_millis(250));
        assert_eq!(config.clipboard.indicator_class, "clipboard");
    }

    #[test]
    fn test_button_ids_override() {
        let config = BoardConfig::from_json(
            r#"{ "filter": { "button_ids": ["a", "b", "c"], "initial": [true, false, true] } }"#,
        )
        .unwrap();
        assert_eq!(config.filter.button_ids, ["a", "b", "c"]);
        assert_eq!(config.filter.initial, [true, false, true]);
    }

    #[test]
    fn test_wrong_button_count_rejected() {
        let result = BoardConfig::from_json(r#"{ "filter": { "button_ids": ["a", "b"] } }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_duplicate_button_ids_rejected() {
        let result =
            BoardConfig::from_json(r#"{ "filter": { "button_ids": ["a", "b", "a"] } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = BoardConfig::from_json(r#"{ "list_id": "  " }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("list_id")));
    }

    #[test]
    fn test_overlapping_styles_rejected() {
        let result = BoardConfig::from_json(
            r#"{ "filter": { "style": { "active": ["x", "y"], "inactive": ["y"] } } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("\"y\"")));
    }

    #[test]
    fn test_empty_style_sets_rejected() {
        let cases = [
            (r#"{ "filter": { "style": { "active": [] } } }"#, "filter.style.active"),
            (r#"{ "filter": { "style": { "inactive": [" "] } } }"#, "filter.style.inactive"),
            (
                r#"{ "filter": { "style": { "active": ["on", ""], "inactive": ["off"] } } }"#,
                "empty classes",
            ),
        ];
        for (json, expected) in cases {
            let err = BoardConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{json}");
            assert!(err.to_string().contains(expected), "{err}");
        }
    }

    #[test]
    fn test_zero_timings_rejected() {
        assert!(BoardConfig::from_json(r#"{ "clipboard": { "revert_after_ms": 0 } }"#).is_err());
        assert!(BoardConfig::from_json(r#"{ "clock": { "period_ms": 0 } }"#).is_err());
    }

    #[test]
    fn test_style_set_is_transparent_in_json() {
        let json = serde_json::to_string(&StyleSet::new(["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }

    #[test]
    fn test_default_styles_are_disjoint() {
        assert_eq!(ToggleStyle::default().overlap(), None);
    }
}
