//! Core logic for a live match-listing page.
//!
//! This crate is platform-independent:
//! - Status filtering: [`FilterController`], [`FilterState`]
//! - Ordering and empty state: [`DisplayCoordinator`]
//! - Clipboard confirmation: [`ClipboardFeedback`]
//! - Live clock: [`LiveClock`], [`format_duration`]
//! - The page lifecycle facade: [`MatchBoard`]
//!
//! The browser binding lives in the `matchboard` crate; an in-memory page
//! for tests lives in `matchboard-test`.

mod board;
mod clipboard;
mod clock;
mod config;
mod display;
mod entry;
mod error;
mod filter;
pub mod page;
mod status;

pub use board::MatchBoard;
pub use clipboard::{ClipboardFeedback, FeedbackSession};
pub use clock::{
    format_duration, parse_timestamp, ClockReading, ClockState, LiveClock, DAY_MILLIS,
    UNKNOWN_ELAPSED,
};
pub use config::{BoardConfig, ClipboardConfig, ClockConfig, FilterConfig, StyleSet, ToggleStyle};
pub use display::DisplayCoordinator;
pub use entry::{sort_descending, MatchEntry, SORT_KEY_FIELD, STATUS_FIELD};
pub use error::{BoardError, ClockError, ConfigError};
pub use filter::{FilterController, FilterState};
pub use page::{
    ClipboardWriter, Interaction, Page, ScheduleError, Scheduler, TimerHandle, TimerTask,
    WallClock,
};
pub use status::{MatchStatus, STATUS_COUNT};
