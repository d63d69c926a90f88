#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
//! Testing harness for matchboard.
//!
//! Everything runs in memory: the page is a small DOM arena, timers live on
//! a virtual timeline and the clipboard records what was written.
//!
//! ```
//! use matchboard_core::MatchStatus;
//! use matchboard_test::{Harness, PageFixture};
//!
//! let fixture = PageFixture::new()
//!     .entry("m1", "2024-05-01", MatchStatus::Planned)
//!     .entry("m2", "2024-05-02", MatchStatus::Finished);
//! let mut harness = Harness::new(&fixture);
//! harness.load().unwrap();
//! harness.update().unwrap();
//! harness.assert_order(&["m2", "m1"]);
//! ```

mod clipboard;
mod fixture;
mod harness;
mod page;
mod time;

pub use clipboard::{Click, RecordingClipboard};
pub use fixture::{PageFixture, COPY_FIELD};
pub use harness::{Harness, TestBoard, DEFAULT_EPOCH_MILLIS};
pub use page::{MemoryPage, NodeId};
pub use time::VirtualTime;
