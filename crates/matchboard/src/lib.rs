//! Matchboard: live match-listing page controller for the browser.
//!
//! The page is rendered by the server and kept current over a websocket.
//! This crate wires the platform-independent controller from
//! `matchboard-core` to the real DOM, timers and clipboard.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { configure } from './matchboard.js';
//!
//! async function main() {
//!     await init();
//!     // Optional: override element ids, classes or timings.
//!     configure('{"clipboard": {"revert_after_ms": 1500}}');
//! }
//! ```
//!
//! Initialisation installs `matches_load`, `matches_update`,
//! `handle_clipboard`, `start_timer` and `close_error` on `window`, so the
//! inline handlers in the server markup call them directly.

#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub use matchboard_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserScheduler, ClickEvent, DateClock, DomPage, NavigatorClipboard};
