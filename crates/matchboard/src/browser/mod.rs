//! Browser runtime for matchboard.
//!
//! Implements the core's platform seams over `web-sys` and hosts the single
//! board instance behind the exported page hooks.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod clipboard;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod timers;

#[cfg(target_arch = "wasm32")]
pub use clipboard::{ClickEvent, NavigatorClipboard};
#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;
#[cfg(target_arch = "wasm32")]
pub use timers::{BrowserScheduler, DateClock};
