//! WASM entry point: the board instance and the exported page hooks.

use super::clipboard::{ClickEvent, NavigatorClipboard};
use super::dom::DomPage;
use super::logging;
use super::timers::{BrowserScheduler, DateClock};
use matchboard_core::{BoardConfig, BoardError, MatchBoard};
use std::cell::RefCell;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{window, Event};

/// The board as hosted in the browser.
pub type BrowserBoard = MatchBoard<DomPage, BrowserScheduler, NavigatorClipboard, DateClock>;

thread_local! {
    static RUNTIME: RefCell<Option<BrowserBoard>> = const { RefCell::new(None) };
}

/// Run `f` against the hosted board.
///
/// Returns `None` when no board is installed or the board is already in use
/// further up the stack.
pub fn with_board<T>(f: impl FnOnce(&mut BrowserBoard) -> T) -> Option<T> {
    RUNTIME.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            warn!("board busy, re-entrant call skipped");
            return None;
        };
        match slot.as_mut() {
            Some(board) => Some(f(board)),
            None => {
                warn!("board not started");
                None
            }
        }
    })
}

fn report<T>(hook: &str, result: Result<T, BoardError>) {
    if let Err(err) = result {
        error!(hook, %err, "page hook failed");
    }
}

fn build(config: BoardConfig) -> Result<BrowserBoard, JsValue> {
    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let page = DomPage::new(document, |slot| {
        with_board(|board| report("toggle", board.toggle(slot)));
    });
    let scheduler = BrowserScheduler::new(window, |task| {
        with_board(|board| board.fire(task));
    });
    Ok(MatchBoard::new(
        config,
        page,
        scheduler,
        NavigatorClipboard,
        DateClock,
    ))
}

fn install(board: BrowserBoard) -> Result<(), JsValue> {
    // The previous board is dropped outside the borrow; its destructor
    // releases listeners and intervals.
    let previous = RUNTIME.with(|slot| {
        slot.try_borrow_mut()
            .map(|mut slot| slot.replace(board))
            .map_err(|_| JsValue::from_str("board busy"))
    })?;
    drop(previous);
    Ok(())
}

fn export_global(window: &web_sys::Window, name: &str, function: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), function)?;
    Ok(())
}

fn install_globals() -> Result<(), JsValue> {
    let window = window().ok_or("No window")?;

    let hooks: [(&str, fn()); 4] = [
        ("matches_load", matches_load),
        ("matches_update", matches_update),
        ("start_timer", start_timer),
        ("close_error", close_error),
    ];
    for (name, hook) in hooks {
        let function = Closure::<dyn Fn()>::new(hook).into_js_value();
        export_global(&window, name, &function)?;
    }

    let clipboard = Closure::<dyn Fn(Event, String)>::new(|event: Event, text: String| {
        handle_clipboard(event, &text);
    })
    .into_js_value();
    export_global(&window, "handle_clipboard", &clipboard)
}

/// Module start: logging, the default board and the `window` hooks.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();
    install(build(BoardConfig::default())?)?;
    install_globals()?;
    info!("matchboard started");
    Ok(())
}

/// Replace the board with one built from a JSON configuration. Missing
/// fields keep their defaults; filter, clipboard and clock state restart.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = BoardConfig::from_json(json).map_err(|err| {
        error!(%err, "rejected configuration");
        JsValue::from_str(&err.to_string())
    })?;
    install(build(config)?)?;
    info!("configuration applied");
    Ok(())
}

/// Websocket open: style and wire the filter buttons.
#[wasm_bindgen]
pub fn matches_load() {
    with_board(|board| report("matches_load", board.matches_load()));
}

/// Websocket message: resort and re-filter the list.
#[wasm_bindgen]
pub fn matches_update() {
    with_board(|board| report("matches_update", board.matches_update()));
}

/// Copy `text` and confirm on the clicked region.
#[wasm_bindgen]
pub fn handle_clipboard(event: Event, text: &str) {
    let click = ClickEvent(event);
    with_board(|board| report("handle_clipboard", board.copy(&click, text)));
}

/// Start the live clock.
#[wasm_bindgen]
pub fn start_timer() {
    with_board(|board| report("start_timer", board.start_clock()));
}

/// Clear the error-message region.
#[wasm_bindgen]
pub fn close_error() {
    with_board(|board| report("close_error", board.close_error()));
}

/// Current filter visibility as JSON, e.g. `[true,true,false]`.
#[wasm_bindgen]
pub fn filter_state() -> Option<String> {
    with_board(|board| serde_json::to_string(&board.filter_state()).ok()).flatten()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}
