//! System clipboard writes and the click that triggered them.

use matchboard_core::{ClipboardWriter, Interaction};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = "writeText")]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// `navigator.clipboard.writeText`, not awaited by the caller.
///
/// A failed or denied write is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    fn write_text(&self, text: &str) {
        match clipboard_write_text(text) {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!(error = ?err, "clipboard write rejected");
                }
            }),
            Err(err) => warn!(error = ?err, "clipboard unavailable"),
        }
    }
}

/// A DOM click handed to the copy hook.
pub struct ClickEvent(pub Event);

impl Interaction<Element> for ClickEvent {
    fn current_target(&self) -> Option<Element> {
        self.0.current_target()?.dyn_into::<Element>().ok()
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}
