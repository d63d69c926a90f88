//! [`Page`] over the live document.

use matchboard_core::Page;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

type ToggleHandler = Rc<dyn Fn(usize)>;

/// The document hosting the match list.
///
/// Click listeners registered through [`Page::bind_toggle`] are owned by the
/// page and removed from their buttons when it is dropped. Listeners on
/// buttons no longer in the document are released on the next bind.
pub struct DomPage {
    document: Document,
    on_toggle: ToggleHandler,
    listeners: RefCell<Vec<(Element, Closure<dyn FnMut(Event)>)>>,
}

impl DomPage {
    /// Wrap `document`. Toggle clicks are forwarded to `on_toggle` with the
    /// button's filter slot.
    pub fn new(document: Document, on_toggle: impl Fn(usize) + 'static) -> Self {
        Self {
            document,
            on_toggle: Rc::new(on_toggle),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// The wrapped document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Number of click listeners currently held.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Drop listeners whose button has left the document, e.g. after htmx
    /// swapped the body.
    fn release_detached(&self) {
        self.listeners.borrow_mut().retain(|(button, listener)| {
            if button.is_connected() {
                return true;
            }
            let _ = button
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            false
        });
    }
}

impl Drop for DomPage {
    fn drop(&mut self) {
        for (button, listener) in self.listeners.get_mut().drain(..) {
            let _ = button
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

impl Page for DomPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let children = element.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn find_by_class(&self, scope: &Element, class: &str) -> Option<Element> {
        scope.get_elements_by_class_name(class).item(0)
    }

    fn inner_html(&self, element: &Element) -> String {
        element.inner_html()
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&self, element: &Element, class: &str, force: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, force) {
            warn!(class, error = ?err, "class toggle rejected");
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            warn!(error = ?err, "append_child rejected");
        }
    }

    fn bind_toggle(&self, button: &Element, slot: usize) {
        self.release_detached();
        let on_toggle = Rc::clone(&self.on_toggle);
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_toggle(slot));
        match button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            Ok(()) => self.listeners.borrow_mut().push((button.clone(), listener)),
            Err(err) => warn!(slot, error = ?err, "click listener rejected"),
        }
    }
}
