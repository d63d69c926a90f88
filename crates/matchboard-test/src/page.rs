//! In-memory DOM implementing [`Page`].
//!
//! Elements live in an arena shared by every clone of the page, so a test
//! can keep a handle while the board mutates the same document.

use matchboard_core::Page;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Handle to an element of a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    id: Option<String>,
    classes: Vec<String>,
    html: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
struct Dom {
    nodes: Vec<Node>,
    bindings: HashMap<NodeId, usize>,
    bind_calls: usize,
}

impl Dom {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn is_connected(&self, mut id: NodeId) -> bool {
        loop {
            if id == MemoryPage::ROOT {
                return true;
            }
            match self.node(id).parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }
}

/// A document held in memory.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    dom: Rc<RefCell<Dom>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// The document body.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a page with an empty body.
    #[must_use]
    pub fn new() -> Self {
        let dom = Dom {
            nodes: vec![Node::default()],
            ..Dom::default()
        };
        Self {
            dom: Rc::new(RefCell::new(dom)),
        }
    }

    /// Append a new element to `parent`.
    pub fn add(&self, parent: NodeId, id: Option<&str>, classes: &[&str], html: &str) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let node = NodeId(dom.nodes.len());
        dom.nodes.push(Node {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            html: html.to_string(),
            children: Vec::new(),
            parent: Some(parent),
        });
        dom.node_mut(parent).children.push(node);
        node
    }

    /// Detach `node` (and its subtree) from the document.
    pub fn remove(&self, node: NodeId) {
        self.dom.borrow_mut().detach(node);
    }

    /// Detach the element with `id`. Returns whether it was found.
    pub fn remove_by_id(&self, id: &str) -> bool {
        match self.element_by_id(id) {
            Some(node) => {
                self.remove(node);
                true
            }
            None => false,
        }
    }

    /// Classes of `node`, in insertion order.
    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.dom.borrow().node(node).classes.clone()
    }

    /// Id attribute of `node`.
    #[must_use]
    pub fn id_of(&self, node: NodeId) -> Option<String> {
        self.dom.borrow().node(node).id.clone()
    }

    /// Parent of `node`, if attached.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom.borrow().node(node).parent
    }

    /// Toggle slot bound to `node`, if any.
    #[must_use]
    pub fn binding(&self, node: NodeId) -> Option<usize> {
        self.dom.borrow().bindings.get(&node).copied()
    }

    /// How many times a click handler was registered.
    #[must_use]
    pub fn bind_calls(&self) -> usize {
        self.dom.borrow().bind_calls
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        dom.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
            .find(|(node_id, node)| node.id.as_deref() == Some(id) && dom.is_connected(*node_id))
            .map(|(node_id, _)| node_id)
    }

    fn children(&self, element: &NodeId) -> Vec<NodeId> {
        self.dom.borrow().node(*element).children.clone()
    }

    fn find_by_class(&self, scope: &NodeId, class: &str) -> Option<NodeId> {
        let dom = self.dom.borrow();
        let mut stack: Vec<NodeId> = dom.node(*scope).children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if dom.node(node).classes.iter().any(|c| c == class) {
                return Some(node);
            }
            stack.extend(dom.node(node).children.iter().rev().copied());
        }
        None
    }

    fn inner_html(&self, element: &NodeId) -> String {
        self.dom.borrow().node(*element).html.clone()
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        self.dom.borrow_mut().node_mut(*element).html = html.to_string();
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.dom
            .borrow()
            .node(*element)
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn toggle_class(&self, element: &NodeId, class: &str, force: bool) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.node_mut(*element).classes;
        let present = classes.iter().any(|c| c == class);
        if force && !present {
            classes.push(class.to_string());
        } else if !force && present {
            classes.retain(|c| c != class);
        }
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        dom.detach(*child);
        dom.node_mut(*child).parent = Some(*parent);
        dom.node_mut(*parent).children.push(*child);
    }

    fn bind_toggle(&self, button: &NodeId, slot: usize) {
        let mut dom = self.dom.borrow_mut();
        dom.bindings.insert(*button, slot);
        dom.bind_calls += 1;
    }
}
