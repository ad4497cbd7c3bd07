//! Flattened, mutable document tree.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::element::Element;
use crate::selector::{Selector, Simple};
use crate::style::{InlineStyle, Length};
use crate::transitions::Transitions;

/// Handle to a node in a [`Document`]. Ordering follows document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    style: InlineStyle,
    transitions: Transitions,
    scroll_height: u32,
    offset_height: u32,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A document built from an [`Element`] tree.
///
/// The root element plays the role of `<body>`. Nodes are stored in
/// depth-first pre-order, so iterating by index is document order.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
    /// Nodes whose inline height was set to a pixel value since the last drain.
    height_writes: Vec<NodeId>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            ids: HashMap::new(),
            height_writes: Vec::new(),
        };
        doc.insert(root, None);
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        if let Some(id) = &element.id {
            self.ids.entry(id.clone()).or_insert(node_id);
        }
        self.nodes.push(Node {
            tag: element.tag,
            id: element.id,
            classes: element.classes,
            attrs: element.attrs,
            style: element.style,
            transitions: element.transitions,
            scroll_height: element.scroll_height,
            offset_height: element.offset_height,
            value: element.value,
            parent,
            children: Vec::new(),
        });
        for child in element.children {
            let child_id = self.insert(child, Some(node_id));
            self.nodes[node_id.0].children.push(child_id);
        }
        node_id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// The body node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by its `id` attribute.
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// Iterate `node` and then its ancestors up to the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |n| self.parent(*n))
    }

    /// Inclusive containment, like `Node.contains`.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let n = self.node(node);
        !selector.is_empty()
            && selector.parts().iter().all(|part| match part {
                Simple::Tag(tag) => n.tag.eq_ignore_ascii_case(tag),
                Simple::Id(id) => n.id.as_deref() == Some(id.as_str()),
                Simple::Class(class) => n.classes.iter().any(|c| c == class),
                Simple::Attr { name, value } => match (n.attrs.get(name), value) {
                    (Some(_), None) => true,
                    (Some(actual), Some(expected)) => actual == expected,
                    (None, _) => false,
                },
            })
    }

    /// All descendants of `scope` (excluding `scope`) matching `selector`,
    /// in document order.
    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect(scope, selector, &mut found);
        found
    }

    fn collect(&self, node: NodeId, selector: &Selector, found: &mut Vec<NodeId>) {
        for &child in &self.node(node).children {
            if self.matches(child, selector) {
                found.push(child);
            }
            self.collect(child, selector, found);
        }
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.query_all(scope, selector).into_iter().next()
    }

    /// Closest inclusive ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        self.ancestors(node).find(|n| self.matches(*n, selector))
    }

    // -------------------------------------------------------------------------
    // Attributes and classes
    // -------------------------------------------------------------------------

    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.node(node).id.as_deref()
    }

    pub fn set_element_id(&mut self, node: NodeId, id: impl Into<String>) {
        let id = id.into();
        if let Some(old) = self.node_mut(node).id.replace(id.clone()) {
            self.ids.remove(&old);
        }
        self.ids.insert(id, node);
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.node_mut(node).attrs.insert(name.into(), value.into());
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.node_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    /// `classList.toggle(class, on)`.
    pub fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// `classList.toggle(class)`. Returns whether the class is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let on = !self.has_class(node, class);
        self.set_class(node, class, on);
        on
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.node(node).classes
    }

    // -------------------------------------------------------------------------
    // Style and layout
    // -------------------------------------------------------------------------

    pub fn style(&self, node: NodeId) -> &InlineStyle {
        &self.node(node).style
    }

    pub fn transitions(&self, node: NodeId) -> &Transitions {
        &self.node(node).transitions
    }

    /// Set the inline height. Pixel writes are recorded for the transition
    /// tracker; `auto` cannot be animated and is not.
    pub fn set_height(&mut self, node: NodeId, height: Length) {
        trace!("{node}: height = {height}");
        self.node_mut(node).style.height = Some(height);
        if height != Length::Auto && !self.height_writes.contains(&node) {
            self.height_writes.push(node);
        }
    }

    pub fn set_top(&mut self, node: NodeId, top: Option<Length>) {
        self.node_mut(node).style.top = top;
    }

    pub fn set_max_height(&mut self, node: NodeId, max_height: Option<Length>) {
        self.node_mut(node).style.max_height = max_height;
    }

    /// Natural content height, `scrollHeight`.
    pub fn scroll_height(&self, node: NodeId) -> u32 {
        self.node(node).scroll_height
    }

    /// Update the natural height, e.g. after images inside finished loading.
    pub fn set_scroll_height(&mut self, node: NodeId, px: u32) {
        self.node_mut(node).scroll_height = px;
    }

    /// Rendered height, `offsetHeight`.
    pub fn offset_height(&self, node: NodeId) -> u32 {
        self.node(node).offset_height
    }

    pub fn set_offset_height(&mut self, node: NodeId, px: u32) {
        self.node_mut(node).offset_height = px;
    }

    /// Drain pixel height writes made since the last call.
    pub fn take_height_writes(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.height_writes)
    }

    // -------------------------------------------------------------------------
    // Form state
    // -------------------------------------------------------------------------

    pub fn value(&self, node: NodeId) -> &str {
        &self.node(node).value
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.node_mut(node).value = value.into();
    }
}
