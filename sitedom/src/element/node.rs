use std::collections::HashMap;

use crate::style::{InlineStyle, Length};
use crate::transitions::Transitions;

/// Builder for a document element.
///
/// Elements are assembled as an owned tree and then handed to
/// [`Document::new`](crate::Document::new), which flattens them in document
/// order.
#[derive(Debug, Clone, Default)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Visual
    pub style: InlineStyle,
    pub transitions: Transitions,

    // Measured layout, as the browser would report it
    /// Natural content height (`scrollHeight`).
    pub scroll_height: u32,
    /// Rendered height (`offsetHeight`).
    pub offset_height: u32,

    // Form state
    pub value: String,

    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    pub fn header() -> Self {
        Self::new("header")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` attribute. `name` is given without the prefix.
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    /// Set a valueless `data-*` attribute, e.g. `data-fold`.
    pub fn flag(self, name: &str) -> Self {
        self.data(name, "")
    }

    // Visual
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    // Layout
    pub fn scroll_height(mut self, px: u32) -> Self {
        self.scroll_height = px;
        self
    }

    pub fn offset_height(mut self, px: u32) -> Self {
        self.offset_height = px;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}
