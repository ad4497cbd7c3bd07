//! Search boxes: results follow the input, outside clicks and Escape close.

use log::debug;
use sitedom::{Document, Key, NodeId, Selector};

use crate::error::BindError;

pub const SEARCH: &str = "search";
pub const SEARCH_OPENED: &str = "is-open";
/// Controls carrying this attribute open a search; clicks on them never
/// count as outside clicks.
pub const SEARCH_OPEN_ATTR: &str = "data-search-open";

const INPUT: &str = "search__input";
const RESET: &str = "search__reset";
const RESULTS: &str = "search__results";
const RESULTS_VISIBLE: &str = "is-visible";

/// One `.search` block. Every part is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    root: NodeId,
    input: Option<NodeId>,
    reset: Option<NodeId>,
    results: Option<NodeId>,
}

impl SearchBox {
    pub fn bind(doc: &Document, root: NodeId) -> Self {
        Self {
            root,
            input: doc.query(root, &Selector::class(INPUT)),
            reset: doc.query(root, &Selector::class(RESET)),
            results: doc.query(root, &Selector::class(RESULTS)),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.root, SEARCH_OPENED)
    }

    fn close(&self, doc: &mut Document) {
        doc.remove_class(self.root, SEARCH_OPENED);
        if let Some(results) = self.results {
            doc.remove_class(results, RESULTS_VISIBLE);
        }
    }
}

/// Every search box on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Searches {
    boxes: Vec<SearchBox>,
}

impl Searches {
    pub fn bind(doc: &Document) -> Result<Self, BindError> {
        let selector = Selector::class(SEARCH);
        let boxes: Vec<_> = doc
            .query_all(doc.root(), &selector)
            .into_iter()
            .map(|root| SearchBox::bind(doc, root))
            .collect();
        if boxes.is_empty() {
            return Err(BindError::missing("search", &selector));
        }
        Ok(Self { boxes })
    }

    pub fn boxes(&self) -> &[SearchBox] {
        &self.boxes
    }

    /// Reset buttons first, then the document-level outside-click check.
    pub fn handle_click(&mut self, doc: &mut Document, target: NodeId) {
        for search in &self.boxes {
            if let Some(reset) = search.reset
                && doc.contains(reset, target)
            {
                if let Some(input) = search.input {
                    doc.set_value(input, "");
                }
                search.close(doc);
            }
        }

        let on_opener = doc
            .closest(target, &Selector::attr(SEARCH_OPEN_ATTR))
            .is_some();
        for search in &self.boxes {
            if search.is_open(doc) && !doc.contains(search.root, target) && !on_opener {
                debug!("search {}: outside click", search.root);
                search.close(doc);
            }
        }
    }

    /// The new value must already be stored on `target`.
    pub fn handle_input(&mut self, doc: &mut Document, target: NodeId) {
        let value = doc.value(target).trim().to_string();
        for search in self.boxes.iter().filter(|s| s.input == Some(target)) {
            if let Some(results) = search.results {
                doc.set_class(results, RESULTS_VISIBLE, !value.is_empty());
            }
            doc.add_class(search.root, SEARCH_OPENED);
        }
    }

    pub fn handle_focus(&mut self, doc: &mut Document, target: NodeId) {
        for search in self.boxes.iter().filter(|s| s.input == Some(target)) {
            doc.add_class(search.root, SEARCH_OPENED);
        }
    }

    pub fn handle_key(&mut self, doc: &mut Document, key: Key) {
        if key != Key::Escape {
            return;
        }
        for search in &self.boxes {
            if search.is_open(doc) {
                search.close(doc);
            }
        }
    }
}
