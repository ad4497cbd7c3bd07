//! Accordions: groups of panels where opening one closes the others.

use log::debug;
use sitedom::{Document, NodeId};

use super::fold::Panel;

pub const ACCORDION: &str = "data-accordion";

/// A `[data-accordion]` container and the panels bound inside it.
///
/// Members are indices into the site's panel list, in document order.
/// Membership is fixed after bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup {
    root: NodeId,
    members: Vec<usize>,
}

impl AccordionGroup {
    /// Collect every bound panel whose root lies inside `root`.
    pub fn new(doc: &Document, root: NodeId, panels: &[Panel]) -> Self {
        let members = panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.root() != root && doc.contains(root, panel.root()))
            .map(|(i, _)| i)
            .collect();
        Self { root, members }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn contains(&self, panel: usize) -> bool {
        self.members.contains(&panel)
    }

    /// Number of members expanded or expanding.
    pub fn open_count(&self, panels: &[Panel]) -> usize {
        self.members.iter().filter(|&&i| panels[i].is_open()).count()
    }

    /// Close every open sibling of `target`.
    ///
    /// Runs before the target's own toggle, so re-clicking an expanded
    /// panel still leaves its siblings collapsed.
    pub fn close_others(&self, target: usize, panels: &mut [Panel], doc: &mut Document) {
        for &i in &self.members {
            if i != target && panels[i].is_open() {
                debug!("accordion {}: closing sibling {}", self.root, panels[i].root());
                panels[i].close_by_group(doc);
            }
        }
    }

    /// Group-mediated open: close siblings, then toggle `target`.
    pub fn open(&self, target: usize, panels: &mut [Panel], doc: &mut Document) {
        self.close_others(target, panels, doc);
        panels[target].toggle(doc);
    }
}
