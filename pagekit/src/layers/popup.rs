//! Modal popups sharing one overlay container.
//!
//! Markup:
//!
//! ```html
//! <div class="popups">
//!   <div class="popup" data-popup="contact">
//!     <div class="popup__content">
//!       <button data-popup-close>×</button>
//!     </div>
//!   </div>
//! </div>
//! <button data-popup-open="contact">Contact us</button>
//! ```
//!
//! The container's `popups--open` class and each popup's `popup--active`
//! class are projections of [`Popup::is_active`], rewritten by
//! [`PopupLayer::sync`] after every change. The body scroll lock is owned
//! by the site, which combines this layer with the burger menu.

use log::{debug, warn};
use sitedom::{Document, Key, NodeId, Selector};

use crate::error::BindError;

pub const POPUP_KIND: &str = "data-popup";
pub const POPUP_OPEN: &str = "data-popup-open";
pub const POPUP_CLOSE: &str = "data-popup-close";

const CONTAINER_OPEN: &str = "popups--open";
const POPUP_ACTIVE: &str = "popup--active";

/// One modal popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    kind: String,
    root: NodeId,
    content: NodeId,
    triggers: Vec<NodeId>,
    active: bool,
}

impl Popup {
    /// Bind the `.popup` element at `root`. Triggers are looked up across the
    /// whole document.
    pub fn bind(doc: &Document, root: NodeId) -> Result<Self, BindError> {
        let kind = doc
            .attr(root, POPUP_KIND)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| BindError::missing("popup", &Selector::attr(POPUP_KIND)))?
            .to_string();

        let body = Selector::class("popup__content");
        let content = doc
            .query(root, &body)
            .ok_or_else(|| BindError::missing("popup", &body))?;

        let triggers = doc.query_all(doc.root(), &Selector::attr_eq(POPUP_OPEN, kind.as_str()));
        if triggers.is_empty() {
            debug!("popup '{kind}' has no triggers");
        }

        Ok(Self {
            active: doc.has_class(root, POPUP_ACTIVE),
            kind,
            root,
            content,
            triggers,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn triggers(&self) -> &[NodeId] {
        &self.triggers
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The `.popups` overlay container and every popup bound inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLayer {
    container: NodeId,
    popups: Vec<Popup>,
}

impl PopupLayer {
    /// Bind the first `.popups` container. Individual popups that fail to
    /// bind are logged and left out.
    pub fn bind(doc: &Document) -> Result<Self, BindError> {
        let selector = Selector::class("popups");
        let container = doc
            .query(doc.root(), &selector)
            .ok_or_else(|| BindError::missing("popups", &selector))?;

        let popups = doc
            .query_all(container, &Selector::class("popup"))
            .into_iter()
            .filter_map(|root| match Popup::bind(doc, root) {
                Ok(popup) => Some(popup),
                Err(e) => {
                    warn!("skipping popup {root}: {e}");
                    None
                }
            })
            .collect();

        Ok(Self { container, popups })
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn find(&self, kind: &str) -> Option<usize> {
        self.popups.iter().position(|p| p.kind == kind)
    }

    /// Logical OR over all popups. Drives the overlay flag and the body lock.
    pub fn any_active(&self) -> bool {
        self.popups.iter().any(|p| p.active)
    }

    pub fn active_kinds(&self) -> Vec<&str> {
        self.popups
            .iter()
            .filter(|p| p.active)
            .map(|p| p.kind.as_str())
            .collect()
    }

    /// Activate the popup of the given type. Returns false if there is none.
    pub fn open_popup(&mut self, kind: &str) -> bool {
        match self.find(kind) {
            Some(index) => {
                self.open(index);
                true
            }
            None => {
                warn!("no popup of type '{kind}'");
                false
            }
        }
    }

    pub fn open(&mut self, index: usize) {
        if let Some(popup) = self.popups.get_mut(index) {
            debug!("popup '{}' opened", popup.kind);
            popup.active = true;
        }
    }

    /// Deactivate one popup; the shared flag follows the remaining ones.
    pub fn close_popup(&mut self, index: usize) {
        if let Some(popup) = self.popups.get_mut(index)
            && popup.active
        {
            debug!("popup '{}' closed", popup.kind);
            popup.active = false;
        }
    }

    pub fn close_all(&mut self) {
        for index in 0..self.popups.len() {
            self.close_popup(index);
        }
    }

    /// Route a click. Trigger clicks open, backdrop clicks close their popup,
    /// close controls inside the container close everything.
    ///
    /// Returns true if any popup changed.
    pub fn handle_click(&mut self, doc: &Document, target: NodeId) -> bool {
        let before = self.active_mask();

        for index in 0..self.popups.len() {
            let hit = self.popups[index]
                .triggers
                .iter()
                .any(|&trigger| doc.contains(trigger, target));
            if hit {
                self.open(index);
            }
        }

        for index in 0..self.popups.len() {
            let popup = &self.popups[index];
            if doc.contains(popup.root, target) && !doc.contains(popup.content, target) {
                self.close_popup(index);
            }
        }

        if doc.contains(self.container, target)
            && doc.closest(target, &Selector::attr(POPUP_CLOSE)).is_some()
        {
            self.close_all();
        }

        before != self.active_mask()
    }

    /// Escape closes everything. Returns true if any popup changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key != Key::Escape || !self.any_active() {
            return false;
        }
        self.close_all();
        true
    }

    /// Write the active state to the document.
    pub fn sync(&self, doc: &mut Document) {
        for popup in &self.popups {
            doc.set_class(popup.root, POPUP_ACTIVE, popup.active);
        }
        doc.set_class(self.container, CONTAINER_OPEN, self.any_active());
    }

    fn active_mask(&self) -> Vec<bool> {
        self.popups.iter().map(|p| p.active).collect()
    }
}
