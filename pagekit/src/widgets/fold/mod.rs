//! Foldable panels: one trigger, one content region whose height animates.
//!
//! Markup:
//!
//! ```html
//! <div data-fold>
//!   <button data-fold-btn>Question</button>
//!   <div data-fold-content>Answer</div>
//! </div>
//! ```

mod state;

pub use state::PanelState;

use log::debug;
use sitedom::{Document, Length, NodeId, Selector};

use crate::error::BindError;

pub const FOLD: &str = "data-fold";
pub const FOLD_BTN: &str = "data-fold-btn";
pub const FOLD_CONTENT: &str = "data-fold-content";

const TRIGGER_ACTIVE: &str = "is-active";
const CONTENT_EXPANDED: &str = "is-expanded";

/// One collapsible content region bound to one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    root: NodeId,
    trigger: NodeId,
    content: NodeId,
    state: PanelState,
}

impl Panel {
    /// Bind the `[data-fold]` element at `root`.
    ///
    /// Content already marked `is-expanded` (and not pinned to zero height)
    /// starts out expanded.
    pub fn bind(doc: &Document, root: NodeId) -> Result<Self, BindError> {
        let btn = Selector::attr(FOLD_BTN);
        let trigger = doc
            .query(root, &btn)
            .ok_or_else(|| BindError::missing("fold", &btn))?;

        let body = Selector::attr(FOLD_CONTENT);
        let content = doc
            .query(root, &body)
            .ok_or_else(|| BindError::missing("fold", &body))?;

        let pinned_shut = doc.style(content).height.is_some_and(Length::is_zero);
        let state = if doc.has_class(content, CONTENT_EXPANDED) && !pinned_shut {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        };

        Ok(Self {
            root,
            trigger,
            content,
            state,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flip towards the opposite of where the panel is heading.
    ///
    /// Mid-animation this reverses direction from whatever height is
    /// currently set.
    pub fn toggle(&mut self, doc: &mut Document) {
        match self.state {
            PanelState::Collapsed | PanelState::Collapsing => self.expand(doc),
            PanelState::Expanded | PanelState::Expanding => self.collapse(doc),
        }
    }

    /// Forced collapse on behalf of an exclusivity group. No-op when the
    /// panel is not open.
    pub fn close_by_group(&mut self, doc: &mut Document) {
        if self.is_open() {
            self.collapse(doc);
        }
    }

    fn expand(&mut self, doc: &mut Document) {
        let natural = doc.scroll_height(self.content);
        doc.set_height(self.content, Length::Px(natural));
        doc.add_class(self.trigger, TRIGGER_ACTIVE);
        doc.add_class(self.content, CONTENT_EXPANDED);
        self.state = PanelState::Expanding;
        debug!("fold {}: expanding to {natural}px", self.root);
    }

    fn collapse(&mut self, doc: &mut Document) {
        // Seed the transition from the measured height; "auto" cannot animate.
        let natural = doc.scroll_height(self.content);
        doc.set_height(self.content, Length::Px(natural));
        doc.set_height(self.content, Length::ZERO);
        doc.remove_class(self.trigger, TRIGGER_ACTIVE);
        doc.remove_class(self.content, CONTENT_EXPANDED);
        self.state = PanelState::Collapsing;
        debug!("fold {}: collapsing from {natural}px", self.root);
    }

    /// React to the content's height transition ending.
    ///
    /// Evaluated against the live state, so stale or repeated notifications
    /// are harmless.
    pub fn on_transition_end(&mut self, doc: &mut Document) {
        match self.state {
            PanelState::Expanding => {
                let zero = doc.style(self.content).height.is_some_and(Length::is_zero);
                if !zero {
                    // Let later reflows (images loading) grow the panel.
                    doc.set_height(self.content, Length::Auto);
                }
                self.state = PanelState::Expanded;
            }
            PanelState::Collapsing => {
                self.state = PanelState::Collapsed;
            }
            PanelState::Expanded | PanelState::Collapsed => {}
        }
    }
}
