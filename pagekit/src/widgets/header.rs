//! Site header: hide-on-scroll flag, burger menu and the header search
//! button.

use log::{debug, trace};
use sitedom::{Document, NodeId, Selector};

use crate::config::SiteConfig;
use crate::error::BindError;

use super::search::{SEARCH, SEARCH_OPEN_ATTR, SEARCH_OPENED};

pub const HEADER: &str = "site-header";
/// Set while the user scrolls down past the threshold.
pub const SCROLLING_DOWN: &str = "is-scrolling-down";

const BURGER: &str = "burger";
const MENU: &str = "menu";
const SEARCH_BUTTON: &str = "site-header__search-button";
const DEFAULT_SEARCH_ID: &str = "headerSearch";

#[derive(Debug, Clone, PartialEq, Eq)]
struct BurgerMenu {
    button: NodeId,
    menu: NodeId,
    open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchToggle {
    button: NodeId,
    search: NodeId,
}

/// The `.site-header` element and its optional parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    root: NodeId,
    threshold: u32,
    last_scroll: u32,
    burger: Option<BurgerMenu>,
    search: Option<SearchToggle>,
}

impl Header {
    pub fn bind(doc: &mut Document, config: &SiteConfig) -> Result<Self, BindError> {
        let selector = Selector::class(HEADER);
        let root = doc
            .query(doc.root(), &selector)
            .ok_or_else(|| BindError::missing("header", &selector))?;

        let burger = match (
            doc.query(root, &Selector::class(BURGER)),
            doc.query(root, &Selector::class(MENU)),
        ) {
            (Some(button), Some(menu)) => Some(BurgerMenu {
                button,
                menu,
                open: doc.has_class(menu, "is-open"),
            }),
            _ => {
                debug!("header: no burger menu");
                None
            }
        };

        let search = match (
            doc.query(root, &Selector::class(SEARCH)),
            doc.query(root, &Selector::class(SEARCH_BUTTON)),
        ) {
            (Some(search), Some(button)) => {
                let id = match doc.element_id(search) {
                    Some(id) if !id.is_empty() => id.to_string(),
                    _ => {
                        doc.set_element_id(search, DEFAULT_SEARCH_ID);
                        DEFAULT_SEARCH_ID.to_string()
                    }
                };
                // Lets the outside-click handler ignore this button.
                doc.set_attr(button, SEARCH_OPEN_ATTR, format!("#{id}"));
                Some(SearchToggle { button, search })
            }
            _ => {
                debug!("header: no search toggle");
                None
            }
        };

        Ok(Self {
            root,
            threshold: config.header_scroll_threshold,
            last_scroll: 0,
            burger,
            search,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_scrolling_down(&self, doc: &Document) -> bool {
        doc.has_class(self.root, SCROLLING_DOWN)
    }

    /// Whether the burger menu is open. Contributes to the body scroll lock.
    pub fn menu_open(&self) -> bool {
        self.burger.as_ref().is_some_and(|b| b.open)
    }

    pub fn on_scroll(&mut self, doc: &mut Document, y: u32) {
        let down = y > self.last_scroll && y > self.threshold;
        trace!("header: scroll {} -> {y}, hidden={down}", self.last_scroll);
        doc.set_class(self.root, SCROLLING_DOWN, down);
        self.last_scroll = y;
    }

    /// Returns true if the click was on one of the header's controls.
    pub fn handle_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        if let Some(burger) = &mut self.burger
            && doc.contains(burger.button, target)
        {
            burger.open = doc.toggle_class(burger.menu, "is-open");
            doc.set_class(burger.button, "is-active", burger.open);
            debug!("header: burger menu open={}", burger.open);
            return true;
        }

        if let Some(toggle) = &self.search
            && doc.contains(toggle.button, target)
        {
            doc.add_class(toggle.search, SEARCH_OPENED);
            return true;
        }

        false
    }
}
