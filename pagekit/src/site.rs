//! Page bootstrap and event routing.

use std::collections::VecDeque;

use log::{debug, info, warn};
use sitedom::{Document, Event, Key, NodeId, Selector, Viewport};

use crate::config::SiteConfig;
use crate::error::BindError;
use crate::hosts::Hosts;
use crate::layers::PopupLayer;
use crate::widgets::accordion::ACCORDION;
use crate::widgets::fold::FOLD;
use crate::widgets::{
    gallery, slider, AccordionGroup, CookieBanner, GalleryOptions, Header, Panel, Searches,
    StickyMode, StickyRegion,
};

/// Body class that stops the page from scrolling.
pub const SCROLL_LOCK: &str = "is-lock";

/// Work postponed to the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Recompute sticky placement once layout has settled.
    StickyRefresh,
}

/// Every widget bound on one page, plus the page itself.
///
/// Single threaded: each [`dispatch`](Site::dispatch) runs to completion
/// before the next event is looked at.
#[derive(Debug)]
pub struct Site {
    doc: Document,
    viewport: Viewport,
    config: SiteConfig,
    header: Option<Header>,
    panels: Vec<Panel>,
    accordions: Vec<AccordionGroup>,
    popups: Option<PopupLayer>,
    sticky: Option<StickyRegion>,
    cookie: Option<CookieBanner>,
    searches: Option<Searches>,
    deferred: VecDeque<Deferred>,
}

/// Log a widget that could not be bound and carry on without it.
fn optional<T>(result: Result<T, BindError>) -> Option<T> {
    match result {
        Ok(widget) => Some(widget),
        Err(e) => {
            debug!("{e}");
            None
        }
    }
}

impl Site {
    /// Discover and bind every widget on the page.
    pub fn bootstrap(doc: Document, viewport: Viewport, config: SiteConfig, hosts: Hosts) -> Self {
        let Hosts {
            carousel,
            lightbox,
            sticky,
            cookies,
        } = hosts;

        let mut site = Self {
            doc,
            viewport,
            config,
            header: None,
            panels: Vec::new(),
            accordions: Vec::new(),
            popups: None,
            sticky: None,
            cookie: None,
            searches: None,
            deferred: VecDeque::new(),
        };
        let doc = &mut site.doc;
        let root = doc.root();

        site.header = optional(Header::bind(doc, &site.config));

        for fold in doc.query_all(root, &Selector::attr(FOLD)) {
            match Panel::bind(doc, fold) {
                Ok(panel) => site.panels.push(panel),
                Err(e) => warn!("skipping panel {fold}: {e}"),
            }
        }

        site.accordions = doc
            .query_all(root, &Selector::attr(ACCORDION))
            .into_iter()
            .map(|group| AccordionGroup::new(doc, group, &site.panels))
            .collect();

        match carousel {
            Some(mut host) => {
                for (node, options) in slider::discover(doc) {
                    host.mount(doc, node, &options);
                }
            }
            None => debug!("no carousel host installed, sliders left static"),
        }

        site.popups = optional(PopupLayer::bind(doc));

        site.sticky = optional(StickyRegion::init(doc, site.viewport, &site.config, sticky));
        if site.sticky.as_ref().map(StickyRegion::mode) == Some(StickyMode::ScrollTracking) {
            site.deferred.push_back(Deferred::StickyRefresh);
        }

        site.cookie = optional(CookieBanner::init(doc, &site.config, cookies));
        site.searches = optional(Searches::bind(doc));

        let galleries = gallery::discover(doc);
        match lightbox {
            Some(mut host) if !galleries.is_empty() => {
                let options = GalleryOptions::default();
                for node in galleries {
                    host.mount(doc, node, &options);
                }
            }
            _ => {}
        }

        site.sync_scroll_lock();

        info!(
            "site ready: {} panels, {} accordions, {} popups, sticky {:?}",
            site.panels.len(),
            site.accordions.len(),
            site.popups.as_ref().map_or(0, |p| p.popups().len()),
            site.sticky_mode(),
        );
        site
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access for the rendering layer (e.g. draining height writes).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Index of the panel whose root, trigger or content is `node`.
    pub fn panel_index(&self, node: NodeId) -> Option<usize> {
        self.panels
            .iter()
            .position(|p| p.root() == node || p.trigger() == node || p.content() == node)
    }

    pub fn accordions(&self) -> &[AccordionGroup] {
        &self.accordions
    }

    pub fn popups(&self) -> Option<&PopupLayer> {
        self.popups.as_ref()
    }

    pub fn sticky(&self) -> Option<&StickyRegion> {
        self.sticky.as_ref()
    }

    pub fn sticky_mode(&self) -> StickyMode {
        self.sticky.as_ref().map_or(StickyMode::Disabled, StickyRegion::mode)
    }

    pub fn cookie_banner(&self) -> Option<&CookieBanner> {
        self.cookie.as_ref()
    }

    pub fn searches(&self) -> Option<&Searches> {
        self.searches.as_ref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.doc.has_class(self.doc.root(), SCROLL_LOCK)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Toggle a panel the way a click on its trigger does: siblings in every
    /// accordion containing it are closed first.
    pub fn toggle_panel(&mut self, index: usize) {
        if index >= self.panels.len() {
            return;
        }
        let mut groups = self.accordions.iter().filter(|g| g.contains(index));
        match groups.next_back() {
            Some(innermost) => {
                for outer in groups {
                    outer.close_others(index, &mut self.panels, &mut self.doc);
                }
                innermost.open(index, &mut self.panels, &mut self.doc);
            }
            None => self.panels[index].toggle(&mut self.doc),
        }
    }

    pub fn open_popup(&mut self, kind: &str) -> bool {
        let opened = self.popups.as_mut().is_some_and(|p| p.open_popup(kind));
        self.sync_scroll_lock();
        opened
    }

    pub fn close_all_popups(&mut self) {
        if let Some(popups) = &mut self.popups {
            popups.close_all();
        }
        self.sync_scroll_lock();
    }

    /// Handle one event to completion.
    pub fn dispatch(&mut self, event: &Event) {
        match event {
            Event::Click { target } => self.on_click(*target),
            Event::Key { key } => self.on_key(*key),
            Event::Scroll { y } => {
                self.viewport.scroll_y = *y;
                if let Some(header) = &mut self.header {
                    header.on_scroll(&mut self.doc, *y);
                }
                if let Some(sticky) = &mut self.sticky {
                    sticky.on_scroll(&mut self.doc, self.viewport);
                }
            }
            Event::Resize { width, height } => {
                self.viewport.width = *width;
                self.viewport.height = *height;
                if let Some(sticky) = &mut self.sticky {
                    sticky.on_resize(&mut self.doc, self.viewport);
                }
            }
            Event::Input { target, value } => {
                self.doc.set_value(*target, value.as_str());
                if let Some(searches) = &mut self.searches {
                    searches.handle_input(&mut self.doc, *target);
                }
            }
            Event::Focus { target } => {
                if let Some(searches) = &mut self.searches {
                    searches.handle_focus(&mut self.doc, *target);
                }
            }
            Event::TransitionEnd { target } => {
                for panel in self.panels.iter_mut().filter(|p| p.content() == *target) {
                    panel.on_transition_end(&mut self.doc);
                }
            }
        }
        self.sync_scroll_lock();
    }

    fn on_click(&mut self, target: NodeId) {
        if let Some(header) = &mut self.header {
            header.handle_click(&mut self.doc, target);
        }

        let hit: Vec<usize> = (0..self.panels.len())
            .filter(|&i| self.doc.contains(self.panels[i].trigger(), target))
            .collect();
        for index in hit {
            self.toggle_panel(index);
        }

        if let Some(popups) = &mut self.popups {
            popups.handle_click(&self.doc, target);
        }

        if let Some(cookie) = &mut self.cookie {
            cookie.handle_click(&mut self.doc, target);
        }

        // Document-level listener, runs after the element ones.
        if let Some(searches) = &mut self.searches {
            searches.handle_click(&mut self.doc, target);
        }
    }

    fn on_key(&mut self, key: Key) {
        if let Some(popups) = &mut self.popups {
            popups.handle_key(key);
        }
        if let Some(searches) = &mut self.searches {
            searches.handle_key(&mut self.doc, key);
        }
    }

    /// Rewrite the overlay flags and the body lock from widget state.
    fn sync_scroll_lock(&mut self) {
        if self.popups.is_none() && self.header.is_none() {
            return;
        }
        if let Some(popups) = &self.popups {
            popups.sync(&mut self.doc);
        }
        let locked = self.popups.as_ref().is_some_and(PopupLayer::any_active)
            || self.header.as_ref().is_some_and(Header::menu_open);
        let root = self.doc.root();
        self.doc.set_class(root, SCROLL_LOCK, locked);
    }

    // -------------------------------------------------------------------------
    // Deferred work
    // -------------------------------------------------------------------------

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run everything queued for the next tick. Returns how many tasks ran.
    pub fn run_deferred(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.deferred.pop_front() {
            match task {
                Deferred::StickyRefresh => {
                    if let Some(sticky) = &mut self.sticky {
                        sticky.refresh(&mut self.doc, self.viewport);
                    }
                }
            }
            ran += 1;
        }
        ran
    }
}
