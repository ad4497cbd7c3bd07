//! Sticky sidebar placement.
//!
//! The strategy is chosen once, when the page boots: a sidebar taller than
//! the viewport is handed to a [`StickyEngine`] that pins it and lets it
//! scroll within itself; one that fits simply follows the header by
//! adjusting its `top` offset. The choice is not revisited on resize or
//! content changes.

use std::fmt;

use log::{debug, info};
use sitedom::{Document, Length, NodeId, Selector, Viewport};

use crate::config::SiteConfig;
use crate::error::BindError;

use super::header::{HEADER, SCROLLING_DOWN};

pub const STICKY_SIDEBAR: &str = "data-sticky-sidebar";
pub const SIDEBAR_BODY: &str = "site-page__sidebars-body";
const SIMPLE_STICKY: &str = "site-page__sidebars-body--simple-sticky";

/// Positioning strategy for the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StickyMode {
    /// No sidebar, or the viewport is at or below the breakpoint.
    #[default]
    Disabled,
    /// Content taller than the viewport: delegated to a [`StickyEngine`].
    ScrollTracking,
    /// Content fits: `top` follows header visibility.
    OffsetFollow,
}

/// Decide the strategy from measured heights.
pub fn select_mode(content_height: u32, viewport_height: u32) -> StickyMode {
    if content_height > viewport_height {
        StickyMode::ScrollTracking
    } else {
        StickyMode::OffsetFollow
    }
}

/// Options handed to the scroll-tracking engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyOptions {
    pub top_spacing: u32,
    pub bottom_spacing: u32,
    /// The engine stays inactive at or below this viewport width.
    pub min_width: u32,
    pub inner_wrapper: Selector,
}

impl StickyOptions {
    pub fn new(header_height: u32, config: &SiteConfig) -> Self {
        Self {
            top_spacing: header_height.saturating_add(config.sticky_spacing),
            bottom_spacing: config.sticky_spacing,
            min_width: config.breakpoint,
            inner_wrapper: Selector::class(SIDEBAR_BODY),
        }
    }
}

/// Continuous positioning for sidebars taller than the viewport.
pub trait StickyEngine: fmt::Debug {
    /// Take control of `sidebar`. Called once.
    fn attach(&mut self, doc: &mut Document, sidebar: NodeId, options: StickyOptions);

    /// Recompute placement for the current viewport.
    fn update_sticky(&mut self, doc: &mut Document, viewport: Viewport);
}

/// Default engine: pins the inner wrapper at `top_spacing` and caps its
/// height so it scrolls within the viewport.
#[derive(Debug, Default)]
pub struct PinnedEngine {
    target: Option<(NodeId, StickyOptions)>,
}

impl PinnedEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StickyEngine for PinnedEngine {
    fn attach(&mut self, doc: &mut Document, sidebar: NodeId, options: StickyOptions) {
        let inner = doc.query(sidebar, &options.inner_wrapper).unwrap_or(sidebar);
        self.target = Some((inner, options));
    }

    fn update_sticky(&mut self, doc: &mut Document, viewport: Viewport) {
        let Some((inner, options)) = &self.target else {
            return;
        };

        if viewport.width <= options.min_width {
            doc.set_top(*inner, None);
            doc.set_max_height(*inner, None);
            return;
        }

        let spacing = options.top_spacing.saturating_add(options.bottom_spacing);
        let available = viewport.height.saturating_sub(spacing);
        doc.set_top(*inner, Some(Length::Px(options.top_spacing)));
        doc.set_max_height(*inner, Some(Length::Px(available)));
    }
}

/// The sidebar region and its chosen strategy.
#[derive(Debug)]
pub struct StickyRegion {
    sidebar: NodeId,
    body: NodeId,
    header: Option<NodeId>,
    header_height: u32,
    spacing: u32,
    mode: StickyMode,
    engine: Box<dyn StickyEngine>,
}

impl StickyRegion {
    /// Measure the page and pick a strategy.
    ///
    /// Fails (and the sidebar is left alone) when there is no sidebar, the
    /// viewport matches the mobile/tablet breakpoint, or the sidebar has no
    /// body element.
    pub fn init(
        doc: &mut Document,
        viewport: Viewport,
        config: &SiteConfig,
        mut engine: Box<dyn StickyEngine>,
    ) -> Result<Self, BindError> {
        let root = Selector::attr(STICKY_SIDEBAR);
        let sidebar = doc
            .query(doc.root(), &root)
            .ok_or_else(|| BindError::missing("sticky", &root))?;

        if viewport.matches_max_width(config.breakpoint) {
            return Err(BindError::BelowBreakpoint {
                unit: "sticky",
                width: viewport.width,
                breakpoint: config.breakpoint,
            });
        }

        let header = doc.query(doc.root(), &Selector::class(HEADER));
        let header_height = header.map_or(0, |h| doc.offset_height(h));

        let inner = Selector::class(SIDEBAR_BODY);
        let body = doc
            .query(sidebar, &inner)
            .ok_or_else(|| BindError::missing("sticky", &inner))?;

        let content_height = doc.scroll_height(body);
        let mode = select_mode(content_height, viewport.height);
        info!(
            "sticky sidebar: {mode:?} (content {content_height}px, viewport {}px)",
            viewport.height
        );

        match mode {
            StickyMode::ScrollTracking => {
                engine.attach(doc, sidebar, StickyOptions::new(header_height, config));
            }
            StickyMode::OffsetFollow => doc.add_class(body, SIMPLE_STICKY),
            StickyMode::Disabled => {}
        }

        Ok(Self {
            sidebar,
            body,
            header,
            header_height,
            spacing: config.sticky_spacing,
            mode,
            engine,
        })
    }

    pub fn sidebar(&self) -> NodeId {
        self.sidebar
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn mode(&self) -> StickyMode {
        self.mode
    }

    pub fn header_height(&self) -> u32 {
        self.header_height
    }

    /// Recompute after layout settles. Scheduled once at boot in
    /// scroll-tracking mode.
    pub fn refresh(&mut self, doc: &mut Document, viewport: Viewport) {
        if self.mode == StickyMode::ScrollTracking {
            debug!("sticky sidebar: deferred recompute");
            self.engine.update_sticky(doc, viewport);
        }
    }

    /// Must run after the header has updated its scroll-direction flag.
    pub fn on_scroll(&mut self, doc: &mut Document, viewport: Viewport) {
        match self.mode {
            StickyMode::ScrollTracking => self.engine.update_sticky(doc, viewport),
            StickyMode::OffsetFollow => {
                let hidden = self
                    .header
                    .is_some_and(|h| doc.has_class(h, SCROLLING_DOWN));
                let offset = self.header_height.saturating_add(self.spacing);
                let top = (!hidden).then_some(Length::Px(offset));
                doc.set_top(self.body, top);
            }
            StickyMode::Disabled => {}
        }
    }

    pub fn on_resize(&mut self, doc: &mut Document, viewport: Viewport) {
        if self.mode == StickyMode::ScrollTracking {
            self.engine.update_sticky(doc, viewport);
        }
    }
}
