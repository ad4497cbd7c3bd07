//! Carousel presets.
//!
//! The carousel itself lives outside this crate. Each `[data-slider=<type>]`
//! element gets a preset resolved here and is handed to the installed
//! [`CarouselHost`](crate::hosts::CarouselHost).

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;
use sitedom::{Document, NodeId, Selector};

pub const SLIDER: &str = "data-slider";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidesPerView {
    Auto,
    Count(u32),
}

impl Serialize for SlidesPerView {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            SlidesPerView::Auto => s.serialize_str("auto"),
            SlidesPerView::Count(n) => s.serialize_u32(*n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Autoplay {
    pub delay: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub el: String,
    pub clickable: bool,
}

/// Arrow controls, resolved to document nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// Per-breakpoint overrides, keyed by minimum viewport width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_per_view: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_between: Option<u32>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl BreakpointOptions {
    fn columns(slides_per_view: u32, space_between: u32) -> Self {
        Self {
            slides_per_view: Some(slides_per_view),
            space_between: Some(space_between),
            ..Default::default()
        }
    }
}

/// Carousel options, serialized in the carousel library's own field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    pub slides_per_view: SlidesPerView,
    pub speed: u32,
    pub grab_cursor: bool,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<Autoplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip)]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<u32, BreakpointOptions>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            slides_per_view: SlidesPerView::Auto,
            speed: 1000,
            grab_cursor: true,
            space_between: 24,
            looped: false,
            enabled: true,
            autoplay: None,
            pagination: None,
            navigation: None,
            breakpoints: BTreeMap::new(),
        }
    }
}

/// Arrows `.{block}__arrow--prev/next` inside the closest `.{container}`.
fn arrows(doc: &Document, slider: NodeId, container: &str, block: &str) -> Navigation {
    let Some(scope) = doc.closest(slider, &Selector::class(container)) else {
        debug!("slider {slider}: no '.{container}' around it, arrows disabled");
        return Navigation::default();
    };
    Navigation {
        prev: doc.query(scope, &Selector::class(format!("{block}__arrow--prev"))),
        next: doc.query(scope, &Selector::class(format!("{block}__arrow--next"))),
    }
}

fn pagination(el: &str) -> Option<Pagination> {
    Some(Pagination {
        el: el.into(),
        clickable: true,
    })
}

/// Four columns on wide screens, three in between.
fn column_breakpoints() -> BTreeMap<u32, BreakpointOptions> {
    BTreeMap::from([
        (767, BreakpointOptions::columns(3, 24)),
        (900, BreakpointOptions::columns(4, 24)),
        (991, BreakpointOptions::columns(3, 24)),
        (1200, BreakpointOptions::columns(4, 24)),
    ])
}

impl SliderOptions {
    /// Resolve the preset for a slider type. Unknown types get the defaults.
    pub fn for_type(doc: &Document, slider: NodeId, kind: &str) -> Self {
        let base = Self::default();
        match kind {
            "banners" => Self {
                looped: true,
                autoplay: Some(Autoplay { delay: 3000 }),
                pagination: pagination(".banners-slider__pagination"),
                ..base
            },
            "gallery" => Self {
                looped: true,
                pagination: pagination(".gallery__pagination"),
                navigation: Some(arrows(doc, slider, "gallery", "gallery")),
                ..base
            },
            "authors" => Self {
                space_between: 8,
                navigation: Some(arrows(doc, slider, "other-authors__slider", "other-authors")),
                breakpoints: column_breakpoints(),
                ..base
            },
            "recommended-players" => Self {
                space_between: 8,
                navigation: Some(arrows(
                    doc,
                    slider,
                    "recommended-players__slider",
                    "recommended-players",
                )),
                breakpoints: column_breakpoints(),
                ..base
            },
            "articles-404" => Self {
                enabled: false,
                navigation: Some(arrows(doc, slider, "articles-404__slider", "articles-404")),
                breakpoints: BTreeMap::from([(
                    991,
                    BreakpointOptions {
                        slides_per_view: Some(4),
                        looped: Some(true),
                        enabled: Some(true),
                        ..Default::default()
                    },
                )]),
                ..base
            },
            "other-articles" => Self {
                space_between: 16,
                looped: true,
                navigation: Some(arrows(doc, slider, "other-articles", "other-articles")),
                breakpoints: BTreeMap::from([
                    (
                        0,
                        BreakpointOptions {
                            looped: Some(false),
                            enabled: Some(false),
                            ..Default::default()
                        },
                    ),
                    (
                        479,
                        BreakpointOptions {
                            slides_per_view: Some(2),
                            ..Default::default()
                        },
                    ),
                    (767, BreakpointOptions::columns(3, 24)),
                    (
                        992,
                        BreakpointOptions {
                            slides_per_view: Some(2),
                            ..Default::default()
                        },
                    ),
                    (
                        1200,
                        BreakpointOptions {
                            slides_per_view: Some(3),
                            ..Default::default()
                        },
                    ),
                ]),
                ..base
            },
            "sports-tabs" => Self {
                space_between: 4,
                navigation: Some(arrows(doc, slider, "sports-tabs", "sports-tabs")),
                ..base
            },
            _ => base,
        }
    }

    /// JSON in the carousel library's option format.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Every `[data-slider]` element with its resolved options.
pub fn discover(doc: &Document) -> Vec<(NodeId, SliderOptions)> {
    doc.query_all(doc.root(), &Selector::attr(SLIDER))
        .into_iter()
        .map(|slider| {
            let kind = doc.attr(slider, SLIDER).unwrap_or_default();
            (slider, SliderOptions::for_type(doc, slider, kind))
        })
        .collect()
}
