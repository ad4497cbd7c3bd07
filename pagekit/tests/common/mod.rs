#![allow(dead_code)]

use std::time::Duration;

use pagekit::hosts::Hosts;
use pagekit::{Site, SiteConfig};
use sitedom::{Document, Element, Event, NodeId, TransitionTracker, Transitions, Viewport};

pub fn fold(id: &str, natural_height: u32) -> Element {
    Element::div()
        .id(id)
        .flag("fold")
        .child(Element::button().id(format!("{id}-btn")).flag("fold-btn"))
        .child(
            Element::div()
                .id(format!("{id}-body"))
                .flag("fold-content")
                .scroll_height(natural_height)
                .transitions(Transitions::new().height(Duration::from_millis(300))),
        )
}

pub fn popup(kind: &str) -> Element {
    Element::div()
        .id(kind)
        .class("popup")
        .data("popup", kind)
        .child(
            Element::div()
                .id(format!("{kind}-content"))
                .class("popup__content")
                .child(Element::new("p").id(format!("{kind}-text")))
                .child(
                    Element::button()
                        .id(format!("{kind}-close"))
                        .flag("popup-close"),
                ),
        )
}

/// A page exercising every widget.
pub fn landing_page(sidebar_height: u32) -> Element {
    Element::body()
        .child(
            Element::header()
                .class("site-header")
                .id("header")
                .offset_height(80)
                .child(Element::button().class("burger").id("burger"))
                .child(Element::new("nav").class("menu").id("menu"))
                .child(
                    Element::div()
                        .class("search")
                        .child(Element::input().class("search__input").id("header-search-input"))
                        .child(Element::div().class("search__results").id("header-search-results")),
                )
                .child(
                    Element::button()
                        .class("site-header__search-button")
                        .id("search-btn"),
                ),
        )
        .child(
            Element::div()
                .id("faq")
                .flag("accordion")
                .child(fold("q1", 240))
                .child(fold("q2", 120))
                .child(fold("q3", 0)),
        )
        .child(fold("standalone", 80))
        .child(
            Element::div()
                .id("broken")
                .flag("fold")
                .child(Element::button().id("broken-btn").flag("fold-btn")),
        )
        .child(
            Element::new("aside")
                .id("sidebar")
                .flag("sticky-sidebar")
                .child(
                    Element::div()
                        .id("sidebar-body")
                        .class("site-page__sidebars-body")
                        .scroll_height(sidebar_height),
                ),
        )
        .child(Element::button().id("open-newsletter").data("popup-open", "newsletter"))
        .child(
            Element::button()
                .id("open-contact")
                .data("popup-open", "contact")
                .child(Element::new("span").id("open-contact-label")),
        )
        .child(Element::button().id("open-contact-footer").data("popup-open", "contact"))
        .child(
            Element::div()
                .class("popups")
                .id("popups")
                .child(popup("newsletter"))
                .child(popup("contact"))
                .child(Element::div().id("orphan").class("popup").data("popup", "orphan")),
        )
        .child(
            Element::div()
                .class("search")
                .id("page-search")
                .child(Element::input().class("search__input").id("page-search-input"))
                .child(Element::button().class("search__reset").id("page-search-reset"))
                .child(Element::div().class("search__results").id("page-search-results")),
        )
        .child(
            Element::div()
                .class("cookie")
                .id("cookie")
                .child(Element::button().class("cookie__button").id("cookie-accept")),
        )
        .child(Element::new("p").id("outside"))
}

pub fn boot_with(page: Element, viewport: Viewport, hosts: Hosts) -> Site {
    Site::bootstrap(Document::new(page), viewport, SiteConfig::default(), hosts)
}

pub fn boot(viewport: Viewport) -> Site {
    boot_with(landing_page(600), viewport, Hosts::default())
}

pub fn desktop() -> Viewport {
    Viewport::new(1440, 900)
}

pub fn node(site: &Site, id: &str) -> NodeId {
    site.document()
        .get(id)
        .unwrap_or_else(|| panic!("no element #{id}"))
}

pub fn click(site: &mut Site, id: &str) {
    let target = node(site, id);
    site.dispatch(&Event::click(target));
}

/// Deliver every pending transition completion, as the rendering layer would.
pub fn finish_transitions(site: &mut Site, tracker: &mut TransitionTracker) {
    loop {
        let done = tracker.finish_all(site.document_mut());
        if done.is_empty() {
            break;
        }
        for event in done {
            site.dispatch(&event);
        }
    }
}

pub fn has_class(site: &Site, id: &str, class: &str) -> bool {
    site.document().has_class(node(site, id), class)
}
