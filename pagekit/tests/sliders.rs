mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use pagekit::hosts::{CarouselHost, Hosts, LightboxHost};
use pagekit::widgets::slider::discover;
use pagekit::widgets::{GalleryOptions, SlidesPerView, SliderOptions};
use serde_json::json;
use sitedom::{Document, Element, NodeId};

#[derive(Debug, Default, Clone)]
struct Carousels {
    mounted: Rc<RefCell<Vec<(NodeId, SliderOptions)>>>,
}

impl CarouselHost for Carousels {
    fn mount(&mut self, _doc: &Document, slider: NodeId, options: &SliderOptions) {
        self.mounted.borrow_mut().push((slider, options.clone()));
    }
}

#[derive(Debug, Default, Clone)]
struct Lightboxes {
    mounted: Rc<RefCell<Vec<(NodeId, GalleryOptions)>>>,
}

impl LightboxHost for Lightboxes {
    fn mount(&mut self, _doc: &Document, gallery: NodeId, options: &GalleryOptions) {
        self.mounted.borrow_mut().push((gallery, options.clone()));
    }
}

fn gallery_page() -> Element {
    Element::body()
        .child(
            Element::div()
                .class("gallery")
                .id("gallery-block")
                .child(Element::button().class("gallery__arrow--prev").id("prev"))
                .child(Element::button().class("gallery__arrow--next").id("next"))
                .child(Element::div().id("gallery-slider").data("slider", "gallery")),
        )
        .child(Element::div().id("banners").data("slider", "banners"))
        .child(Element::div().id("mystery").data("slider", "mystery"))
        .child(
            Element::div()
                .id("photos")
                .flag("gallery")
                .child(Element::new("a").flag("gallery-item")),
        )
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_default_options() {
    let options = SliderOptions::default();
    assert_eq!(options.slides_per_view, SlidesPerView::Auto);
    assert_eq!(options.speed, 1000);
    assert!(options.grab_cursor);
    assert_eq!(options.space_between, 24);
    assert!(!options.looped);
    assert!(options.enabled);
}

#[test]
fn test_unknown_type_gets_defaults() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("mystery").unwrap();
    assert_eq!(SliderOptions::for_type(&doc, slider, "mystery"), SliderOptions::default());
}

#[test]
fn test_gallery_preset_finds_arrows() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("gallery-slider").unwrap();
    let options = SliderOptions::for_type(&doc, slider, "gallery");

    assert!(options.looped);
    let navigation = options.navigation.unwrap();
    assert_eq!(navigation.prev, doc.get("prev"));
    assert_eq!(navigation.next, doc.get("next"));
}

#[test]
fn test_arrows_missing_without_container() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("banners").unwrap();
    let options = SliderOptions::for_type(&doc, slider, "sports-tabs");
    assert_eq!(options.space_between, 4);
    let navigation = options.navigation.unwrap();
    assert_eq!(navigation.prev, None);
    assert_eq!(navigation.next, None);
}

#[test]
fn test_presets_with_breakpoints() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("mystery").unwrap();

    let authors = SliderOptions::for_type(&doc, slider, "authors");
    assert_eq!(authors.space_between, 8);
    assert_eq!(
        authors.breakpoints.keys().copied().collect::<Vec<_>>(),
        vec![767, 900, 991, 1200]
    );

    let players = SliderOptions::for_type(&doc, slider, "recommended-players");
    assert_eq!(players.breakpoints, authors.breakpoints);

    let not_found = SliderOptions::for_type(&doc, slider, "articles-404");
    assert!(!not_found.enabled);
    assert_eq!(not_found.breakpoints[&991].enabled, Some(true));

    let other = SliderOptions::for_type(&doc, slider, "other-articles");
    assert_eq!(other.space_between, 16);
    assert_eq!(other.breakpoints[&0].enabled, Some(false));
    assert_eq!(other.breakpoints[&1200].slides_per_view, Some(3));
}

#[test]
fn test_banners_json() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("banners").unwrap();
    let options = SliderOptions::for_type(&doc, slider, "banners");

    assert_eq!(
        options.to_json(),
        json!({
            "slidesPerView": "auto",
            "speed": 1000,
            "grabCursor": true,
            "spaceBetween": 24,
            "loop": true,
            "enabled": true,
            "autoplay": { "delay": 3000 },
            "pagination": { "el": ".banners-slider__pagination", "clickable": true },
        })
    );
}

#[test]
fn test_breakpoints_json() {
    let doc = Document::new(gallery_page());
    let slider = doc.get("mystery").unwrap();
    let options = SliderOptions::for_type(&doc, slider, "articles-404");
    assert_eq!(
        options.to_json()["breakpoints"],
        json!({ "991": { "slidesPerView": 4, "loop": true, "enabled": true } })
    );
}

#[test]
fn test_discover_in_document_order() {
    let doc = Document::new(gallery_page());
    let found: Vec<_> = discover(&doc).into_iter().map(|(node, _)| node).collect();
    assert_eq!(
        found,
        vec![
            doc.get("gallery-slider").unwrap(),
            doc.get("banners").unwrap(),
            doc.get("mystery").unwrap(),
        ]
    );
}

// ============================================================================
// Hosts
// ============================================================================

#[test]
fn test_bootstrap_mounts_sliders_and_galleries() {
    let carousels = Carousels::default();
    let lightboxes = Lightboxes::default();
    let hosts = Hosts::new()
        .carousel(carousels.clone())
        .lightbox(lightboxes.clone());
    let site = boot_with(gallery_page(), desktop(), hosts);

    let mounted = carousels.mounted.borrow();
    assert_eq!(mounted.len(), 3);
    assert_eq!(mounted[1].0, node(&site, "banners"));
    assert!(mounted[1].1.autoplay.is_some());

    let galleries = lightboxes.mounted.borrow();
    assert_eq!(galleries.len(), 1);
    assert_eq!(galleries[0].0, node(&site, "photos"));
    assert_eq!(galleries[0].1, GalleryOptions::default());
    assert_eq!(galleries[0].1.selector, "[data-gallery-item]");
}

#[test]
fn test_no_hosts_leaves_page_static() {
    let site = boot_with(gallery_page(), desktop(), Hosts::default());
    assert_eq!(site.document().len(), Document::new(gallery_page()).len());
}
