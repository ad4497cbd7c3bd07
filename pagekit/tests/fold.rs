mod common;

use common::*;
use pagekit::hosts::Hosts;
use pagekit::widgets::{Panel, PanelState};
use sitedom::{Document, Element, Event, Length, TransitionTracker};

fn height(site: &pagekit::Site, id: &str) -> Option<Length> {
    site.document().style(node(site, id)).height
}

fn state(site: &pagekit::Site, id: &str) -> PanelState {
    let index = site.panel_index(node(site, id)).unwrap();
    site.panels()[index].state()
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_panels_bound_in_document_order() {
    let site = boot(desktop());
    let roots: Vec<_> = site.panels().iter().map(Panel::root).collect();
    assert_eq!(
        roots,
        vec![
            node(&site, "q1"),
            node(&site, "q2"),
            node(&site, "q3"),
            node(&site, "standalone"),
        ]
    );
}

#[test]
fn test_panel_without_content_is_skipped() {
    let site = boot(desktop());
    assert_eq!(site.panel_index(node(&site, "broken")), None);
    assert_eq!(site.panel_index(node(&site, "broken-btn")), None);
}

#[test]
fn test_bind_reports_missing_trigger() {
    let doc = Document::new(
        Element::body().child(
            Element::div()
                .id("fold")
                .flag("fold")
                .child(Element::div().flag("fold-content")),
        ),
    );
    let err = Panel::bind(&doc, doc.get("fold").unwrap()).unwrap_err();
    assert!(err.to_string().contains("[data-fold-btn]"));
}

#[test]
fn test_markup_expanded_panel_starts_expanded() {
    let page = Element::body().child(
        Element::div()
            .flag("fold")
            .child(Element::button().flag("fold-btn"))
            .child(Element::div().id("body").flag("fold-content").class("is-expanded")),
    );
    let site = boot_with(page, desktop(), Hosts::default());
    assert_eq!(state(&site, "body"), PanelState::Expanded);
}

// ============================================================================
// Expand / Collapse
// ============================================================================

#[test]
fn test_expand_then_complete() {
    let mut site = boot(desktop());

    click(&mut site, "standalone-btn");
    assert_eq!(state(&site, "standalone"), PanelState::Expanding);
    assert_eq!(height(&site, "standalone-body"), Some(Length::Px(80)));
    assert!(has_class(&site, "standalone-btn", "is-active"));
    assert!(has_class(&site, "standalone-body", "is-expanded"));

    let body = node(&site, "standalone-body");
    site.dispatch(&Event::transition_end(body));
    assert_eq!(state(&site, "standalone"), PanelState::Expanded);
    assert_eq!(height(&site, "standalone-body"), Some(Length::Auto));
}

#[test]
fn test_collapse_then_complete() {
    let mut site = boot(desktop());
    let mut tracker = TransitionTracker::new();

    click(&mut site, "standalone-btn");
    finish_transitions(&mut site, &mut tracker);

    click(&mut site, "standalone-btn");
    assert_eq!(state(&site, "standalone"), PanelState::Collapsing);
    assert_eq!(height(&site, "standalone-body"), Some(Length::ZERO));
    assert!(!has_class(&site, "standalone-btn", "is-active"));
    assert!(!has_class(&site, "standalone-body", "is-expanded"));

    finish_transitions(&mut site, &mut tracker);
    assert_eq!(state(&site, "standalone"), PanelState::Collapsed);
    assert_eq!(height(&site, "standalone-body"), Some(Length::ZERO));
}

#[test]
fn test_completion_is_idempotent() {
    let mut site = boot(desktop());
    let body = node(&site, "standalone-body");

    click(&mut site, "standalone-btn");
    site.dispatch(&Event::transition_end(body));
    site.dispatch(&Event::transition_end(body));
    assert_eq!(state(&site, "standalone"), PanelState::Expanded);
    assert_eq!(height(&site, "standalone-body"), Some(Length::Auto));

    // Spurious completion on a collapsed panel
    let q1 = node(&site, "q1-body");
    site.dispatch(&Event::transition_end(q1));
    assert_eq!(state(&site, "q1"), PanelState::Collapsed);
    assert_eq!(height(&site, "q1-body"), None);
}

#[test]
fn test_toggle_mid_animation_reverses() {
    let mut site = boot(desktop());
    let mut tracker = TransitionTracker::new();

    click(&mut site, "standalone-btn");
    click(&mut site, "standalone-btn");
    assert_eq!(state(&site, "standalone"), PanelState::Collapsing);
    assert_eq!(height(&site, "standalone-body"), Some(Length::ZERO));

    click(&mut site, "standalone-btn");
    assert_eq!(state(&site, "standalone"), PanelState::Expanding);

    finish_transitions(&mut site, &mut tracker);
    assert_eq!(state(&site, "standalone"), PanelState::Expanded);
    assert_eq!(height(&site, "standalone-body"), Some(Length::Auto));
}

#[test]
fn test_zero_height_content_is_not_promoted_to_auto() {
    let mut site = boot(desktop());
    let mut tracker = TransitionTracker::new();

    let q3 = site.panel_index(node(&site, "q3")).unwrap();
    site.toggle_panel(q3);
    finish_transitions(&mut site, &mut tracker);

    assert_eq!(state(&site, "q3"), PanelState::Expanded);
    assert_eq!(height(&site, "q3-body"), Some(Length::ZERO));
}

#[test]
fn test_click_inside_trigger_toggles() {
    let page = Element::body().child(
        Element::div()
            .flag("fold")
            .child(
                Element::button()
                    .flag("fold-btn")
                    .child(Element::new("span").id("icon")),
            )
            .child(Element::div().id("body").flag("fold-content").scroll_height(50)),
    );
    let mut site = boot_with(page, desktop(), Hosts::default());
    click(&mut site, "icon");
    assert_eq!(state(&site, "body"), PanelState::Expanding);
}

#[test]
fn test_expanded_panel_follows_content_reflow() {
    let mut site = boot(desktop());
    let mut tracker = TransitionTracker::new();
    click(&mut site, "standalone-btn");
    finish_transitions(&mut site, &mut tracker);

    // Images inside finished loading
    let body = node(&site, "standalone-body");
    site.document_mut().set_scroll_height(body, 300);

    click(&mut site, "standalone-btn");
    assert_eq!(height(&site, "standalone-body"), Some(Length::ZERO));
    click(&mut site, "standalone-btn");
    assert_eq!(height(&site, "standalone-body"), Some(Length::Px(300)));
}

#[test]
fn test_every_sequence_settles_in_stable_state() {
    let mut site = boot(desktop());
    let mut tracker = TransitionTracker::new();
    let ids = ["q1-btn", "q2-btn", "standalone-btn", "q3-btn", "q1-btn"];

    for round in 0..ids.len() {
        for id in ids.iter().cycle().skip(round).take(round + 2) {
            click(&mut site, id);
        }
        finish_transitions(&mut site, &mut tracker);
        for panel in site.panels() {
            assert!(panel.state().is_stable(), "{:?} after round {round}", panel);
        }
    }
}
