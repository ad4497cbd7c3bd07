use sitedom::{Document, Element, Length, Selector};

fn page() -> Document {
    Document::new(
        Element::body()
            .child(
                Element::div()
                    .id("faq")
                    .flag("accordion")
                    .child(
                        Element::div()
                            .id("item-1")
                            .flag("fold")
                            .child(Element::button().id("btn-1").flag("fold-btn"))
                            .child(Element::div().id("content-1").flag("fold-content")),
                    )
                    .child(
                        Element::div()
                            .id("item-2")
                            .flag("fold")
                            .child(Element::button().id("btn-2").flag("fold-btn")),
                    ),
            )
            .child(
                Element::div()
                    .class("popups")
                    .child(Element::div().class("popup").data("popup", "contact")),
            )
            .child(Element::button().id("open").data("popup-open", "contact")),
    )
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_selector_display() {
    assert_eq!(Selector::attr("data-fold").to_string(), "[data-fold]");
    assert_eq!(
        Selector::class("popup").and_attr_eq("data-popup", "news").to_string(),
        ".popup[data-popup=\"news\"]"
    );
    assert_eq!(
        Selector::tag("div").and_id("faq").and_class("is-open").to_string(),
        "div#faq.is-open"
    );
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_all_is_scoped_and_ordered() {
    let doc = page();
    let faq = doc.get("faq").unwrap();

    let folds = doc.query_all(faq, &Selector::attr("data-fold"));
    assert_eq!(folds, vec![doc.get("item-1").unwrap(), doc.get("item-2").unwrap()]);

    // Scope itself is excluded
    assert!(doc.query_all(faq, &Selector::attr("data-accordion")).is_empty());
}

#[test]
fn test_query_missing_returns_none() {
    let doc = page();
    let item = doc.get("item-2").unwrap();
    assert_eq!(doc.query(item, &Selector::attr("data-fold-content")), None);
}

#[test]
fn test_closest_and_contains() {
    let doc = page();
    let btn = doc.get("btn-1").unwrap();
    let item = doc.get("item-1").unwrap();

    assert_eq!(doc.closest(btn, &Selector::attr("data-fold")), Some(item));
    assert_eq!(doc.closest(btn, &Selector::attr("data-fold-btn")), Some(btn));
    assert!(doc.contains(item, btn));
    assert!(doc.contains(btn, btn));
    assert!(!doc.contains(btn, item));
}

#[test]
fn test_attribute_value_match() {
    let doc = page();
    let hits = doc.query_all(doc.root(), &Selector::attr_eq("data-popup-open", "contact"));
    assert_eq!(hits, vec![doc.get("open").unwrap()]);
    assert!(doc
        .query_all(doc.root(), &Selector::attr_eq("data-popup-open", "news"))
        .is_empty());
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_class_operations() {
    let mut doc = page();
    let btn = doc.get("btn-1").unwrap();

    doc.add_class(btn, "is-active");
    doc.add_class(btn, "is-active");
    assert_eq!(doc.classes(btn), ["is-active".to_string()]);

    assert!(!doc.toggle_class(btn, "is-active"));
    assert!(!doc.has_class(btn, "is-active"));
    assert!(doc.toggle_class(btn, "is-active"));

    doc.set_class(btn, "is-active", false);
    assert!(!doc.has_class(btn, "is-active"));
}

#[test]
fn test_set_element_id_updates_lookup() {
    let mut doc = page();
    let btn = doc.get("btn-1").unwrap();
    doc.set_element_id(btn, "renamed");
    assert_eq!(doc.get("renamed"), Some(btn));
    assert_eq!(doc.get("btn-1"), None);
}

#[test]
fn test_height_writes_skip_auto() {
    let mut doc = page();
    let content = doc.get("content-1").unwrap();

    doc.set_height(content, Length::Px(120));
    doc.set_height(content, Length::ZERO);
    assert_eq!(doc.take_height_writes(), vec![content]);

    doc.set_height(content, Length::Auto);
    assert!(doc.take_height_writes().is_empty());
    assert_eq!(doc.style(content).height, Some(Length::Auto));
}

#[test]
fn test_length_display() {
    assert_eq!(Length::Px(240).to_string(), "240px");
    assert_eq!(Length::ZERO.to_string(), "0px");
    assert_eq!(Length::Auto.to_string(), "auto");
}
