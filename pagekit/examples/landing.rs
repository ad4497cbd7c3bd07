use std::fs::File;
use std::time::Duration;

use pagekit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use sitedom::Transitions;

fn faq(id: &str, question_height: u32) -> Element {
    Element::div()
        .id(id)
        .flag("fold")
        .child(Element::button().id(format!("{id}-btn")).flag("fold-btn"))
        .child(
            Element::div()
                .flag("fold-content")
                .scroll_height(question_height)
                .transitions(Transitions::new().height(Duration::from_millis(250))),
        )
}

fn page() -> Element {
    Element::body()
        .child(
            Element::header()
                .class("site-header")
                .offset_height(72)
                .child(Element::button().class("burger"))
                .child(Element::new("nav").class("menu")),
        )
        .child(
            Element::div()
                .flag("accordion")
                .child(faq("rules", 180))
                .child(faq("prizes", 320))
                .child(faq("contact", 90)),
        )
        .child(
            Element::new("aside").flag("sticky-sidebar").child(
                Element::div()
                    .class("site-page__sidebars-body")
                    .scroll_height(1400),
            ),
        )
        .child(Element::button().id("subscribe").data("popup-open", "newsletter"))
        .child(
            Element::div().class("popups").child(
                Element::div()
                    .class("popup")
                    .data("popup", "newsletter")
                    .child(Element::div().class("popup__content")),
            ),
        )
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("landing.log")?;
    let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);

    let doc = Document::new(page());
    let site = Site::bootstrap(doc, Viewport::new(1440, 900), SiteConfig::default(), Hosts::new());
    println!("sticky sidebar: {:?}", site.sticky_mode());

    let ids = ["rules-btn", "prizes-btn", "subscribe"];
    let targets: Vec<NodeId> = ids.iter().filter_map(|id| site.document().get(id)).collect();

    let (runtime, events) = Runtime::new(site);
    for target in targets {
        if let Err(e) = events.send(Event::click(target)) {
            eprintln!("Error: {e}");
        }
    }
    let _ = events.send(Event::scroll(240));
    let _ = events.send(Event::key(Key::Escape));
    drop(events);

    let site = runtime.run().await;
    for panel in site.panels() {
        println!("panel {}: {:?}", panel.root(), panel.state());
    }
    println!("scroll locked: {}", site.is_scroll_locked());
    Ok(())
}
