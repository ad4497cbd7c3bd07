//! Lightbox galleries, mounted through a
//! [`LightboxHost`](crate::hosts::LightboxHost).

use serde::Serialize;
use sitedom::{Document, NodeId, Selector};

pub const GALLERY: &str = "data-gallery";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryOptions {
    /// Items inside the gallery that open in the lightbox.
    pub selector: String,
    pub thumbnail: bool,
    pub zoom: bool,
    pub download: bool,
    pub speed: u32,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            selector: "[data-gallery-item]".into(),
            thumbnail: true,
            zoom: true,
            download: true,
            speed: 500,
        }
    }
}

pub fn discover(doc: &Document) -> Vec<NodeId> {
    doc.query_all(doc.root(), &Selector::attr(GALLERY))
}
