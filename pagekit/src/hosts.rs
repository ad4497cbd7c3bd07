//! Collaborators that live outside the controller: third-party carousel and
//! lightbox libraries, the sticky-sidebar engine and the cookie store.

use std::fmt;

use sitedom::{Document, NodeId};

use crate::widgets::{
    CookieJar, GalleryOptions, MemoryCookieJar, PinnedEngine, SliderOptions, StickyEngine,
};

/// Carousel library binding.
pub trait CarouselHost: fmt::Debug {
    fn mount(&mut self, doc: &Document, slider: NodeId, options: &SliderOptions);
}

/// Lightbox library binding.
pub trait LightboxHost: fmt::Debug {
    fn mount(&mut self, doc: &Document, gallery: NodeId, options: &GalleryOptions);
}

/// Everything the site hands off to the outside world.
///
/// Carousels and galleries are skipped when no host is installed, the same
/// way a page without the library script loaded would behave.
#[derive(Debug)]
pub struct Hosts {
    pub carousel: Option<Box<dyn CarouselHost>>,
    pub lightbox: Option<Box<dyn LightboxHost>>,
    pub sticky: Box<dyn StickyEngine>,
    pub cookies: Box<dyn CookieJar>,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            carousel: None,
            lightbox: None,
            sticky: Box::new(PinnedEngine::new()),
            cookies: Box::new(MemoryCookieJar::new()),
        }
    }
}

impl Hosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carousel(mut self, host: impl CarouselHost + 'static) -> Self {
        self.carousel = Some(Box::new(host));
        self
    }

    pub fn lightbox(mut self, host: impl LightboxHost + 'static) -> Self {
        self.lightbox = Some(Box::new(host));
        self
    }

    pub fn sticky_engine(mut self, engine: impl StickyEngine + 'static) -> Self {
        self.sticky = Box::new(engine);
        self
    }

    pub fn cookie_jar(mut self, jar: impl CookieJar + 'static) -> Self {
        self.cookies = Box::new(jar);
        self
    }
}
