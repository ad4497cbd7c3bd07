pub mod config;
pub mod error;
pub mod hosts;
pub mod layers;
pub mod runtime;
pub mod site;
pub mod widgets;

pub use config::{ConfigError, SiteConfig};
pub use error::BindError;
pub use runtime::Runtime;
pub use site::Site;

pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::hosts::{CarouselHost, Hosts, LightboxHost};
    pub use crate::layers::{Popup, PopupLayer};
    pub use crate::runtime::{EventSender, Runtime, RuntimeError};
    pub use crate::site::Site;
    pub use crate::widgets::{
        AccordionGroup, CookieJar, GalleryOptions, MemoryCookieJar, Panel, PanelState,
        SliderOptions, StickyEngine, StickyMode, StickyOptions,
    };

    pub use sitedom::{Document, Element, Event, Key, Length, NodeId, Selector, Viewport};
}
