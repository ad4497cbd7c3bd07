//! Page widgets bound from markup.

pub mod accordion;
pub mod cookie;
pub mod fold;
pub mod gallery;
pub mod header;
pub mod search;
pub mod slider;
pub mod sticky;

pub use accordion::AccordionGroup;
pub use cookie::{CookieBanner, CookieJar, CookieOptions, MemoryCookieJar};
pub use fold::{Panel, PanelState};
pub use gallery::GalleryOptions;
pub use header::Header;
pub use search::{SearchBox, Searches};
pub use slider::{BreakpointOptions, Navigation, SlidesPerView, SliderOptions};
pub use sticky::{PinnedEngine, StickyEngine, StickyMode, StickyOptions, StickyRegion};
