//! Layers rendered above page content.

pub mod popup;

pub use popup::{Popup, PopupLayer};
