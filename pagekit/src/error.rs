//! Widget binding errors.
//!
//! Every widget is optional on a page. Binders return these errors and the
//! bootstrap logs them and moves on; nothing here is fatal.

use thiserror::Error;

/// Why a widget could not be bound to the document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// A required element was not found.
    #[error("{unit}: missing required element '{selector}'")]
    MissingElement {
        /// The widget being bound (e.g. "fold", "popup").
        unit: &'static str,
        /// The selector that found nothing.
        selector: String,
    },

    /// The viewport matches the mobile/tablet media query.
    #[error("{unit}: disabled at viewport width {width}px (max-width {breakpoint}px)")]
    BelowBreakpoint {
        unit: &'static str,
        width: u32,
        breakpoint: u32,
    },
}

impl BindError {
    pub fn missing(unit: &'static str, selector: &sitedom::Selector) -> Self {
        Self::MissingElement {
            unit,
            selector: selector.to_string(),
        }
    }
}
