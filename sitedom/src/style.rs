use std::fmt;

/// A CSS length as far as inline styles in this crate are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Px(u32),
    Auto,
}

impl Length {
    pub const ZERO: Length = Length::Px(0);

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Pixel value, if this is a pixel length.
    pub fn px(self) -> Option<u32> {
        match self {
            Length::Px(v) => Some(v),
            Length::Auto => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Auto => write!(f, "auto"),
        }
    }
}

/// Inline style properties the controller writes.
///
/// `None` means the property is not set inline and the stylesheet value applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub height: Option<Length>,
    pub top: Option<Length>,
    pub max_height: Option<Length>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn top(mut self, top: Length) -> Self {
        self.top = Some(top);
        self
    }

    pub fn max_height(mut self, max_height: Length) -> Self {
        self.max_height = Some(max_height);
        self
    }
}
