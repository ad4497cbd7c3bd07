use crate::document::NodeId;

/// Browser input events, already targeted at a document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on `target` (bubbles to its ancestors).
    Click { target: NodeId },
    /// Global keydown.
    Key { key: Key },
    /// Window scrolled to vertical offset `y`.
    Scroll { y: u32 },
    /// Window resized.
    Resize { width: u32, height: u32 },
    /// The value of a text field changed.
    Input { target: NodeId, value: String },
    /// A text field gained focus.
    Focus { target: NodeId },
    /// A CSS transition finished on `target`.
    TransitionEnd { target: NodeId },
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    pub fn key(key: Key) -> Self {
        Self::Key { key }
    }

    pub fn scroll(y: u32) -> Self {
        Self::Scroll { y }
    }

    pub fn transition_end(target: NodeId) -> Self {
        Self::TransitionEnd { target }
    }
}

/// Keys the page reacts to. Anything else arrives as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}
