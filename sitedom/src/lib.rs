pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod selector;
pub mod style;
pub mod transitions;
pub mod viewport;

pub use animation::TransitionTracker;
pub use document::{Document, NodeId};
pub use element::Element;
pub use event::{Event, Key};
pub use selector::Selector;
pub use style::{InlineStyle, Length};
pub use transitions::Transitions;
pub use viewport::Viewport;
