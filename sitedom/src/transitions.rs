use std::time::Duration;

/// Transitions declared on an element, the stand-in for a stylesheet's
/// `transition:` rule. Only height transitions produce transition-end
/// notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions {
    pub height: Option<Duration>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `transition: height <duration>`.
    pub fn height(mut self, duration: Duration) -> Self {
        self.height = Some(duration);
        self
    }
}
