//! Panel animation state.

/// Where a panel is in its expand/collapse lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PanelState {
    #[default]
    Collapsed,
    /// Height is animating towards the content's natural height.
    Expanding,
    Expanded,
    /// Height is animating towards zero.
    Collapsing,
}

impl PanelState {
    /// Expanded or on its way there. This is what exclusivity counts.
    pub fn is_open(self) -> bool {
        matches!(self, PanelState::Expanded | PanelState::Expanding)
    }

    /// No transition pending.
    pub fn is_stable(self) -> bool {
        matches!(self, PanelState::Expanded | PanelState::Collapsed)
    }
}
